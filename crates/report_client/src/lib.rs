#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

//! Client side logic of the civic report app.
//!
//! [services] maps backend resources to functions, [session::Session]
//! owns the login state and [vote::VoteControl] implements optimistic
//! voting.

pub mod client;
pub mod optimistic;
pub mod services;
pub mod session;
pub mod vote;

#[cfg(test)]
mod test_server;

pub use client::{ApiClient, ClientError};
