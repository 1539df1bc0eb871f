#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

//! Client side data types which have behavior of their own.
//!
//! Plain request and response bodies live in `api_client::models`.

pub mod ids;
pub mod report;
pub mod vote;

pub use ids::*;
pub use report::*;
pub use vote::*;
