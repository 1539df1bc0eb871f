#![allow(
    clippy::derive_partial_eq_without_eq,
    clippy::too_many_arguments,
)]

//! REST API bindings for the civic report backend.
//!
//! Each `apis::*_api` module maps one backend resource. Functions take the
//! shared [apis::configuration::Configuration] which holds the HTTP client,
//! base path and access token.

pub mod apis;
pub mod models;

pub mod manual_additions;
