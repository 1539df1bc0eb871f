//! Enables TLS support for the workspace `reqwest` dependency.
//!
//! Depend on this crate from binaries and tests which make HTTPS requests.

#![deny(unsafe_code)]

use reqwest as _;
