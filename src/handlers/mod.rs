//! HTTP request handlers for API endpoints.
//!
//! This module contains all the HTTP request handlers that process
//! incoming requests and generate responses.

pub mod coasters;
pub mod health;
pub mod openapi;
pub mod version;

pub use coasters::*;
pub use health::*;
pub use openapi::*;
pub use version::*;
