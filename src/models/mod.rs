//! Data models and schemas for the Coaster API.
//!
//! This module contains all the data structures used throughout the
//! application: the entities mirroring the upstream coaster API's JSON
//! shapes and the request/response models for the inbound surface.

pub mod api;
pub mod coaster;

pub use api::*;
pub use coaster::*;
