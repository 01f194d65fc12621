//! Service layer modules.
//!
//! This module contains the upstream proxy client that the handlers
//! delegate to.

pub mod coaster;

pub use coaster::*;
