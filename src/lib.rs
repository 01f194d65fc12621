//! Coaster API - a thin pass-through over an upstream roller-coaster data API
//!
//! This service exposes a small REST surface built with Actix Web and
//! Paperclip that forwards each inbound call to the upstream coaster API,
//! decodes the JSON response into typed shapes, and relays the result:
//! - Listing, by-id, random, and search coaster lookups
//! - Verbatim status/reason passthrough on upstream failure
//! - OpenAPI documentation
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures mirroring the upstream JSON shapes
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `services/` - The upstream proxy client
//! - `config/` - Configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use coaster_api::{create_base_app, CoasterProxy};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let proxy = CoasterProxy::new(reqwest::Client::new(), "https://coasters.example.com");
//!     let app = create_base_app(proxy);
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

// Re-export commonly used types and functions for convenience
pub use config::{ConfigError, UpstreamConfig};
pub use handlers::{
    create_base_app, create_openapi_spec, get_coaster_by_id, get_coaster_random,
    get_coaster_search, get_coasters, health, version,
};
pub use models::{
    Coaster, CoasterIdQuery, CoasterPage, CoasterSearchQuery, Coords, HealthResponse,
    NumberOrText, OperatingStatus, Pagination, Park, Picture, Stats, VersionResponse,
};
pub use services::{CoasterProxy, ProxyError};
