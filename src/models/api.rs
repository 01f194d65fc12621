//! API response models for standard endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Request query parameters for the coaster by-id endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CoasterIdQuery {
    /// Numeric coaster identifier (e.g., 4027)
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
}

/// Request query parameters for the coaster search endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CoasterSearchQuery {
    /// Free-text search term (e.g., "Steel Vengeance")
    pub query: String,
}
