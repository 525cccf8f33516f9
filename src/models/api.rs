//! API request/response models.

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

/// Query parameters for the search endpoints
#[derive(Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct SearchQuery {
    /// City name as typed by the user (e.g., "Paris")
    pub city: Option<String>,
}
