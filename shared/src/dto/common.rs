use crate::models::torneo::Torneo;
use serde::{Deserialize, Serialize};

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Success body of the mutating and seeding endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub mensaje: String,
    /// The created or updated torneo, when the endpoint returns it
    #[serde(default)]
    pub torneo: Option<Torneo>,
}
