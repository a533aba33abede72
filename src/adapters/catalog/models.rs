//! Wire models for the catalog HTTP API

use serde::{Deserialize, Serialize};

/// Response body of a successful session login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Bearer token to attach to subsequent requests
    pub token: String,
}
