//! Health check operations.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::WishlistClient;
use crate::error::Result;

/// Service status.
#[derive(Debug, Serialize, Deserialize)]
pub struct Status {
    pub status: String,
}

impl WishlistClient {
    /// Check the service status.
    pub async fn status(&self) -> Result<Status> {
        let response = self.request(Method::GET, "/").send().await?;
        self.handle_response(response).await
    }
}
