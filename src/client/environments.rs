// src/client/environments.rs
// Environment endpoints

use super::{ApiError, ZephyrClient};
use serde_json::Value;

impl ZephyrClient {
    /// GET /environments
    pub async fn list_environments(
        &self,
        project_key: &str,
        max_results: u32,
        start_at: u32,
    ) -> Result<Value, ApiError> {
        let query = [
            ("projectKey", project_key.to_string()),
            ("maxResults", max_results.to_string()),
            ("startAt", start_at.to_string()),
        ];
        self.get("/environments", &query).await
    }
}
