// src/client/priorities.rs
// Priority endpoints

use super::{ApiError, ZephyrClient};
use serde_json::Value;

impl ZephyrClient {
    /// GET /priorities
    pub async fn list_priorities(
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
        self.get("/priorities", &query).await
    }
}
