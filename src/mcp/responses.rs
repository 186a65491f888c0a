// src/mcp/responses.rs
// Uniform success and error envelopes for MCP tool results

use rmcp::model::{CallToolResult, Content};
use serde_json::{Map, Value, json};

use crate::client::ApiError;

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Build a success envelope: a `message` field followed by the named data
/// entries, pretty-printed as a single text content block.
pub fn success(
    message: &str,
    data: impl IntoIterator<Item = (&'static str, Value)>,
) -> CallToolResult {
    let mut body = Map::new();
    body.insert("message".into(), Value::String(message.to_string()));
    for (key, value) in data {
        body.insert(key.into(), value);
    }
    CallToolResult::success(vec![Content::text(pretty(&Value::Object(body)))])
}

/// Build an error envelope from a failed API call. Transport failures carry
/// the upstream status, status text, and response body verbatim; all other
/// failures produce only the `error` field.
pub fn failure(context: &str, err: &ApiError) -> CallToolResult {
    let mut body = Map::new();
    body.insert("error".into(), Value::String(format!("{context}: {err}")));
    if let ApiError::Status {
        status,
        status_text,
        body: response_data,
    } = err
    {
        body.insert("status".into(), json!(status));
        body.insert("statusText".into(), Value::String(status_text.clone()));
        body.insert("responseData".into(), response_data.clone());
    }
    CallToolResult::error(vec![Content::text(pretty(&Value::Object(body)))])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(result: &CallToolResult) -> (bool, Value) {
        let raw = serde_json::to_value(result).unwrap();
        let is_error = raw["isError"].as_bool().unwrap_or(false);
        let text = raw["content"][0]["text"].as_str().unwrap();
        (is_error, serde_json::from_str(text).unwrap())
    }

    #[test]
    fn success_envelope_has_message_and_data() {
        let result = success(
            "Folders retrieved successfully",
            [("folders", json!([{"id": 1}]))],
        );
        let (is_error, body) = envelope(&result);
        assert!(!is_error);
        assert_eq!(body["message"], "Folders retrieved successfully");
        assert_eq!(body["folders"][0]["id"], 1);
    }

    #[test]
    fn transport_failure_carries_status_fields() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".into(),
            body: json!({"foo": "bar"}),
        };
        let result = failure("Error retrieving folder ID: 9", &err);
        let (is_error, body) = envelope(&result);
        assert!(is_error);
        assert_eq!(
            body["error"],
            "Error retrieving folder ID: 9: request failed with status 404 Not Found"
        );
        assert_eq!(body["status"], 404);
        assert_eq!(body["statusText"], "Not Found");
        assert_eq!(body["responseData"], json!({"foo": "bar"}));
    }

    #[test]
    fn non_transport_failure_omits_status_fields() {
        let err = ApiError::Decode(serde_json::from_str::<Value>("{").unwrap_err());
        let result = failure("Error fetching test case KAN-T1", &err);
        let (is_error, body) = envelope(&result);
        assert!(is_error);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Error fetching test case KAN-T1: invalid JSON in response")
        );
        assert!(body.get("status").is_none());
        assert!(body.get("statusText").is_none());
        assert!(body.get("responseData").is_none());
    }
}
