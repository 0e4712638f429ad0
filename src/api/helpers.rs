//! Common helper functions for API handlers.
//!
//! Response envelope builders for the API Gateway proxy integration. Every
//! envelope, success or error, carries the fixed cross-origin headers.

use serde::Serialize;
use serde_json::{Value, json};

// ============================================================================
// Response Builders
// ============================================================================

/// The fixed cross-origin policy. Not configurable per-request.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type, Authorization",
        "Content-Type": "application/json",
    })
}

/// Returns a 200 OK response with an empty body (the `OPTIONS` pre-flight).
#[must_use]
pub fn ok_empty() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": "",
    })
}

/// Returns a 200 OK response with the given payload as the JSON body.
#[must_use]
pub fn ok_json<T: Serialize>(payload: &T) -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string()),
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": json!({ "error": message }).to_string(),
    })
}

/// Returns an error response carrying a diagnostic `detail` string alongside
/// the machine-readable `error` key.
#[must_use]
pub fn err_response_with_detail(status_code: u16, message: &str, detail: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": json!({ "error": message, "detail": detail }).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cors(envelope: &Value) {
        let headers = envelope.get("headers").expect("envelope has headers");
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS");
        assert_eq!(
            headers["Access-Control-Allow-Headers"],
            "Content-Type, Authorization"
        );
    }

    #[test]
    fn test_every_builder_carries_cors_headers() {
        assert_cors(&ok_empty());
        assert_cors(&ok_json(&json!({"reply": "Hi!"})));
        assert_cors(&err_response(405, "Method not allowed"));
        assert_cors(&err_response_with_detail(500, "OpenAI error", "rate limited"));
    }

    #[test]
    fn test_ok_empty_has_empty_body() {
        let envelope = ok_empty();
        assert_eq!(envelope["statusCode"], 200);
        assert_eq!(envelope["body"], "");
    }

    #[test]
    fn test_err_response_body_is_exact_json() {
        let envelope = err_response(405, "Method not allowed");
        assert_eq!(envelope["statusCode"], 405);
        let body: Value = serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }

    #[test]
    fn test_err_response_with_detail_keeps_detail_verbatim() {
        let envelope = err_response_with_detail(500, "OpenAI error", "rate limited");
        let body: Value = serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["error"], "OpenAI error");
        assert_eq!(body["detail"], "rate limited");
    }
}
