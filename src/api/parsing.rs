//! API Gateway proxy event accessors.
//!
//! Tolerant of both the v1 (`httpMethod`) and v2 (`requestContext.http.method`)
//! event shapes, and of base64-encoded bodies, which the platform delivers
//! for some content types.

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;
use tracing::warn;

use crate::core::models::TutorRequest;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Extracts the HTTP method from either proxy event shape.
#[must_use]
pub fn extract_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["httpMethod"])
        .or_else(|| v_str(payload, &["requestContext", "http", "method"]))
}

/// Extracts the inbound request, degrading to the defaults on any problem.
/// A missing, empty, or non-JSON body is caller leniency, not an error.
#[must_use]
pub fn extract_request(payload: &Value) -> TutorRequest {
    let body_text = match decode_body(payload) {
        Ok(Some(text)) => text,
        Ok(None) => return TutorRequest::default(),
        Err(e) => {
            warn!("Failed to read request body: {e:#}");
            return TutorRequest::default();
        }
    };

    match serde_json::from_str::<Value>(&body_text) {
        Ok(body) => TutorRequest::from_value(&body),
        Err(e) => {
            warn!("Request body is not JSON: {e}");
            TutorRequest::default()
        }
    }
}

fn decode_body(payload: &Value) -> anyhow::Result<Option<String>> {
    let Some(body) = payload.get("body").and_then(|b| b.as_str()) else {
        return Ok(None);
    };

    if payload
        .get("isBase64Encoded")
        .and_then(|b| b.as_bool())
        .unwrap_or(false)
    {
        let bytes = BASE64
            .decode(body)
            .context("Failed to decode base64 request body")?;
        let text = String::from_utf8(bytes).context("Request body is not valid UTF-8")?;
        return Ok(Some(text));
    }

    Ok(Some(body.to_string()))
}
