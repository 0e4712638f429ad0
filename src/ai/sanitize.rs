//! Normalization of the model's untrusted output into `TutorReply`.
//!
//! The model is instructed to emit pure JSON, but nothing it returns is
//! trusted: every field is coerced and bounded here, and a payload that is
//! not JSON at all degrades to a best-effort reply instead of an error.

use serde_json::Value;

use crate::core::models::TutorReply;

/// Upper bound on the `keywords` list in the response envelope.
pub const MAX_KEYWORDS: usize = 6;

/// Reply used when the model returned nothing usable for `reply`.
pub const FALLBACK_REPLY: &str = "Okay.";

/// Tagged result of parsing the upstream message content.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelPayload {
    /// The content was valid JSON.
    Parsed(Value),
    /// The content was not JSON; the raw text becomes the reply.
    Fallback(String),
}

/// Best-effort parse of the upstream content. Parse failure is not an error
/// condition anywhere in this system.
#[must_use]
pub fn parse_content(content: &str) -> ModelPayload {
    match serde_json::from_str::<Value>(content) {
        Ok(value) => ModelPayload::Parsed(value),
        Err(_) => ModelPayload::Fallback(content.to_string()),
    }
}

/// Coerces and bounds a parsed payload into the fixed `TutorReply` shape.
#[must_use]
pub fn sanitize_reply(payload: ModelPayload) -> TutorReply {
    let payload = match payload {
        ModelPayload::Parsed(value) => value,
        ModelPayload::Fallback(text) => {
            return TutorReply {
                reply: if text.is_empty() {
                    FALLBACK_REPLY.to_string()
                } else {
                    text
                },
                grammar: None,
                alt: None,
                keywords: Vec::new(),
                score: None,
            };
        }
    };

    let reply = payload
        .get("reply")
        .filter(|v| is_truthy(v))
        .map(coerce_string)
        .unwrap_or_else(|| FALLBACK_REPLY.to_string());

    let grammar = payload
        .get("grammar")
        .filter(|v| is_truthy(v))
        .map(coerce_string);

    let alt = payload
        .get("alt")
        .filter(|v| is_truthy(v))
        .map(coerce_string);

    let keywords = payload
        .get("keywords")
        .and_then(|k| k.as_array())
        .map(|items| items.iter().take(MAX_KEYWORDS).map(coerce_string).collect())
        .unwrap_or_default();

    let score = payload
        .get("score")
        .and_then(coerce_number)
        .filter(|n| n.is_finite());

    TutorReply {
        reply,
        grammar,
        alt,
        keywords,
        score,
    }
}

// Truthiness the way the model's JSON is judged: null, false, 0, and the
// empty string all count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Loose numeric coercion: numbers pass through, numeric strings (including
// "NaN"/"Infinity", which the finite filter then drops) parse, booleans map
// to 0/1, null maps to 0. Arrays and objects are never numbers.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().or(Some(f64::NAN))
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}
