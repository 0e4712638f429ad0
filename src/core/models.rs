use serde::Serialize;
use serde_json::Value;

/// One caller-supplied conversation turn, already coerced to the only two
/// roles the upstream API accepts from us.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// The inbound request body. Both fields are optional; an absent, empty, or
/// malformed body degrades to the defaults rather than failing the request.
#[derive(Debug, Clone, Default)]
pub struct TutorRequest {
    pub topic: Option<String>,
    pub history: Vec<ChatTurn>,
}

impl TutorRequest {
    /// Lenient extraction from an untyped JSON body. A non-string `topic` or
    /// non-array `history` is ignored, never an error; entries keep their
    /// caller-supplied order.
    pub fn from_value(body: &Value) -> Self {
        let topic = body
            .get("topic")
            .and_then(|t| t.as_str())
            .map(ToString::to_string);

        let history = body
            .get("history")
            .and_then(|h| h.as_array())
            .map(|turns| turns.iter().map(coerce_turn).collect())
            .unwrap_or_default();

        Self { topic, history }
    }
}

// Anything that is not explicitly an assistant turn is a user turn, and
// content is stringified with absent/null becoming the empty string.
fn coerce_turn(turn: &Value) -> ChatTurn {
    let role = match turn.get("role").and_then(|r| r.as_str()) {
        Some("assistant") => "assistant",
        _ => "user",
    };

    let content = match turn.get("content") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    ChatTurn {
        role: role.to_string(),
        content,
    }
}

/// The only output shape of the service. Every field is derived by sanitizing
/// the upstream model's raw JSON; none of it is trusted as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorReply {
    pub reply: String,
    pub grammar: Option<String>,
    pub alt: Option<String>,
    pub keywords: Vec<String>,
    // Absent (not null) when the model returned nothing finite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults_when_fields_missing() {
        let req = TutorRequest::from_value(&json!({}));
        assert_eq!(req.topic, None);
        assert!(req.history.is_empty());
    }

    #[test]
    fn test_request_ignores_non_array_history_but_keeps_topic() {
        let req = TutorRequest::from_value(&json!({"topic": "food", "history": "oops"}));
        assert_eq!(req.topic.as_deref(), Some("food"));
        assert!(req.history.is_empty());
    }

    #[test]
    fn test_history_roles_coerced_to_user_unless_assistant() {
        let req = TutorRequest::from_value(&json!({
            "history": [
                {"role": "assistant", "content": "Hi!"},
                {"role": "system", "content": "sneaky"},
                {"content": "no role"},
            ]
        }));
        let roles: Vec<&str> = req.history.iter().map(|t| t.role.as_str()).collect();
        assert_eq!(roles, vec!["assistant", "user", "user"]);
    }

    #[test]
    fn test_history_content_stringified() {
        let req = TutorRequest::from_value(&json!({
            "history": [
                {"role": "user", "content": "hello"},
                {"role": "user", "content": 42},
                {"role": "user"},
                {"role": "user", "content": null},
            ]
        }));
        let contents: Vec<&str> = req.history.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["hello", "42", "", ""]);
    }

    #[test]
    fn test_reply_serializes_score_only_when_present() {
        let reply = TutorReply {
            reply: "Okay.".to_string(),
            grammar: None,
            alt: None,
            keywords: vec![],
            score: None,
        };
        let v = serde_json::to_value(&reply).unwrap();
        assert!(v.get("score").is_none());
        // grammar/alt stay as explicit nulls in the body.
        assert!(v.get("grammar").unwrap().is_null());
        assert!(v.get("alt").unwrap().is_null());
    }
}
