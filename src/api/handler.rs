//! API Lambda handler - the single tutoring request pipeline.
//!
//! One linear sequence per invocation: method gate, credential check, prompt
//! assembly, one upstream chat-completion call, output sanitization. Every
//! failure is mapped to a response envelope at this boundary; the Lambda
//! never surfaces an unhandled fault for a request-level problem.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::client::TutorClient;
use crate::ai::sanitize::{parse_content, sanitize_reply};
use crate::core::config::AppConfig;
use crate::core::models::TutorReply;
use crate::errors::TutorError;
use crate::prompt::build_messages;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Request-level failures are reported inside the response envelope; this
/// function itself only fails if the runtime does.
#[tracing::instrument(level = "info", skip(config, event))]
pub async fn function_handler(
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_request(config, &event.payload).await)
}

/// Processes one proxy event and returns the response envelope.
pub async fn handle_request(config: &AppConfig, payload: &Value) -> Value {
    let correlation_id = Uuid::new_v4();
    let method = parsing::extract_method(payload).unwrap_or("");

    // Pre-flight: respond immediately, no body.
    if method.eq_ignore_ascii_case("OPTIONS") {
        return helpers::ok_empty();
    }

    match tutor_turn(config, payload, method, correlation_id).await {
        Ok(reply) => {
            info!(%correlation_id, "Tutor reply produced");
            helpers::ok_json(&reply)
        }
        Err(TutorError::MethodNotAllowed) => {
            info!(%correlation_id, method, "Rejecting unsupported method");
            helpers::err_response(405, "Method not allowed")
        }
        Err(TutorError::InvalidApiKey) => {
            error!(%correlation_id, "OPENAI_API_KEY is missing or malformed");
            helpers::err_response(500, "Invalid API key (empty or malformed)")
        }
        Err(TutorError::Upstream(detail)) => {
            error!(%correlation_id, "OpenAI returned an error: {}", detail);
            helpers::err_response_with_detail(500, "OpenAI error", &detail)
        }
        Err(other) => {
            error!(%correlation_id, "Unhandled failure: {}", other);
            helpers::err_response_with_detail(500, "Server error", &other.to_string())
        }
    }
}

async fn tutor_turn(
    config: &AppConfig,
    payload: &Value,
    method: &str,
    correlation_id: Uuid,
) -> Result<TutorReply, TutorError> {
    if !method.eq_ignore_ascii_case("POST") {
        return Err(TutorError::MethodNotAllowed);
    }

    // Validate the credential before anything else; a misconfigured
    // deployment must not produce an upstream call.
    let api_key = config.sanitized_api_key()?;

    let request = parsing::extract_request(payload);
    info!(
        %correlation_id,
        topic = request.topic.as_deref().unwrap_or_default(),
        history_len = request.history.len(),
        "Handling tutor request"
    );

    let messages = build_messages(request.topic.as_deref(), &request.history);
    let client = TutorClient::from_config(config, api_key);
    let content = client.chat_completion(messages).await?;

    Ok(sanitize_reply(parse_content(&content)))
}
