/// English-tutor chat backend: a single-endpoint Lambda that proxies tutoring
/// conversations to the OpenAI chat-completion API.
///
/// The API Lambda receives a `POST` with an optional `topic` and conversation
/// `history`, injects a fixed tutor system prompt, performs one chat-completion
/// call, and normalizes the model's free-form JSON into the fixed `TutorReply`
/// envelope. Everything is request-scoped; no state survives an invocation.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for the upstream OpenAI call
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use englishchat::ai::client::TutorClient;
/// use englishchat::ai::sanitize::{parse_content, sanitize_reply};
/// use englishchat::core::config::AppConfig;
/// use englishchat::prompt::build_messages;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     englishchat::setup_logging();
///
///     let config = AppConfig {
///         openai_api_key: "sk-dummy".to_string(),
///         openai_model: None,
///         openai_api_base: None,
///     };
///
///     let key = config.sanitized_api_key()?;
///     let client = TutorClient::from_config(&config, key);
///     let messages = build_messages(Some("travel"), &[]);
///     let content = client.chat_completion(messages).await?;
///     let reply = sanitize_reply(parse_content(&content));
///     println!("{}", reply.reply);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
