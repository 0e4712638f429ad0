//! System instruction and chat message assembly.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::ChatTurn;

/// Topic used when the caller supplies none (or an empty string).
pub const DEFAULT_TOPIC: &str = "travel";

/// Fixed trailing user turn anchoring the model's final turn to JSON output.
pub const JSON_ANCHOR: &str = "Now respond in JSON as specified.";

/// Builds the fixed tutor persona prompt with the topic interpolated.
///
/// The closing key list mirrors the shape of `TutorReply`; the model is told
/// to emit pure JSON so `response_format: json_object` has something to hold
/// it to.
#[must_use]
pub fn build_system_prompt(topic: &str) -> String {
    format!(
        "You are a friendly native English tutor. Always reply in English.\n\
         Constraints:\n\
         - Keep answers 1-3 sentences, simple and clear.\n\
         - Topic: {topic}.\n\
         - At the end of your turn, produce JSON ONLY with keys: reply, grammar, alt, keywords, score.\n\
         - reply: your natural English response for the chat.\n\
         - grammar: 1-2 concise notes correcting the student's last message (if needed).\n\
         - alt: a more natural way to say what the student intended.\n\
         - keywords: 3-6 useful words/phrases for this topic.\n\
         - score: integer 60-95 estimating correctness/pronunciation (text-based approximation).\n\
         Return only a pure JSON object. No markdown."
    )
}

/// Assembles the ordered chat-completion message list: system prompt first,
/// the caller's history as-is, then the JSON anchor as the final user turn.
#[must_use]
pub fn build_messages(topic: Option<&str>, history: &[ChatTurn]) -> Vec<ChatCompletionMessage> {
    let topic = topic.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TOPIC);

    let mut chat = vec![text_message(
        MessageRole::system,
        build_system_prompt(topic),
    )];

    for turn in history {
        let role = if turn.role == "assistant" {
            MessageRole::assistant
        } else {
            MessageRole::user
        };
        chat.push(text_message(role, turn.content.clone()));
    }

    chat.push(text_message(MessageRole::user, JSON_ANCHOR.to_string()));

    chat
}

fn text_message(role: MessageRole, content: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Content::Text(content),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}
