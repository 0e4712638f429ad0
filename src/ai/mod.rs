//! OpenAI integration: the upstream client and output sanitization.

pub mod client;
pub mod sanitize;
