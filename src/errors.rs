use thiserror::Error;

#[derive(Debug, Error)]
pub enum TutorError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid API key (empty or malformed)")]
    InvalidApiKey,

    // Carries the raw upstream response body so callers can diagnose the
    // failure; the body is passed through verbatim.
    #[error("Failed to access OpenAI API: {0}")]
    Upstream(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TutorError {
    fn from(error: reqwest::Error) -> Self {
        TutorError::Http(error.to_string())
    }
}

impl From<anyhow::Error> for TutorError {
    fn from(error: anyhow::Error) -> Self {
        TutorError::Http(error.to_string())
    }
}
