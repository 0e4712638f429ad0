use std::env;

use crate::errors::TutorError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_model: Option<String>,
    pub openai_api_base: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_model: env::var("OPENAI_MODEL").ok(),
            openai_api_base: env::var("OPENAI_API_BASE").ok(),
        })
    }

    /// Strips a leading BOM and anything outside printable ASCII from the
    /// configured key, trims whitespace, and requires the `sk-` provider
    /// prefix. Keys pasted into environment consoles routinely pick up a BOM
    /// or zero-width characters that the API rejects with an opaque 401.
    pub fn sanitized_api_key(&self) -> Result<String, TutorError> {
        let cleaned: String = self
            .openai_api_key
            .chars()
            .filter(|c| ('\u{20}'..='\u{7e}').contains(c))
            .collect();
        let cleaned = cleaned.trim();

        if !cleaned.starts_with("sk-") {
            return Err(TutorError::InvalidApiKey);
        }

        Ok(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TutorError;

    fn config_with_key(key: &str) -> AppConfig {
        AppConfig {
            openai_api_key: key.to_string(),
            openai_model: None,
            openai_api_base: None,
        }
    }

    #[test]
    fn test_sanitized_api_key_accepts_plain_key() {
        let config = config_with_key("sk-abc123");
        assert_eq!(config.sanitized_api_key().unwrap(), "sk-abc123");
    }

    #[test]
    fn test_sanitized_api_key_strips_bom_and_invisible_characters() {
        let config = config_with_key("\u{feff}sk-abc\u{200b}123\n");
        assert_eq!(config.sanitized_api_key().unwrap(), "sk-abc123");
    }

    #[test]
    fn test_sanitized_api_key_trims_surrounding_whitespace() {
        let config = config_with_key("  sk-abc123  ");
        assert_eq!(config.sanitized_api_key().unwrap(), "sk-abc123");
    }

    #[test]
    fn test_sanitized_api_key_rejects_missing_prefix() {
        for key in ["", "abc123", "SK-abc123", "\u{feff}"] {
            let config = config_with_key(key);
            assert!(matches!(
                config.sanitized_api_key(),
                Err(TutorError::InvalidApiKey)
            ));
        }
    }

    #[test]
    fn test_sanitized_api_key_validates_prefix_after_stripping() {
        // Invisible characters inside the prefix must not prevent validation.
        let config = config_with_key("s\u{feff}k-abc123");
        assert_eq!(config.sanitized_api_key().unwrap(), "sk-abc123");
    }
}
