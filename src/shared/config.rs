//! Application configuration. Store credentials, completion API settings, logging.

use crate::domain::{CompletionParams, DomainError};
use serde::Deserialize;

/// Groq's OpenAI-compatible chat completions endpoint.
pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default timeout for store and completion HTTP requests.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Hosted store (Supabase)
    // ─────────────────────────────────────────────────────────────────────────
    /// Project URL. Read from CLINIC_SUPABASE_URL or SUPABASE_URL.
    #[serde(default)]
    pub supabase_url: Option<String>,

    /// Anon (public) API key. Read from CLINIC_SUPABASE_ANON_KEY or SUPABASE_ANON_KEY.
    #[serde(default)]
    pub supabase_anon_key: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Completion endpoint
    // ─────────────────────────────────────────────────────────────────────────
    /// Read from CLINIC_COMPLETION_API_KEY or GROQ_API_KEY.
    #[serde(default)]
    pub completion_api_key: Option<String>,

    #[serde(default)]
    pub completion_api_url: Option<String>,

    #[serde(default)]
    pub completion_model: Option<String>,

    #[serde(default)]
    pub completion_temperature: Option<f32>,

    #[serde(default)]
    pub completion_max_tokens: Option<u32>,

    // ─────────────────────────────────────────────────────────────────────────
    // Misc
    // ─────────────────────────────────────────────────────────────────────────
    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CLINIC"));
        if let Ok(path) = std::env::var("CLINIC_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // RUST_LOG wins over log_level at subscriber setup; LOG_LEVEL is accepted unprefixed.
        if cfg.log_level.is_none() {
            cfg.log_level = std::env::var("LOG_LEVEL").ok();
        }
        Ok(cfg)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Store helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Store URL from config or SUPABASE_URL env.
    pub fn supabase_url(&self) -> Option<String> {
        non_blank(
            self.supabase_url
                .clone()
                .or_else(|| std::env::var("SUPABASE_URL").ok()),
        )
    }

    /// Store key from config or SUPABASE_ANON_KEY env.
    pub fn supabase_anon_key(&self) -> Option<String> {
        non_blank(
            self.supabase_anon_key
                .clone()
                .or_else(|| std::env::var("SUPABASE_ANON_KEY").ok()),
        )
    }

    /// Both store credentials, or a config error naming what is missing.
    pub fn store_credentials(&self) -> Result<(String, String), DomainError> {
        match (self.supabase_url(), self.supabase_anon_key()) {
            (Some(url), Some(key)) => Ok((url, key)),
            (None, None) => Err(DomainError::Config(
                "missing SUPABASE_URL and SUPABASE_ANON_KEY".to_string(),
            )),
            (None, _) => Err(DomainError::Config("missing SUPABASE_URL".to_string())),
            (_, None) => Err(DomainError::Config("missing SUPABASE_ANON_KEY".to_string())),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Completion helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Completion API key from config or GROQ_API_KEY env.
    pub fn completion_api_key(&self) -> Option<String> {
        non_blank(
            self.completion_api_key
                .clone()
                .or_else(|| std::env::var("GROQ_API_KEY").ok()),
        )
    }

    pub fn completion_api_url_or_default(&self) -> String {
        self.completion_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_COMPLETION_API_URL.to_string())
    }

    /// Model parameters with the defaults filled in.
    pub fn completion_params_or_default(&self) -> CompletionParams {
        let defaults = CompletionParams::default();
        CompletionParams {
            model: self.completion_model.clone().unwrap_or(defaults.model),
            temperature: self.completion_temperature.unwrap_or(defaults.temperature),
            max_tokens: self.completion_max_tokens.unwrap_or(defaults.max_tokens),
        }
    }

    pub fn log_level_or_default(&self) -> String {
        self.log_level.clone().unwrap_or_else(|| "warn".to_string())
    }

    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_credentials_from_fields() {
        let cfg = AppConfig {
            supabase_url: Some("https://abc.supabase.co".into()),
            supabase_anon_key: Some("anon".into()),
            ..Default::default()
        };
        let (url, key) = cfg.store_credentials().unwrap();
        assert_eq!(url, "https://abc.supabase.co");
        assert_eq!(key, "anon");
    }

    #[test]
    fn test_blank_key_is_treated_as_missing() {
        let cfg = AppConfig {
            supabase_url: Some("https://abc.supabase.co".into()),
            supabase_anon_key: Some("   ".into()),
            ..Default::default()
        };
        // SUPABASE_ANON_KEY from the environment is not consulted when the field is set.
        assert!(matches!(
            cfg.store_credentials(),
            Err(DomainError::Config(msg)) if msg.contains("SUPABASE_ANON_KEY")
        ));
    }

    #[test]
    fn test_completion_params_defaults() {
        let cfg = AppConfig::default();
        let params = cfg.completion_params_or_default();
        assert_eq!(params.model, "llama-3.3-70b-versatile");
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_tokens, 1024);
        assert_eq!(cfg.completion_api_url_or_default(), DEFAULT_COMPLETION_API_URL);
        assert_eq!(cfg.request_timeout_secs_or_default(), 30);
        assert_eq!(cfg.log_level_or_default(), "warn");
    }

    #[test]
    fn test_completion_params_overrides() {
        let cfg = AppConfig {
            completion_model: Some("llama-3.1-8b-instant".into()),
            completion_max_tokens: Some(256),
            ..Default::default()
        };
        let params = cfg.completion_params_or_default();
        assert_eq!(params.model, "llama-3.1-8b-instant");
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_tokens, 256);
    }
}
