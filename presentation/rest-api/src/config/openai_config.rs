use std::env;

const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Configuration for OpenAI API access.
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
}

impl OpenAIConfig {
    /// Load OpenAI configuration from environment variables
    ///
    /// Environment variables:
    /// - OPENAI_API_KEY: API credential (required)
    /// - OPENAI_MODEL: Model identifier (default: "gpt-4.1-mini")
    /// - TEMPERATURE: Sampling temperature (default: 0.3, clamped to 0.0..=2.0)
    pub fn from_env() -> Self {
        let api_key =
            env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY environment variable must be set");
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let temperature = env::var("TEMPERATURE")
            .ok()
            .and_then(|value| value.parse::<f32>().ok())
            .unwrap_or(DEFAULT_TEMPERATURE)
            .clamp(0.0, 2.0);

        Self {
            api_key,
            model,
            temperature,
        }
    }
}
