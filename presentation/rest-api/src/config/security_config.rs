use std::env;

/// Optional shared secret protecting the chat endpoint.
///
/// Environment variables:
/// - APP_TOKEN: Secret expected in the X-APP-TOKEN request header
///   (default: unset, which disables the check)
pub struct SecurityConfig {
    pub app_token: Option<String>,
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        // An empty value counts as "not configured".
        let app_token = env::var("APP_TOKEN").ok().filter(|token| !token.is_empty());

        Self { app_token }
    }
}
