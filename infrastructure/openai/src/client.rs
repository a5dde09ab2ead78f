use std::time::Duration;

use reqwest::Client;

// The upstream call is the only suspend point of a request; keep it bounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Builds the authorization header value.
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the responses endpoint URL.
    fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    /// Posts a JSON body to the responses endpoint.
    pub async fn post_responses(
        &self,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(self.responses_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .json(body)
            .send()
            .await
    }
}
