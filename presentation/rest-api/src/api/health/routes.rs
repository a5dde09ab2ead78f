use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Always reports "ok". Does not depend on configuration or on the
    /// upstream completion API, so it is safe for liveness probes.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "ok".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_ok() {
        let service = OpenApiService::new(Api::new(), "Tutor Relay API", "0.1.0");
        let cli = TestClient::new(Route::new().nest("/", service));

        let resp = cli.get("/health").send().await;

        resp.assert_status(StatusCode::OK);
        let json = resp.json().await;
        json.value().object().get("status").assert_string("ok");
    }
}
