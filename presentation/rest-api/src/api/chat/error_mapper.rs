use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::chat::errors::ChatError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ChatError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, detail) = match self {
            ChatError::EmptyMessage => (StatusCode::BAD_REQUEST, "message is empty".to_string()),
            ChatError::UpstreamFailed(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorResponse { detail }))
    }
}
