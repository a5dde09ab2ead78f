use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Uniform error body: `{"detail": "..."}`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub detail: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
