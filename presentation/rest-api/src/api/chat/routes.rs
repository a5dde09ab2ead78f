use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, payload::Json};

use business::domain::chat::use_cases::ask::{AskTutorParams, AskTutorUseCase};

use crate::api::chat::dto::{ChatAnswerResponse, ChatRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security;
use crate::api::tags::ApiTags;

pub struct ChatApi {
    ask_use_case: Arc<dyn AskTutorUseCase>,
    app_token: Option<String>,
}

impl ChatApi {
    pub fn new(ask_use_case: Arc<dyn AskTutorUseCase>, app_token: Option<String>) -> Self {
        Self {
            ask_use_case,
            app_token,
        }
    }
}

/// Chat API
///
/// Relays learner questions to the tutoring model and returns the
/// generated guidance.
#[OpenApi]
impl ChatApi {
    /// Ask the tutoring assistant
    ///
    /// Forwards the learner's message, prefixed with the fixed tutoring
    /// system prompt, to the completion model. When a shared secret is
    /// configured the request must carry it in the X-APP-TOKEN header.
    #[oai(path = "/chat", method = "post", tag = "ApiTags::Chat")]
    async fn chat(
        &self,
        /// Shared secret sent by the Moodle front-end
        #[oai(name = "X-APP-TOKEN")]
        token: Header<Option<String>>,
        body: Json<ChatRequest>,
    ) -> PostChatResponse {
        if !security::verify_app_token(self.app_token.as_deref(), token.0.as_deref()) {
            tracing::warn!("Rejected chat request: missing or mismatched app token");
            return PostChatResponse::Unauthorized(Json(ErrorResponse {
                detail: "Unauthorized".to_string(),
            }));
        }

        match self
            .ask_use_case
            .execute(AskTutorParams {
                message: body.0.message,
            })
            .await
        {
            Ok(answer) => PostChatResponse::Ok(Json(ChatAnswerResponse {
                answer: answer.into_text(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    poem::http::StatusCode::BAD_REQUEST => PostChatResponse::BadRequest(json),
                    _ => PostChatResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PostChatResponse {
    #[oai(status = 200)]
    Ok(Json<ChatAnswerResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
