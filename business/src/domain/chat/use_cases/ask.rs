use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::Answer;

pub struct AskTutorParams {
    pub message: String,
}

#[async_trait]
pub trait AskTutorUseCase: Send + Sync {
    async fn execute(&self, params: AskTutorParams) -> Result<Answer, ChatError>;
}
