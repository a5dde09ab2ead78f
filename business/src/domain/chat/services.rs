use async_trait::async_trait;

use super::errors::ChatError;

/// Service port for the upstream completion API.
///
/// Implementations send the fixed tutoring system prompt together with
/// the learner's message and return the generated text. `Ok(None)` means
/// the model responded without any usable output; the caller decides
/// what to substitute.
#[async_trait]
pub trait TutorCompletionService: Send + Sync {
    async fn complete(&self, message: &str) -> Result<Option<String>, ChatError>;
}
