use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::Answer;
use crate::domain::chat::services::TutorCompletionService;
use crate::domain::chat::use_cases::ask::{AskTutorParams, AskTutorUseCase};
use crate::domain::logger::Logger;

pub struct AskTutorUseCaseImpl {
    pub completion: Arc<dyn TutorCompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AskTutorUseCase for AskTutorUseCaseImpl {
    async fn execute(&self, params: AskTutorParams) -> Result<Answer, ChatError> {
        let message = params.message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        // Message contents stay out of the logs.
        self.logger
            .info(&format!("Relaying learner message ({} chars)", message.len()));

        let generated = self.completion.complete(message).await?;
        let answer = Answer::from_generated(generated);

        self.logger
            .debug(&format!("Answer ready ({} chars)", answer.text().len()));

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::model::FALLBACK_ANSWER;
    use mockall::mock;

    mock! {
        pub Completion {}

        #[async_trait]
        impl TutorCompletionService for Completion {
            async fn complete(&self, message: &str) -> Result<Option<String>, ChatError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_answer_when_completion_succeeds() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .returning(|_| Ok(Some("Schau dir den Schleifenkopf an.".to_string())));

        let use_case = AskTutorUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskTutorParams {
                message: "Wie fange ich bei Aufgabe 2 an?".to_string(),
            })
            .await;

        assert_eq!(
            result.unwrap().text(),
            "Schau dir den Schleifenkopf an."
        );
    }

    #[tokio::test]
    async fn should_trim_message_before_completion() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .withf(|message| message == "Was ist ein Array?")
            .returning(|_| Ok(Some("Ein Hinweis dazu.".to_string())));

        let use_case = AskTutorUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskTutorParams {
                message: "  Was ist ein Array?\n".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_empty_message_without_calling_completion() {
        // No expectation set: a call to the mock would panic.
        let mock_completion = MockCompletion::new();

        let use_case = AskTutorUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskTutorParams {
                message: String::new(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ChatError::EmptyMessage));
    }

    #[tokio::test]
    async fn should_reject_whitespace_only_message() {
        let mock_completion = MockCompletion::new();

        let use_case = AskTutorUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskTutorParams {
                message: "   ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ChatError::EmptyMessage));
    }

    #[tokio::test]
    async fn should_substitute_fallback_when_completion_returns_no_text() {
        let mut mock_completion = MockCompletion::new();
        mock_completion.expect_complete().returning(|_| Ok(None));

        let use_case = AskTutorUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskTutorParams {
                message: "Stimmt mein Ansatz?".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().text(), FALLBACK_ANSWER);
    }

    #[tokio::test]
    async fn should_propagate_upstream_failure() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .returning(|_| Err(ChatError::UpstreamFailed("connection timed out".to_string())));

        let use_case = AskTutorUseCaseImpl {
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskTutorParams {
                message: "Warum kompiliert das nicht?".to_string(),
            })
            .await;

        match result.unwrap_err() {
            ChatError::UpstreamFailed(detail) => assert_eq!(detail, "connection timed out"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
