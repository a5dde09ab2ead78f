use std::sync::Arc;

use logger::TracingLogger;

use openai::client::OpenAIClient;
use openai::tutor_responder::TutorResponderOpenAI;

use business::application::chat::ask::AskTutorUseCaseImpl;

use crate::config::openai_config::OpenAIConfig;
use crate::config::security_config::SecurityConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub chat_api: crate::api::chat::routes::ChatApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let openai_config = OpenAIConfig::from_env();
        let security_config = SecurityConfig::from_env();
        let openai_client = OpenAIClient::new(openai_config.api_key);
        let tutor_responder = Arc::new(TutorResponderOpenAI::new(
            openai_client,
            openai_config.model,
            openai_config.temperature,
        ));

        // Chat use case
        let ask_use_case = Arc::new(AskTutorUseCaseImpl {
            completion: tutor_responder,
            logger,
        });

        let chat_api =
            crate::api::chat::routes::ChatApi::new(ask_use_case, security_config.app_token);

        Self {
            health_api,
            chat_api,
        }
    }
}
