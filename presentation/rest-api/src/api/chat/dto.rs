use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Learner message sent by the Moodle front-end.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ChatRequest {
    /// The learner's question about the current task. A missing field
    /// decodes as an empty string and is rejected by validation.
    #[oai(default)]
    pub message: String,
}

/// Generated tutoring answer.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ChatAnswerResponse {
    /// Guidance text produced by the model; never empty
    pub answer: String,
}
