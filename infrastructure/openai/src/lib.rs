pub mod client;
pub mod tutor_responder;
