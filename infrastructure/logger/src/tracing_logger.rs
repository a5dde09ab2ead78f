use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "TutorRelay -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "TutorRelay -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "TutorRelay -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "TutorRelay -- ", "{}", message);
    }
}
