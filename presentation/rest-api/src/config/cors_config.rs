use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for the Moodle front-end
///
/// Environment variables:
/// - MOODLE_ORIGIN: The single origin allowed to call the API from the
///   browser (default: "https://bszw.moodle-nds.de")
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type, x-app-token
/// - Credentials: Enabled
///
pub fn init_cors() -> Cors {
    let origin =
        env::var("MOODLE_ORIGIN").unwrap_or_else(|_| "https://bszw.moodle-nds.de".to_string());

    Cors::new()
        .allow_origins(vec![origin.as_str()])
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type", "x-app-token"])
        .allow_credentials(true)
}
