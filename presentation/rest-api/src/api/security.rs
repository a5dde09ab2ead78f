/// Shared-secret check for the chat endpoint.
///
/// The front-end sends the secret as a plain string in the X-APP-TOKEN
/// header. When no secret is configured the check is disabled and every
/// request passes; when configured, the header must match exactly.
pub fn verify_app_token(configured: Option<&str>, presented: Option<&str>) -> bool {
    match configured {
        None => true,
        Some(expected) => presented == Some(expected),
    }
}
