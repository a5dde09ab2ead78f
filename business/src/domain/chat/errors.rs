/// Chat relay errors for domain layer.
/// `UpstreamFailed` carries the stringified upstream cause because the
/// HTTP contract surfaces it verbatim as the error detail.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat.empty_message")]
    EmptyMessage,
    #[error("{0}")]
    UpstreamFailed(String),
}
