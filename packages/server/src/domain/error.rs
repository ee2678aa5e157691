//! ドメイン層のエラー型

use thiserror::Error;

/// Errors raised while constructing domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("word list must contain at least one word")]
    EmptyWordList,
}

/// Errors raised by a `MessagePusher`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("connection '{0}' is not registered")]
    ConnectionNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
