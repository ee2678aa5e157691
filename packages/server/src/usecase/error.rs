//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::MessagePushError;

/// Errors raised while handling a game event
///
/// None of them is surfaced to clients; the UI layer only logs them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Push(#[from] MessagePushError),

    #[error("random source picked an index outside of {len} item(s)")]
    SelectionOutOfRange { len: usize },
}
