//! UseCase 層
//!
//! 受信イベントごとに 1 つのユースケースを持ち、`GameCoordinator` がそれらを束ねます。

mod chat_message;
mod coordinator;
mod disconnect;
mod error;
mod join_room;
mod reveal_sleuth;
mod send_secret_word;

pub use chat_message::ChatMessageUseCase;
pub use coordinator::GameCoordinator;
pub use disconnect::DisconnectUseCase;
pub use error::GameError;
pub use join_room::JoinRoomUseCase;
pub use reveal_sleuth::{RevealOutcome, RevealSleuthUseCase};
pub use send_secret_word::{MIN_PLAYERS, RoundOutcome, SendSecretWordUseCase};
