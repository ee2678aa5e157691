//! Inbound events handled by the game coordinator.

use super::value_object::{DisplayName, RoomId};

/// One event raised by a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    JoinRoom { room_id: RoomId, name: DisplayName },
    ChatMessage { text: String },
    Disconnect,
    SendSecretWord,
    RevealSleuth,
}

impl InboundEvent {
    /// Event name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::JoinRoom { .. } => "joinRoom",
            Self::ChatMessage { .. } => "chatMessage",
            Self::Disconnect => "disconnect",
            Self::SendSecretWord => "sendSecretWord",
            Self::RevealSleuth => "revealSleuth",
        }
    }
}
