//! Conversion logic between DTOs and domain types.

use synonym_sleuth_shared::protocol::{ClientEvent, ServerMessage};

use crate::domain::{DisplayName, InboundEvent, OutboundMessage, RoomId};

// ========================================
// DTO → Domain
// ========================================

impl From<ClientEvent> for InboundEvent {
    fn from(dto: ClientEvent) -> Self {
        match dto {
            ClientEvent::JoinRoom { room_id, name } => Self::JoinRoom {
                room_id: RoomId::from(room_id),
                name: DisplayName::from(name),
            },
            ClientEvent::ChatMessage { text } => Self::ChatMessage { text },
            ClientEvent::SendSecretWord => Self::SendSecretWord,
            ClientEvent::RevealSleuth => Self::RevealSleuth,
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&OutboundMessage> for ServerMessage {
    fn from(message: &OutboundMessage) -> Self {
        Self::Message {
            content: message.render(),
        }
    }
}

/// Encode an outbound message as a JSON text frame
pub fn encode_message(message: &OutboundMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ServerMessage::from(message))
}
