//! Game Coordinator
//!
//! Routes each inbound event of a connection to its use case. Errors are
//! logged and never surfaced to the client or allowed to close the connection.

use std::sync::Arc;

use crate::domain::{
    ConnectionId, InboundEvent, MessagePusher, PusherChannel, RandomSource, SleuthRepository,
    WordList,
};

use super::{
    ChatMessageUseCase, DisconnectUseCase, JoinRoomUseCase, RevealOutcome, RevealSleuthUseCase,
    RoundOutcome, SendSecretWordUseCase,
};

/// Game Coordinator: owns the Sleuth Store and drives every use case
pub struct GameCoordinator {
    message_pusher: Arc<dyn MessagePusher>,
    join_room: JoinRoomUseCase,
    chat_message: ChatMessageUseCase,
    disconnect: DisconnectUseCase,
    send_secret_word: SendSecretWordUseCase,
    reveal_sleuth: RevealSleuthUseCase,
}

impl GameCoordinator {
    pub fn new(
        message_pusher: Arc<dyn MessagePusher>,
        sleuth_repository: Arc<dyn SleuthRepository>,
        random: Arc<dyn RandomSource>,
        word_list: Arc<WordList>,
    ) -> Self {
        Self {
            join_room: JoinRoomUseCase::new(message_pusher.clone()),
            chat_message: ChatMessageUseCase::new(message_pusher.clone()),
            disconnect: DisconnectUseCase::new(message_pusher.clone()),
            send_secret_word: SendSecretWordUseCase::new(
                message_pusher.clone(),
                sleuth_repository.clone(),
                random,
                word_list,
            ),
            reveal_sleuth: RevealSleuthUseCase::new(message_pusher.clone(), sleuth_repository),
            message_pusher,
        }
    }

    /// Register a freshly opened connection with the transport
    pub async fn connect(&self, connection_id: ConnectionId, channel: PusherChannel) {
        self.message_pusher
            .register_connection(connection_id, channel)
            .await;
        tracing::info!("Connection '{}' opened", connection_id);
    }

    /// Handle one inbound event to completion
    pub async fn handle(&self, connection_id: ConnectionId, event: InboundEvent) {
        let event_name = event.name();
        tracing::debug!(
            "Handling '{}' from connection '{}'",
            event_name,
            connection_id
        );

        let result = match event {
            InboundEvent::JoinRoom { room_id, name } => {
                self.join_room.execute(&connection_id, room_id, name).await
            }
            InboundEvent::ChatMessage { text } => self
                .chat_message
                .execute(&connection_id, &text)
                .await
                .map(|_| ()),
            InboundEvent::Disconnect => {
                let result = self.disconnect.execute(&connection_id).await.map(|_| ());
                tracing::info!("Connection '{}' closed", connection_id);
                result
            }
            InboundEvent::SendSecretWord => self
                .send_secret_word
                .execute(&connection_id)
                .await
                .map(|outcome| {
                    if let RoundOutcome::NotEnoughPlayers { player_count, .. } = outcome {
                        tracing::debug!("Round refused with {} player(s)", player_count);
                    }
                }),
            InboundEvent::RevealSleuth => self
                .reveal_sleuth
                .execute(&connection_id)
                .await
                .map(|outcome| {
                    if outcome == RevealOutcome::NoSleuthYet {
                        tracing::debug!("No sleuth to reveal yet");
                    }
                }),
        };

        if let Err(e) = result {
            tracing::warn!(
                "Failed to handle '{}' from connection '{}': {}",
                event_name,
                connection_id,
                e
            );
        }
    }
}
