//! UseCase: sleuth の公開

use std::sync::Arc;

use crate::domain::{ConnectionId, DisplayName, MessagePusher, OutboundMessage, SleuthRepository};

use super::error::GameError;

/// Result of one `revealSleuth` event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The requester has not joined a room; nothing was sent
    NotInRoom,
    /// The sleuth's name was broadcast to the room
    Revealed(DisplayName),
    /// No round has been played in the room; only the requester was told
    NoSleuthYet,
}

/// sleuth 公開のユースケース
///
/// Sleuth Store は読み取るだけなので、何度呼んでも同じ結果になる。
pub struct RevealSleuthUseCase {
    /// MessagePusher（トランスポート層の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// Sleuth Store
    sleuth_repository: Arc<dyn SleuthRepository>,
}

impl RevealSleuthUseCase {
    /// 新しい RevealSleuthUseCase を作成
    pub fn new(
        message_pusher: Arc<dyn MessagePusher>,
        sleuth_repository: Arc<dyn SleuthRepository>,
    ) -> Self {
        Self {
            message_pusher,
            sleuth_repository,
        }
    }

    /// sleuth の公開を実行
    pub async fn execute(&self, connection_id: &ConnectionId) -> Result<RevealOutcome, GameError> {
        let Some(room_id) = self
            .message_pusher
            .connection(connection_id)
            .await
            .and_then(|connection| connection.room().cloned())
        else {
            return Ok(RevealOutcome::NotInRoom);
        };

        // an empty recorded name counts as no sleuth
        let sleuth = self
            .sleuth_repository
            .find(&room_id)
            .await
            .filter(|name| !name.is_empty());
        match sleuth {
            Some(name) => {
                self.message_pusher
                    .broadcast_to_group(&room_id, &OutboundMessage::sleuth_revealed(&name))
                    .await?;
                tracing::info!("Revealed sleuth '{}' in room '{}'", name, room_id);
                Ok(RevealOutcome::Revealed(name))
            }
            None => {
                self.message_pusher
                    .push_to(connection_id, &OutboundMessage::no_sleuth_yet())
                    .await?;
                Ok(RevealOutcome::NoSleuthYet)
            }
        }
    }
}
