//! UseCase: チャットメッセージ送信処理

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, OutboundMessage, RoomId};

use super::error::GameError;

/// チャットメッセージ送信のユースケース
pub struct ChatMessageUseCase {
    /// MessagePusher（トランスポート層の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ChatMessageUseCase {
    /// 新しい ChatMessageUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// チャットメッセージ送信を実行
    ///
    /// 送信者を含むルーム全員に `"{name}: {text}"` をブロードキャストする。
    /// 本文は加工しない（サニタイズ・長さ制限なし）。
    /// Room ID が空の接続は未参加として扱う（表示名は空でもよい）。
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RoomId))` - ブロードキャストしたルーム
    /// * `Ok(None)` - ルームに参加していないため無視した
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        text: &str,
    ) -> Result<Option<RoomId>, GameError> {
        let Some(connection) = self.message_pusher.connection(connection_id).await else {
            return Ok(None);
        };
        let (Some(room_id), Some(name)) = (connection.room(), connection.display_name.as_ref())
        else {
            tracing::debug!(
                "Ignoring chat from connection '{}' outside of any room",
                connection_id
            );
            return Ok(None);
        };

        self.message_pusher
            .broadcast_to_group(room_id, &OutboundMessage::chat(name, text))
            .await?;
        Ok(Some(room_id.clone()))
    }
}
