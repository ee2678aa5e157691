//! UseCase: 切断処理

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, OutboundMessage, RoomId};

use super::error::GameError;

/// 切断のユースケース
pub struct DisconnectUseCase {
    /// MessagePusher（トランスポート層の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectUseCase {
    /// 新しい DisconnectUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 切断を実行
    ///
    /// 接続を登録解除してから、残りのメンバーに `"{name} has left the room."` を
    /// ブロードキャストする。ルームに参加していなかった接続では何も送信しない。
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RoomId))` - 退出を通知したルーム
    /// * `Ok(None)` - 通知なし
    pub async fn execute(&self, connection_id: &ConnectionId) -> Result<Option<RoomId>, GameError> {
        let Some(connection) = self.message_pusher.unregister_connection(connection_id).await
        else {
            tracing::debug!("Connection '{}' was already unregistered", connection_id);
            return Ok(None);
        };
        let Some((room_id, name)) = connection.seat() else {
            return Ok(None);
        };

        tracing::info!("'{}' left room '{}'", name, room_id);
        self.message_pusher
            .broadcast_to_group(room_id, &OutboundMessage::left(name))
            .await?;
        Ok(Some(room_id.clone()))
    }
}
