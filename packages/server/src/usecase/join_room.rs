//! UseCase: ルーム参加処理

use std::sync::Arc;

use crate::domain::{ConnectionId, DisplayName, MessagePusher, OutboundMessage, RoomId};

use super::error::GameError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// MessagePusher（トランスポート層の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// ルーム参加を実行
    ///
    /// 接続をルームのグループに追加し、参加者本人を含むルーム全員に
    /// `"{name} has joined the room."` をブロードキャストする。
    /// Room ID・表示名は検証しない（空文字列も可）。
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        room_id: RoomId,
        name: DisplayName,
    ) -> Result<(), GameError> {
        self.message_pusher
            .join_group(connection_id, room_id.clone(), name.clone())
            .await?;
        tracing::info!("'{}' joined room '{}'", name, room_id);

        self.message_pusher
            .broadcast_to_group(&room_id, &OutboundMessage::joined(&name))
            .await?;
        Ok(())
    }
}
