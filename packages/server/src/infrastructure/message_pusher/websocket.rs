//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` と接続情報（ルーム ID・表示名）を管理
//! - ルームのグループ（参加順のメンバーリスト）を管理
//! - クライアントへのメッセージ送信（push_to, broadcast_to_group）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、JSON にエンコードした
//! メッセージの送信に使用します。
//!
//! メンバーがいなくなったグループは削除されます（ルームは暗黙的に消える）。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{
        Connection, ConnectionId, DisplayName, MessagePushError, MessagePusher, OutboundMessage,
        PusherChannel, RoomId,
    },
    infrastructure::dto::conversion::encode_message,
};

struct ConnectionEntry {
    channel: PusherChannel,
    connection: Connection,
}

#[derive(Default)]
struct Registry {
    connections: HashMap<ConnectionId, ConnectionEntry>,
    /// Key: room_id, Value: メンバーの connection_id（参加順）
    groups: HashMap<RoomId, Vec<ConnectionId>>,
}

impl Registry {
    fn leave_group(&mut self, room_id: &RoomId, connection_id: &ConnectionId) {
        if let Some(members) = self.groups.get_mut(room_id) {
            members.retain(|id| id != connection_id);
            if members.is_empty() {
                self.groups.remove(room_id);
                tracing::debug!("Room '{}' is now empty", room_id);
            }
        }
    }
}

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let pusher = WebSocketMessagePusher::new();
/// pusher.register_connection(connection_id, tx).await;
/// pusher.join_group(&connection_id, room_id.clone(), name).await?;
/// pusher.broadcast_to_group(&room_id, &OutboundMessage::joined(&name)).await?;
/// ```
#[derive(Default)]
pub struct WebSocketMessagePusher {
    registry: Mutex<Registry>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new() -> Self {
        Self::default()
    }

    fn encode(message: &OutboundMessage) -> Result<String, MessagePushError> {
        encode_message(message).map_err(|e| MessagePushError::PushFailed(e.to_string()))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_connection(&self, connection_id: ConnectionId, channel: PusherChannel) {
        let mut registry = self.registry.lock().await;
        registry.connections.insert(
            connection_id,
            ConnectionEntry {
                channel,
                connection: Connection::new(connection_id),
            },
        );
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    async fn unregister_connection(&self, connection_id: &ConnectionId) -> Option<Connection> {
        let mut registry = self.registry.lock().await;
        let entry = registry.connections.remove(connection_id)?;
        if let Some(room_id) = &entry.connection.room_id {
            registry.leave_group(room_id, connection_id);
        }
        tracing::debug!(
            "Connection '{}' unregistered from MessagePusher",
            connection_id
        );
        Some(entry.connection)
    }

    async fn join_group(
        &self,
        connection_id: &ConnectionId,
        room_id: RoomId,
        display_name: DisplayName,
    ) -> Result<(), MessagePushError> {
        let mut registry = self.registry.lock().await;

        let previous_room = registry
            .connections
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ConnectionNotFound(connection_id.to_string()))?
            .connection
            .room_id
            .clone();

        if let Some(previous_room) = previous_room.filter(|previous| previous != &room_id) {
            registry.leave_group(&previous_room, connection_id);
            tracing::debug!(
                "Connection '{}' left room '{}'",
                connection_id,
                previous_room
            );
        }

        let members = registry.groups.entry(room_id.clone()).or_default();
        if !members.contains(connection_id) {
            members.push(*connection_id);
        }

        if let Some(entry) = registry.connections.get_mut(connection_id) {
            entry.connection.join(room_id, display_name);
        }
        Ok(())
    }

    async fn connection(&self, connection_id: &ConnectionId) -> Option<Connection> {
        let registry = self.registry.lock().await;
        registry
            .connections
            .get(connection_id)
            .map(|entry| entry.connection.clone())
    }

    async fn group_members(&self, room_id: &RoomId) -> Vec<Connection> {
        let registry = self.registry.lock().await;
        registry
            .groups
            .get(room_id)
            .map(|members| {
                members
                    .iter()
                    .filter_map(|id| registry.connections.get(id))
                    .map(|entry| entry.connection.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        message: &OutboundMessage,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(message)?;
        let registry = self.registry.lock().await;

        let entry = registry
            .connections
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ConnectionNotFound(connection_id.to_string()))?;
        entry
            .channel
            .send(frame)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed message to connection '{}'", connection_id);
        Ok(())
    }

    async fn broadcast_to_group(
        &self,
        room_id: &RoomId,
        message: &OutboundMessage,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(message)?;
        let registry = self.registry.lock().await;

        let Some(members) = registry.groups.get(room_id) else {
            tracing::debug!("Room '{}' has no members, nothing to broadcast", room_id);
            return Ok(());
        };

        for connection_id in members {
            match registry.connections.get(connection_id) {
                // ブロードキャストでは一部の送信失敗を許容
                Some(entry) => {
                    if let Err(e) = entry.channel.send(frame.clone()) {
                        tracing::warn!(
                            "Failed to push message to connection '{}': {}",
                            connection_id,
                            e
                        );
                    }
                }
                None => tracing::warn!(
                    "Connection '{}' not found during broadcast, skipping",
                    connection_id
                ),
            }
        }
        tracing::debug!(
            "Broadcasted message to {} member(s) of room '{}'",
            members.len(),
            room_id
        );

        Ok(())
    }
}
