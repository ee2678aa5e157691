//! MessagePusher trait 定義
//!
//! リアルタイム通信ライブラリ（トランスポート層）が提供する機能のインターフェース。
//! 接続のライフサイクルとルームのメンバー管理はトランスポート層が専有し、
//! UseCase 層はこの trait を通してのみ参照します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{
    entity::Connection,
    error::MessagePushError,
    message::OutboundMessage,
    value_object::{ConnectionId, DisplayName, RoomId},
};

/// Channel through which encoded frames reach one connection's socket
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Transport capabilities used by the game coordinator
///
/// - connection lifecycle: `register_connection` / `unregister_connection`
/// - room membership: `join_group` / `group_members`
/// - delivery: `push_to` (unicast) / `broadcast_to_group`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 新しい接続を登録（まだどのルームにも属さない）
    async fn register_connection(&self, connection_id: ConnectionId, channel: PusherChannel);

    /// 接続を登録解除し、解除前の接続情報を返す
    ///
    /// 以降の送信（ブロードキャストを含む）からは除外される。
    async fn unregister_connection(&self, connection_id: &ConnectionId) -> Option<Connection>;

    /// 接続をルームのグループに追加し、ルーム ID と表示名を記録
    ///
    /// 既に別のルームに属している場合は、そのグループから抜けてから追加する。
    async fn join_group(
        &self,
        connection_id: &ConnectionId,
        room_id: RoomId,
        display_name: DisplayName,
    ) -> Result<(), MessagePushError>;

    /// 接続情報を取得
    async fn connection(&self, connection_id: &ConnectionId) -> Option<Connection>;

    /// ルームの現在のメンバーを参加順で取得
    async fn group_members(&self, room_id: &RoomId) -> Vec<Connection>;

    /// 特定の接続にメッセージを送信
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        message: &OutboundMessage,
    ) -> Result<(), MessagePushError>;

    /// ルームの全メンバーにメッセージを送信
    ///
    /// 一部のメンバーへの送信失敗は許容する。
    async fn broadcast_to_group(
        &self,
        room_id: &RoomId,
        message: &OutboundMessage,
    ) -> Result<(), MessagePushError>;
}
