//! InMemory Sleuth Repository 実装
//!
//! ドメイン層が定義する SleuthRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。プロセス終了とともに消えます。
//!
//! 最後のメンバーが抜けたルームのエントリも削除しません（孤立しても無害）。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{DisplayName, RoomId, SleuthRepository};

/// インメモリ Sleuth Repository 実装
#[derive(Default)]
pub struct InMemorySleuthRepository {
    /// Key: room_id, Value: 直近のラウンドの sleuth の表示名
    sleuths: Mutex<HashMap<RoomId, DisplayName>>,
}

impl InMemorySleuthRepository {
    /// 新しい InMemorySleuthRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SleuthRepository for InMemorySleuthRepository {
    async fn record(&self, room_id: RoomId, sleuth_name: DisplayName) {
        let mut sleuths = self.sleuths.lock().await;
        tracing::debug!("Recording sleuth '{}' for room '{}'", sleuth_name, room_id);
        sleuths.insert(room_id, sleuth_name);
    }

    async fn find(&self, room_id: &RoomId) -> Option<DisplayName> {
        let sleuths = self.sleuths.lock().await;
        sleuths.get(room_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - record / find の基本動作
    // - ルームごとに最大 1 件で、新しいラウンドで上書きされること
    // - ルーム同士が干渉しないこと
    // ========================================

    #[tokio::test]
    async fn test_find_without_record_returns_none() {
        // テスト項目: 記録のないルームでは None が返される
        // given (前提条件):
        let repo = InMemorySleuthRepository::new();

        // when (操作):
        let result = repo.find(&RoomId::new("R1")).await;

        // then (期待する結果):
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_record_overwrites_previous_sleuth() {
        // テスト項目: 同じルームに記録すると以前の sleuth が上書きされる
        // given (前提条件):
        let repo = InMemorySleuthRepository::new();
        let room_id = RoomId::new("R1");
        repo.record(room_id.clone(), DisplayName::new("A")).await;

        // when (操作):
        repo.record(room_id.clone(), DisplayName::new("B")).await;

        // then (期待する結果):
        assert_eq!(repo.find(&room_id).await, Some(DisplayName::new("B")));
    }

    #[tokio::test]
    async fn test_rooms_are_independent() {
        // テスト項目: ルームごとに独立して記録される
        // given (前提条件):
        let repo = InMemorySleuthRepository::new();

        // when (操作):
        repo.record(RoomId::new("R1"), DisplayName::new("A")).await;
        repo.record(RoomId::new(""), DisplayName::new("Z")).await;

        // then (期待する結果):
        assert_eq!(
            repo.find(&RoomId::new("R1")).await,
            Some(DisplayName::new("A"))
        );
        assert_eq!(repo.find(&RoomId::new("")).await, Some(DisplayName::new("Z")));
        assert_eq!(repo.find(&RoomId::new("R2")).await, None);
    }
}
