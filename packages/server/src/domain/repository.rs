//! Repository trait 定義
//!
//! Sleuth Store（ルームごとに直近のラウンドで選ばれた sleuth の名前）への
//! インターフェース。プロセスの生存期間だけ保持され、永続化はしない。

use async_trait::async_trait;

use super::value_object::{DisplayName, RoomId};

/// Sleuth Store
///
/// ルームごとに最大 1 件。新しいラウンドで上書きされ、削除はされない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SleuthRepository: Send + Sync {
    /// ルームの sleuth を記録（既存のエントリは上書き）
    async fn record(&self, room_id: RoomId, sleuth_name: DisplayName);

    /// ルームの sleuth を取得
    async fn find(&self, room_id: &RoomId) -> Option<DisplayName>;
}
