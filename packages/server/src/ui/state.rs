//! Server state shared by the handlers.

use std::path::PathBuf;

use tokio::sync::mpsc;

use super::dispatcher::Dispatch;

/// Shared application state
pub struct AppState {
    /// 全接続のイベントを 1 本の列に流し込む送信側
    pub dispatcher: mpsc::UnboundedSender<Dispatch>,
    /// login.html / room.html と静的ファイルのディレクトリ
    pub static_dir: PathBuf,
}
