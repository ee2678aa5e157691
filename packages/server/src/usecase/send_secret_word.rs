//! UseCase: ラウンド開始（秘密の単語の配布と sleuth の選出）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendSecretWordUseCase::execute() メソッド
//! - 人数チェック、sleuth と単語の抽選、送信先の振り分け、Sleuth Store への記録
//!
//! ### なぜこのテストが必要か
//! - sleuth には単語が届かず、それ以外の全員には同じ単語が届くことを保証
//! - 3 人未満ではラウンドが始まらず、Sleuth Store が変化しないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：3 人以上のルームでのラウンド開始
//! - 異常系：2 人以下のルーム、ルーム未参加の接続
//! - エッジケース：開始した本人が sleuth に選ばれる、連続したラウンドでの上書き

use std::sync::Arc;

use crate::domain::{
    ConnectionId, MessagePusher, OutboundMessage, RandomSource, RoomId, SleuthRepository, Word,
    WordList, choose,
};

use super::error::GameError;

/// ラウンド開始に必要な最小人数（この人数を含む）
pub const MIN_PLAYERS: usize = 3;

/// Result of one `sendSecretWord` event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The requester has not joined a room; nothing was sent
    NotInRoom,
    /// Fewer than `MIN_PLAYERS` members; the warning was broadcast
    NotEnoughPlayers { room_id: RoomId, player_count: usize },
    /// A round started
    Started {
        room_id: RoomId,
        sleuth: ConnectionId,
        word: Word,
    },
}

/// ラウンド開始のユースケース
pub struct SendSecretWordUseCase {
    /// MessagePusher（トランスポート層の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// Sleuth Store
    sleuth_repository: Arc<dyn SleuthRepository>,
    /// 抽選に使う乱数源
    random: Arc<dyn RandomSource>,
    word_list: Arc<WordList>,
}

impl SendSecretWordUseCase {
    /// 新しい SendSecretWordUseCase を作成
    pub fn new(
        message_pusher: Arc<dyn MessagePusher>,
        sleuth_repository: Arc<dyn SleuthRepository>,
        random: Arc<dyn RandomSource>,
        word_list: Arc<WordList>,
    ) -> Self {
        Self {
            message_pusher,
            sleuth_repository,
            random,
            word_list,
        }
    }

    /// ラウンド開始を実行
    ///
    /// 1. 人数チェック（3 人未満なら警告をブロードキャストして中断）
    /// 2. 現在のメンバー（開始した本人を含む）から sleuth を抽選
    /// 3. 単語リストから単語を抽選
    /// 4. sleuth には役割のメッセージ、それ以外には単語を個別に送信
    /// 5. Sleuth Store にルームの sleuth を記録（上書き）
    ///
    /// 呼び出すたびに抽選し直す（冪等ではない）。
    pub async fn execute(&self, connection_id: &ConnectionId) -> Result<RoundOutcome, GameError> {
        let Some(room_id) = self
            .message_pusher
            .connection(connection_id)
            .await
            .and_then(|connection| connection.room().cloned())
        else {
            tracing::debug!(
                "Ignoring sendSecretWord from connection '{}' outside of any room",
                connection_id
            );
            return Ok(RoundOutcome::NotInRoom);
        };

        // 1. 人数チェック
        let members = self.message_pusher.group_members(&room_id).await;
        if members.len() < MIN_PLAYERS {
            tracing::info!(
                "Room '{}' has {} player(s), at least {} are needed",
                room_id,
                members.len(),
                MIN_PLAYERS
            );
            self.message_pusher
                .broadcast_to_group(&room_id, &OutboundMessage::not_enough_players())
                .await?;
            return Ok(RoundOutcome::NotEnoughPlayers {
                room_id,
                player_count: members.len(),
            });
        }

        // 2. sleuth の抽選
        let sleuth = choose(self.random.as_ref(), &members).ok_or(
            GameError::SelectionOutOfRange {
                len: members.len(),
            },
        )?;

        // 3. 単語の抽選
        let word = choose(self.random.as_ref(), self.word_list.as_slice()).ok_or(
            GameError::SelectionOutOfRange {
                len: self.word_list.len(),
            },
        )?;

        // 4. 送信（個別の送信失敗は許容）
        if let Err(e) = self
            .message_pusher
            .push_to(&sleuth.id, &OutboundMessage::sleuth_role())
            .await
        {
            tracing::warn!("Failed to send role to sleuth '{}': {}", sleuth.id, e);
        }
        let secret = OutboundMessage::secret_word(word);
        for member in members.iter().filter(|member| member.id != sleuth.id) {
            if let Err(e) = self.message_pusher.push_to(&member.id, &secret).await {
                tracing::warn!("Failed to send secret word to '{}': {}", member.id, e);
            }
        }

        // 5. Sleuth Store に記録
        if let Some(name) = &sleuth.display_name {
            self.sleuth_repository
                .record(room_id.clone(), name.clone())
                .await;
        }
        tracing::info!(
            "Round started in room '{}' with {} players",
            room_id,
            members.len()
        );

        Ok(RoundOutcome::Started {
            room_id,
            sleuth: sleuth.id,
            word: word.clone(),
        })
    }
}
