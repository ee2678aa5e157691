//! ドメイン層
//!
//! 値オブジェクト、エンティティ、外部に依存する操作の trait（ポート）を定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

pub mod entity;
pub mod error;
pub mod event;
pub mod message;
pub mod message_pusher;
pub mod random;
pub mod repository;
pub mod value_object;
pub mod word_list;

pub use entity::Connection;
pub use error::{MessagePushError, ValidationError};
pub use event::InboundEvent;
pub use message::{ColorTag, OutboundMessage};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use random::{RandomSource, choose};
pub use repository::SleuthRepository;
pub use value_object::{ConnectionId, DisplayName, RoomId, Word};
pub use word_list::WordList;
