//! エンティティ

use super::value_object::{ConnectionId, DisplayName, RoomId};

/// One client session as tracked by the transport layer.
///
/// `room_id` and `display_name` stay `None` until the connection joins a room.
/// A joined connection keeps empty strings as given, but an empty room or name
/// never counts as recorded for the game events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: ConnectionId,
    pub room_id: Option<RoomId>,
    pub display_name: Option<DisplayName>,
}

impl Connection {
    pub fn new(id: ConnectionId) -> Self {
        Self {
            id,
            room_id: None,
            display_name: None,
        }
    }

    /// Record the room and display name, replacing any previous ones
    pub fn join(&mut self, room_id: RoomId, display_name: DisplayName) {
        self.room_id = Some(room_id);
        self.display_name = Some(display_name);
    }

    /// Recorded room, `None` before joining or when the room id is empty
    pub fn room(&self) -> Option<&RoomId> {
        self.room_id.as_ref().filter(|room_id| !room_id.is_empty())
    }

    /// Recorded room and name, both non-empty
    pub fn seat(&self) -> Option<(&RoomId, &DisplayName)> {
        let name = self.display_name.as_ref().filter(|name| !name.is_empty());
        self.room().zip(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_connection_has_no_seat() {
        // テスト項目: 新しい接続はどのルームにも属していない
        // given (前提条件):
        let connection = Connection::new(ConnectionId::generate());

        // when (操作):
        let seat = connection.seat();

        // then (期待する結果):
        assert!(seat.is_none());
        assert!(connection.room_id.is_none());
    }

    #[test]
    fn test_join_overwrites_previous_seat() {
        // テスト項目: 再度 join すると以前のルームと名前が上書きされる
        // given (前提条件):
        let mut connection = Connection::new(ConnectionId::generate());
        connection.join(RoomId::new("R1"), DisplayName::new("Dana"));

        // when (操作):
        connection.join(RoomId::new("R2"), DisplayName::new("Eve"));

        // then (期待する結果):
        let (room_id, name) = connection.seat().unwrap();
        assert_eq!(room_id.as_str(), "R2");
        assert_eq!(name.as_str(), "Eve");
    }

    #[test]
    fn test_empty_room_is_not_recorded() {
        // テスト項目: 空の Room ID で参加しても、ルームは記録されていない扱いになる
        // given (前提条件):
        let mut connection = Connection::new(ConnectionId::generate());

        // when (操作):
        connection.join(RoomId::new(""), DisplayName::new("Dana"));

        // then (期待する結果):
        assert_eq!(connection.room_id, Some(RoomId::new("")));
        assert!(connection.room().is_none());
        assert!(connection.seat().is_none());
    }

    #[test]
    fn test_empty_name_has_room_but_no_seat() {
        // テスト項目: 空の表示名ではルームはあるが、名前付きの席はない
        // given (前提条件):
        let mut connection = Connection::new(ConnectionId::generate());

        // when (操作):
        connection.join(RoomId::new("R9"), DisplayName::new(""));

        // then (期待する結果):
        assert_eq!(connection.room(), Some(&RoomId::new("R9")));
        assert!(connection.seat().is_none());
    }
}
