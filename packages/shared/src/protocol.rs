//! WebSocket wire protocol shared by the server and the client.
//!
//! Every frame is a JSON text frame tagged by `type`.
//!
//! ```text
//! client -> server: {"type":"joinRoom","roomId":"R1","name":"Dana"}
//!                   {"type":"chatMessage","text":"hello"}
//!                   {"type":"sendSecretWord"}
//!                   {"type":"revealSleuth"}
//! server -> client: {"type":"message","content":"#bb86fcThe sleuth is Dana!"}
//! ```

use serde::{Deserialize, Serialize};

/// Length of a color tag prefix such as `#bb86fc`
pub const COLOR_TAG_LEN: usize = 7;

/// Events a client sends to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Join (or move to) a room under a display name
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_id: String, name: String },
    /// Chat text for the current room
    ChatMessage { text: String },
    /// Start a new round in the current room
    SendSecretWord,
    /// Reveal the sleuth of the last round in the current room
    RevealSleuth,
}

/// Messages the server sends to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Plain display string, optionally prefixed by a color tag
    Message { content: String },
}

/// Split a message content into its color tag (if any) and the display text.
///
/// A color tag is `#` followed by exactly six hexadecimal digits.
///
/// # Examples
///
/// ```
/// use synonym_sleuth_shared::protocol::parse_color_tag;
///
/// assert_eq!(parse_color_tag("#FF0000Blend in"), (Some("#FF0000"), "Blend in"));
/// assert_eq!(parse_color_tag("Dana: hi"), (None, "Dana: hi"));
/// ```
pub fn parse_color_tag(content: &str) -> (Option<&str>, &str) {
    let bytes = content.as_bytes();
    let is_tagged = bytes.len() >= COLOR_TAG_LEN
        && bytes[0] == b'#'
        && bytes[1..COLOR_TAG_LEN].iter().all(u8::is_ascii_hexdigit);

    if is_tagged {
        let (tag, text) = content.split_at(COLOR_TAG_LEN);
        (Some(tag), text)
    } else {
        (None, content)
    }
}
