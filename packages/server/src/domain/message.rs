//! Outbound message catalogue.
//!
//! Every message is a plain string. A leading color tag (`#RRGGBB`) is a
//! display hint for the client and carries no other meaning.

use std::fmt;

use super::value_object::{DisplayName, Word};

/// Display color hint prepended to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    /// Game notices (quorum warning, reveal, "no sleuth yet")
    Notice,
    /// Role message for the sleuth
    Sleuth,
    /// Secret word for everyone but the sleuth
    SecretWord,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notice => "#bb86fc",
            Self::Sleuth => "#FF0000",
            Self::SecretWord => "#00D100",
        }
    }
}

/// A message ready to be pushed to one connection or a whole room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    tag: Option<ColorTag>,
    text: String,
}

impl OutboundMessage {
    fn plain(text: String) -> Self {
        Self { tag: None, text }
    }

    fn tagged(tag: ColorTag, text: String) -> Self {
        Self {
            tag: Some(tag),
            text,
        }
    }

    /// `"{name} has joined the room."`
    pub fn joined(name: &DisplayName) -> Self {
        Self::plain(format!("{} has joined the room.", name))
    }

    /// `"{name}: {text}"`, text passed through verbatim
    pub fn chat(name: &DisplayName, text: &str) -> Self {
        Self::plain(format!("{}: {}", name, text))
    }

    /// `"{name} has left the room."`
    pub fn left(name: &DisplayName) -> Self {
        Self::plain(format!("{} has left the room.", name))
    }

    pub fn not_enough_players() -> Self {
        Self::tagged(
            ColorTag::Notice,
            "There needs to be at least 3 players to start.".to_string(),
        )
    }

    pub fn sleuth_role() -> Self {
        Self::tagged(
            ColorTag::Sleuth,
            "You are the Synonym Sleuth. Blend in".to_string(),
        )
    }

    pub fn secret_word(word: &Word) -> Self {
        Self::tagged(ColorTag::SecretWord, format!("The secret word is {}", word))
    }

    pub fn sleuth_revealed(name: &DisplayName) -> Self {
        Self::tagged(ColorTag::Notice, format!("The sleuth is {}!", name))
    }

    pub fn no_sleuth_yet() -> Self {
        Self::tagged(
            ColorTag::Notice,
            "No sleuth has been selected yet. Send a secret word first.".to_string(),
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Wire content: the color tag (if any) immediately followed by the text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OutboundMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = self.tag {
            f.write_str(tag.as_str())?;
        }
        f.write_str(&self.text)
    }
}
