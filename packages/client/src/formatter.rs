//! Message formatting utilities for client display.

use synonym_sleuth_shared::{protocol::parse_color_tag, time::timestamp_to_local_clock};

const ANSI_RESET: &str = "\x1b[0m";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a message pushed by the server
    ///
    /// A leading color tag is turned into a 24-bit ANSI foreground color.
    ///
    /// # Arguments
    ///
    /// * `content` - The message content, possibly prefixed by `#RRGGBB`
    /// * `received_at` - Unix timestamp when the message arrived (milliseconds)
    pub fn format_server_message(content: &str, received_at: i64) -> String {
        let clock = timestamp_to_local_clock(received_at);
        let (tag, text) = parse_color_tag(content);
        match tag.and_then(ansi_color) {
            Some(color) => format!("\n[{}] {}{}{}\n", clock, color, text, ANSI_RESET),
            None => format!("\n[{}] {}\n", clock, text),
        }
    }

    /// Format a raw text frame that is not a server message
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }

    /// Format the banner shown once connected
    pub fn format_welcome(room_id: &str, name: &str) -> String {
        format!(
            "\n============================================================\n\
             You are '{}' in room '{}'. Type /help for commands.\n\
             ============================================================\n",
            name, room_id
        )
    }
}

/// `#RRGGBB` to an ANSI 24-bit foreground escape sequence
fn ansi_color(tag: &str) -> Option<String> {
    let hex = tag.strip_prefix('#')?;
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Some(format!("\x1b[38;2;{};{};{}m", r, g, b))
}
