//! Synonym Sleuth room server library.
//!
//! Clients join named rooms, chat, and play rounds of "guess the secret word,
//! spot the sleuth" over a WebSocket connection.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
