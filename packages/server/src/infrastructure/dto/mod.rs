//! Data Transfer Objects (DTOs) for the WebSocket protocol.
//!
//! The wire types live in `synonym_sleuth_shared::protocol` so the client can
//! use them too; this module converts them to and from domain types.

pub mod conversion;

pub use synonym_sleuth_shared::protocol::{ClientEvent, ServerMessage};
