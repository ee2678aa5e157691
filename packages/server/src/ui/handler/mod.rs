//! HTTP / WebSocket handlers.

pub mod http;
pub mod websocket;

pub use http::{health_check, login_page, room_page};
pub use websocket::websocket_handler;
