//! UI 層: HTTP / WebSocket の入り口

mod dispatcher;
mod handler;
mod server;
mod signal;
mod state;

pub use server::Server;
