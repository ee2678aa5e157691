//! Terminal client for Synonym Sleuth.

pub mod command;
pub mod error;
pub mod formatter;
pub mod session;
pub mod ui;

pub use session::run_client_session;
