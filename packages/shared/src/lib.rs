//! Code shared by the Synonym Sleuth server and client.

pub mod logger;
pub mod protocol;
pub mod time;
