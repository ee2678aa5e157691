//! InMemory Repository 実装

pub mod sleuth;

pub use sleuth::InMemorySleuthRepository;
