//! In-memory storage backend for testing.
//!
//! Rows live in an ordered map keyed by `(pk, sk)` behind a
//! `tokio::sync::RwLock`. Nothing is persisted; data is lost when the last
//! clone of the backend is dropped.

mod backend;

pub use backend::InMemoryBackend;
