//! Key-value backend implementations.
//!
//! This module provides concrete implementations of
//! `wishlist_core::storage::KeyValueBackend`. The backend used by the server
//! is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-process ordered map, nothing persisted
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive. The in-memory backend is always
//! compiled for tests.
//!
//! # Examples
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p wishlist --no-default-features --features dynamodb
//! ```

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryBackend;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbBackend;
