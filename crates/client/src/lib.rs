//! wishlist_client - HTTP client and CLI for the wishlist API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::WishlistClient;
pub use error::{ClientError, Result};
