//! wishlist_core - functional core for the wishlist service.
//!
//! Pure types and functions shared by the server, the client and the xtask
//! binary. Nothing in this crate performs I/O; the storage backend and the
//! identity provider are traits implemented by the shell.

pub mod auth;
pub mod storage;
pub mod wishlist;
