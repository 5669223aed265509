//! Wishlist CLI commands.

use clap::{Parser, Subcommand};

/// Wishlist management commands.
#[derive(Debug, Parser)]
pub struct WishlistsCommand {
    #[command(subcommand)]
    pub action: WishlistsAction,
}

/// Available wishlist actions.
#[derive(Debug, Subcommand)]
pub enum WishlistsAction {
    /// List your wishlists.
    List,
    /// Create a new wishlist.
    Create {
        /// Wishlist name.
        #[arg(long)]
        name: String,
    },
    /// Get a wishlist by ID.
    Get {
        /// Wishlist ID.
        id: String,
    },
    /// Rename a wishlist.
    Update {
        /// Wishlist ID.
        id: String,
        /// New name.
        #[arg(long)]
        name: String,
    },
    /// Delete a wishlist and all of its items.
    Delete {
        /// Wishlist ID.
        id: String,
    },
}
