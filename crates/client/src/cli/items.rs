//! Item CLI commands.

use clap::{Parser, Subcommand};

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List the items of a wishlist.
    List {
        /// Wishlist ID.
        list_id: String,
    },
    /// Add an item to a wishlist.
    Create {
        /// Wishlist ID.
        list_id: String,
        /// Item description.
        #[arg(long)]
        description: String,
        /// Link to the item.
        #[arg(long)]
        url: Option<String>,
        /// Price, free-form.
        #[arg(long)]
        price: Option<String>,
    },
    /// Replace an item. Omitted URL and price are cleared.
    Update {
        /// Wishlist ID.
        list_id: String,
        /// Item ID.
        item_id: String,
        /// Item description.
        #[arg(long)]
        description: String,
        /// Link to the item.
        #[arg(long)]
        url: Option<String>,
        /// Price, free-form.
        #[arg(long)]
        price: Option<String>,
    },
    /// Delete an item.
    Delete {
        /// Wishlist ID.
        list_id: String,
        /// Item ID.
        item_id: String,
    },
}
