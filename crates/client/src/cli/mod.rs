//! CLI command definitions.

pub mod health;
pub mod items;
pub mod wishlists;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the wishlist API.
#[derive(Debug, Parser)]
#[command(name = "wishlist-client")]
#[command(about = "CLI client for the wishlist API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "WISHLIST_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Bearer token sent with every request.
    #[arg(long, env = "WISHLIST_TOKEN")]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Wishlist management.
    Wishlists(wishlists::WishlistsCommand),
    /// Wishlist item management.
    Items(items::ItemsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_create() {
        let cli = Cli::try_parse_from([
            "wishlist-client",
            "--base-url",
            "http://localhost:9000",
            "--format",
            "json",
            "items",
            "create",
            "list-1",
            "--description",
            "Book",
            "--price",
            "20",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://localhost:9000");
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Items(cmd) => match cmd.action {
                items::ItemsAction::Create {
                    list_id,
                    description,
                    url,
                    price,
                } => {
                    assert_eq!(list_id, "list-1");
                    assert_eq!(description, "Book");
                    assert!(url.is_none());
                    assert_eq!(price.as_deref(), Some("20"));
                }
                other => panic!("unexpected action: {:?}", other),
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_wishlist_rename_requires_name() {
        let result =
            Cli::try_parse_from(["wishlist-client", "wishlists", "update", "list-1"]);
        assert!(result.is_err());
    }
}
