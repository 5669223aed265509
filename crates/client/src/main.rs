//! wishlist-client CLI entry point.

use clap::Parser;
use wishlist_client::cli::{Cli, Commands, OutputFormat};
use wishlist_client::client::WishlistClient;
use wishlist_client::output::{format_output, pretty};
use wishlist_core::wishlist::ItemRequest;

fn item_request(description: String, url: Option<String>, price: Option<String>) -> ItemRequest {
    ItemRequest {
        description,
        url,
        price,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = match &cli.token {
        Some(token) => WishlistClient::new(&cli.base_url).with_token(token),
        None => WishlistClient::new(&cli.base_url),
    };

    match cli.command {
        Commands::Wishlists(wishlists_cmd) => {
            use wishlist_client::cli::wishlists::WishlistsAction;
            match wishlists_cmd.action {
                WishlistsAction::List => {
                    let wishlists = client.list_wishlists().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&wishlists, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_wishlists(&wishlists))
                        }
                    }
                }
                WishlistsAction::Create { name } => {
                    let wishlist = client.create_wishlist(&name).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&wishlist, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_wishlist(&wishlist))
                        }
                    }
                }
                WishlistsAction::Get { id } => {
                    let wishlist = client.get_wishlist(&id).await?;
                    match (cli.format, &wishlist) {
                        (OutputFormat::Json, _) => {
                            println!("{}", format_output(&wishlist, cli.format))
                        }
                        (OutputFormat::Pretty, Some(wishlist)) => {
                            println!("{}", pretty::format_wishlist(wishlist))
                        }
                        (OutputFormat::Pretty, None) => println!("Wishlist {} not found.", id),
                    }
                }
                WishlistsAction::Update { id, name } => {
                    let wishlist = client.update_wishlist(&id, &name).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&wishlist, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_wishlist(&wishlist))
                        }
                    }
                }
                WishlistsAction::Delete { id } => {
                    client.delete_wishlist(&id).await?;
                    if !cli.quiet {
                        println!("Deleted wishlist {}", id);
                    }
                }
            }
        }
        Commands::Items(items_cmd) => {
            use wishlist_client::cli::items::ItemsAction;
            match items_cmd.action {
                ItemsAction::List { list_id } => {
                    let items = client.list_items(&list_id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&items, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_items(&items)),
                    }
                }
                ItemsAction::Create {
                    list_id,
                    description,
                    url,
                    price,
                } => {
                    let item = client
                        .create_item(&list_id, &item_request(description, url, price))
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_item(&item))
                        }
                    }
                }
                ItemsAction::Update {
                    list_id,
                    item_id,
                    description,
                    url,
                    price,
                } => {
                    let item = client
                        .update_item(&list_id, &item_id, &item_request(description, url, price))
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_item(&item))
                        }
                    }
                }
                ItemsAction::Delete { list_id, item_id } => {
                    client.delete_item(&list_id, &item_id).await?;
                    if !cli.quiet {
                        println!("Deleted item {} from {}", item_id, list_id);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use wishlist_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Status => {
                    let status = client.status().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&status, cli.format)),
                        OutputFormat::Pretty => println!("Status: {}", status.status),
                    }
                }
            }
        }
    }

    Ok(())
}
