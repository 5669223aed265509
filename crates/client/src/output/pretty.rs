//! Pretty output formatting.

use wishlist_core::wishlist::{Item, Wishlist};

/// Format a wishlist for display.
pub fn format_wishlist(wishlist: &Wishlist) -> String {
    format!(
        "{}\n  ID: {}\n  Owner: {}",
        wishlist.name, wishlist.id, wishlist.owner
    )
}

/// Format wishlists for display.
pub fn format_wishlists(wishlists: &[Wishlist]) -> String {
    if wishlists.is_empty() {
        return "No wishlists found.".to_string();
    }
    let mut output = format!("WISHLISTS ({})\n", wishlists.len());
    output.push_str(&"-".repeat(40));
    for wishlist in wishlists {
        output.push_str(&format!("\n{}", format_wishlist(wishlist)));
        output.push('\n');
    }
    output
}

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let mut output = format!("{}\n  ID: {}", item.description, item.id);
    if let Some(url) = &item.url {
        output.push_str(&format!("\n  URL: {}", url));
    }
    if let Some(price) = &item.price {
        output.push_str(&format!("\n  Price: {}", price));
    }
    output
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist_core::wishlist::ItemFields;

    #[test]
    fn test_format_item_skips_missing_fields() {
        let item = Item::from_fields("i1", ItemFields::new("Book"));
        assert_eq!(format_item(&item), "Book\n  ID: i1");
    }

    #[test]
    fn test_format_item_with_url_and_price() {
        let item = Item::from_fields(
            "i1",
            ItemFields::new("Book")
                .with_url("https://example.com")
                .with_price("20"),
        );
        let output = format_item(&item);
        assert!(output.contains("URL: https://example.com"));
        assert!(output.contains("Price: 20"));
    }

    #[test]
    fn test_format_wishlists_empty() {
        assert_eq!(format_wishlists(&[]), "No wishlists found.");
    }

    #[test]
    fn test_format_wishlists_header_counts_entries() {
        let lists = vec![
            Wishlist::new("l1", "Birthday", "a@x.com"),
            Wishlist::new("l2", "Holiday", "a@x.com"),
        ];
        let output = format_wishlists(&lists);
        assert!(output.starts_with("WISHLISTS (2)\n"));
        assert!(output.contains("Birthday\n  ID: l1"));
    }
}
