//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use std::time::Duration;
use wishlist_core::storage::codec::{item_to_row, wishlist_to_row};
use wishlist_core::storage::keys::{PARTITION_KEY, SORT_KEY};
use wishlist_core::storage::Row;
use wishlist_core::wishlist::{new_id, Item, ItemFields, Wishlist};

/// `BatchWriteItem` accepts at most 25 requests.
const BATCH_SIZE: usize = 25;
const MAX_BATCH_ATTEMPTS: u32 = 5;

const LIST_NAMES: [&str; 5] = ["Birthday", "Holidays", "Housewarming", "Books", "Camping"];

const ITEMS: [(&str, Option<&str>, Option<&str>); 8] = [
    ("Noise-cancelling headphones", Some("https://example.com/headphones"), Some("249.99")),
    ("Cast iron skillet", None, Some("39.00")),
    ("Board game night set", Some("https://example.com/games"), None),
    ("Hardcover notebook", None, None),
    ("Espresso machine", Some("https://example.com/espresso"), Some("499")),
    ("Hiking socks", None, Some("about 20")),
    ("Houseplant", None, None),
    ("Concert tickets", Some("https://example.com/tickets"), None),
];

/// A generated list together with its items.
#[derive(Debug, Clone)]
pub struct SeedList {
    pub wishlist: Wishlist,
    pub items: Vec<Item>,
}

/// Generate demo lists for `owner`. Pure apart from id generation.
pub fn generate_seed_lists(owner: &str, lists: u32, items_per_list: u32) -> Vec<SeedList> {
    (0..lists as usize)
        .map(|i| {
            let name = match i / LIST_NAMES.len() {
                0 => LIST_NAMES[i].to_string(),
                round => format!("{} {}", LIST_NAMES[i % LIST_NAMES.len()], round + 1),
            };
            let items = (0..items_per_list as usize)
                .map(|j| {
                    let (description, url, price) = ITEMS[(i + j) % ITEMS.len()];
                    let mut fields = ItemFields::new(description);
                    if let Some(url) = url {
                        fields = fields.with_url(url);
                    }
                    if let Some(price) = price {
                        fields = fields.with_price(price);
                    }
                    Item::from_fields(new_id(), fields)
                })
                .collect();

            SeedList {
                wishlist: Wishlist::new(new_id(), name, owner),
                items,
            }
        })
        .collect()
}

/// All rows to write for the generated lists, list rows first.
pub fn seed_rows(lists: &[SeedList]) -> Vec<Row> {
    lists
        .iter()
        .flat_map(|list| {
            std::iter::once(wishlist_to_row(&list.wishlist)).chain(
                list.items
                    .iter()
                    .map(|item| item_to_row(&list.wishlist.id, item)),
            )
        })
        .collect()
}

fn row_to_item(row: &Row) -> HashMap<String, AttributeValue> {
    let mut item: HashMap<String, AttributeValue> = row
        .attributes
        .iter()
        .map(|(name, value)| (name.clone(), AttributeValue::S(value.clone())))
        .collect();
    item.insert(
        PARTITION_KEY.to_string(),
        AttributeValue::S(row.key.pk.clone()),
    );
    item.insert(SORT_KEY.to_string(), AttributeValue::S(row.key.sk.clone()));
    item
}

/// Write rows with `BatchWriteItem`, resending whatever DynamoDB leaves in
/// `UnprocessedItems` until the batch is drained or the attempts run out.
pub async fn write_rows(client: &Client, table_name: &str, rows: &[Row]) -> Result<usize> {
    let mut written = 0;

    for chunk in rows.chunks(BATCH_SIZE) {
        let mut pending = chunk
            .iter()
            .map(|row| {
                let put = PutRequest::builder()
                    .set_item(Some(row_to_item(row)))
                    .build()
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
                Ok(WriteRequest::builder().put_request(put).build())
            })
            .collect::<Result<Vec<_>>>()?;

        for attempt in 1..=MAX_BATCH_ATTEMPTS {
            let output = client
                .batch_write_item()
                .request_items(table_name, std::mem::take(&mut pending))
                .send()
                .await
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            pending = unprocessed_requests(output.unprocessed_items, table_name);
            if pending.is_empty() || attempt == MAX_BATCH_ATTEMPTS {
                break;
            }
            tokio::time::sleep(retry_delay(attempt)).await;
        }

        if !pending.is_empty() {
            let written = written + chunk.len() - pending.len();
            return Err(DynamodbError::UnwrittenRows {
                written,
                unwritten: rows.len() - written,
            });
        }
        written += chunk.len();
    }

    Ok(written)
}

/// Requests DynamoDB returned unprocessed for `table_name`.
fn unprocessed_requests(
    unprocessed: Option<HashMap<String, Vec<WriteRequest>>>,
    table_name: &str,
) -> Vec<WriteRequest> {
    unprocessed
        .and_then(|mut tables| tables.remove(table_name))
        .unwrap_or_default()
}

/// Exponential backoff between batch attempts: 100ms, 200ms, 400ms, ...
fn retry_delay(attempt: u32) -> Duration {
    Duration::from_millis(100 * 2u64.pow(attempt.saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist_core::storage::codec::{row_to_item as decode_item, row_to_wishlist};

    #[test]
    fn test_generate_seed_lists_counts_and_owner() {
        let lists = generate_seed_lists("a@x.com", 7, 3);
        assert_eq!(lists.len(), 7);
        assert!(lists.iter().all(|l| l.items.len() == 3));
        assert!(lists.iter().all(|l| l.wishlist.owner == "a@x.com"));
        assert_eq!(lists[0].wishlist.name, "Birthday");
        assert_eq!(lists[5].wishlist.name, "Birthday 2");
    }

    #[test]
    fn test_seed_rows_decode_through_core_codecs() {
        let lists = generate_seed_lists("a@x.com", 1, 2);
        let rows = seed_rows(&lists);
        assert_eq!(rows.len(), 3);

        let wishlist = row_to_wishlist(&rows[0]).unwrap();
        assert_eq!(wishlist, lists[0].wishlist);

        let item = decode_item(&rows[1]).unwrap();
        assert_eq!(item, lists[0].items[0]);
    }

    fn put(pk: &str) -> WriteRequest {
        let item = HashMap::from([
            ("pk".to_string(), AttributeValue::S(pk.to_string())),
            ("sk".to_string(), AttributeValue::S("wishlist_1".to_string())),
        ]);
        WriteRequest::builder()
            .put_request(PutRequest::builder().set_item(Some(item)).build().unwrap())
            .build()
    }

    #[test]
    fn test_unprocessed_requests_for_table() {
        let unprocessed = HashMap::from([
            ("wishlist".to_string(), vec![put("a@x.com"), put("b@x.com")]),
            ("other".to_string(), vec![put("c@x.com")]),
        ]);

        let pending = unprocessed_requests(Some(unprocessed), "wishlist");

        assert_eq!(pending, vec![put("a@x.com"), put("b@x.com")]);
    }

    #[test]
    fn test_no_unprocessed_requests() {
        assert!(unprocessed_requests(None, "wishlist").is_empty());
        assert!(unprocessed_requests(Some(HashMap::new()), "wishlist").is_empty());
    }

    #[test]
    fn test_retry_delay_doubles() {
        assert_eq!(retry_delay(1), Duration::from_millis(100));
        assert_eq!(retry_delay(2), Duration::from_millis(200));
        assert_eq!(retry_delay(4), Duration::from_millis(800));
    }

    #[test]
    fn test_unwritten_rows_error_names_counts() {
        let err = DynamodbError::UnwrittenRows {
            written: 25,
            unwritten: 3,
        };
        assert_eq!(
            err.to_string(),
            "3 rows were left unwritten after retries (25 written)"
        );
    }

    #[test]
    fn test_row_to_item_carries_keys() {
        let lists = generate_seed_lists("a@x.com", 1, 0);
        let rows = seed_rows(&lists);
        let item = row_to_item(&rows[0]);
        assert_eq!(
            item.get("pk"),
            Some(&AttributeValue::S("a@x.com".to_string()))
        );
        assert!(item.contains_key("sk"));
        assert!(item.contains_key("name"));
    }
}
