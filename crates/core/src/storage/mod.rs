mod cascade;
pub mod codec;
mod error;
mod http_mapping;
pub mod keys;
mod ownership;
mod rows;
mod traits;

pub use cascade::{CascadeDelete, CascadeProgress, CascadeStep};
pub use error::{KeyError, Result, StoreError};
pub use http_mapping::store_error_to_status_code;
pub use ownership::{ensure_owner, require_owned, OwnerCheck};
pub use rows::{AttributeEdit, Row, RowKey, SortKeyCondition, UpdateCondition};
pub use traits::KeyValueBackend;
