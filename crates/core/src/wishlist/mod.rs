mod error;
mod ids;
mod operations;
mod requests;
mod types;

pub use error::WishlistError;
pub use ids::new_id;
pub use operations::{non_empty, validate_item_request, validate_wishlist_name};
pub use requests::{CreateWishlistRequest, ItemRequest, UpdateWishlistRequest};
pub use types::{Item, ItemFields, Wishlist};
