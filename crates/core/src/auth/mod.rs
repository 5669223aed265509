mod error;
mod functions;
mod traits;
mod types;

pub use error::AuthError;
pub use functions::{owner_identity, parse_bearer_token};
pub use traits::{IdentityProvider, Result};
pub use types::Profile;
