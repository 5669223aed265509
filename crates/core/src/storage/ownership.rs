//! Ownership rules for mutating operations.
//!
//! Items carry no owner, so every item mutation is authorized through the
//! parent list.

use crate::wishlist::Wishlist;

use super::{Result, StoreError};

/// Whether a mutation must verify that the caller owns the parent list.
///
/// `Skip` is for internal callers that have already checked ownership, such
/// as a cascade delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerCheck {
    Enforce,
    Skip,
}

/// Fails with `AccessDenied` unless `owner` owns the list.
pub fn ensure_owner(wishlist: &Wishlist, owner: &str) -> Result<()> {
    if wishlist.is_owned_by(owner) {
        Ok(())
    } else {
        Err(StoreError::AccessDenied {
            list_id: wishlist.id.clone(),
        })
    }
}

/// Resolves a looked-up list for a mutation.
///
/// An absent list is `NotFound`; a list owned by someone else is
/// `AccessDenied`.
pub fn require_owned(wishlist: Option<Wishlist>, list_id: &str, owner: &str) -> Result<Wishlist> {
    let wishlist = wishlist.ok_or_else(|| StoreError::wishlist_not_found(list_id))?;
    ensure_owner(&wishlist, owner)?;
    Ok(wishlist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birthday() -> Wishlist {
        Wishlist::new("l1", "Birthday", "a@x.com")
    }

    #[test]
    fn test_owner_passes() {
        assert!(ensure_owner(&birthday(), "a@x.com").is_ok());
    }

    #[test]
    fn test_other_identity_is_denied() {
        assert_eq!(
            ensure_owner(&birthday(), "b@x.com"),
            Err(StoreError::AccessDenied {
                list_id: "l1".to_string()
            })
        );
    }

    #[test]
    fn test_owner_comparison_is_exact() {
        assert!(ensure_owner(&birthday(), "A@x.com").is_err());
    }

    #[test]
    fn test_require_owned_missing_list() {
        assert_eq!(
            require_owned(None, "l1", "a@x.com"),
            Err(StoreError::wishlist_not_found("l1"))
        );
    }

    #[test]
    fn test_require_owned_returns_list() {
        assert_eq!(
            require_owned(Some(birthday()), "l1", "a@x.com").unwrap(),
            birthday()
        );
    }
}
