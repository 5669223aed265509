//! Cascade delete planning.
//!
//! A list and the item rows under its partition form one aggregate. Deleting
//! it is a sequence of single-row deletes: every item first, the list row
//! last, so an interrupted cascade never leaves items without their list.

use crate::wishlist::Wishlist;

use super::{keys, KeyError, Row, RowKey};

/// One row deletion of a cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeStep {
    Item { list_id: String, item_id: String },
    Wishlist { owner: String, list_id: String },
}

impl CascadeStep {
    /// Primary key of the row this step deletes.
    pub fn key(&self) -> RowKey {
        match self {
            Self::Item { list_id, item_id } => keys::item_key(list_id, item_id),
            Self::Wishlist { owner, list_id } => keys::wishlist_key(owner, list_id),
        }
    }
}

/// The ordered row deletions that remove a list and its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeDelete {
    steps: Vec<CascadeStep>,
}

/// How far a cascade got before it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeProgress {
    pub completed: usize,
    pub remaining: usize,
}

impl CascadeDelete {
    /// Plans the deletion of `wishlist` given the rows of its item partition.
    ///
    /// Fails without planning anything if a row is not an item row.
    pub fn plan(wishlist: &Wishlist, item_rows: &[Row]) -> Result<Self, KeyError> {
        let mut steps = item_rows
            .iter()
            .map(|row| {
                keys::parse_item_sk(&row.key.sk).map(|item_id| CascadeStep::Item {
                    list_id: wishlist.id.clone(),
                    item_id,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        steps.push(CascadeStep::Wishlist {
            owner: wishlist.owner.clone(),
            list_id: wishlist.id.clone(),
        });

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[CascadeStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Progress after `completed` steps have succeeded.
    pub fn progress(&self, completed: usize) -> CascadeProgress {
        let completed = completed.min(self.steps.len());
        CascadeProgress {
            completed,
            remaining: self.steps.len() - completed,
        }
    }
}
