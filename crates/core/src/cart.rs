//! The guest's order in progress.
//!
//! A [`CartLine`] holds a snapshot of the menu item taken when it was added,
//! so later menu edits never change what is already in the cart. Adding the
//! same dish twice produces two lines; there is no quantity field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::menu::MenuItem;
use crate::types::{CartLineId, IdSequence, Price};

/// One dish in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    /// Copy of the menu item at the time it was added.
    pub item: MenuItem,
}

impl CartLine {
    /// Price of this line.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.item.price
    }
}

/// Ordered, in-memory list of cart lines.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    ids: IdSequence,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `item` and return the new line's ID.
    pub fn add(&mut self, item: &MenuItem) -> CartLineId {
        let id = self.ids.next_cart_line();
        debug!(line = %id, item = %item.id, name = %item.name, "added to order");
        self.lines.push(CartLine {
            id,
            item: item.clone(),
        });
        id
    }

    /// Empty the cart, returning the lines it held.
    pub fn clear(&mut self) -> Vec<CartLine> {
        let lines = std::mem::take(&mut self.lines);
        debug!(count = lines.len(), "cart cleared");
        lines
    }

    /// All lines, in the order they were added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of all line prices.
    #[must_use]
    pub fn total(&self) -> Price {
        crate::summary::cart_total(&self.lines)
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Confirmation handed back when an order is placed.
///
/// Receipts are returned to the caller only; nothing keeps an order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Reference the guest can quote to staff.
    pub reference: Uuid,
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub placed_at: DateTime<Utc>,
}

impl OrderReceipt {
    /// Build a receipt for the given lines, stamped now.
    #[must_use]
    pub fn new(lines: Vec<CartLine>) -> Self {
        let total = crate::summary::cart_total(&lines);
        Self {
            reference: Uuid::new_v4(),
            lines,
            total,
            placed_at: Utc::now(),
        }
    }
}
