use tracing::debug;

use crate::entities::{CartItem, MenuItem};

/// In-memory cart for a single session. Lines are kept in the order the
/// items were first added; repeat adds and quantity updates change a line
/// in place without moving it. Nothing here can fail: every id/quantity
/// combination has a defined outcome.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> CartStore {
        CartStore { items: Vec::new() }
    }

    /// Adds one of `item`. An existing line for the same id gets its
    /// quantity bumped in place, otherwise a new line with quantity 1 is
    /// appended at the end.
    pub fn add_to_cart(&mut self, item: &MenuItem) {
        if let Some(entry) = self.items.iter_mut().find(|entry| entry.item.id == item.id) {
            entry.quantity += 1;
            debug!(id = item.id, quantity = entry.quantity, "Bumped cart line");
            return;
        }
        self.items.push(CartItem::new(item.clone()));
        debug!(id = item.id, "Added cart line");
    }

    /// Removes the line with the given id. Absent id is a no-op, not an
    /// error.
    pub fn remove_from_cart(&mut self, id: i32) {
        self.items.retain(|entry| entry.item.id != id);
    }

    /// Sets the quantity of the line with the given id, keeping its
    /// position. Quantity 0 removes the line instead, same as
    /// `remove_from_cart`. An absent id is a no-op: this path never
    /// creates a new line.
    pub fn update_quantity(&mut self, id: i32, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(entry) = self.items.iter_mut().find(|entry| entry.item.id == id) {
            entry.quantity = quantity;
        }
    }

    /// Sum of `price * quantity` over every line. 0 for an empty cart.
    pub fn total_price(&self) -> u64 {
        self.items.iter().map(|entry| entry.line_price()).sum()
    }

    /// Sum of quantities over every line. 0 for an empty cart.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|entry| entry.quantity).sum()
    }

    /// Lines in first-add order, for rendering.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
