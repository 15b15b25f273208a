use serde::Serialize;

use crate::entities::menu_item::MenuItem;

/// One line of the cart: a menu item plus how many of it the user wants.
/// `quantity` is always at least 1; a line that would drop to 0 is removed
/// from the cart instead.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CartItem {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(item: MenuItem) -> CartItem {
        CartItem { item, quantity: 1 }
    }

    /// Price of this line alone, `price * quantity`.
    pub fn line_price(&self) -> u64 {
        self.item.price as u64 * self.quantity as u64
    }
}
