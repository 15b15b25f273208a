pub mod cart_item;
pub mod menu_item;

pub use cart_item::CartItem;
pub use menu_item::MenuItem;
