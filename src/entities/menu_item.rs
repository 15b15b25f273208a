use serde::{Deserialize, Serialize};

/// One purchasable dish from the catalog. Loaded once at startup,
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: u32, //whole rubles, no kopecks anywhere in the menu
    pub image: String,
    pub category: String,
}
