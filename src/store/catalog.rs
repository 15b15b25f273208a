use std::path::Path;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::entities::MenuItem;

/// Pseudo-category used only by the filter: selects the whole menu.
/// It is never stored on an item.
pub const ALL_CATEGORY: &str = "Все";

/// The menu dataset that ships with the binary.
static BUILTIN_MENU: &str = include_str!("../../data/menu.json");

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(BUILTIN_MENU).expect("Built-in menu dataset must be valid")
});

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read menu file: {0}")]
    ReadFail(#[from] std::io::Error),
    #[error("Failed to parse menu dataset: {0}")]
    ParseFail(#[from] serde_json::Error),
    #[error("Duplicate menu item id {0}")]
    DuplicateId(i32),
    #[error("Menu item id {0} is not positive")]
    InvalidId(i32),
    #[error("Menu item {0} has zero price")]
    InvalidPrice(i32),
    #[error("Menu item {0} has an empty name or category")]
    EmptyField(i32),
}

/// The fixed, immutable set of purchasable menu items. Built once at
/// startup, validated on construction, read-only afterwards.
#[derive(Clone, Debug)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Validates and wraps a list of menu records. Order is kept as given,
    /// it is the order the menu renders in.
    pub fn from_records(items: Vec<MenuItem>) -> Result<Catalog, CatalogError> {
        let mut seen_ids: Vec<i32> = Vec::with_capacity(items.len());
        for item in &items {
            if item.id <= 0 {
                return Err(CatalogError::InvalidId(item.id));
            }
            if seen_ids.contains(&item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.price == 0 {
                return Err(CatalogError::InvalidPrice(item.id));
            }
            if item.name.trim().is_empty() || item.category.trim().is_empty() {
                return Err(CatalogError::EmptyField(item.id));
            }
            seen_ids.push(item.id);
        }
        Ok(Catalog { items })
    }

    pub fn from_json(raw: &str) -> Result<Catalog, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(raw)?;
        Catalog::from_records(items)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Catalog::from_json(&raw)
    }

    /// The dataset embedded in the binary: six dishes across three
    /// categories.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Pure filter: items whose category equals `category`, in catalog
    /// order. The `ALL_CATEGORY` sentinel returns the whole menu.
    pub fn filter_by_category(&self, category: &str) -> Vec<&MenuItem> {
        if category == ALL_CATEGORY {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Filter labels for the menu: `ALL_CATEGORY` first, then every
    /// distinct item category in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = vec![ALL_CATEGORY];
        for item in &self.items {
            if !labels.contains(&item.category.as_str()) {
                labels.push(item.category.as_str());
            }
        }
        labels
    }
}
