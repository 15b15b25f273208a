pub mod cart;
pub mod catalog;

pub use cart::CartStore;
pub use catalog::{Catalog, CatalogError, ALL_CATEGORY};
