// Adapters layer: concrete RecipeStorage implementations.

pub mod json_catalog;
pub mod memory;

pub use json_catalog::{JsonCatalogStorage, RecipeCatalog};
pub use memory::InMemoryRecipeStorage;
