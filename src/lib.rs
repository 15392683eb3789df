pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{InMemoryRecipeStorage, JsonCatalogStorage};
pub use crate::config::TomlConfig;
pub use crate::core::{
    are_names_similar, check_for_duplicates, check_global_duplicate, compute_recipe_signature,
    normalize_recipe_name, DetectionSettings, DuplicateDetector, DuplicateType, DuplicateVerdict,
    ExistingRecipe, RecipeCandidate, RecipeOrigin, RecipeRef, RecipeStorage, SignatureScheme,
};
pub use crate::utils::error::{DedupError, Result};
