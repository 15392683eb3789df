use crate::adapters::memory::same_recipe_name;
use crate::core::{ExistingRecipe, RecipeStorage, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// On-disk catalog layout:
/// `{"users": {"<user id>": [recipe, ...]}, "global": [recipe, ...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeCatalog {
    #[serde(default)]
    pub users: HashMap<String, Vec<ExistingRecipe>>,
    #[serde(default)]
    pub global: Vec<ExistingRecipe>,
}

/// Read-only storage backed by a JSON catalog file.
///
/// The file is re-read on every call so edits are picked up between checks.
#[derive(Debug, Clone)]
pub struct JsonCatalogStorage {
    path: PathBuf,
}

impl JsonCatalogStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<RecipeCatalog> {
        tracing::debug!("Reading recipe catalog from {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        let catalog = serde_json::from_slice(&data)?;
        Ok(catalog)
    }
}

#[async_trait]
impl RecipeStorage for JsonCatalogStorage {
    async fn user_has_recipe_by_name(&self, user_id: &str, name: &str) -> Result<bool> {
        let catalog = self.load().await?;
        Ok(catalog
            .users
            .get(user_id)
            .is_some_and(|recipes| recipes.iter().any(|r| same_recipe_name(&r.name, name))))
    }

    async fn get_user_recipes(&self, user_id: &str) -> Result<Vec<ExistingRecipe>> {
        let mut catalog = self.load().await?;
        Ok(catalog.users.remove(user_id).unwrap_or_default())
    }

    async fn get_all_global_recipes(&self) -> Result<Vec<ExistingRecipe>> {
        Ok(self.load().await?.global)
    }
}
