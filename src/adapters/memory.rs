use crate::core::{ExistingRecipe, RecipeStorage, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Collections {
    users: HashMap<String, Vec<ExistingRecipe>>,
    global: Vec<ExistingRecipe>,
}

/// Process-local recipe store. Clones share the same collections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeStorage {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryRecipeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        users: HashMap<String, Vec<ExistingRecipe>>,
        global: Vec<ExistingRecipe>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections { users, global })),
        }
    }

    pub async fn add_user_recipe(&self, user_id: &str, recipe: ExistingRecipe) {
        let mut collections = self.inner.write().await;
        collections
            .users
            .entry(user_id.to_string())
            .or_default()
            .push(recipe);
    }

    pub async fn add_global_recipe(&self, recipe: ExistingRecipe) {
        self.inner.write().await.global.push(recipe);
    }
}

/// Case-insensitive exact comparison on trimmed names.
pub(crate) fn same_recipe_name(stored: &str, requested: &str) -> bool {
    stored.trim().to_lowercase() == requested.trim().to_lowercase()
}

#[async_trait]
impl RecipeStorage for InMemoryRecipeStorage {
    async fn user_has_recipe_by_name(&self, user_id: &str, name: &str) -> Result<bool> {
        let collections = self.inner.read().await;
        Ok(collections
            .users
            .get(user_id)
            .is_some_and(|recipes| recipes.iter().any(|r| same_recipe_name(&r.name, name))))
    }

    async fn get_user_recipes(&self, user_id: &str) -> Result<Vec<ExistingRecipe>> {
        let collections = self.inner.read().await;
        Ok(collections.users.get(user_id).cloned().unwrap_or_default())
    }

    async fn get_all_global_recipes(&self) -> Result<Vec<ExistingRecipe>> {
        Ok(self.inner.read().await.global.clone())
    }
}
