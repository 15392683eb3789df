use crate::domain::model::ExistingRecipe;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side of the recipe store consulted by the duplicate detector.
///
/// Implementations own consistency; the detector only reads and surfaces
/// their errors as-is.
#[async_trait]
pub trait RecipeStorage: Send + Sync {
    /// Whether the user already owns a recipe with exactly this name.
    async fn user_has_recipe_by_name(&self, user_id: &str, name: &str) -> Result<bool>;

    async fn get_user_recipes(&self, user_id: &str) -> Result<Vec<ExistingRecipe>>;

    async fn get_all_global_recipes(&self) -> Result<Vec<ExistingRecipe>>;
}

#[async_trait]
impl<T: RecipeStorage + ?Sized> RecipeStorage for &T {
    async fn user_has_recipe_by_name(&self, user_id: &str, name: &str) -> Result<bool> {
        (**self).user_has_recipe_by_name(user_id, name).await
    }

    async fn get_user_recipes(&self, user_id: &str) -> Result<Vec<ExistingRecipe>> {
        (**self).get_user_recipes(user_id).await
    }

    async fn get_all_global_recipes(&self) -> Result<Vec<ExistingRecipe>> {
        (**self).get_all_global_recipes().await
    }
}
