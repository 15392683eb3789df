use crate::core::normalize::normalize_recipe_name;
use crate::core::signature::{signatures_match, SignatureScheme, EMPTY_SIGNATURE};
use crate::core::similarity::{
    are_names_similar, GLOBAL_SIMILARITY_THRESHOLD, USER_SIMILARITY_THRESHOLD,
};
use crate::domain::model::{
    DuplicateType, DuplicateVerdict, ExistingRecipe, RecipeCandidate, RecipeOrigin, RecipeRef,
};
use crate::domain::ports::RecipeStorage;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionSettings {
    pub user_similarity_threshold: f64,
    pub global_similarity_threshold: f64,
    pub signature_scheme: SignatureScheme,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            user_similarity_threshold: USER_SIMILARITY_THRESHOLD,
            global_similarity_threshold: GLOBAL_SIMILARITY_THRESHOLD,
            signature_scheme: SignatureScheme::default(),
        }
    }
}

/// Classifies a candidate recipe against a user's collection and the global
/// catalog.
///
/// Checks run in a fixed precedence and stop at the first match, so later
/// storage reads are never issued once an earlier stage matched. Storage
/// errors are returned untouched.
pub struct DuplicateDetector<S: RecipeStorage> {
    storage: S,
    settings: DetectionSettings,
}

impl<S: RecipeStorage> DuplicateDetector<S> {
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, DetectionSettings::default())
    }

    pub fn with_settings(storage: S, settings: DetectionSettings) -> Self {
        Self { storage, settings }
    }

    pub fn settings(&self) -> &DetectionSettings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Precedence: exact name, similar user recipe, same ingredients in the
    /// user collection, then normalized name in the global catalog.
    pub async fn check_for_duplicates(
        &self,
        name: &str,
        ingredients: &[String],
        user_id: &str,
    ) -> Result<DuplicateVerdict> {
        tracing::debug!("Checking '{}' for duplicates (user {})", name, user_id);

        if self.storage.user_has_recipe_by_name(user_id, name).await? {
            tracing::info!("Duplicate '{}': exact name in user collection", name);
            return Ok(DuplicateVerdict::duplicate(
                DuplicateType::ExactName,
                None,
                format!("You already have a recipe named \"{}\"", name),
            ));
        }

        let user_recipes = self.storage.get_user_recipes(user_id).await?;
        tracing::debug!("Comparing against {} user recipes", user_recipes.len());

        if let Some(existing) = user_recipes
            .iter()
            .find(|recipe| are_names_similar(name, &recipe.name, self.settings.user_similarity_threshold))
        {
            tracing::info!("Duplicate '{}': similar to user recipe '{}'", name, existing.name);
            return Ok(DuplicateVerdict::duplicate(
                DuplicateType::SimilarName,
                Some(RecipeRef::from_existing(existing, RecipeOrigin::User)),
                format!("You have a similar recipe: \"{}\"", existing.name),
            ));
        }

        let signature = self.settings.signature_scheme.signature(ingredients);
        if let Some(existing) = self.find_same_ingredients(&signature, &user_recipes) {
            tracing::info!(
                "Duplicate '{}': same ingredients as user recipe '{}'",
                name,
                existing.name
            );
            return Ok(DuplicateVerdict::duplicate(
                DuplicateType::SameIngredients,
                Some(RecipeRef::from_existing(existing, RecipeOrigin::User)),
                format!(
                    "You have a recipe with the same ingredients: \"{}\"",
                    existing.name
                ),
            ));
        }

        let global_recipes = self.storage.get_all_global_recipes().await?;
        tracing::debug!("Comparing against {} global recipes", global_recipes.len());

        let normalized = normalize_recipe_name(name);
        if let Some(existing) = global_recipes
            .iter()
            .find(|recipe| normalize_recipe_name(&recipe.name) == normalized)
        {
            tracing::info!("Duplicate '{}': matches global recipe '{}'", name, existing.name);
            return Ok(DuplicateVerdict::duplicate(
                DuplicateType::GlobalRecipe,
                Some(RecipeRef {
                    id: existing.id,
                    name: existing.name.clone(),
                    origin: RecipeOrigin::Global,
                }),
                format!(
                    "\"{}\" already exists in the global recipe collection",
                    existing.name
                ),
            ));
        }

        tracing::debug!("'{}' is not a duplicate", name);
        Ok(DuplicateVerdict::not_duplicate())
    }

    /// Admin-curation variant: exact, similar (stricter threshold) and
    /// ingredient checks against the global catalog only.
    pub async fn check_global_duplicate(
        &self,
        name: &str,
        ingredients: &[String],
    ) -> Result<DuplicateVerdict> {
        tracing::debug!("Checking '{}' against the global catalog", name);

        let global_recipes = self.storage.get_all_global_recipes().await?;
        let normalized = normalize_recipe_name(name);

        if let Some(existing) = global_recipes
            .iter()
            .find(|recipe| normalize_recipe_name(&recipe.name) == normalized)
        {
            tracing::info!("Global duplicate '{}': exact name '{}'", name, existing.name);
            return Ok(DuplicateVerdict::duplicate(
                DuplicateType::ExactName,
                Some(RecipeRef::from_existing(existing, RecipeOrigin::Global)),
                format!("A global recipe named \"{}\" already exists", existing.name),
            ));
        }

        if let Some(existing) = global_recipes.iter().find(|recipe| {
            are_names_similar(name, &recipe.name, self.settings.global_similarity_threshold)
        }) {
            tracing::info!("Global duplicate '{}': similar to '{}'", name, existing.name);
            return Ok(DuplicateVerdict::duplicate(
                DuplicateType::SimilarName,
                Some(RecipeRef::from_existing(existing, RecipeOrigin::Global)),
                format!("A similar global recipe exists: \"{}\"", existing.name),
            ));
        }

        let signature = self.settings.signature_scheme.signature(ingredients);
        if let Some(existing) = self.find_same_ingredients(&signature, &global_recipes) {
            tracing::info!(
                "Global duplicate '{}': same ingredients as '{}'",
                name,
                existing.name
            );
            return Ok(DuplicateVerdict::duplicate(
                DuplicateType::SameIngredients,
                Some(RecipeRef::from_existing(existing, RecipeOrigin::Global)),
                format!(
                    "A global recipe with the same ingredients exists: \"{}\"",
                    existing.name
                ),
            ));
        }

        Ok(DuplicateVerdict::not_duplicate())
    }

    pub async fn check_candidate(
        &self,
        candidate: &RecipeCandidate,
        user_id: &str,
    ) -> Result<DuplicateVerdict> {
        self.check_for_duplicates(&candidate.name, &candidate.ingredients, user_id)
            .await
    }

    pub async fn check_global_candidate(
        &self,
        candidate: &RecipeCandidate,
    ) -> Result<DuplicateVerdict> {
        self.check_global_duplicate(&candidate.name, &candidate.ingredients)
            .await
    }

    fn find_same_ingredients<'a>(
        &self,
        signature: &str,
        recipes: &'a [ExistingRecipe],
    ) -> Option<&'a ExistingRecipe> {
        if signature == EMPTY_SIGNATURE {
            return None;
        }

        recipes
            .iter()
            .filter(|recipe| !recipe.ingredients.is_empty())
            .find(|recipe| {
                signatures_match(
                    signature,
                    &self.settings.signature_scheme.signature(&recipe.ingredients),
                )
            })
    }
}

/// [`DuplicateDetector::check_for_duplicates`] with default settings.
pub async fn check_for_duplicates<S: RecipeStorage + ?Sized>(
    name: &str,
    ingredients: &[String],
    user_id: &str,
    storage: &S,
) -> Result<DuplicateVerdict> {
    DuplicateDetector::new(storage)
        .check_for_duplicates(name, ingredients, user_id)
        .await
}

/// [`DuplicateDetector::check_global_duplicate`] with default settings.
pub async fn check_global_duplicate<S: RecipeStorage + ?Sized>(
    name: &str,
    ingredients: &[String],
    storage: &S,
) -> Result<DuplicateVerdict> {
    DuplicateDetector::new(storage)
        .check_global_duplicate(name, ingredients)
        .await
}
