use serde::{Deserialize, Serialize};

/// Recipe being checked. Supplied per call and never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl RecipeCandidate {
    pub fn new(name: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }
}

/// Read-only snapshot of a stored recipe as returned by a [`RecipeStorage`].
///
/// A missing `ingredients` field deserializes to an empty list.
///
/// [`RecipeStorage`]: crate::domain::ports::RecipeStorage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl ExistingRecipe {
    pub fn new(id: Option<i64>, name: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeOrigin {
    User,
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateType {
    ExactName,
    SimilarName,
    SameIngredients,
    GlobalRecipe,
}

/// The `existingRecipe` payload of a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub origin: RecipeOrigin,
}

impl RecipeRef {
    pub fn from_existing(recipe: &ExistingRecipe, origin: RecipeOrigin) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            origin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateVerdict {
    pub is_duplicate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_type: Option<DuplicateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_recipe: Option<RecipeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DuplicateVerdict {
    pub fn not_duplicate() -> Self {
        Self::default()
    }

    pub fn duplicate(
        duplicate_type: DuplicateType,
        existing_recipe: Option<RecipeRef>,
        message: String,
    ) -> Self {
        Self {
            is_duplicate: true,
            duplicate_type: Some(duplicate_type),
            existing_recipe,
            message: Some(message),
        }
    }
}
