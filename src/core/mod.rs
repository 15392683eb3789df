pub mod detector;
pub mod normalize;
pub mod signature;
pub mod similarity;

pub use crate::domain::model::{
    DuplicateType, DuplicateVerdict, ExistingRecipe, RecipeCandidate, RecipeOrigin, RecipeRef,
};
pub use crate::domain::ports::RecipeStorage;
pub use crate::utils::error::Result;
pub use detector::{check_for_duplicates, check_global_duplicate, DetectionSettings, DuplicateDetector};
pub use normalize::normalize_recipe_name;
pub use signature::{compute_recipe_signature, SignatureScheme, EMPTY_SIGNATURE};
pub use similarity::{are_names_similar, levenshtein_distance, similarity};
