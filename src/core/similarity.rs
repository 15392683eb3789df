//! Edit-distance based name similarity.

use crate::core::normalize::normalize_recipe_name;

/// Threshold applied against a user's own collection.
pub const USER_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Stricter threshold used when curating the shared global catalog.
pub const GLOBAL_SIMILARITY_THRESHOLD: f64 = 0.9;

/// Classic Levenshtein distance (insert, delete, substitute; unit cost) over chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Length-normalized similarity in `[0, 1]`.
///
/// Equal strings score `1.0`; an empty string against a non-empty one
/// scores `0.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    let (longer, shorter) = if a_len >= b_len { (a, b) } else { (b, a) };
    let max_len = a_len.max(b_len) as f64;
    (max_len - levenshtein_distance(longer, shorter) as f64) / max_len
}

/// Whether two recipe names refer to the same drink at the given threshold.
///
/// Names are normalized first; identical normalized forms match without
/// computing a distance.
pub fn are_names_similar(name1: &str, name2: &str, threshold: f64) -> bool {
    let normalized1 = normalize_recipe_name(name1);
    let normalized2 = normalize_recipe_name(name2);

    if normalized1 == normalized2 {
        return true;
    }

    similarity(&normalized1, &normalized2) >= threshold
}
