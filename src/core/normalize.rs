//! Recipe title canonicalization.

use regex::Regex;
use std::sync::LazyLock;

static APOSTROPHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['`\u{2018}\u{2019}\u{201B}\u{00B4}\u{02BC}]").expect("valid regex"));
static NON_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s']").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:the|a|an)\s+").expect("valid regex"));

/// Canonical form of a recipe name used for every name comparison.
///
/// Lowercases, folds apostrophe variants into `'`, drops every other
/// punctuation character, collapses whitespace and finally strips leading
/// `the` / `a` / `an` tokens. Articles are stripped last, and repeatedly, so
/// that the result is a fixed point: `normalize(normalize(x)) == normalize(x)`.
///
/// ```
/// # use recipe_dedup::core::normalize_recipe_name;
/// assert_eq!(normalize_recipe_name("The Manhattan"), "manhattan");
/// assert_eq!(normalize_recipe_name("  Bee’s   Knees! "), "bee's knees");
/// ```
pub fn normalize_recipe_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let apostrophes = APOSTROPHES.replace_all(&lowered, "'");
    let stripped = NON_NAME_CHARS.replace_all(&apostrophes, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");

    let mut normalized = collapsed.trim();
    while let Some(article) = LEADING_ARTICLE.find(normalized) {
        normalized = &normalized[article.end()..];
    }
    normalized.to_string()
}
