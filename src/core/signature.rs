//! Order- and quantity-insensitive ingredient fingerprints.
//!
//! A signature is a soft duplicate hint: two unrelated ingredient sets can
//! collide on the hash and that is accepted, never treated as an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Signature of an ingredient list with no significant words.
///
/// Never counts as a match, not even against itself.
pub const EMPTY_SIGNATURE: &str = "empty";

const SIGNATURE_PREFIX: &str = "rsig_";

// Signatures follow the web client's regex semantics: ASCII word characters,
// ASCII digits and ECMAScript whitespace. Non-ASCII letters are dropped.
const ECMA_SPACE: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid regex"));
static MEASURE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?-u:\b)(?:oz|ml|cl|dash|dashes|splash|drop|drops|tsp|tbsp|bar[{ECMA_SPACE}]*spoon|cup|slices?|wedges?|wheels?|twists?|sprigs?|leaf|leaves|pieces?|inch|cm|fresh|chilled|cold|hot|warm)(?-u:\b)"
    ))
    .expect("valid regex")
});
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"[^A-Za-z0-9_{ECMA_SPACE}]")).expect("valid regex"));
static SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"[{ECMA_SPACE}]+")).expect("valid regex"));

/// Hash applied to the canonical ingredient string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureScheme {
    /// `hash * 31 + code_unit` over UTF-16 code units, wrapped to `i32`.
    /// Together with the ASCII-only line reduction this yields the same
    /// signatures the web app already stored.
    #[default]
    Rolling32,
    /// 64-bit FNV-1a over UTF-8 bytes, for a lower collision rate.
    Fnv1a64,
}

impl SignatureScheme {
    pub fn signature<S: AsRef<str>>(&self, ingredients: &[S]) -> String {
        let mut lines: Vec<String> = ingredients
            .iter()
            .map(|line| normalize_ingredient(line.as_ref()))
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return EMPTY_SIGNATURE.to_string();
        }

        lines.sort();
        let canonical = lines.join("|");
        format!("{}{}", SIGNATURE_PREFIX, self.hash_hex(&canonical))
    }

    fn hash_hex(&self, canonical: &str) -> String {
        match self {
            Self::Rolling32 => {
                let hash = canonical.encode_utf16().fold(0i32, |hash, unit| {
                    hash.wrapping_shl(5)
                        .wrapping_sub(hash)
                        .wrapping_add(i32::from(unit))
                });
                format!("{:x}", hash.unsigned_abs())
            }
            Self::Fnv1a64 => {
                const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
                const PRIME: u64 = 0x0000_0100_0000_01b3;
                let hash = canonical
                    .bytes()
                    .fold(OFFSET_BASIS, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME));
                format!("{:x}", hash)
            }
        }
    }
}

/// Reduce one ingredient line to its sorted significant words.
///
/// Quantities, units and serving descriptors are dropped, as is any word of
/// two characters or fewer. Only ASCII letters, digits and `_` survive, so
/// `"Crème de Cassis"` reduces to `"cassis crme"`.
pub fn normalize_ingredient(line: &str) -> String {
    let lowered = line.to_lowercase();
    let without_numbers = NUMBERS.replace_all(&lowered, "");
    let without_units = MEASURE_WORDS.replace_all(&without_numbers, "");
    let cleaned = NON_WORD.replace_all(&without_units, "");

    let mut words: Vec<&str> = SPACES
        .split(&cleaned)
        .filter(|word| word.len() > 2)
        .collect();
    words.sort_unstable();
    words.join(" ")
}

/// Fingerprint of an ingredient list using the default [`SignatureScheme`].
///
/// ```
/// # use recipe_dedup::core::compute_recipe_signature;
/// assert_eq!(
///     compute_recipe_signature(&["2oz Gin", "1oz Lime Juice"]),
///     compute_recipe_signature(&["1oz Lime Juice", "2oz Gin"]),
/// );
/// assert_eq!(compute_recipe_signature::<&str>(&[]), "empty");
/// ```
pub fn compute_recipe_signature<S: AsRef<str>>(ingredients: &[S]) -> String {
    SignatureScheme::default().signature(ingredients)
}

/// Two signatures match when equal and neither is [`EMPTY_SIGNATURE`].
pub fn signatures_match(a: &str, b: &str) -> bool {
    a == b && a != EMPTY_SIGNATURE
}
