use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum character count for a comment to carry any signal.
pub const MIN_COMMENT_CHARS: usize = 5;

/// Patterns describing low-information comments, matched against text that
/// has already been canonicalized (lowercase, no diacritics, no punctuation).
///
/// This list is a frozen business rule: the downstream classifier was trained
/// against a corpus filtered with exactly these patterns, so any edit here
/// silently skews its inputs.
pub const NOISE_PATTERNS: [&str; 7] = [
    r"^solo califica",
    r"^no (?:brinda|proporciona|quiso|tiene|contesta)",
    r"^sin comentarios?$",
    r"^ningun[ao]s?$",
    r"^\d+cm$",
    r"^se envia whatsapp$",
    r"^(?:bdc|ok|na|s c)$",
];

static NOISE_FILTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&NOISE_PATTERNS.join("|")).expect("noise patterns must compile"));

/// Predicate deciding whether a canonicalized comment is worth keeping.
pub struct RelevanceFilter;

impl RelevanceFilter {
    /// A comment is relevant only if it is long enough AND matches none of
    /// the noise patterns. Both checks are independent; failing either one
    /// rejects the comment.
    pub fn is_relevant(text: &str) -> bool {
        text.chars().count() >= MIN_COMMENT_CHARS && !NOISE_FILTER.is_match(text)
    }
}
