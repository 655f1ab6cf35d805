use serde_json::Value;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes free-text comments.
///
/// Steps, in order: lowercase, Unicode canonical decomposition with all
/// combining marks removed (strips diacritics, keeps base letters),
/// punctuation replaced by spaces, whitespace runs collapsed and trimmed.
/// Returns `None` for non-textual input and for text that is empty before or
/// after cleaning; an empty comment is never a valid zero-length string.
pub struct TextNormalizer;

impl TextNormalizer {
    /// Cleans a raw cell token. Only string cells are textual; numbers,
    /// booleans, and structured values are rejected outright.
    pub fn normalize_token(token: Option<&Value>) -> Option<String> {
        match token {
            Some(Value::String(s)) => Self::normalize(s),
            _ => None,
        }
    }

    pub fn normalize(text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let lowered = text.to_lowercase();

        let stripped: String = lowered
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect();

        let spaced: String = stripped
            .chars()
            .map(|c| if is_punctuation(c) { ' ' } else { c })
            .collect();

        let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
        (!collapsed.is_empty()).then_some(collapsed)
    }
}

/// ASCII punctuation plus the inverted marks of Spanish orthography.
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || c == '¡' || c == '¿'
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_spanish_comment() {
        assert_eq!(
            TextNormalizer::normalize("¡Excelente Servicio! Me gustó mucho."),
            Some("excelente servicio me gusto mucho".to_string())
        );
    }

    #[test]
    fn strips_diacritics_but_keeps_base_letters() {
        assert_eq!(
            TextNormalizer::normalize("café con atención"),
            Some("cafe con atencion".to_string())
        );
    }

    #[test]
    fn collapses_newlines_tabs_and_space_runs() {
        assert_eq!(
            TextNormalizer::normalize("  muy \t bueno \n\n todo  "),
            Some("muy bueno todo".to_string())
        );
    }

    #[test]
    fn empty_and_blank_input_is_rejected() {
        assert_eq!(TextNormalizer::normalize(""), None);
        assert_eq!(TextNormalizer::normalize("   \n\t "), None);
    }

    #[test]
    fn punctuation_only_input_collapses_to_nothing() {
        assert_eq!(TextNormalizer::normalize("!!! ... ???"), None);
    }

    #[test]
    fn non_textual_tokens_are_rejected() {
        assert_eq!(TextNormalizer::normalize_token(Some(&json!(5))), None);
        assert_eq!(TextNormalizer::normalize_token(Some(&json!(true))), None);
        assert_eq!(TextNormalizer::normalize_token(None), None);
    }

    #[test]
    fn textual_tokens_pass_through_the_same_rules() {
        assert_eq!(
            TextNormalizer::normalize_token(Some(&json!("Pesimo trato, muy lento"))),
            Some("pesimo trato muy lento".to_string())
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "¡Excelente Servicio! Me gustó mucho.",
            "café\n con,, atención",
            "ya normalizado sin cambios",
            "ñoño añejo",
        ];
        for raw in samples {
            let once = TextNormalizer::normalize(raw).unwrap();
            let twice = TextNormalizer::normalize(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn output_never_contains_punctuation_or_combining_marks() {
        let cleaned = TextNormalizer::normalize("¿Qué tal? ¡Bien!  (creo)...").unwrap();
        assert!(cleaned.chars().all(|c| !is_punctuation(c)));
        assert!(cleaned.chars().all(|c| !is_combining_mark(c)));
    }
}
