//! Turning user-supplied names into normalized Arabic text.

use abjad_model::{AbjadError, NormalizationOptions, Result, Script, Transliteration};
use abjad_normalization::{detect_script, normalize, transliterate};

/// A name ready for valuation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedName {
    pub normalized: String,
    /// Set when the name was written in Latin script.
    pub transliteration: Option<Transliteration>,
}

impl ResolvedName {
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Normalize `raw`, transliterating it first when it is Latin script.
pub fn resolve_name(raw: &str, options: &NormalizationOptions) -> ResolvedName {
    match detect_script(raw) {
        Script::Latin => {
            let transliteration = transliterate(raw);
            let normalized = normalize(&transliteration.primary, options);
            ResolvedName {
                normalized,
                transliteration: Some(transliteration),
            }
        }
        Script::Arabic | Script::Mixed | Script::Unknown => ResolvedName {
            normalized: normalize(raw, options),
            transliteration: None,
        },
    }
}

/// Like [`resolve_name`], but a name without any usable letter is an error.
pub fn require_name(
    raw: &str,
    field: &str,
    options: &NormalizationOptions,
) -> Result<ResolvedName> {
    if raw.trim().is_empty() {
        return Err(AbjadError::invalid_input(field, "name is empty"));
    }
    let resolved = resolve_name(raw, options);
    if resolved.is_empty() {
        return Err(AbjadError::invalid_input(
            field,
            "name contains no Arabic letters after normalization",
        ));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_names_are_only_normalized() {
        let resolved = resolve_name("مُحَمَّد", &NormalizationOptions::default());
        assert_eq!(resolved.normalized, "محمد");
        assert!(resolved.transliteration.is_none());
    }

    #[test]
    fn latin_names_are_transliterated() {
        let resolved = resolve_name("Khadija", &NormalizationOptions::default());
        assert_eq!(resolved.normalized, "خديجه");
        assert_eq!(
            resolved.transliteration.map(|t| t.primary),
            Some("خديجة".to_string())
        );
    }

    #[test]
    fn blank_and_letterless_names_are_rejected() {
        let options = NormalizationOptions::default();
        assert_eq!(
            require_name("  ", "name", &options),
            Err(AbjadError::invalid_input("name", "name is empty"))
        );
        assert!(matches!(
            require_name("2024 ✨", "name", &options),
            Err(AbjadError::InvalidInput { .. })
        ));
    }
}
