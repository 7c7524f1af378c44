//! Deterministic, human-friendly slug derivation.
//!
//! Slugs are derived from entry titles: lower-cased, whitespace collapsed to
//! single hyphens, non-word characters stripped. Derivation is idempotent, so
//! an already-derived slug passes through unchanged. Uniqueness is a catalog
//! concern and deliberately not checked here.

use slug::slugify;
use thiserror::Error;

/// Errors that can occur while deriving a slug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Derive a slug from the provided human-readable text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(input);
    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Whether `slug` still tracks `title`, i.e. equals the slug `title` would
/// derive to. Editors re-derive a tracking slug when the title changes and
/// leave a manually diverged slug alone.
pub fn tracks_title(slug: &str, title: &str) -> bool {
    match derive_slug(title) {
        Ok(derived) => slug == derived,
        // An empty or unrepresentable title derives nothing; an empty slug
        // still counts as tracking it.
        Err(_) => slug.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_lowercase_hyphenated_slugs() {
        assert_eq!(
            derive_slug("Midnight Harbor").expect("slug"),
            "midnight-harbor"
        );
        assert_eq!(
            derive_slug("  The  Long   Road! ").expect("slug"),
            "the-long-road"
        );
    }

    #[test]
    fn strips_non_word_characters_and_collapses_hyphens() {
        assert_eq!(
            derive_slug("What's Up -- Doc?").expect("slug"),
            "what-s-up-doc"
        );
    }

    #[test]
    fn derivation_is_idempotent() {
        for input in ["Midnight Harbor", "a  b  c", "Season 5", "x"] {
            let once = derive_slug(input).expect("slug");
            let twice = derive_slug(&once).expect("slug");
            assert_eq!(once, twice, "slugify(slugify({input:?}))");
        }
    }

    #[test]
    fn rejects_empty_and_unrepresentable_input() {
        assert_eq!(derive_slug("   "), Err(SlugError::EmptyInput));
        assert!(matches!(
            derive_slug("!!!"),
            Err(SlugError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn tracking_follows_the_derived_slug_only() {
        assert!(tracks_title("midnight-harbor", "Midnight Harbor"));
        assert!(!tracks_title("custom-slug", "Midnight Harbor"));
        assert!(tracks_title("", ""));
    }
}
