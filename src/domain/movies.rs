//! Catalog entries and the rules that govern saving and displaying them.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Characters of the description used as a fallback SEO description.
pub const DESCRIPTION_EXCERPT_CHARS: usize = 160;

/// One movie entry in the catalog document.
///
/// The id is opaque and stable for the lifetime of the entry; it is never
/// reused after deletion. The slug should be unique among active entries but
/// uniqueness is not enforced anywhere, so lookups by slug take the first
/// match in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieEntry {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub year: String,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    pub director: String,
    pub poster_url: String,
    pub description: String,
    pub trailer_url: String,
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_new_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_new_tab: Option<bool>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keywords: Option<String>,
}

impl MovieEntry {
    /// Save-time invariant: id, title and slug must all be non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_non_empty(&self.id, "id")?;
        ensure_non_empty(&self.title, "title")?;
        ensure_non_empty(&self.slug, "slug")?;
        Ok(())
    }

    /// Case-insensitive substring match against the title or any genre.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .genres
                .iter()
                .any(|genre| genre.to_lowercase().contains(&needle))
    }

    /// Whether the two entries share at least one genre.
    pub fn shares_genre(&self, other: &MovieEntry) -> bool {
        self.genres
            .iter()
            .any(|genre| other.genres.contains(genre))
    }

    /// SEO keyword chips: comma-split, trimmed, empties dropped.
    pub fn search_tags(&self) -> Vec<&str> {
        self.seo_keywords
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Storyline paragraphs: newline-split with blank lines dropped.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.description
            .split('\n')
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .collect()
    }

    /// Description excerpt used when no SEO description is set.
    pub fn description_excerpt(&self) -> String {
        self.description
            .chars()
            .take(DESCRIPTION_EXCERPT_CHARS)
            .collect()
    }
}

fn ensure_non_empty(value: &str, field: &'static str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Canonicalize a title: lower-case, then capitalize the first letter of
/// every whitespace-separated word.
pub fn title_case(input: &str) -> String {
    input
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a comma-separated operator input into a clean list.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample(id: &str, title: &str, genres: &[&str]) -> MovieEntry {
        MovieEntry {
            id: id.to_string(),
            slug: crate::domain::slug::derive_slug(title).unwrap_or_default(),
            title: title.to_string(),
            year: "2025".to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            cast: vec![],
            director: String::new(),
            poster_url: String::new(),
            description: String::new(),
            trailer_url: String::new(),
            download_url: "#".to_string(),
            download_new_tab: None,
            watch_url: None,
            watch_new_tab: None,
            is_active: true,
            seo_title: None,
            seo_description: None,
            seo_keywords: None,
        }
    }

    #[test]
    fn validate_requires_id_title_and_slug() {
        let mut entry = sample("m1", "Midnight Harbor", &[]);
        entry.validate().expect("valid entry");

        entry.title = "  ".to_string();
        assert_eq!(
            entry.validate(),
            Err(DomainError::validation("title is required"))
        );

        let mut entry = sample("m1", "Midnight Harbor", &[]);
        entry.slug = String::new();
        assert!(entry.validate().is_err());

        let mut entry = sample("m1", "Midnight Harbor", &[]);
        entry.id = String::new();
        assert!(entry.validate().is_err());
    }

    #[test]
    fn query_matches_title_or_genre_case_insensitively() {
        let entry = sample("m1", "Midnight Harbor", &["Thriller", "Drama"]);
        assert!(entry.matches_query("midnight"));
        assert!(entry.matches_query("THRILL"));
        assert!(entry.matches_query(""));
        assert!(!entry.matches_query("comedy"));
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("midnight harbor"), "Midnight Harbor");
        assert_eq!(title_case("THE LONG ROAD"), "The Long Road");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn search_tags_split_and_trim() {
        let mut entry = sample("m1", "Midnight Harbor", &[]);
        entry.seo_keywords = Some("harbor movie, thriller , ,watch online".to_string());
        assert_eq!(
            entry.search_tags(),
            vec!["harbor movie", "thriller", "watch online"]
        );

        entry.seo_keywords = None;
        assert!(entry.search_tags().is_empty());
    }

    #[test]
    fn paragraphs_drop_blank_lines() {
        let mut entry = sample("m1", "Midnight Harbor", &[]);
        entry.description = "First.\n\n  \nSecond.".to_string();
        assert_eq!(entry.paragraphs(), vec!["First.", "Second."]);
    }

    #[test]
    fn excerpt_truncates_long_descriptions() {
        let mut entry = sample("m1", "Midnight Harbor", &[]);
        entry.description = "x".repeat(400);
        assert_eq!(entry.description_excerpt().len(), DESCRIPTION_EXCERPT_CHARS);
    }

    #[test]
    fn parse_list_filters_empties() {
        assert_eq!(parse_list("a, b ,, c"), vec!["a", "b", "c"]);
        assert!(parse_list("  ").is_empty());
    }
}
