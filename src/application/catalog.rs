//! Read model for the public site.
//!
//! Pure derivations over a documents snapshot: which entries are visible,
//! which match a search, which are related to the one on screen, and which
//! ad placements actually render. Nothing here mutates state.

use crate::domain::ads::AdPlacement;
use crate::domain::movies::MovieEntry;

use super::documents::Documents;

/// Upper bound on the "you may also like" list.
pub const RELATED_LIMIT: usize = 12;

/// Entries visible to the public: the active ones, in list order.
pub fn active_movies(movies: &[MovieEntry]) -> Vec<&MovieEntry> {
    movies.iter().filter(|entry| entry.is_active).collect()
}

/// Active entries matching a search query (case-insensitive substring on
/// title or any genre). An empty query matches everything.
pub fn search<'a>(movies: &'a [MovieEntry], query: &str) -> Vec<&'a MovieEntry> {
    movies
        .iter()
        .filter(|entry| entry.is_active && entry.matches_query(query))
        .collect()
}

/// Detail-page lookup. Slug uniqueness is not enforced anywhere, so when two
/// entries carry the same slug this returns whichever comes first in list
/// order; which one that is depends on how the list was edited.
pub fn find_by_slug<'a>(movies: &'a [MovieEntry], slug: &str) -> Option<&'a MovieEntry> {
    movies.iter().find(|entry| entry.slug == slug)
}

/// Up to [`RELATED_LIMIT`] other active entries sharing at least one genre
/// with `current`. Empty when the feature toggle is off.
pub fn related<'a>(
    movies: &'a [MovieEntry],
    current: &MovieEntry,
    show_related: bool,
) -> Vec<&'a MovieEntry> {
    if !show_related {
        return vec![];
    }
    movies
        .iter()
        .filter(|entry| entry.id != current.id && entry.is_active && entry.shares_genre(current))
        .take(RELATED_LIMIT)
        .collect()
}

/// The markup a placement contributes to the page, or `None` when the
/// placement renders nothing: master switch off, slot inactive, or blank
/// code. The markup itself is operator-authored and passed through verbatim.
pub fn placement_markup(docs: &Documents, placement: AdPlacement) -> Option<&str> {
    if !docs.ads_enabled {
        return None;
    }
    let slot = docs.ad_config.slot(placement);
    if slot.is_blank() {
        return None;
    }
    Some(slot.code.as_str())
}
