//! Page head derivation: titles, meta tags, favicon, accent color and the
//! operator-authored head fragment.
//!
//! The DOM work itself belongs to the rendering host; this module derives
//! *what* the head should contain and tracks the pieces that have to be
//! replaced wholesale when navigation or a configuration change happens.

use tracing::warn;

use crate::domain::movies::MovieEntry;
use crate::domain::site::SiteConfiguration;

/// Head content for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub og_title: String,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
}

impl PageMetadata {
    /// Site-level metadata, used on the home view.
    pub fn for_site(site: &SiteConfiguration) -> Self {
        Self {
            title: site.site_title.clone(),
            description: site.site_description.clone(),
            keywords: non_empty(&site.site_keywords),
            og_title: site.site_title.clone(),
            og_description: non_empty(&site.site_description),
            og_image: non_empty(&site.og_image),
        }
    }

    /// Detail-view metadata. SEO fields win; otherwise the title falls back
    /// to `"{title} ({year}) - {site title}"` and the description to a
    /// 160-character excerpt of the storyline.
    pub fn for_movie(movie: &MovieEntry, site: &SiteConfiguration) -> Self {
        let title = movie
            .seo_title
            .clone()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| format!("{} ({}) - {}", movie.title, movie.year, site.site_title));
        let description = movie
            .seo_description
            .clone()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| movie.description_excerpt());

        Self {
            og_title: title.clone(),
            og_description: movie.seo_description.clone(),
            og_image: non_empty(&movie.poster_url),
            keywords: movie.seo_keywords.clone(),
            title,
            description,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Mutable head state for one reader context.
///
/// Tracks the document title (restored when leaving a detail view), the
/// injected head fragment (removed before re-injection so configuration
/// changes never duplicate nodes), and the favicon/accent values derived
/// from the site configuration.
#[derive(Debug)]
pub struct HeadState {
    base_title: String,
    page_title: Option<String>,
    injected_fragment: Option<String>,
    favicon_url: String,
    accent_color: String,
}

impl HeadState {
    pub fn new(site: &SiteConfiguration) -> Self {
        let mut state = Self {
            base_title: site.site_title.clone(),
            page_title: None,
            injected_fragment: None,
            favicon_url: String::new(),
            accent_color: String::new(),
        };
        state.apply_site(site);
        state
    }

    /// Current document title.
    pub fn title(&self) -> &str {
        self.page_title.as_deref().unwrap_or(&self.base_title)
    }

    pub fn favicon_url(&self) -> &str {
        &self.favicon_url
    }

    /// The theme accent variable readers resolve.
    pub fn accent_color(&self) -> &str {
        &self.accent_color
    }

    /// The operator fragment currently injected into the head, if any.
    pub fn injected_fragment(&self) -> Option<&str> {
        self.injected_fragment.as_deref()
    }

    /// Entering a page sets its title; the previous title is restored by
    /// [`HeadState::leave_page`].
    pub fn enter_page(&mut self, metadata: &PageMetadata) {
        self.page_title = Some(metadata.title.clone());
    }

    pub fn leave_page(&mut self) {
        self.page_title = None;
    }

    /// Re-derive everything owned by the site configuration. Any previously
    /// injected fragment is dropped before the new one is stored, so repeated
    /// configuration changes never accumulate head nodes. A fragment that
    /// fails to parse is logged and skipped; the page renders without it.
    pub fn apply_site(&mut self, site: &SiteConfiguration) {
        self.base_title = site.site_title.clone();
        self.favicon_url = site.favicon_url.clone();
        self.accent_color = site.accent_color_or_default().to_string();

        self.injected_fragment = None;
        if let Some(code) = site.header_code.as_deref() {
            match parse_fragment(code) {
                Ok(Some(fragment)) => self.injected_fragment = Some(fragment),
                Ok(None) => {}
                Err(reason) => {
                    warn!(
                        target: "marquee::metadata",
                        reason,
                        "skipping malformed custom head code"
                    );
                }
            }
        }
    }
}

/// Minimal acceptance check for an operator head fragment. The markup is
/// trusted and passed through verbatim; the only rejected input is text that
/// cannot be a fragment at all (an unterminated tag).
fn parse_fragment(code: &str) -> Result<Option<String>, &'static str> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let opens = trimmed.matches('<').count();
    let closes = trimmed.matches('>').count();
    if opens != closes {
        return Err("unbalanced angle brackets");
    }
    Ok(Some(trimmed.to_string()))
}
