//! Site branding, SEO and feature-toggle configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ACCENT_COLOR: &str = "#FACC15";

/// The site configuration document. Every field is independently optional
/// from the operator's point of view; absent fields fall back to these
/// defaults when the document is loaded or reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfiguration {
    pub header_title: String,
    pub header_message: String,
    /// Operator-authored raw markup injected into the page head, replaced
    /// wholesale on every configuration change. Unsanitized by design.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_code: Option<String>,
    /// Scrolling updates line shown under the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updates_ticker: Option<String>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub footer_main_text: String,
    pub footer_about_text: String,
    pub footer_disclaimer: String,
    pub site_title: String,
    pub site_description: String,
    pub site_keywords: String,
    pub og_image: String,
    pub favicon_url: String,
    pub accent_color: String,
    pub show_related_movies: bool,
}

impl Default for SiteConfiguration {
    fn default() -> Self {
        Self {
            header_title: "Marquee".to_string(),
            header_message: String::new(),
            header_code: None,
            updates_ticker: None,
            hero_title: "Now Showing".to_string(),
            hero_subtitle: "A curated catalog of films, updated by the operator.".to_string(),
            footer_main_text: "Marquee — a self-hosted movie catalog".to_string(),
            footer_about_text: String::new(),
            footer_disclaimer: String::new(),
            site_title: "Marquee".to_string(),
            site_description: "A curated movie catalog.".to_string(),
            site_keywords: String::new(),
            og_image: String::new(),
            favicon_url: String::new(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            show_related_movies: true,
        }
    }
}

impl SiteConfiguration {
    /// Accent color with the documented fallback for a cleared field.
    pub fn accent_color_or_default(&self) -> &str {
        if self.accent_color.trim().is_empty() {
            DEFAULT_ACCENT_COLOR
        } else {
            &self.accent_color
        }
    }
}
