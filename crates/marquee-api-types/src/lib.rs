//! Shared request and response types for the Marquee content API.
//!
//! These are the wire shapes exchanged with the HTTP surface: the catalog
//! entries served by the read endpoints, the merged settings document, and
//! the full content document accepted by the save endpoint. Field names are
//! camelCase on the wire; both the server and the CLI client depend on this
//! crate so the two sides cannot drift apart.

use serde::{Deserialize, Serialize};

/// One catalog entry as served by `GET /wp-json/wp/v2/posts` and accepted
/// inside a [`ContentDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
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

/// A single advertising placement: raw operator-authored markup plus an
/// on/off switch. An empty code and `active: false` are equivalent for
/// readers; both mean the placement renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdSlotPayload {
    pub code: String,
    pub active: bool,
}

impl AdSlotPayload {
    pub fn empty() -> Self {
        Self {
            code: String::new(),
            active: true,
        }
    }
}

impl Default for AdSlotPayload {
    fn default() -> Self {
        Self::empty()
    }
}

/// The ten named advertising placements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdConfigPayload {
    pub global_header: AdSlotPayload,
    pub pop_under: AdSlotPayload,
    pub home_top: AdSlotPayload,
    pub home_in_grid: AdSlotPayload,
    pub home_bottom: AdSlotPayload,
    pub detail_top: AdSlotPayload,
    pub detail_sidebar1: AdSlotPayload,
    pub detail_sidebar2: AdSlotPayload,
    pub watch_timer: AdSlotPayload,
    pub download_timer: AdSlotPayload,
}

/// Site branding, SEO and feature-toggle fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePayload {
    pub header_title: String,
    pub header_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
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

impl SitePayload {
    /// The documented field defaults, as applied by a fresh deployment and
    /// by the settings reset.
    pub fn baseline() -> Self {
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
            accent_color: "#FACC15".to_string(),
            show_related_movies: true,
        }
    }
}

/// The merged settings document served by `GET /wp-json/wp/v2/settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    pub site: SitePayload,
    pub ads_enabled: bool,
    pub ad_codes: AdConfigPayload,
}

impl SettingsDocument {
    /// Default settings: ads on, every slot empty, baseline site fields.
    pub fn baseline() -> Self {
        Self {
            site: SitePayload::baseline(),
            ads_enabled: true,
            ad_codes: AdConfigPayload::default(),
        }
    }
}

/// The full content document accepted by `POST /api/wp-save`. The save
/// endpoint replaces the stored state with this document wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub movies: Vec<MovieRecord>,
    pub settings: SettingsDocument,
}

/// Body of `POST /api/wp-login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}
