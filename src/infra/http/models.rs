//! Conversions between domain documents and the wire types in
//! `marquee-api-types`.

use marquee_api_types as api;

use crate::application::documents::Documents;
use crate::domain::ads::{AdConfiguration, AdSlot};
use crate::domain::movies::MovieEntry;
use crate::domain::site::SiteConfiguration;

impl From<&MovieEntry> for api::MovieRecord {
    fn from(entry: &MovieEntry) -> Self {
        Self {
            id: entry.id.clone(),
            slug: entry.slug.clone(),
            title: entry.title.clone(),
            year: entry.year.clone(),
            genres: entry.genres.clone(),
            cast: entry.cast.clone(),
            director: entry.director.clone(),
            poster_url: entry.poster_url.clone(),
            description: entry.description.clone(),
            trailer_url: entry.trailer_url.clone(),
            download_url: entry.download_url.clone(),
            download_new_tab: entry.download_new_tab,
            watch_url: entry.watch_url.clone(),
            watch_new_tab: entry.watch_new_tab,
            is_active: entry.is_active,
            seo_title: entry.seo_title.clone(),
            seo_description: entry.seo_description.clone(),
            seo_keywords: entry.seo_keywords.clone(),
        }
    }
}

impl From<api::MovieRecord> for MovieEntry {
    fn from(record: api::MovieRecord) -> Self {
        Self {
            id: record.id,
            slug: record.slug,
            title: record.title,
            year: record.year,
            genres: record.genres,
            cast: record.cast,
            director: record.director,
            poster_url: record.poster_url,
            description: record.description,
            trailer_url: record.trailer_url,
            download_url: record.download_url,
            download_new_tab: record.download_new_tab,
            watch_url: record.watch_url,
            watch_new_tab: record.watch_new_tab,
            is_active: record.is_active,
            seo_title: record.seo_title,
            seo_description: record.seo_description,
            seo_keywords: record.seo_keywords,
        }
    }
}

impl From<&AdSlot> for api::AdSlotPayload {
    fn from(slot: &AdSlot) -> Self {
        Self {
            code: slot.code.clone(),
            active: slot.active,
        }
    }
}

impl From<api::AdSlotPayload> for AdSlot {
    fn from(payload: api::AdSlotPayload) -> Self {
        Self {
            code: payload.code,
            active: payload.active,
        }
    }
}

impl From<&AdConfiguration> for api::AdConfigPayload {
    fn from(config: &AdConfiguration) -> Self {
        Self {
            global_header: (&config.global_header).into(),
            pop_under: (&config.pop_under).into(),
            home_top: (&config.home_top).into(),
            home_in_grid: (&config.home_in_grid).into(),
            home_bottom: (&config.home_bottom).into(),
            detail_top: (&config.detail_top).into(),
            detail_sidebar1: (&config.detail_sidebar1).into(),
            detail_sidebar2: (&config.detail_sidebar2).into(),
            watch_timer: (&config.watch_timer).into(),
            download_timer: (&config.download_timer).into(),
        }
    }
}

impl From<api::AdConfigPayload> for AdConfiguration {
    fn from(payload: api::AdConfigPayload) -> Self {
        Self {
            global_header: payload.global_header.into(),
            pop_under: payload.pop_under.into(),
            home_top: payload.home_top.into(),
            home_in_grid: payload.home_in_grid.into(),
            home_bottom: payload.home_bottom.into(),
            detail_top: payload.detail_top.into(),
            detail_sidebar1: payload.detail_sidebar1.into(),
            detail_sidebar2: payload.detail_sidebar2.into(),
            watch_timer: payload.watch_timer.into(),
            download_timer: payload.download_timer.into(),
        }
    }
}

impl From<&SiteConfiguration> for api::SitePayload {
    fn from(config: &SiteConfiguration) -> Self {
        Self {
            header_title: config.header_title.clone(),
            header_message: config.header_message.clone(),
            header_code: config.header_code.clone(),
            updates_ticker: config.updates_ticker.clone(),
            hero_title: config.hero_title.clone(),
            hero_subtitle: config.hero_subtitle.clone(),
            footer_main_text: config.footer_main_text.clone(),
            footer_about_text: config.footer_about_text.clone(),
            footer_disclaimer: config.footer_disclaimer.clone(),
            site_title: config.site_title.clone(),
            site_description: config.site_description.clone(),
            site_keywords: config.site_keywords.clone(),
            og_image: config.og_image.clone(),
            favicon_url: config.favicon_url.clone(),
            accent_color: config.accent_color.clone(),
            show_related_movies: config.show_related_movies,
        }
    }
}

impl From<api::SitePayload> for SiteConfiguration {
    fn from(payload: api::SitePayload) -> Self {
        Self {
            header_title: payload.header_title,
            header_message: payload.header_message,
            header_code: payload.header_code,
            updates_ticker: payload.updates_ticker,
            hero_title: payload.hero_title,
            hero_subtitle: payload.hero_subtitle,
            footer_main_text: payload.footer_main_text,
            footer_about_text: payload.footer_about_text,
            footer_disclaimer: payload.footer_disclaimer,
            site_title: payload.site_title,
            site_description: payload.site_description,
            site_keywords: payload.site_keywords,
            og_image: payload.og_image,
            favicon_url: payload.favicon_url,
            accent_color: payload.accent_color,
            show_related_movies: payload.show_related_movies,
        }
    }
}

/// The merged settings document served to readers.
pub fn settings_document(docs: &Documents) -> api::SettingsDocument {
    api::SettingsDocument {
        site: (&docs.site_config).into(),
        ads_enabled: docs.ads_enabled,
        ad_codes: (&docs.ad_config).into(),
    }
}

/// The full content document, as accepted by the save endpoint.
pub fn content_document(docs: &Documents) -> api::ContentDocument {
    api::ContentDocument {
        movies: docs.movies.iter().map(Into::into).collect(),
        settings: settings_document(docs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::documents::seed_catalog;

    #[test]
    fn movie_conversion_round_trips() {
        for entry in seed_catalog() {
            let record = api::MovieRecord::from(&entry);
            assert_eq!(MovieEntry::from(record), entry);
        }
    }

    #[test]
    fn wire_baseline_matches_the_domain_defaults() {
        // The CLI resets settings from the wire baseline; it must agree with
        // what the server itself resets to.
        assert_eq!(
            SiteConfiguration::from(api::SitePayload::baseline()),
            SiteConfiguration::default()
        );
        assert_eq!(
            AdConfiguration::from(api::AdConfigPayload::default()),
            AdConfiguration::default()
        );

        let defaults = Documents::default();
        assert_eq!(settings_document(&defaults), api::SettingsDocument::baseline());
    }

    #[test]
    fn content_document_carries_every_entry() {
        let docs = Documents::default();
        let document = content_document(&docs);
        assert_eq!(document.movies.len(), docs.movies.len());
        assert_eq!(document.settings.ads_enabled, docs.ads_enabled);
    }
}
