//! The local draft: a staged copy of the full content document.
//!
//! Every editing command mutates the draft file only; nothing reaches the
//! server until `publish` posts the whole document. `pull` overwrites the
//! draft with the currently published state.

#![deny(clippy::all, clippy::pedantic)]

use std::path::Path;

use marquee_api_types::{AdSlotPayload, ContentDocument, MovieRecord, SettingsDocument};
use uuid::Uuid;

use crate::client::CliError;

pub async fn load(path: &Path) -> Result<ContentDocument, CliError> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(CliError::Draft(format!(
                "no draft at {}; run `marquee-cli pull` first",
                path.display()
            )));
        }
        Err(err) => return Err(err.into()),
    };
    serde_json::from_slice(&raw)
        .map_err(|err| CliError::Draft(format!("draft failed to parse: {err}")))
}

pub async fn save(path: &Path, document: &ContentDocument) -> Result<(), CliError> {
    let raw = serde_json::to_vec_pretty(document)
        .map_err(|err| CliError::Draft(format!("draft failed to encode: {err}")))?;
    tokio::fs::write(path, raw).await?;
    Ok(())
}

/// Fields accepted when adding or updating an entry.
#[derive(Debug, Default)]
pub struct PostFields {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub year: Option<String>,
    pub genres: Option<String>,
    pub cast: Option<String>,
    pub director: Option<String>,
    pub poster_url: Option<String>,
    pub description: Option<String>,
    pub trailer_url: Option<String>,
    pub download_url: Option<String>,
    pub watch_url: Option<String>,
}

/// Add an entry to the front of the draft list, the way the admin table
/// prepends new rows. The title is title-cased; the slug derives from the
/// title unless supplied.
pub fn add_post(document: &mut ContentDocument, fields: PostFields) -> Result<&MovieRecord, CliError> {
    let title_input = fields.title.unwrap_or_default();
    if title_input.trim().is_empty() {
        return Err(CliError::InvalidInput("title is required".into()));
    }
    let title = title_case(title_input.trim());
    let slug = match fields.slug {
        Some(slug) if !slug.trim().is_empty() => slug,
        _ => slug::slugify(&title),
    };
    if slug.trim().is_empty() {
        return Err(CliError::InvalidInput("slug is required".into()));
    }

    let record = MovieRecord {
        id: Uuid::new_v4().to_string(),
        slug,
        title,
        year: fields
            .year
            .unwrap_or_else(|| time::OffsetDateTime::now_utc().year().to_string()),
        genres: parse_list(fields.genres.as_deref().unwrap_or_default()),
        cast: parse_list(fields.cast.as_deref().unwrap_or_default()),
        director: fields.director.unwrap_or_default(),
        poster_url: fields.poster_url.unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        trailer_url: fields.trailer_url.unwrap_or_default(),
        download_url: fields.download_url.unwrap_or_else(|| "#".to_string()),
        download_new_tab: Some(true),
        watch_url: fields.watch_url,
        watch_new_tab: Some(true),
        is_active: true,
        seo_title: None,
        seo_description: None,
        seo_keywords: None,
    };

    document.movies.insert(0, record);
    Ok(&document.movies[0])
}

/// Apply the supplied fields to an existing entry. A title change re-derives
/// a slug that still tracks the old title; a manually diverged slug stays.
pub fn update_post<'a>(
    document: &'a mut ContentDocument,
    id: &str,
    fields: PostFields,
) -> Result<&'a MovieRecord, CliError> {
    let record = document
        .movies
        .iter_mut()
        .find(|record| record.id == id)
        .ok_or_else(|| CliError::InvalidInput(format!("no entry with id `{id}`")))?;

    if let Some(title) = fields.title {
        if title.trim().is_empty() {
            return Err(CliError::InvalidInput("title is required".into()));
        }
        let title = title_case(title.trim());
        if record.slug == slug::slugify(&record.title) {
            record.slug = slug::slugify(&title);
        }
        record.title = title;
    }
    if let Some(slug) = fields.slug {
        if slug.trim().is_empty() {
            return Err(CliError::InvalidInput("slug is required".into()));
        }
        record.slug = slug;
    }
    if let Some(year) = fields.year {
        record.year = year;
    }
    if let Some(genres) = fields.genres {
        record.genres = parse_list(&genres);
    }
    if let Some(cast) = fields.cast {
        record.cast = parse_list(&cast);
    }
    if let Some(director) = fields.director {
        record.director = director;
    }
    if let Some(poster_url) = fields.poster_url {
        record.poster_url = poster_url;
    }
    if let Some(description) = fields.description {
        record.description = description;
    }
    if let Some(trailer_url) = fields.trailer_url {
        record.trailer_url = trailer_url;
    }
    if let Some(download_url) = fields.download_url {
        record.download_url = download_url;
    }
    if let Some(watch_url) = fields.watch_url {
        record.watch_url = Some(watch_url);
    }

    Ok(record)
}

pub fn toggle_post(document: &mut ContentDocument, id: &str) -> Result<bool, CliError> {
    let record = document
        .movies
        .iter_mut()
        .find(|record| record.id == id)
        .ok_or_else(|| CliError::InvalidInput(format!("no entry with id `{id}`")))?;
    record.is_active = !record.is_active;
    Ok(record.is_active)
}

pub fn delete_post(document: &mut ContentDocument, id: &str) -> Result<(), CliError> {
    let index = document
        .movies
        .iter()
        .position(|record| record.id == id)
        .ok_or_else(|| CliError::InvalidInput(format!("no entry with id `{id}`")))?;
    document.movies.remove(index);
    Ok(())
}

/// The placement keys accepted by the ads commands, in document order.
pub const PLACEMENT_KEYS: [&str; 10] = [
    "globalHeader",
    "popUnder",
    "homeTop",
    "homeInGrid",
    "homeBottom",
    "detailTop",
    "detailSidebar1",
    "detailSidebar2",
    "watchTimer",
    "downloadTimer",
];

pub fn slot_mut<'a>(
    document: &'a mut ContentDocument,
    placement: &str,
) -> Result<&'a mut AdSlotPayload, CliError> {
    let ads = &mut document.settings.ad_codes;
    let slot = match placement {
        "globalHeader" => &mut ads.global_header,
        "popUnder" => &mut ads.pop_under,
        "homeTop" => &mut ads.home_top,
        "homeInGrid" => &mut ads.home_in_grid,
        "homeBottom" => &mut ads.home_bottom,
        "detailTop" => &mut ads.detail_top,
        "detailSidebar1" => &mut ads.detail_sidebar1,
        "detailSidebar2" => &mut ads.detail_sidebar2,
        "watchTimer" => &mut ads.watch_timer,
        "downloadTimer" => &mut ads.download_timer,
        other => {
            return Err(CliError::InvalidInput(format!(
                "unknown placement `{other}` (expected one of: {})",
                PLACEMENT_KEYS.join(", ")
            )));
        }
    };
    Ok(slot)
}

/// Reset the settings half of the draft to defaults. The catalog entries
/// are preserved, mirroring the server-side cache clear.
pub fn reset_settings(document: &mut ContentDocument) {
    document.settings = SettingsDocument::baseline();
}

fn title_case(input: &str) -> String {
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

fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
