//! Admin editing surfaces.
//!
//! Three independent surfaces (content, ad center, site layout) each hold
//! a staged draft of their whole document. Edits mutate the draft only;
//! nothing is visible to readers until `publish` copies the draft into the
//! document service. Validation failures leave the draft untouched and are
//! surfaced to the operator.

use tracing::info;
use uuid::Uuid;

use crate::domain::ads::{AdConfiguration, AdPlacement};
use crate::domain::error::DomainError;
use crate::domain::movies::{MovieEntry, title_case};
use crate::domain::site::SiteConfiguration;
use crate::domain::slug;

use super::documents::DocumentService;
use super::error::AppError;

/// Operator input for creating or updating one catalog entry.
#[derive(Debug, Clone)]
pub struct UpsertMovieCommand {
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
    pub download_new_tab: Option<bool>,
    pub watch_url: Option<String>,
    pub watch_new_tab: Option<bool>,
    pub is_active: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
}

impl UpsertMovieCommand {
    /// Blank form defaulting the year to the current one, the way the admin
    /// table prefills new rows.
    pub fn blank_for_current_year() -> Self {
        Self::blank(time::OffsetDateTime::now_utc().year().to_string())
    }

    /// Blank form for a new entry.
    pub fn blank(year: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            slug: String::new(),
            title: String::new(),
            year: year.into(),
            genres: vec![],
            cast: vec![],
            director: String::new(),
            poster_url: String::new(),
            description: String::new(),
            trailer_url: String::new(),
            download_url: "#".to_string(),
            download_new_tab: Some(true),
            watch_url: None,
            watch_new_tab: Some(true),
            is_active: true,
            seo_title: None,
            seo_description: None,
            seo_keywords: None,
        }
    }

    /// Form prefilled from an existing entry.
    pub fn from_entry(entry: &MovieEntry) -> Self {
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

    /// Change the title, keeping an auto-derived slug in sync. A slug the
    /// operator has manually diverged from the derivation is left alone.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if slug::tracks_title(&self.slug, &self.title) {
            self.slug = slug::derive_slug(&title).unwrap_or_default();
        }
        self.title = title;
    }
}

/// Content surface: stages the whole movie list.
pub struct ContentEditor {
    draft: Vec<MovieEntry>,
}

impl ContentEditor {
    /// Begin an editing session from the currently published list.
    pub fn stage(movies: Vec<MovieEntry>) -> Self {
        Self { draft: movies }
    }

    pub fn draft(&self) -> &[MovieEntry] {
        &self.draft
    }

    /// Admin table filter: case-insensitive title substring.
    pub fn search(&self, query: &str) -> Vec<&MovieEntry> {
        let needle = query.to_lowercase();
        self.draft
            .iter()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Save a form into the draft. New entries are prepended; existing ones
    /// (matched by id) are replaced in place. The title is canonicalized to
    /// title case; lists are trimmed of empties. Rejects a save with an
    /// empty id, title or slug without touching the draft.
    pub fn save(&mut self, command: UpsertMovieCommand) -> Result<&MovieEntry, DomainError> {
        let entry = MovieEntry {
            id: command.id,
            slug: command.slug,
            title: title_case(command.title.trim()),
            year: command.year,
            genres: clean_list(command.genres),
            cast: clean_list(command.cast),
            director: command.director,
            poster_url: command.poster_url,
            description: command.description,
            trailer_url: command.trailer_url,
            download_url: command.download_url,
            download_new_tab: command.download_new_tab,
            watch_url: command.watch_url,
            watch_new_tab: command.watch_new_tab,
            is_active: command.is_active,
            seo_title: command.seo_title,
            seo_description: command.seo_description,
            seo_keywords: command.seo_keywords,
        };
        entry.validate()?;

        match self.draft.iter().position(|m| m.id == entry.id) {
            Some(index) => {
                self.draft[index] = entry;
                Ok(&self.draft[index])
            }
            None => {
                self.draft.insert(0, entry);
                Ok(&self.draft[0])
            }
        }
    }

    /// Flip visibility only; every other field is untouched.
    pub fn toggle_active(&mut self, id: &str) -> Result<bool, DomainError> {
        let entry = self
            .draft
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DomainError::not_found("movie"))?;
        entry.is_active = !entry.is_active;
        Ok(entry.is_active)
    }

    pub fn remove(&mut self, id: &str) -> Result<(), DomainError> {
        let index = self
            .draft
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| DomainError::not_found("movie"))?;
        self.draft.remove(index);
        Ok(())
    }

    /// Commit the staged list, making it visible to every reader.
    pub async fn publish(&self, documents: &DocumentService) -> Result<(), AppError> {
        documents.publish_movies(self.draft.clone()).await?;
        info!(
            target: "marquee::editor",
            entries = self.draft.len(),
            "content draft published"
        );
        Ok(())
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Ad-center surface: stages the slot configuration and the master switch.
pub struct AdCenterEditor {
    ads_enabled: bool,
    draft: AdConfiguration,
}

impl AdCenterEditor {
    pub fn stage(ads_enabled: bool, config: AdConfiguration) -> Self {
        Self {
            ads_enabled,
            draft: config,
        }
    }

    pub fn draft(&self) -> &AdConfiguration {
        &self.draft
    }

    pub fn ads_enabled(&self) -> bool {
        self.ads_enabled
    }

    pub fn set_master(&mut self, enabled: bool) {
        self.ads_enabled = enabled;
    }

    pub fn set_slot_code(&mut self, placement: AdPlacement, code: impl Into<String>) {
        self.draft.slot_mut(placement).code = code.into();
    }

    pub fn toggle_slot(&mut self, placement: AdPlacement) -> bool {
        let slot = self.draft.slot_mut(placement);
        slot.active = !slot.active;
        slot.active
    }

    /// Publish the whole ad document and the master switch at once.
    pub async fn publish(&self, documents: &DocumentService) -> Result<(), AppError> {
        documents.publish_ad_config(self.draft.clone()).await?;
        documents.publish_ads_enabled(self.ads_enabled).await?;
        info!(target: "marquee::editor", "ad configuration published");
        Ok(())
    }
}

/// Site-layout surface: stages the site configuration document.
pub struct SiteEditor {
    draft: SiteConfiguration,
}

impl SiteEditor {
    pub fn stage(config: SiteConfiguration) -> Self {
        Self { draft: config }
    }

    pub fn draft(&self) -> &SiteConfiguration {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut SiteConfiguration {
        &mut self.draft
    }

    pub async fn publish(&self, documents: &DocumentService) -> Result<(), AppError> {
        documents.publish_site_config(self.draft.clone()).await?;
        info!(target: "marquee::editor", "site configuration published");
        Ok(())
    }

    /// The destructive settings reset. Callers own the confirmation prompt;
    /// this applies it unconditionally. The movie list is never touched.
    pub async fn clear_settings_cache(&mut self, documents: &DocumentService) -> Result<(), AppError> {
        documents.clear_settings_cache().await?;
        self.draft = SiteConfiguration::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(title: &str) -> UpsertMovieCommand {
        let mut command = UpsertMovieCommand::blank("2025");
        command.set_title(title);
        command
    }

    #[test]
    fn save_requires_id_title_and_slug() {
        let mut editor = ContentEditor::stage(vec![]);

        let missing_title = UpsertMovieCommand::blank("2025");
        assert!(editor.save(missing_title).is_err());
        assert!(editor.draft().is_empty());

        let mut missing_slug = command("Midnight Harbor");
        missing_slug.slug = String::new();
        assert!(editor.save(missing_slug).is_err());
        assert!(editor.draft().is_empty());
    }

    #[test]
    fn save_title_cases_and_prepends_new_entries() {
        let mut editor = ContentEditor::stage(vec![]);
        editor.save(command("midnight harbor")).expect("save");
        editor.save(command("the paper kite")).expect("save");

        let titles: Vec<_> = editor.draft().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["The Paper Kite", "Midnight Harbor"]);
        assert_eq!(editor.draft()[1].slug, "midnight-harbor");
    }

    #[test]
    fn save_replaces_an_existing_entry_by_id() {
        let mut editor = ContentEditor::stage(vec![]);
        let saved = editor.save(command("Midnight Harbor")).expect("save").clone();

        let mut update = UpsertMovieCommand::from_entry(&saved);
        update.year = "2026".to_string();
        editor.save(update).expect("update");

        assert_eq!(editor.draft().len(), 1);
        assert_eq!(editor.draft()[0].year, "2026");
        assert_eq!(editor.draft()[0].id, saved.id);
    }

    #[test]
    fn save_cleans_genre_and_cast_lists() {
        let mut editor = ContentEditor::stage(vec![]);
        let mut form = command("Midnight Harbor");
        form.genres = vec![" Thriller ".into(), "".into(), "Drama".into()];
        let entry = editor.save(form).expect("save");
        assert_eq!(entry.genres, vec!["Thriller", "Drama"]);
    }

    #[test]
    fn blank_forms_default_to_the_current_year() {
        let form = UpsertMovieCommand::blank_for_current_year();
        let year: i32 = form.year.parse().expect("numeric year");
        assert!(year >= 2024);
        assert!(form.is_active);
        assert_eq!(form.download_url, "#");
    }

    #[test]
    fn slug_tracks_title_until_manually_diverged() {
        let mut form = UpsertMovieCommand::blank("2025");
        form.set_title("Midnight Harbor");
        assert_eq!(form.slug, "midnight-harbor");

        // Still tracking: a title edit re-derives the slug.
        form.set_title("Midnight Harbor Returns");
        assert_eq!(form.slug, "midnight-harbor-returns");

        // Diverge manually: later title edits leave the slug alone.
        form.slug = "harbor-2".to_string();
        form.set_title("Midnight Harbor III");
        assert_eq!(form.slug, "harbor-2");
    }

    #[test]
    fn toggle_only_flips_visibility() {
        let mut editor = ContentEditor::stage(vec![]);
        let saved = editor.save(command("Midnight Harbor")).expect("save").clone();

        assert_eq!(editor.toggle_active(&saved.id).expect("toggle"), false);
        let toggled = &editor.draft()[0];
        assert!(!toggled.is_active);
        assert_eq!(
            MovieEntry {
                is_active: true,
                ..toggled.clone()
            },
            saved
        );

        assert!(editor.toggle_active("missing").is_err());
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut editor = ContentEditor::stage(vec![]);
        let saved = editor.save(command("Midnight Harbor")).expect("save").clone();
        editor.remove(&saved.id).expect("remove");
        assert!(editor.draft().is_empty());
        assert!(editor.remove(&saved.id).is_err());
    }

    #[test]
    fn admin_search_filters_by_title() {
        let mut editor = ContentEditor::stage(vec![]);
        editor.save(command("Midnight Harbor")).expect("save");
        editor.save(command("The Paper Kite")).expect("save");

        let hits = editor.search("harbor");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Midnight Harbor");
    }

    #[test]
    fn ad_center_edits_stay_staged() {
        let mut editor = AdCenterEditor::stage(true, AdConfiguration::default());
        editor.set_slot_code(AdPlacement::HomeTop, "<div>ad</div>");
        assert!(!editor.toggle_slot(AdPlacement::PopUnder));
        editor.set_master(false);

        assert_eq!(editor.draft().slot(AdPlacement::HomeTop).code, "<div>ad</div>");
        assert!(!editor.draft().slot(AdPlacement::PopUnder).active);
        assert!(!editor.ads_enabled());
    }

    #[tokio::test]
    async fn publish_makes_staged_edits_visible() {
        use crate::application::events::EventBus;
        use std::sync::Arc;

        let repo = Arc::new(crate::application::documents::tests::MemoryRepo::default());
        let documents = DocumentService::open(repo, EventBus::new())
            .await
            .expect("open");

        let mut content = ContentEditor::stage(vec![]);
        content.save(command("Midnight Harbor")).expect("save");

        // Nothing visible until the explicit publish.
        assert_eq!(
            documents.snapshot().await.movies,
            crate::application::documents::seed_catalog()
        );

        content.publish(&documents).await.expect("publish");
        let published = documents.snapshot().await.movies;
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "Midnight Harbor");
    }
}
