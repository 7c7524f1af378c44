//! The document service: current state, version gate, publish and reset.
//!
//! One `DocumentService` models one reader/writer context attached to the
//! shared store. Publishing commits the whole document to the store first,
//! then updates the in-memory state (read-your-writes), then broadcasts the
//! change on the bus for every other context. There is no merge protocol and
//! no conflict resolution: the last writer wins, per document.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::domain::ads::AdConfiguration;
use crate::domain::movies::MovieEntry;
use crate::domain::site::SiteConfiguration;

use super::events::{DocumentEvent, EventBus};
use super::repos::{DocumentsRepo, RepoError};

/// Bumping this wipes every stored document on the next open, forcing all
/// contexts back to defaults.
pub const SCHEMA_VERSION: &str = "3";

/// In-memory snapshot of the four documents.
#[derive(Debug, Clone)]
pub struct Documents {
    pub movies: Vec<MovieEntry>,
    pub ads_enabled: bool,
    pub ad_config: AdConfiguration,
    pub site_config: SiteConfiguration,
}

impl Default for Documents {
    fn default() -> Self {
        Self {
            movies: seed_catalog(),
            ads_enabled: true,
            ad_config: AdConfiguration::default(),
            site_config: SiteConfiguration::default(),
        }
    }
}

/// Starter entries for a fresh deployment, so the public grid is not empty
/// before the operator publishes anything.
pub fn seed_catalog() -> Vec<MovieEntry> {
    let entry = |id: &str, slug: &str, title: &str, year: &str, genres: &[&str], blurb: &str| {
        MovieEntry {
            id: id.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            cast: vec![],
            director: String::new(),
            poster_url: String::new(),
            description: blurb.to_string(),
            trailer_url: String::new(),
            download_url: "#".to_string(),
            download_new_tab: Some(true),
            watch_url: None,
            watch_new_tab: None,
            is_active: true,
            seo_title: None,
            seo_description: None,
            seo_keywords: None,
        }
    };

    vec![
        entry(
            "seed-1",
            "midnight-harbor",
            "Midnight Harbor",
            "2024",
            &["Thriller", "Drama"],
            "A dockworker uncovers a smuggling ring the night before the port closes for winter.",
        ),
        entry(
            "seed-2",
            "the-paper-kite",
            "The Paper Kite",
            "2023",
            &["Drama"],
            "Two siblings rebuild their grandfather's kite shop after a storm.",
        ),
        entry(
            "seed-3",
            "static",
            "Static",
            "2025",
            &["Sci-Fi", "Thriller"],
            "A late-night radio engineer starts receiving tomorrow's broadcasts.",
        ),
    ]
}

pub struct DocumentService {
    repo: Arc<dyn DocumentsRepo>,
    bus: EventBus,
    state: RwLock<Documents>,
}

impl DocumentService {
    /// Open the store: run the version gate, then load each document,
    /// falling back to its default when absent or unreadable.
    pub async fn open(repo: Arc<dyn DocumentsRepo>, bus: EventBus) -> Result<Self, RepoError> {
        let stored_version = repo.load_version().await?;
        if stored_version.as_deref() != Some(SCHEMA_VERSION) {
            info!(
                target: "marquee::documents",
                stored = stored_version.as_deref().unwrap_or("<none>"),
                expected = SCHEMA_VERSION,
                "schema version mismatch; resetting stored documents"
            );
            repo.remove_movies().await?;
            repo.remove_ads_enabled().await?;
            repo.remove_ad_config().await?;
            repo.remove_site_config().await?;
            repo.save_version(SCHEMA_VERSION).await?;
        }

        let defaults = Documents::default();
        let state = Documents {
            movies: repo.load_movies().await?.unwrap_or(defaults.movies),
            ads_enabled: repo
                .load_ads_enabled()
                .await?
                .unwrap_or(defaults.ads_enabled),
            ad_config: repo.load_ad_config().await?.unwrap_or(defaults.ad_config),
            site_config: repo
                .load_site_config()
                .await?
                .unwrap_or(defaults.site_config),
        };

        Ok(Self {
            repo,
            bus,
            state: RwLock::new(state),
        })
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Clone of the current documents.
    pub async fn snapshot(&self) -> Documents {
        self.state.read().await.clone()
    }

    pub async fn publish_movies(&self, movies: Vec<MovieEntry>) -> Result<(), RepoError> {
        self.repo.save_movies(&movies).await?;
        self.state.write().await.movies = movies.clone();
        self.bus.publish(DocumentEvent::Movies(movies));
        Ok(())
    }

    pub async fn publish_ads_enabled(&self, enabled: bool) -> Result<(), RepoError> {
        self.repo.save_ads_enabled(enabled).await?;
        self.state.write().await.ads_enabled = enabled;
        self.bus.publish(DocumentEvent::AdsEnabled(enabled));
        Ok(())
    }

    pub async fn publish_ad_config(&self, config: AdConfiguration) -> Result<(), RepoError> {
        self.repo.save_ad_config(&config).await?;
        self.state.write().await.ad_config = config.clone();
        self.bus.publish(DocumentEvent::AdConfig(config));
        Ok(())
    }

    pub async fn publish_site_config(&self, config: SiteConfiguration) -> Result<(), RepoError> {
        self.repo.save_site_config(&config).await?;
        self.state.write().await.site_config = config.clone();
        self.bus.publish(DocumentEvent::SiteConfig(config));
        Ok(())
    }

    /// Destructive settings reset: removes the ads-enabled flag, the ad
    /// configuration and the site configuration from the store and restores
    /// their defaults. The movie list is always preserved.
    pub async fn clear_settings_cache(&self) -> Result<(), RepoError> {
        warn!(target: "marquee::documents", "clearing settings cache (movie list preserved)");
        self.repo.remove_ads_enabled().await?;
        self.repo.remove_ad_config().await?;
        self.repo.remove_site_config().await?;

        let defaults = Documents::default();
        {
            let mut state = self.state.write().await;
            state.ads_enabled = defaults.ads_enabled;
            state.ad_config = defaults.ad_config.clone();
            state.site_config = defaults.site_config.clone();
        }
        self.bus
            .publish(DocumentEvent::AdsEnabled(defaults.ads_enabled));
        self.bus.publish(DocumentEvent::AdConfig(defaults.ad_config));
        self.bus
            .publish(DocumentEvent::SiteConfig(defaults.site_config));
        Ok(())
    }

    /// Replay a change committed by another context into this one.
    pub async fn apply(&self, event: DocumentEvent) {
        let mut state = self.state.write().await;
        match event {
            DocumentEvent::Movies(movies) => state.movies = movies,
            DocumentEvent::AdsEnabled(enabled) => state.ads_enabled = enabled,
            DocumentEvent::AdConfig(config) => state.ad_config = config,
            DocumentEvent::SiteConfig(config) => state.site_config = config,
        }
    }

    /// Spawn the replay loop for this context. The returned handle must be
    /// aborted on teardown; dropping it silently would leak the task.
    pub fn spawn_sync(self: &Arc<Self>) -> JoinHandle<()> {
        let service = Arc::clone(self);
        let mut subscription = self.bus.subscribe();
        tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                service.apply(event).await;
            }
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// In-memory repo: a string-keyed map of serialized documents, close to
    /// the per-key store the file implementation provides.
    #[derive(Default)]
    pub(crate) struct MemoryRepo {
        entries: Mutex<HashMap<&'static str, String>>,
    }

    impl MemoryRepo {
        fn get<T: serde::de::DeserializeOwned>(&self, key: &'static str) -> Option<T> {
            let entries = self.entries.lock().expect("repo lock");
            let raw = entries.get(key)?;
            serde_json::from_str(raw).ok()
        }

        fn put<T: serde::Serialize>(&self, key: &'static str, value: &T) {
            let raw = serde_json::to_string(value).expect("serialize");
            self.entries.lock().expect("repo lock").insert(key, raw);
        }

        fn remove(&self, key: &'static str) {
            self.entries.lock().expect("repo lock").remove(key);
        }

        pub(crate) fn put_raw(&self, key: &'static str, raw: &str) {
            self.entries
                .lock()
                .expect("repo lock")
                .insert(key, raw.to_string());
        }

        pub(crate) fn contains(&self, key: &'static str) -> bool {
            self.entries.lock().expect("repo lock").contains_key(key)
        }
    }

    #[async_trait]
    impl DocumentsRepo for MemoryRepo {
        async fn load_movies(&self) -> Result<Option<Vec<MovieEntry>>, RepoError> {
            Ok(self.get("movies"))
        }
        async fn save_movies(&self, movies: &[MovieEntry]) -> Result<(), RepoError> {
            self.put("movies", &movies);
            Ok(())
        }
        async fn remove_movies(&self) -> Result<(), RepoError> {
            self.remove("movies");
            Ok(())
        }

        async fn load_ads_enabled(&self) -> Result<Option<bool>, RepoError> {
            Ok(self.get("ads_enabled"))
        }
        async fn save_ads_enabled(&self, enabled: bool) -> Result<(), RepoError> {
            self.put("ads_enabled", &enabled);
            Ok(())
        }
        async fn remove_ads_enabled(&self) -> Result<(), RepoError> {
            self.remove("ads_enabled");
            Ok(())
        }

        async fn load_ad_config(&self) -> Result<Option<AdConfiguration>, RepoError> {
            Ok(self.get("ad_config"))
        }
        async fn save_ad_config(&self, config: &AdConfiguration) -> Result<(), RepoError> {
            self.put("ad_config", config);
            Ok(())
        }
        async fn remove_ad_config(&self) -> Result<(), RepoError> {
            self.remove("ad_config");
            Ok(())
        }

        async fn load_site_config(&self) -> Result<Option<SiteConfiguration>, RepoError> {
            Ok(self.get("site_config"))
        }
        async fn save_site_config(&self, config: &SiteConfiguration) -> Result<(), RepoError> {
            self.put("site_config", config);
            Ok(())
        }
        async fn remove_site_config(&self) -> Result<(), RepoError> {
            self.remove("site_config");
            Ok(())
        }

        async fn load_version(&self) -> Result<Option<String>, RepoError> {
            Ok(self.get("version"))
        }
        async fn save_version(&self, version: &str) -> Result<(), RepoError> {
            self.put("version", &version);
            Ok(())
        }
    }

    async fn open_service(repo: Arc<MemoryRepo>) -> DocumentService {
        DocumentService::open(repo, EventBus::new())
            .await
            .expect("open service")
    }

    #[tokio::test]
    async fn first_open_loads_defaults_and_stamps_the_version() {
        let repo = Arc::new(MemoryRepo::default());
        let service = open_service(Arc::clone(&repo)).await;

        let docs = service.snapshot().await;
        assert_eq!(docs.movies, seed_catalog());
        assert!(docs.ads_enabled);
        assert!(repo.contains("version"));
    }

    #[tokio::test]
    async fn publish_is_read_your_writes() {
        let repo = Arc::new(MemoryRepo::default());
        let service = open_service(repo).await;

        service.publish_ads_enabled(false).await.expect("publish");
        assert!(!service.snapshot().await.ads_enabled);
    }

    #[tokio::test]
    async fn version_mismatch_resets_all_documents_but_not_unrelated_keys() {
        let repo = Arc::new(MemoryRepo::default());
        repo.put("version", &"0");
        repo.put("movies", &vec![seed_catalog().remove(0)]);
        repo.put("ads_enabled", &false);
        repo.put_raw("unrelated", "\"kept\"");

        let service = open_service(Arc::clone(&repo)).await;
        let docs = service.snapshot().await;

        assert_eq!(docs.movies, seed_catalog());
        assert!(docs.ads_enabled);
        assert!(repo.contains("unrelated"));
        assert_eq!(repo.get::<String>("version").as_deref(), Some(SCHEMA_VERSION));
    }

    #[tokio::test]
    async fn matching_version_preserves_stored_documents() {
        let repo = Arc::new(MemoryRepo::default());
        repo.put("version", &SCHEMA_VERSION);
        repo.put("ads_enabled", &false);

        let service = open_service(repo).await;
        assert!(!service.snapshot().await.ads_enabled);
    }

    #[tokio::test]
    async fn malformed_document_falls_back_to_defaults() {
        let repo = Arc::new(MemoryRepo::default());
        repo.put("version", &SCHEMA_VERSION);
        repo.put_raw("site_config", "{not json");

        let service = open_service(repo).await;
        assert_eq!(
            service.snapshot().await.site_config,
            SiteConfiguration::default()
        );
    }

    #[tokio::test]
    async fn clear_settings_cache_preserves_the_movie_list() {
        let repo = Arc::new(MemoryRepo::default());
        let service = open_service(Arc::clone(&repo)).await;

        let mut movies = seed_catalog();
        movies.truncate(1);
        service.publish_movies(movies.clone()).await.expect("publish");
        let mut site = SiteConfiguration::default();
        site.accent_color = "#00FF00".to_string();
        service.publish_site_config(site).await.expect("publish");

        service.clear_settings_cache().await.expect("clear");

        let docs = service.snapshot().await;
        assert_eq!(docs.movies, movies);
        assert_eq!(docs.site_config, SiteConfiguration::default());
        assert!(repo.contains("movies"));
        assert!(!repo.contains("site_config"));
        assert!(!repo.contains("ad_config"));
        assert!(!repo.contains("ads_enabled"));
    }

    #[tokio::test]
    async fn replay_task_mirrors_another_context() {
        let repo = Arc::new(MemoryRepo::default());
        let bus = EventBus::new();
        let writer = Arc::new(
            DocumentService::open(Arc::clone(&repo) as Arc<dyn DocumentsRepo>, bus.clone())
                .await
                .expect("open writer"),
        );
        let reader = Arc::new(
            DocumentService::open(repo as Arc<dyn DocumentsRepo>, bus)
                .await
                .expect("open reader"),
        );

        let sync = reader.spawn_sync();
        writer.publish_ads_enabled(false).await.expect("publish");

        // One notification cycle is enough; poll briefly for the replay.
        let mut mirrored = false;
        for _ in 0..50 {
            if !reader.snapshot().await.ads_enabled {
                mirrored = true;
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }
        sync.abort();
        assert!(mirrored, "reader context never observed the publish");
    }
}
