//! Cross-context synchronization: two services sharing one store and one
//! bus behave like two tabs on the same origin.

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use marquee::application::documents::{DocumentService, SCHEMA_VERSION, seed_catalog};
use marquee::application::events::EventBus;
use marquee::application::repos::DocumentsRepo;
use marquee::domain::movies::MovieEntry;
use marquee::domain::site::SiteConfiguration;
use marquee::infra::store::FileDocuments;

async fn open_context(dir: &TempDir, bus: EventBus) -> Arc<DocumentService> {
    let store = FileDocuments::new(dir.path()).expect("store");
    Arc::new(
        DocumentService::open(Arc::new(store), bus)
            .await
            .expect("open documents"),
    )
}

/// Poll until `predicate` holds or a notification cycle has clearly passed.
async fn eventually<F, Fut>(mut predicate: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..100 {
        if predicate().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    false
}

#[tokio::test]
async fn a_published_movie_reaches_the_other_context_without_a_refresh() {
    let dir = TempDir::new().expect("tempdir");
    let bus = EventBus::new();
    let writer = open_context(&dir, bus.clone()).await;
    let reader = open_context(&dir, bus).await;
    let sync = reader.spawn_sync();

    let mut movies = seed_catalog();
    let mut m1 = movies[0].clone();
    m1.id = "m1".to_string();
    m1.slug = "fresh-arrival".to_string();
    m1.title = "Fresh Arrival".to_string();
    movies.insert(0, m1);
    writer.publish_movies(movies).await.expect("publish");

    // The writer reads its own write...
    assert_eq!(writer.snapshot().await.movies[0].id, "m1");

    // ...and the reader converges within one notification cycle.
    let reader_sees_m1 = eventually(|| {
        let reader = Arc::clone(&reader);
        async move {
            reader
                .snapshot()
                .await
                .movies
                .iter()
                .any(|entry: &MovieEntry| entry.id == "m1")
        }
    })
    .await;
    sync.abort();
    assert!(reader_sees_m1);
}

#[tokio::test]
async fn accent_color_publish_is_visible_in_both_contexts() {
    let dir = TempDir::new().expect("tempdir");
    let bus = EventBus::new();
    let writer = open_context(&dir, bus.clone()).await;
    let reader = open_context(&dir, bus).await;
    let sync = reader.spawn_sync();

    let mut site = SiteConfiguration::default();
    site.accent_color = "#00FF00".to_string();
    writer.publish_site_config(site).await.expect("publish");

    assert_eq!(
        writer.snapshot().await.site_config.accent_color_or_default(),
        "#00FF00"
    );

    let reader_sees_color = eventually(|| {
        let reader = Arc::clone(&reader);
        async move { reader.snapshot().await.site_config.accent_color == "#00FF00" }
    })
    .await;
    sync.abort();
    assert!(reader_sees_color);
}

#[tokio::test]
async fn a_context_opened_later_reads_the_published_state_from_the_store() {
    let dir = TempDir::new().expect("tempdir");
    let writer = open_context(&dir, EventBus::new()).await;
    writer.publish_ads_enabled(false).await.expect("publish");

    // A separate bus: this context never hears events, only the store.
    let latecomer = open_context(&dir, EventBus::new()).await;
    assert!(!latecomer.snapshot().await.ads_enabled);
}

#[tokio::test]
async fn version_mismatch_resets_documents_and_spares_unrelated_files() {
    let dir = TempDir::new().expect("tempdir");

    {
        let store = FileDocuments::new(dir.path()).expect("store");
        let mut movies = seed_catalog();
        movies.truncate(1);
        store.save_movies(&movies).await.expect("save");
        store.save_ads_enabled(false).await.expect("save");
        store.save_version("stale").await.expect("save");
    }
    std::fs::write(dir.path().join("notes.txt"), b"operator notes").expect("write unrelated");

    let context = open_context(&dir, EventBus::new()).await;
    let docs = context.snapshot().await;

    assert_eq!(docs.movies, seed_catalog());
    assert!(docs.ads_enabled);
    assert!(dir.path().join("notes.txt").exists());

    let store = FileDocuments::new(dir.path()).expect("store");
    assert_eq!(
        store.load_version().await.expect("version").as_deref(),
        Some(SCHEMA_VERSION)
    );
}
