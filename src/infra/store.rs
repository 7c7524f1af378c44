//! File-backed document store.
//!
//! Each document lives in its own JSON file under the data directory, keyed
//! the way the documents are keyed everywhere else; the schema version is a
//! small text file beside them. Files are read fully and rewritten fully on
//! every save. Unrelated files in the directory are never touched.
//!
//! A file that fails to parse is treated as absent: the failure is logged
//! with its key and the caller falls back to defaults. Only I/O failures
//! other than "not found" are surfaced.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::application::repos::{DocumentsRepo, RepoError};
use crate::domain::ads::AdConfiguration;
use crate::domain::movies::MovieEntry;
use crate::domain::site::SiteConfiguration;

const MOVIES_KEY: &str = "movies.json";
const ADS_ENABLED_KEY: &str = "ads_enabled.json";
const AD_CONFIG_KEY: &str = "ad_slots.json";
const SITE_CONFIG_KEY: &str = "site.json";
const VERSION_KEY: &str = "schema_version";

pub struct FileDocuments {
    root: PathBuf,
}

impl FileDocuments {
    /// Open (creating if needed) the data directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, RepoError> {
        let path = self.root.join(key);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(
                    target: "marquee::store",
                    key,
                    error = %err,
                    "stored document failed to parse; falling back to defaults"
                );
                Ok(None)
            }
        }
    }

    async fn write_json<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), RepoError> {
        let raw =
            serde_json::to_vec_pretty(value).map_err(|source| RepoError::Encode { key, source })?;
        tokio::fs::write(self.root.join(key), raw).await?;
        Ok(())
    }

    async fn remove(&self, key: &'static str) -> Result<(), RepoError> {
        match tokio::fs::remove_file(self.root.join(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl DocumentsRepo for FileDocuments {
    async fn load_movies(&self) -> Result<Option<Vec<MovieEntry>>, RepoError> {
        self.read_json(MOVIES_KEY).await
    }

    async fn save_movies(&self, movies: &[MovieEntry]) -> Result<(), RepoError> {
        self.write_json(MOVIES_KEY, &movies).await
    }

    async fn remove_movies(&self) -> Result<(), RepoError> {
        self.remove(MOVIES_KEY).await
    }

    async fn load_ads_enabled(&self) -> Result<Option<bool>, RepoError> {
        self.read_json(ADS_ENABLED_KEY).await
    }

    async fn save_ads_enabled(&self, enabled: bool) -> Result<(), RepoError> {
        self.write_json(ADS_ENABLED_KEY, &enabled).await
    }

    async fn remove_ads_enabled(&self) -> Result<(), RepoError> {
        self.remove(ADS_ENABLED_KEY).await
    }

    async fn load_ad_config(&self) -> Result<Option<AdConfiguration>, RepoError> {
        self.read_json(AD_CONFIG_KEY).await
    }

    async fn save_ad_config(&self, config: &AdConfiguration) -> Result<(), RepoError> {
        self.write_json(AD_CONFIG_KEY, config).await
    }

    async fn remove_ad_config(&self) -> Result<(), RepoError> {
        self.remove(AD_CONFIG_KEY).await
    }

    async fn load_site_config(&self) -> Result<Option<SiteConfiguration>, RepoError> {
        self.read_json(SITE_CONFIG_KEY).await
    }

    async fn save_site_config(&self, config: &SiteConfiguration) -> Result<(), RepoError> {
        self.write_json(SITE_CONFIG_KEY, config).await
    }

    async fn remove_site_config(&self) -> Result<(), RepoError> {
        self.remove(SITE_CONFIG_KEY).await
    }

    async fn load_version(&self) -> Result<Option<String>, RepoError> {
        match tokio::fs::read_to_string(self.root.join(VERSION_KEY)).await {
            Ok(raw) => Ok(Some(raw.trim().to_string())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save_version(&self, version: &str) -> Result<(), RepoError> {
        tokio::fs::write(self.root.join(VERSION_KEY), version).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store() -> (TempDir, FileDocuments) {
        let dir = TempDir::new().expect("tempdir");
        let store = FileDocuments::new(dir.path()).expect("store");
        (dir, store)
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (_dir, store) = store();

        store.save_ads_enabled(false).await.expect("save");
        assert_eq!(store.load_ads_enabled().await.expect("load"), Some(false));

        let config = SiteConfiguration::default();
        store.save_site_config(&config).await.expect("save");
        assert_eq!(
            store.load_site_config().await.expect("load"),
            Some(config)
        );
    }

    #[tokio::test]
    async fn absent_keys_load_as_none() {
        let (_dir, store) = store();
        assert_eq!(store.load_movies().await.expect("load"), None);
        assert_eq!(store.load_version().await.expect("load"), None);
    }

    #[tokio::test]
    async fn malformed_documents_load_as_none() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("site.json"), b"{ definitely not json")
            .expect("write garbage");

        assert_eq!(store.load_site_config().await.expect("load"), None);
    }

    #[tokio::test]
    async fn remove_is_idempotent_and_leaves_other_keys_alone() {
        let (dir, store) = store();
        store.save_ads_enabled(true).await.expect("save");
        std::fs::write(dir.path().join("unrelated.json"), b"\"kept\"").expect("write");

        store.remove_ads_enabled().await.expect("remove");
        store.remove_ads_enabled().await.expect("remove again");

        assert_eq!(store.load_ads_enabled().await.expect("load"), None);
        assert!(dir.path().join("unrelated.json").exists());
    }

    #[tokio::test]
    async fn version_marker_round_trips_trimmed() {
        let (_dir, store) = store();
        store.save_version("3").await.expect("save");
        assert_eq!(store.load_version().await.expect("load").as_deref(), Some("3"));
    }
}
