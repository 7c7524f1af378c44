//! Repository trait describing the persisted document store.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ads::AdConfiguration;
use crate::domain::movies::MovieEntry;
use crate::domain::site::SiteConfiguration;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode document `{key}`: {source}")]
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// Persistence seam for the four documents and the version marker.
///
/// `load_*` returns `None` when the key is absent *or* when the stored bytes
/// fail to parse: a malformed document must never surface to callers, who
/// always fall back to defaults. Implementations log the parse failure.
/// `save_*` must provide read-your-writes for a subsequent `load_*` from the
/// same context.
#[async_trait]
pub trait DocumentsRepo: Send + Sync {
    async fn load_movies(&self) -> Result<Option<Vec<MovieEntry>>, RepoError>;
    async fn save_movies(&self, movies: &[MovieEntry]) -> Result<(), RepoError>;
    async fn remove_movies(&self) -> Result<(), RepoError>;

    async fn load_ads_enabled(&self) -> Result<Option<bool>, RepoError>;
    async fn save_ads_enabled(&self, enabled: bool) -> Result<(), RepoError>;
    async fn remove_ads_enabled(&self) -> Result<(), RepoError>;

    async fn load_ad_config(&self) -> Result<Option<AdConfiguration>, RepoError>;
    async fn save_ad_config(&self, config: &AdConfiguration) -> Result<(), RepoError>;
    async fn remove_ad_config(&self) -> Result<(), RepoError>;

    async fn load_site_config(&self) -> Result<Option<SiteConfiguration>, RepoError>;
    async fn save_site_config(&self, config: &SiteConfiguration) -> Result<(), RepoError>;
    async fn remove_site_config(&self) -> Result<(), RepoError>;

    async fn load_version(&self) -> Result<Option<String>, RepoError>;
    async fn save_version(&self, version: &str) -> Result<(), RepoError>;
}
