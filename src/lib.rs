//! Marquee: a self-hosted content service for operator-curated movie
//! catalog sites.
//!
//! The crate is layered the usual way: `domain` holds the documents and
//! their invariants, `application` the services (store seam, change bus,
//! editors, read model), `infra` the adapters (file store, HTTP surface,
//! telemetry), and `config` the deployment settings.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
