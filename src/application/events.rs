//! Document change bus.
//!
//! Publishing a document broadcasts a typed event carrying the whole new
//! document, observed by reader contexts strictly after the write committed.
//! Events for different documents are independent; no ordering is promised
//! across keys. Because every event carries the full document, a receiver
//! that lags and drops intermediate events still converges on the last
//! written value per key.

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::domain::ads::AdConfiguration;
use crate::domain::movies::MovieEntry;
use crate::domain::site::SiteConfiguration;

const DEFAULT_CAPACITY: usize = 64;

/// A committed change to one of the four documents.
#[derive(Debug, Clone)]
pub enum DocumentEvent {
    Movies(Vec<MovieEntry>),
    AdsEnabled(bool),
    AdConfig(AdConfiguration),
    SiteConfig(SiteConfiguration),
}

impl DocumentEvent {
    /// Document key, for logs.
    pub fn key(&self) -> &'static str {
        match self {
            DocumentEvent::Movies(_) => "movies",
            DocumentEvent::AdsEnabled(_) => "ads_enabled",
            DocumentEvent::AdConfig(_) => "ad_config",
            DocumentEvent::SiteConfig(_) => "site_config",
        }
    }
}

/// Fan-out channel shared by every context attached to the same store.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<DocumentEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Broadcast a committed change. Fire-and-forget: having no subscribers
    /// is not an error.
    pub fn publish(&self, event: DocumentEvent) {
        debug!(target: "marquee::events", key = event.key(), "document event published");
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> EventSubscription {
        EventSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A reader context's end of the bus.
pub struct EventSubscription {
    rx: broadcast::Receiver<DocumentEvent>,
}

impl EventSubscription {
    /// Next event, skipping over any the receiver was too slow to observe.
    /// Returns `None` once every publisher is gone.
    pub async fn recv(&mut self) -> Option<DocumentEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(
                        target: "marquee::events",
                        skipped,
                        "subscriber lagged; continuing from the freshest events"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
