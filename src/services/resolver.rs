//! Redirect resolution
//!
//! Looks a requested alias up among the persisted records and returns the
//! destination URL for the caller to navigate to. Recording the click is a
//! side effect of a successful resolution and is fire-and-forget: a
//! persistence failure is logged and never blocks the navigation target.

use std::sync::Arc;

use tracing::{debug, error};

use crate::services::clicks::ClickRecorder;
use crate::services::registry::LinkRegistry;
use crate::storages::LinkStore;

pub struct RedirectResolver {
    registry: LinkRegistry,
    recorder: ClickRecorder,
}

impl RedirectResolver {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self {
            registry: LinkRegistry::new(store.clone()),
            recorder: ClickRecorder::new(store),
        }
    }

    /// Exact alias match. On a hit the click is recorded and the destination
    /// URL returned; on a miss the store is left untouched and the caller
    /// decides the fallback behavior.
    pub fn resolve(&self, alias: &str) -> Option<String> {
        let Some(link) = self.registry.find_by_alias(alias) else {
            debug!("no link for alias {}", alias);
            return None;
        };

        if let Err(e) = self.recorder.record_click(&link.id) {
            error!("failed to record click for {}: {}", link.alias, e);
        }

        Some(link.original_url)
    }

    /// Detects the `<origin>/#/<alias>` addressing scheme in `address` and
    /// extracts the alias. Also accepts a bare `#/<alias>` fragment.
    pub fn extract_alias(address: &str) -> Option<&str> {
        let (_, fragment) = address.split_once("#/")?;
        if fragment.is_empty() {
            None
        } else {
            Some(fragment)
        }
    }
}
