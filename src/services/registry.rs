//! Link registry
//!
//! CRUD over link records layered on the persistent store. Uniqueness is
//! enforced here at rename time; at creation time the alias generator has
//! already claimed a free alias, so `create` does not re-validate.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::{LinkSmartError, Result};
use crate::storages::{LinkRecord, LinkStore};
use crate::utils::normalize_alias;

/// Minimum length of a normalized alias accepted by rename.
pub const MIN_ALIAS_LENGTH: usize = 3;

pub struct LinkRegistry {
    store: Arc<dyn LinkStore>,
}

impl LinkRegistry {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Current collection, newest-first by construction (creation prepends).
    ///
    /// A storage failure degrades to an empty collection; the error is
    /// logged, never propagated.
    pub fn get_all(&self) -> Vec<LinkRecord> {
        match self.store.load_all() {
            Ok(links) => links,
            Err(e) => {
                error!("failed to load link collection, degrading to empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Creates a new record and prepends it to the collection.
    ///
    /// The caller is expected to have checked alias availability (generated
    /// aliases are checked by the generator, user-supplied ones at the input
    /// boundary).
    pub fn create(&self, original_url: &str, alias: &str, tags: Vec<String>) -> Result<LinkRecord> {
        let record = LinkRecord {
            id: Uuid::new_v4().to_string(),
            original_url: original_url.to_string(),
            alias: alias.to_string(),
            created_at: Utc::now().timestamp_millis(),
            total_clicks: 0,
            click_history: Vec::new(),
            tags,
        };

        let mut links = self.get_all();
        links.insert(0, record.clone());
        self.store.save_all(&links)?;

        info!("created link {} -> {}", record.alias, record.original_url);
        Ok(record)
    }

    /// Renames the record identified by `id`.
    ///
    /// The candidate is normalized first (trimmed, whitespace runs become
    /// hyphens, characters outside `[A-Za-z0-9_-]` are stripped). Renaming
    /// to the current alias is a silent no-op and does not persist.
    pub fn rename(&self, id: &str, new_alias: &str) -> Result<LinkRecord> {
        let normalized = normalize_alias(new_alias);

        let mut links = self.get_all();
        let Some(idx) = links.iter().position(|l| l.id == id) else {
            return Err(LinkSmartError::not_found(format!("link not found: {}", id)));
        };

        if links[idx].alias == normalized {
            return Ok(links[idx].clone());
        }

        if links.iter().any(|l| l.alias == normalized) {
            return Err(LinkSmartError::alias_taken(format!(
                "alias already in use: {}",
                normalized
            )));
        }

        if normalized.len() < MIN_ALIAS_LENGTH {
            return Err(LinkSmartError::alias_too_short(format!(
                "alias must be at least {} characters: {}",
                MIN_ALIAS_LENGTH, normalized
            )));
        }

        let old_alias = std::mem::replace(&mut links[idx].alias, normalized);
        let renamed = links[idx].clone();
        self.store.save_all(&links)?;

        info!("renamed link {} -> {}", old_alias, renamed.alias);
        Ok(renamed)
    }

    /// Removes the record if present. Idempotent: deleting an unknown id is
    /// a no-op, not an error.
    pub fn delete(&self, id: &str) {
        let mut links = self.get_all();
        let before = links.len();
        links.retain(|l| l.id != id);

        if let Err(e) = self.store.save_all(&links) {
            error!("failed to persist delete of {}: {}", id, e);
            return;
        }
        if links.len() < before {
            info!("deleted link {}", id);
        }
    }

    /// Removes the entire collection.
    pub fn clear_all(&self) {
        if let Err(e) = self.store.clear() {
            error!("failed to clear link collection: {}", e);
        } else {
            info!("cleared link collection");
        }
    }

    /// Case-sensitive alias existence check, used by the alias generator and
    /// by rename validation.
    pub fn exists(&self, alias: &str) -> bool {
        self.get_all().iter().any(|l| l.alias == alias)
    }

    /// Exact alias lookup.
    pub fn find_by_alias(&self, alias: &str) -> Option<LinkRecord> {
        self.get_all().into_iter().find(|l| l.alias == alias)
    }

    /// Lookup by id.
    pub fn find_by_id(&self, id: &str) -> Option<LinkRecord> {
        self.get_all().into_iter().find(|l| l.id == id)
    }
}
