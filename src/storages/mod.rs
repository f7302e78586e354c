use std::sync::Arc;

use tracing::error;

use crate::config::get_config;
use crate::errors::{LinkSmartError, Result};

pub mod file;
pub mod memory;
pub mod models;

pub use models::{ClickEntry, LinkRecord, CLICK_HISTORY_LIMIT};

/// Whole-collection persistence over a single versioned data store.
///
/// Every operation reads, rewrites, or drops the entire collection as one
/// unit; there is no partial persistence. The two phases of a caller's
/// read-modify-write are NOT transactional: this contract assumes a single
/// logical writer, and concurrent writers interleaving between `load_all`
/// and `save_all` will lose the earlier write. That is a documented
/// limitation of the design, not a bug to fix here.
pub trait LinkStore: Send + Sync {
    /// Loads the full collection. A missing backing store yields an empty
    /// collection; corrupt data is an `Err` so the failure stays observable
    /// to logging (callers degrade it to empty at the public boundary).
    fn load_all(&self) -> Result<Vec<LinkRecord>>;

    /// Fully overwrites prior content with `links`.
    fn save_all(&self, links: &[LinkRecord]) -> Result<()>;

    /// Drops the entire collection.
    fn clear(&self) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

pub struct StoreFactory;

impl StoreFactory {
    pub fn create() -> Result<Arc<dyn LinkStore>> {
        let backend = &get_config().storage.backend;

        match backend.as_str() {
            "file" => Ok(Arc::new(file::JsonFileStore::new()) as Arc<dyn LinkStore>),
            "memory" => Ok(Arc::new(memory::MemoryStore::new()) as Arc<dyn LinkStore>),
            _ => {
                error!("Unknown storage backend: {}", backend);
                Err(LinkSmartError::storage_plugin_not_found(format!(
                    "Unknown storage backend: {}. Supported: file, memory",
                    backend
                )))
            }
        }
    }
}
