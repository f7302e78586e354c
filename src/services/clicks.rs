//! Click recording
//!
//! Increments the aggregate and per-day counters for a link. The daily
//! history is bounded: once it holds `CLICK_HISTORY_LIMIT` days, adding a
//! new day evicts the oldest entry. Eviction prunes history detail only;
//! `total_clicks` keeps counting across evicted days.

use std::sync::Arc;

use chrono::Local;
use tracing::{error, warn};

use crate::errors::Result;
use crate::storages::{ClickEntry, LinkRecord, LinkStore, CLICK_HISTORY_LIMIT};

pub struct ClickRecorder {
    store: Arc<dyn LinkStore>,
}

impl ClickRecorder {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Records one click for `id` under today's local calendar date.
    ///
    /// Returns `Ok(None)` without mutating storage when the id is unknown --
    /// the link may legitimately have been deleted between resolution and
    /// recording.
    pub fn record_click(&self, id: &str) -> Result<Option<LinkRecord>> {
        let today = Local::now().format("%Y-%m-%d").to_string();
        self.record_click_on(id, &today)
    }

    /// Date-explicit variant of [`record_click`](Self::record_click).
    ///
    /// History entries are assumed to arrive in non-decreasing date order,
    /// which keeps the history append-ordered and makes index 0 the oldest
    /// day. Backdated dates are not a supported scenario.
    pub fn record_click_on(&self, id: &str, date: &str) -> Result<Option<LinkRecord>> {
        let mut links = match self.store.load_all() {
            Ok(links) => links,
            Err(e) => {
                error!("failed to load link collection for click recording: {}", e);
                return Ok(None);
            }
        };

        let Some(link) = links.iter_mut().find(|l| l.id == id) else {
            warn!("click for unknown link id {}, skipping", id);
            return Ok(None);
        };

        link.total_clicks += 1;

        match link.click_history.iter_mut().find(|e| e.date == date) {
            Some(entry) => entry.count += 1,
            None => {
                link.click_history.push(ClickEntry {
                    date: date.to_string(),
                    count: 1,
                });
                if link.click_history.len() > CLICK_HISTORY_LIMIT {
                    link.click_history.remove(0);
                }
            }
        }

        let updated = link.clone();
        self.store.save_all(&links)?;
        Ok(Some(updated))
    }
}
