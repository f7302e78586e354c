//! Dashboard aggregation over the link collection.

use crate::storages::LinkRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_links: usize,
    pub total_clicks: u64,
    pub top_performer: Option<LinkRecord>,
}

pub fn dashboard_stats(links: &[LinkRecord]) -> DashboardStats {
    DashboardStats {
        total_links: links.len(),
        total_clicks: links.iter().map(|l| l.total_clicks).sum(),
        top_performer: links.iter().max_by_key(|l| l.total_clicks).cloned(),
    }
}
