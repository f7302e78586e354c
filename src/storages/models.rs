use serde::{Deserialize, Serialize};

/// 点击历史最多保留的天数，超出后淘汰最早的一天
pub const CLICK_HISTORY_LIMIT: usize = 30;

/// Daily click bucket. One entry per calendar day that had at least one
/// click, keyed by the local date in ISO `YYYY-MM-DD` form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClickEntry {
    pub date: String,
    pub count: u64,
}

/// The sole persisted entity: one shortened link and its click analytics.
///
/// `id` and `original_url` are immutable after creation. `alias` may change
/// through a validated rename. `total_clicks` counts every click ever
/// recorded, even after the corresponding `click_history` days have been
/// evicted; retention only prunes history detail, never the aggregate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub id: String,
    pub original_url: String,
    pub alias: String,
    /// 创建时间，epoch 毫秒
    pub created_at: i64,
    pub total_clicks: u64,
    pub click_history: Vec<ClickEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
}
