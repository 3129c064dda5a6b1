use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A catalog entry as it crosses the command boundary.
///
/// `is_favorite` is computed from favorites membership at read time; it is a
/// view of the Favorites store, never persisted on the catalog row itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Emoji {
    #[ts(type = "number")]
    pub id: i64,
    pub glyph: String,
    pub short_name: String,
    pub group_name: String,
    pub subgroup: String,
    pub keywords: Vec<String>,
    pub is_favorite: bool,
}

/// One recorded usage of an emoji, most-recent-first in the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HistoryEvent {
    #[ts(type = "number")]
    pub emoji_id: i64,
    #[ts(type = "number")]
    pub used_at: i64,
}
