use crate::dataset::{SeedEmoji, SEED_CATALOG};
use crate::model::{Emoji, HistoryEvent};
use crate::time::now_ms;

/// Maximum number of stored usage events. Both backing paths enforce it;
/// insertion evicts the oldest events past the cap.
pub const HISTORY_RETENTION_CAP: usize = 20;

/// Lower-cased whitespace tokens of a search query. Empty for blank input,
/// which makes `search` return nothing by design.
pub(crate) fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// One catalog row as held by the mirror; `is_favorite` is attached at read
/// time from the favorites list.
#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub id: i64,
    pub glyph: String,
    pub short_name: String,
    pub group_name: String,
    pub subgroup: String,
    pub keywords: Vec<String>,
}

impl From<&SeedEmoji> for CatalogRow {
    fn from(seed: &SeedEmoji) -> Self {
        CatalogRow {
            id: seed.id,
            glyph: seed.glyph.to_string(),
            short_name: seed.short_name.to_string(),
            group_name: seed.group_name.to_string(),
            subgroup: seed.subgroup.to_string(),
            keywords: seed.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// In-process mirror of the durable store.
///
/// Owned exclusively by the gateway behind a mutex; every operation matches
/// the SQL path's external contract. History is kept most-recent-first.
pub struct MemoryStore {
    emojis: Vec<CatalogRow>,
    // Favorite marks in creation order; a re-add moves the id to the back,
    // so the back is always the most recently favorited.
    favorites: Vec<i64>,
    history: Vec<HistoryEvent>,
}

impl MemoryStore {
    pub fn from_seed() -> Self {
        Self::with_catalog(SEED_CATALOG.iter().map(CatalogRow::from).collect())
    }

    pub fn with_catalog(emojis: Vec<CatalogRow>) -> Self {
        MemoryStore {
            emojis,
            favorites: Vec::new(),
            history: Vec::new(),
        }
    }

    fn view(&self, row: &CatalogRow) -> Emoji {
        Emoji {
            id: row.id,
            glyph: row.glyph.clone(),
            short_name: row.short_name.clone(),
            group_name: row.group_name.clone(),
            subgroup: row.subgroup.clone(),
            keywords: row.keywords.clone(),
            is_favorite: self.favorites.contains(&row.id),
        }
    }

    fn contains(&self, id: i64) -> bool {
        self.emojis.iter().any(|e| e.id == id)
    }

    fn by_name(&self, mut rows: Vec<Emoji>) -> Vec<Emoji> {
        rows.sort_by(|a, b| {
            a.short_name
                .to_lowercase()
                .cmp(&b.short_name.to_lowercase())
        });
        rows
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for row in &self.emojis {
            if !row.group_name.is_empty() && !out.contains(&row.group_name) {
                out.push(row.group_name.clone());
            }
        }
        out
    }

    /// Empty category lists the whole catalog.
    pub fn list_by_category(&self, category: &str) -> Vec<Emoji> {
        let rows = self
            .emojis
            .iter()
            .filter(|e| category.is_empty() || e.group_name == category)
            .map(|e| self.view(e))
            .collect();
        self.by_name(rows)
    }

    /// Every token must match the display name or some keyword.
    pub fn search(&self, query: &str) -> Vec<Emoji> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }
        let rows = self
            .emojis
            .iter()
            .filter(|e| {
                terms.iter().all(|term| {
                    e.short_name.to_lowercase().contains(term)
                        || e.keywords.iter().any(|k| k.to_lowercase().contains(term))
                })
            })
            .map(|e| self.view(e))
            .collect();
        self.by_name(rows)
    }

    /// Most recently favorited first. Marks are appended on add (a re-add
    /// replaces), so reverse insertion order is exactly recency order.
    pub fn favorites(&self) -> Vec<Emoji> {
        self.favorites
            .iter()
            .rev()
            .filter_map(|id| {
                self.emojis
                    .iter()
                    .find(|e| e.id == *id)
                    .map(|row| self.view(row))
            })
            .collect()
    }

    /// Idempotent: an existing mark is replaced, bumping it to most recent.
    pub fn add_favorite(&mut self, id: i64) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.favorites.retain(|f| *f != id);
        self.favorites.push(id);
        true
    }

    pub fn remove_favorite(&mut self, id: i64) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| *f != id);
        self.favorites.len() != before
    }

    pub fn record_use(&mut self, id: i64) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.history.insert(
            0,
            HistoryEvent {
                emoji_id: id,
                used_at: now_ms(),
            },
        );
        self.history.truncate(HISTORY_RETENTION_CAP);
        true
    }

    /// Deduped by id, keeping each id's most recent rank.
    pub fn recent(&self, limit: usize) -> Vec<Emoji> {
        let mut seen: Vec<i64> = Vec::new();
        for event in &self.history {
            if !seen.contains(&event.emoji_id) {
                seen.push(event.emoji_id);
            }
        }
        seen.truncate(limit);
        seen.into_iter()
            .filter_map(|id| {
                self.emojis
                    .iter()
                    .find(|e| e.id == id)
                    .map(|row| self.view(row))
            })
            .collect()
    }

    /// Drops every recorded use of the id, mirroring the SQL delete.
    pub fn remove_history(&mut self, id: i64) -> bool {
        let before = self.history.len();
        self.history.retain(|h| h.emoji_id != id);
        self.history.len() != before
    }

    pub fn clear_history(&mut self) -> bool {
        self.history.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryStore {
        MemoryStore::from_seed()
    }

    #[test]
    fn blank_search_is_empty_by_design() {
        let s = store();
        assert!(s.search("").is_empty());
        assert!(s.search("   ").is_empty());
    }

    #[test]
    fn every_token_must_match() {
        let s = store();
        let hits = s.search("cat face");
        assert!(hits.iter().any(|e| e.glyph == "🐱"));
        // "cat" alone matches, "cat zzz" must not
        assert!(s.search("cat zzz").is_empty());
    }

    #[test]
    fn category_listing_is_name_ordered() {
        let s = store();
        let all = s.list_by_category("");
        assert_eq!(all.len(), SEED_CATALOG.len());
        let names: Vec<String> = all.iter().map(|e| e.short_name.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn favorite_add_is_idempotent() {
        let mut s = store();
        assert!(s.add_favorite(1));
        assert!(s.add_favorite(1));
        assert_eq!(s.favorites().len(), 1);
        assert!(s.favorites()[0].is_favorite);
        assert!(!s.add_favorite(99_999));
    }

    #[test]
    fn history_cap_evicts_oldest() {
        let mut s = store();
        for _ in 0..25 {
            assert!(s.record_use(1));
        }
        assert_eq!(s.history.len(), HISTORY_RETENTION_CAP);
    }

    #[test]
    fn recent_dedupes_keeping_most_recent_rank() {
        let mut s = store();
        for id in [1, 2, 1, 3, 4] {
            assert!(s.record_use(id));
        }
        let recents: Vec<i64> = s.recent(3).iter().map(|e| e.id).collect();
        assert_eq!(recents, vec![4, 3, 1]);
    }

    #[test]
    fn remove_history_drops_all_occurrences() {
        let mut s = store();
        s.record_use(1);
        s.record_use(2);
        s.record_use(1);
        assert!(s.remove_history(1));
        assert!(!s.remove_history(1));
        assert_eq!(s.history.len(), 1);
    }
}
