//! Bounded, most-recent-first history of generated plans.
//!
//! The whole collection lives under one storage key and is rewritten in full
//! on every change; there are no per-entry updates or deletions. Capacity
//! eviction drops entries from the tail.

use log::{debug, warn};
use serde_json::Value;

use crate::{
    models::PlanHistoryEntry,
    storage::{get_json, set_json, KeyValueStore},
};

/// Storage key holding the serialized history.
pub const HISTORY_KEY: &str = "career_plan_data";

/// Maximum number of entries kept.
pub const MAX_PLAN_HISTORY: usize = 10;

/// Number of entries shown in the recent-plans list.
pub const RECENT_PLANS: usize = 6;

/// Fields an entry must carry to be loaded.
const REQUIRED_FIELDS: [&str; 3] = ["id", "role", "createdAt"];

/// In-memory view of the stored history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanHistory {
    entries: Vec<PlanHistoryEntry>,
}

impl PlanHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the history from `store`.
    ///
    /// Entries missing an identifier, role or creation time, or otherwise
    /// failing to decode, are dropped silently. The result is capped at
    /// [`MAX_PLAN_HISTORY`].
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = get_json::<Value>(store, HISTORY_KEY) else {
            return Self::new();
        };

        let Value::Array(items) = raw else {
            warn!("Stored history is not a list; ignoring it");
            return Self::new();
        };

        let total = items.len();
        let entries: Vec<PlanHistoryEntry> = items
            .into_iter()
            .filter(has_identity)
            .filter_map(|item| serde_json::from_value(item).ok())
            .take(MAX_PLAN_HISTORY)
            .collect();

        if entries.len() < total {
            debug!("Dropped {} invalid history entries", total - entries.len());
        }
        Self { entries }
    }

    /// Writes the entire collection back to `store`.
    pub fn persist(&self, store: &dyn KeyValueStore) -> bool {
        set_json(store, HISTORY_KEY, &self.entries)
    }

    /// Prepends `entry`, evicting from the tail beyond capacity.
    ///
    /// The entry's identifier is bumped if needed so identifiers stay unique
    /// and strictly increasing towards the head. Returns the recorded entry.
    pub fn record(&mut self, mut entry: PlanHistoryEntry) -> &PlanHistoryEntry {
        if let Some(latest) = self.entries.first() {
            if entry.id <= latest.id {
                entry.id = latest.id + 1;
            }
        }

        self.entries.insert(0, entry);
        self.entries.truncate(MAX_PLAN_HISTORY);
        &self.entries[0]
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[PlanHistoryEntry] {
        &self.entries
    }

    /// Up to `limit` most recent entries.
    pub fn recent(&self, limit: usize) -> &[PlanHistoryEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// Looks up an entry by identifier.
    pub fn find(&self, id: i64) -> Option<&PlanHistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An entry needs a non-zero id and a non-empty role and creation time.
fn has_identity(item: &Value) -> bool {
    REQUIRED_FIELDS.iter().all(|field| match item.get(field) {
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::json;

    use super::*;
    use crate::{
        models::{PlanItem, TimeUnit},
        storage::MemoryStore,
    };

    fn entry(role: &str, second: i64) -> PlanHistoryEntry {
        PlanHistoryEntry::new(
            role,
            1,
            TimeUnit::Week,
            vec![PlanItem {
                index: Some(1),
                title: format!("{role} basics"),
                ..Default::default()
            }],
            Timestamp::from_second(second).unwrap(),
        )
    }

    #[test]
    fn test_record_evicts_oldest_at_capacity() {
        let store = MemoryStore::new();
        let mut history = PlanHistory::new();
        for i in 0..10 {
            history.record(entry(&format!("Role {i}"), 1_000 + i));
        }
        assert!(history.persist(&store));
        assert_eq!(history.entries()[9].role, "Role 0");

        let mut history = PlanHistory::load(&store);
        assert_eq!(history.len(), 10);
        history.record(entry("Newest", 5_000));
        assert!(history.persist(&store));

        let stored = PlanHistory::load(&store);
        assert_eq!(stored.len(), 10);
        assert_eq!(stored.entries()[0].role, "Newest");
        assert_eq!(stored.entries()[9].role, "Role 1");
        assert!(stored.entries().iter().all(|e| e.role != "Role 0"));
    }

    #[test]
    fn test_record_keeps_ids_unique() {
        let mut history = PlanHistory::new();
        let first = history.record(entry("A", 10)).id;
        let second = history.record(entry("B", 10)).id;
        assert!(second > first);
        assert_eq!(history.find(first).map(|e| e.role.as_str()), Some("A"));
    }

    #[test]
    fn test_load_filters_entries_without_identity() {
        let store = MemoryStore::new();
        let valid = serde_json::to_value(entry("Valid", 100)).unwrap();
        let raw = json!([
            valid,
            {"role": "No id", "createdAt": "2024-01-01T00:00:00Z", "months": 1, "weeks": 4},
            {"id": 2, "createdAt": "2024-01-01T00:00:00Z", "months": 1, "weeks": 4},
            {"id": 3, "role": "No date", "months": 1, "weeks": 4},
            {"id": 4, "role": null, "createdAt": "2024-01-01T00:00:00Z", "months": 1, "weeks": 4},
            "garbage"
        ]);
        store.set(HISTORY_KEY, &raw.to_string());

        let history = PlanHistory::load(&store);
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].role, "Valid");
    }

    #[test]
    fn test_load_drops_zero_id_and_empty_role() {
        let store = MemoryStore::new();
        let raw = json!([
            {"id": 0, "role": "Zero id", "months": 1, "weeks": 4, "plan": [],
             "createdAt": "2024-01-01T00:00:00Z"},
            {"id": 5, "role": "", "months": 1, "weeks": 4, "plan": [],
             "createdAt": "2024-01-01T00:00:00Z"},
            {"id": 6, "role": "Empty date", "months": 1, "weeks": 4, "plan": [],
             "createdAt": ""},
            {"id": 0, "role": "", "months": 1, "weeks": 4, "plan": [],
             "createdAt": "2024-01-01T00:00:00Z"}
        ]);
        store.set(HISTORY_KEY, &raw.to_string());

        assert!(PlanHistory::load(&store).is_empty());
    }

    #[test]
    fn test_load_keeps_entry_with_loose_item_shapes() {
        let store = MemoryStore::new();
        let raw = json!([{
            "id": 7,
            "role": "Front-end Developer",
            "months": 1,
            "weeks": 4,
            "plan": [{"week": 1, "title": null, "skills": "HTML"}, "stray"],
            "createdAt": "2024-01-01T00:00:00Z"
        }]);
        store.set(HISTORY_KEY, &raw.to_string());

        let history = PlanHistory::load(&store);
        assert_eq!(history.len(), 1);
        let plan = &history.entries()[0].plan;
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].index, Some(1));
        assert_eq!(plan[0].title, "");
        assert_eq!(plan[0].skills, vec!["HTML".to_string()]);
        assert_eq!(plan[1], PlanItem::default());
    }

    #[test]
    fn test_load_accepts_browser_format() {
        let store = MemoryStore::new();
        let raw = json!([{
            "id": 1_718_000_000_000_i64,
            "role": "Web Designer",
            "months": 1,
            "weeks": 4,
            "plan": [{"week": 1, "title": "HTML", "skills": ["Semantics"]}],
            "createdAt": "2024-06-10T06:13:20.000Z"
        }]);
        store.set(HISTORY_KEY, &raw.to_string());

        let history = PlanHistory::load(&store);
        let loaded = &history.entries()[0];
        assert_eq!(loaded.unit, TimeUnit::Week);
        assert_eq!(loaded.plan[0].index, Some(1));
        assert_eq!(loaded.plan[0].skills, vec!["Semantics".to_string()]);
    }

    #[test]
    fn test_load_handles_missing_and_corrupt_data() {
        let store = MemoryStore::new();
        assert!(PlanHistory::load(&store).is_empty());

        store.set(HISTORY_KEY, "{\"not\": \"a list\"}");
        assert!(PlanHistory::load(&store).is_empty());

        store.set(HISTORY_KEY, "[{broken");
        assert!(PlanHistory::load(&store).is_empty());
        assert_eq!(store.get(HISTORY_KEY), None);
    }

    #[test]
    fn test_recent_is_bounded() {
        let mut history = PlanHistory::new();
        for i in 0..8 {
            history.record(entry(&format!("Role {i}"), i));
        }
        assert_eq!(history.recent(RECENT_PLANS).len(), 6);
        assert_eq!(history.recent(RECENT_PLANS)[0].role, "Role 7");
        assert_eq!(history.recent(100).len(), 8);
    }
}
