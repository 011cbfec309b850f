use crate::models::UpdateRecord;

/// Append-only, in-memory list of fetched updates.
///
/// Insertion order is preserved and nothing is ever evicted.
#[derive(Debug, Default)]
pub struct UpdateStore {
    records: Vec<UpdateRecord>,
}

impl UpdateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of records to the end of the store
    pub fn append(&mut self, records: impl IntoIterator<Item = UpdateRecord>) {
        self.records.extend(records);
    }

    /// Last `n` records, oldest of the window first
    pub fn recent(&self, n: usize) -> Vec<UpdateRecord> {
        let start = self.records.len().saturating_sub(n);
        self.records[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(title: &str) -> UpdateRecord {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        UpdateRecord::new(title, "summary", date, "source")
    }

    fn titles(records: &[UpdateRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title()).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = UpdateStore::new();
        assert!(store.is_empty());
        assert!(store.recent(5).is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let mut store = UpdateStore::new();
        store.append(vec![record("a"), record("b")]);
        store.append(vec![record("c")]);
        assert_eq!(store.len(), 3);
        assert_eq!(titles(&store.recent(10)), vec!["a", "b", "c"]);
    }

    #[test]
    fn append_empty_batch_is_noop() {
        let mut store = UpdateStore::new();
        store.append(Vec::new());
        assert!(store.is_empty());
    }

    #[test]
    fn recent_returns_tail_window() {
        let mut store = UpdateStore::new();
        store.append(["a", "b", "c", "d", "e", "f", "g"].map(record));
        assert_eq!(titles(&store.recent(5)), vec!["c", "d", "e", "f", "g"]);
        assert_eq!(titles(&store.recent(1)), vec!["g"]);
        assert!(store.recent(0).is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut store = UpdateStore::new();
        store.append(vec![record("a"), record("a")]);
        assert_eq!(store.len(), 2);
    }
}
