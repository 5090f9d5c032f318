//! In-memory read-only store over the loaded dataset.

use std::collections::HashMap;

use crate::dataset::PostalRecord;

/// Read-only table of postal records, queried by the HTTP layer.
///
/// Construction consumes the loaded rows and builds a first-match index:
/// postal codes are not unique, so the index maps each code to the earliest
/// row carrying it, which keeps lookups consistent with load order. There is
/// no mutation API.
#[derive(Debug)]
pub struct PostalStore {
    records: Vec<PostalRecord>,
    index: HashMap<String, usize>,
}

impl PostalStore {
    /// Build the store from records in load order.
    pub fn new(records: Vec<PostalRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            // First writer wins: preserves first-match semantics.
            index.entry(record.zip_code.clone()).or_insert(i);
        }

        Self { records, index }
    }

    /// First `limit` records in load order.
    pub fn list(&self, limit: usize) -> &[PostalRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    /// First record (in load order) whose postal code equals `code` exactly.
    pub fn find_by_code(&self, code: &str) -> Option<&PostalRecord> {
        self.index.get(code).map(|&i| &self.records[i])
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(zip: &str, town: &str) -> PostalRecord {
        PostalRecord {
            local_gov_code: "13101".to_string(),
            old_zip_code: "100  ".to_string(),
            zip_code: zip.to_string(),
            prefecture_kana: "ﾄｳｷｮｳﾄ".to_string(),
            city_kana: "ﾁﾖﾀﾞｸ".to_string(),
            town_kana: "ﾁﾖﾀﾞ".to_string(),
            prefecture: "東京都".to_string(),
            city: "千代田区".to_string(),
            town: town.to_string(),
            multiple_zip_codes: false,
            koaza_banchi: false,
            has_chome: false,
            multiple_towns: false,
            update_status: 0,
            update_reason: 0,
        }
    }

    fn sample_store() -> PostalStore {
        PostalStore::new(vec![
            record("1000001", "千代田"),
            record("1020072", "飯田橋"),
            record("1020073", "九段北"),
        ])
    }

    #[test]
    fn list_returns_at_most_limit_in_load_order() {
        let store = sample_store();

        let listed = store.list(2);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].zip_code, "1000001");
        assert_eq!(listed[1].zip_code, "1020072");
    }

    #[test]
    fn list_with_zero_limit_is_empty() {
        let store = sample_store();
        assert!(store.list(0).is_empty());
    }

    #[test]
    fn list_limit_beyond_len_returns_everything() {
        let store = sample_store();
        assert_eq!(store.list(100).len(), 3);
    }

    #[test]
    fn find_by_code_returns_exact_match() {
        let store = sample_store();

        let found = store.find_by_code("1020072").unwrap();
        assert_eq!(found.town, "飯田橋");
    }

    #[test]
    fn find_by_code_misses_absent_code() {
        let store = sample_store();
        assert!(store.find_by_code("9999999").is_none());
    }

    #[test]
    fn find_by_code_returns_first_of_duplicates() {
        let store = PostalStore::new(vec![
            record("6028064", "桝屋町"),
            record("6028064", "姥ケ榎木町"),
        ]);

        let found = store.find_by_code("6028064").unwrap();
        assert_eq!(found.town, "桝屋町");
    }

    #[test]
    fn empty_store() {
        let store = PostalStore::new(Vec::new());

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list(10).is_empty());
        assert!(store.find_by_code("1000001").is_none());
    }
}
