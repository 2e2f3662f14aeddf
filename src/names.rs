//! Name Table
//!
//! Maps each reservation name to the block range it currently owns. A
//! name appears at most once; entries are created by reserve and removed
//! by release, with no other mutation path.

use std::collections::BTreeMap;

use crate::range::BlockRange;

/// Registry of live reservations, keyed by name
#[derive(Debug, Default)]
pub(crate) struct NameTable {
    entries: BTreeMap<String, BlockRange>,
}

impl NameTable {
    pub(crate) fn new() -> Self {
        NameTable {
            entries: BTreeMap::new(),
        }
    }

    /// Whether `name` currently owns a range
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Record `name -> range`
    ///
    /// Caller guarantees `name` is not already present.
    pub(crate) fn insert(&mut self, name: String, range: BlockRange) {
        let previous = self.entries.insert(name, range);
        debug_assert!(previous.is_none());
    }

    /// Remove and return the range owned by `name`, if any
    pub(crate) fn remove(&mut self, name: &str) -> Option<BlockRange> {
        self.entries.remove(name)
    }

    /// Look up the range owned by `name` without removing it
    pub(crate) fn get(&self, name: &str) -> Option<BlockRange> {
        self.entries.get(name).copied()
    }

    /// Iterate reservations in name order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &BlockRange)> {
        self.entries.iter()
    }

    /// Number of live reservations
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut names = NameTable::new();
        names.insert(String::from("proc_a"), BlockRange::new(0, 3));

        assert!(names.contains("proc_a"));
        assert_eq!(names.get("proc_a"), Some(BlockRange::new(0, 3)));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_remove_returns_owned_range() {
        let mut names = NameTable::new();
        names.insert(String::from("proc_a"), BlockRange::new(4, 7));

        assert_eq!(names.remove("proc_a"), Some(BlockRange::new(4, 7)));
        assert_eq!(names.remove("proc_a"), None);
        assert!(!names.contains("proc_a"));
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let mut names = NameTable::new();
        names.insert(String::from("b"), BlockRange::new(4, 5));
        names.insert(String::from("a"), BlockRange::new(0, 3));

        let order: Vec<&str> = names.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }
}
