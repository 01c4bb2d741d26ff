//! Checked-row bookkeeping for batch approval.

use std::collections::BTreeSet;

/// The set of lead ids currently checked in the review queue.
///
/// Page-lifetime only: nothing here is persisted or mirrored by the
/// backend, and a reload starts empty. Backed by a `BTreeSet` so
/// snapshots come out in a stable ascending order and batch payloads are
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    checked: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`; returns whether it is checked afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.checked.remove(id) {
            false
        } else {
            self.checked.insert(id.to_string());
            true
        }
    }

    /// Unchecks `id` if present; returns whether anything changed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.checked.remove(id)
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Ascending snapshot of the checked ids.
    pub fn ids(&self) -> Vec<String> {
        self.checked.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes_exactly_one_id() {
        let mut selection = Selection::new();

        assert!(selection.toggle("lead-7"));
        assert!(selection.contains("lead-7"));
        assert_eq!(selection.len(), 1);

        assert!(!selection.toggle("lead-7"));
        assert!(!selection.contains("lead-7"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_ids_snapshot_is_sorted() {
        let mut selection = Selection::new();
        selection.toggle("c");
        selection.toggle("a");
        selection.toggle("b");

        assert_eq!(selection.ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_reports_membership() {
        let mut selection = Selection::new();
        selection.toggle("x");

        assert!(selection.remove("x"));
        assert!(!selection.remove("x"));
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.toggle("a");
        selection.toggle("b");
        selection.clear();

        assert!(selection.is_empty());
        assert_eq!(selection.ids(), Vec::<String>::new());
    }
}
