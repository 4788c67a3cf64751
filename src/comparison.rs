// ⚖️ Comparison Selection - up to three floor plans side by side
//
// Capacity is a hard ceiling: adds beyond it are ignored, nothing is evicted.

use serde::Serialize;

use crate::entities::{FloorPlan, FloorPlanRegistry};

pub const MAX_COMPARE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "count")]
pub enum SelectionState {
    Empty,
    Partial(usize),
    Full,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plan id. Ignored if already selected or the selection is full.
    /// Returns whether the selection changed.
    pub fn add(&mut self, id: &str) -> bool {
        if self.is_full() || self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Add if absent, remove if present
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id)
        } else {
            self.add(id)
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in the order they were added
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn state(&self) -> SelectionState {
        match self.ids.len() {
            0 => SelectionState::Empty,
            n if n >= MAX_COMPARE => SelectionState::Full,
            n => SelectionState::Partial(n),
        }
    }

    /// Selected plans in selection order. Ids missing from the registry are skipped.
    pub fn resolve<'a>(&self, registry: &'a FloorPlanRegistry) -> Vec<&'a FloorPlan> {
        self.ids
            .iter()
            .filter_map(|id| registry.find_by_id(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full_selection() -> ComparisonSelection {
        let mut selection = ComparisonSelection::new();
        selection.add("plan-a");
        selection.add("plan-b");
        selection.add("plan-c");
        selection
    }

    #[test]
    fn test_state_machine() {
        let mut selection = ComparisonSelection::new();
        assert_eq!(selection.state(), SelectionState::Empty);

        selection.add("plan-a");
        assert_eq!(selection.state(), SelectionState::Partial(1));

        selection.add("plan-b");
        assert_eq!(selection.state(), SelectionState::Partial(2));

        selection.add("plan-c");
        assert_eq!(selection.state(), SelectionState::Full);

        selection.clear();
        assert_eq!(selection.state(), SelectionState::Empty);
    }

    #[test]
    fn test_add_on_full_selection_is_ignored() {
        let mut selection = full_selection();

        assert!(!selection.add("plan-d"));
        assert_eq!(selection.ids(), &["plan-a", "plan-b", "plan-c"]);
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut selection = ComparisonSelection::new();
        assert!(selection.add("plan-a"));
        assert!(!selection.add("plan-a"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut selection = full_selection();
        assert!(!selection.remove("plan-z"));
        assert_eq!(selection.len(), 3);

        assert!(selection.remove("plan-b"));
        assert_eq!(selection.ids(), &["plan-a", "plan-c"]);
    }

    #[test]
    fn test_toggle() {
        let mut selection = ComparisonSelection::new();
        selection.toggle("plan-e");
        assert!(selection.contains("plan-e"));
        selection.toggle("plan-e");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_resolve_against_registry() {
        let registry = FloorPlanRegistry::with_defaults();
        let mut selection = ComparisonSelection::new();
        selection.add("plan-c");
        selection.add("plan-unknown");
        selection.add("plan-a");

        let names: Vec<&str> = selection
            .resolve(&registry)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["The Cypress", "The Aspen"]);
    }

    #[test]
    fn test_state_serializes() {
        let json = serde_json::to_value(SelectionState::Partial(2)).unwrap();
        assert_eq!(json, serde_json::json!({"state": "partial", "count": 2}));
    }

    proptest! {
        /// add followed by remove restores the prior selection
        #[test]
        fn prop_add_then_remove_restores(
            existing in proptest::collection::vec("plan-[a-i]", 0..3),
            id in "plan-[a-z]",
        ) {
            let mut selection = ComparisonSelection::new();
            for e in &existing {
                selection.add(e);
            }
            prop_assume!(!selection.contains(&id));

            let before = selection.clone();
            selection.add(&id);
            selection.remove(&id);
            prop_assert_eq!(selection, before);
        }

        /// The selection never exceeds three ids
        #[test]
        fn prop_never_exceeds_capacity(ids in proptest::collection::vec("plan-[a-i]", 0..20)) {
            let mut selection = ComparisonSelection::new();
            for id in &ids {
                selection.add(id);
                prop_assert!(selection.len() <= MAX_COMPARE);
            }
        }
    }
}
