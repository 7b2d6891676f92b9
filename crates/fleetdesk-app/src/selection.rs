// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks which single record has its detail view open and which inline
/// rows are expanded. Membership is not validated against the page at call
/// time; the detail view renders nothing when the identity has left the
/// page, and `retain_present` prunes after every reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState<Id: Clone + Eq + Hash> {
    selected: Option<Id>,
    expanded: HashSet<Id>,
}

impl<Id: Clone + Eq + Hash> Default for SelectionState<Id> {
    fn default() -> Self {
        Self {
            selected: None,
            expanded: HashSet::new(),
        }
    }
}

impl<Id: Clone + Eq + Hash> SelectionState<Id> {
    pub fn open(&mut self, id: Id) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    pub fn toggle_expand(&mut self, id: Id) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: &Id) -> bool {
        self.expanded.contains(id)
    }

    /// Drops selection and expansions whose records are no longer present.
    pub fn retain_present<'a>(&mut self, present: impl IntoIterator<Item = &'a Id>)
    where
        Id: 'a,
    {
        let present: HashSet<&Id> = present.into_iter().collect();
        if let Some(selected) = &self.selected
            && !present.contains(selected)
        {
            self.selected = None;
        }
        self.expanded.retain(|id| present.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionState;

    #[test]
    fn open_replaces_previous_selection() {
        let mut state = SelectionState::default();
        state.open("a");
        state.open("b");
        assert_eq!(state.selected(), Some(&"b"));

        state.close();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn toggle_expand_flips_membership_independently() {
        let mut state = SelectionState::default();
        state.toggle_expand("a");
        state.toggle_expand("b");
        assert!(state.is_expanded(&"a"));
        assert!(state.is_expanded(&"b"));

        state.toggle_expand("a");
        assert!(!state.is_expanded(&"a"));
        assert!(state.is_expanded(&"b"));
    }

    #[test]
    fn retain_present_clears_departed_records() {
        let mut state = SelectionState::default();
        state.open("a");
        state.toggle_expand("a");
        state.toggle_expand("b");

        state.retain_present(["b"].iter());
        assert_eq!(state.selected(), None);
        assert!(!state.is_expanded(&"a"));
        assert!(state.is_expanded(&"b"));
    }

    #[test]
    fn retain_present_keeps_surviving_selection() {
        let mut state = SelectionState::default();
        state.open("a");
        state.retain_present(["a", "b"].iter());
        assert_eq!(state.selected(), Some(&"a"));
    }
}
