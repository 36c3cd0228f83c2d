//! Expand/collapse state for one collapsible tree.

use std::collections::HashMap;

/// Per-node expanded flag, keyed by a stable node identity.
///
/// Unknown keys read as collapsed. Entries are never pruned; a key for a
/// node that no longer exists is simply never consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    nodes: HashMap<String, bool>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `key` and return its new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let expanded = self.nodes.entry(key.to_string()).or_insert(false);
        *expanded = !*expanded;
        *expanded
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.nodes.get(key).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_collapsed() {
        let state = ExpandState::new();
        assert!(!state.is_expanded("/users"));
    }

    #[test]
    fn toggle_twice_restores() {
        let mut state = ExpandState::new();
        assert!(state.toggle("/users"));
        assert!(state.is_expanded("/users"));
        assert!(!state.toggle("/users"));
        assert!(!state.is_expanded("/users"));
    }

    #[test]
    fn keys_are_independent() {
        let mut state = ExpandState::new();
        state.toggle("/users");
        state.toggle("/pets");
        state.toggle("/pets");
        assert!(state.is_expanded("/users"));
        assert!(!state.is_expanded("/pets"));
        assert!(!state.is_expanded("/orders"));
    }
}
