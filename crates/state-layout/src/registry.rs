//! Bidirectional state ↔ view bindings

use std::collections::HashMap;
use std::hash::Hash;

use crate::state::StateId;

/// What a call to [`StateRegistry::insert`] displaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rebind<V> {
    /// The state had no view before
    Fresh,
    /// The state was already bound to this very view
    Same,
    /// The previous view is still bound under another state
    Shared(V),
    /// The previous view is no longer bound under any state
    Orphaned(V),
}

/// Forward (state → view) and reverse (view → state) bindings
///
/// At most one view is bound per state. A view may be bound under several
/// states at once (the shared placeholder is), in which case its reverse
/// entry names the state it was most recently bound under.
#[derive(Debug, Clone)]
pub struct StateRegistry<V> {
    views: HashMap<StateId, V>,
    states: HashMap<V, StateId>,
}

impl<V> Default for StateRegistry<V> {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
            states: HashMap::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> StateRegistry<V> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `view` to `state`, replacing any previous binding of `state`
    pub fn insert(&mut self, state: StateId, view: V) -> Rebind<V> {
        let previous = self.views.insert(state.clone(), view.clone());
        self.states.insert(view.clone(), state.clone());

        let Some(previous) = previous else {
            return Rebind::Fresh;
        };
        if previous == view {
            return Rebind::Same;
        }

        match self.first_state_binding(&previous) {
            Some(other) => {
                // Keep the reverse entry pointing at a state that still binds it
                if self.states.get(&previous) == Some(&state) {
                    self.states.insert(previous.clone(), other);
                }
                Rebind::Shared(previous)
            }
            None => {
                self.states.remove(&previous);
                Rebind::Orphaned(previous)
            }
        }
    }

    /// The view bound to `state`
    pub fn view_for(&self, state: &StateId) -> Option<&V> {
        self.views.get(state)
    }

    /// The state `view` is bound under
    pub fn state_for(&self, view: &V) -> Option<&StateId> {
        self.states.get(view)
    }

    /// Whether `state` has a view
    pub fn contains_state(&self, state: &StateId) -> bool {
        self.views.contains_key(state)
    }

    /// Whether `view` is bound under any state
    pub fn contains_view(&self, view: &V) -> bool {
        self.states.contains_key(view)
    }

    /// Iterate over all bound states (unordered)
    pub fn states(&self) -> impl Iterator<Item = &StateId> {
        self.views.keys()
    }

    /// Iterate over all `(state, view)` bindings (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (&StateId, &V)> {
        self.views.iter()
    }

    /// Number of bound states
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether no state is bound
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Smallest state (by name) still binding `view`, for deterministic repointing
    fn first_state_binding(&self, view: &V) -> Option<StateId> {
        self.views
            .iter()
            .filter(|(_, bound)| *bound == view)
            .map(|(state, _)| state)
            .min()
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_ways() {
        let mut registry = StateRegistry::new();
        assert_eq!(registry.insert(StateId::LOADING, 1), Rebind::Fresh);

        assert_eq!(registry.view_for(&StateId::LOADING), Some(&1));
        assert_eq!(registry.state_for(&1), Some(&StateId::LOADING));
        assert_eq!(registry.view_for(&StateId::ERROR), None);
        assert_eq!(registry.state_for(&2), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = StateRegistry::new();
        registry.insert(StateId::from("X"), 1);
        assert_eq!(registry.insert(StateId::from("X"), 2), Rebind::Orphaned(1));

        assert_eq!(registry.view_for(&StateId::from("X")), Some(&2));
        assert_eq!(registry.state_for(&1), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_view_rebind() {
        let mut registry = StateRegistry::new();
        registry.insert(StateId::EMPTY, 7);
        assert_eq!(registry.insert(StateId::EMPTY, 7), Rebind::Same);
        assert_eq!(registry.state_for(&7), Some(&StateId::EMPTY));
    }

    #[test]
    fn test_view_moved_to_other_state_overwrites_reverse() {
        let mut registry = StateRegistry::new();
        registry.insert(StateId::EMPTY, 7);
        registry.insert(StateId::ERROR, 7);

        assert_eq!(registry.state_for(&7), Some(&StateId::ERROR));
        assert_eq!(registry.view_for(&StateId::EMPTY), Some(&7));
        assert_eq!(registry.view_for(&StateId::ERROR), Some(&7));
    }

    #[test]
    fn test_shared_view_stays_reachable() {
        let mut registry = StateRegistry::new();
        registry.insert(StateId::LOADING, 0);
        registry.insert(StateId::EMPTY, 0);
        registry.insert(StateId::OFFLINE, 0);

        // Reverse entry names OFFLINE; rebinding EMPTY leaves it alone
        assert_eq!(registry.insert(StateId::EMPTY, 5), Rebind::Shared(0));
        assert_eq!(registry.state_for(&0), Some(&StateId::OFFLINE));

        // Rebinding OFFLINE repoints the reverse entry to LOADING
        assert_eq!(registry.insert(StateId::OFFLINE, 6), Rebind::Shared(0));
        assert_eq!(registry.state_for(&0), Some(&StateId::LOADING));

        assert_eq!(registry.insert(StateId::LOADING, 8), Rebind::Orphaned(0));
        assert!(!registry.contains_view(&0));
    }
}
