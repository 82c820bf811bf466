//! Click routing from managed views to per-state listeners

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::registry::StateRegistry;
use crate::state::StateId;

/// Callback invoked with the clicked view and the state it is bound under
pub type StateClickListener<V> = Box<dyn FnMut(&V, &StateId)>;

/// Single click handler shared by every managed view
///
/// The dispatcher is attached to a view once both a binding and a listener
/// exist for the view's state. A click on an attached view is routed by
/// reverse lookup: view → state → listener. Anything that fails along the
/// way swallows the click.
pub struct ClickDispatcher<V> {
    listeners: HashMap<StateId, StateClickListener<V>>,
    attached: HashSet<V>,
}

impl<V> Default for ClickDispatcher<V> {
    fn default() -> Self {
        Self {
            listeners: HashMap::new(),
            attached: HashSet::new(),
        }
    }
}

impl<V> fmt::Debug for ClickDispatcher<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickDispatcher")
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .field("attached", &self.attached)
            .finish()
    }
}

impl<V: Clone + Eq + Hash> ClickDispatcher<V> {
    /// Create a dispatcher with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the listener for `state`, replacing any previous one
    pub fn set_listener(&mut self, state: StateId, listener: StateClickListener<V>) {
        self.listeners.insert(state, listener);
    }

    /// Whether a listener is registered for `state`
    pub fn has_listener(&self, state: &StateId) -> bool {
        self.listeners.contains_key(state)
    }

    /// Start routing clicks on `view`
    pub fn attach(&mut self, view: V) {
        self.attached.insert(view);
    }

    /// Stop routing clicks on `view`
    pub fn detach(&mut self, view: &V) {
        self.attached.remove(view);
    }

    /// Whether clicks on `view` are routed
    pub fn is_attached(&self, view: &V) -> bool {
        self.attached.contains(view)
    }

    /// Route a click on `view`
    ///
    /// Returns the state whose listener ran, or `None` if the click was
    /// swallowed.
    pub fn dispatch(&mut self, registry: &StateRegistry<V>, view: &V) -> Option<StateId> {
        if !self.attached.contains(view) {
            log::trace!("click on unmanaged view swallowed");
            return None;
        }
        let state = registry.state_for(view)?.clone();
        let Some(listener) = self.listeners.get_mut(&state) else {
            log::trace!("no listener for state {state}, click swallowed");
            return None;
        };
        listener(view, &state);
        Some(state)
    }
}
