//! Host collaborators
//!
//! The container owns its views only logically. Parenting, visibility flags,
//! view construction and animation all belong to the host UI toolkit and are
//! reached through the traits in this module.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::source::LayoutId;
use crate::transition::Transition;

/// Visibility flag of a managed view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Laid out and drawn
    Visible,
    /// Not drawn and takes no space
    Gone,
}

/// The host container a [`StateLayout`](crate::StateLayout) manages views in
pub trait ViewHost {
    /// Handle to a renderable subtree. Compared by identity.
    type View: Clone + Eq + Hash + Debug;

    /// Whether `view` is already a child of the container
    fn contains_child(&self, view: &Self::View) -> bool;

    /// Make `view` a child of the container
    fn add_child(&mut self, view: Self::View);

    /// Detach `view` from the container
    fn remove_child(&mut self, view: &Self::View);

    /// Set the visibility flag of `view`
    fn set_visibility(&mut self, view: &Self::View, visibility: Visibility);

    /// Current visibility flag of `view`, if the host knows it
    fn visibility(&self, view: &Self::View) -> Option<Visibility>;

    /// Build a view from a layout descriptor, not yet attached to any parent
    ///
    /// An unknown descriptor is a configuration error and must be reported
    /// as [`StateLayoutError::UnresolvedLayout`](crate::StateLayoutError::UnresolvedLayout).
    fn inflate(&mut self, layout: &LayoutId) -> Result<Self::View>;

    /// Build the zero-size placeholder view, not yet attached to any parent
    fn placeholder(&mut self) -> Self::View;
}

/// Runs animated visibility changes
///
/// `begin` is fire-and-forget: it schedules the animation on the host's
/// update pass and returns immediately. The visibility flag itself is set by
/// the container right after calling `begin`, so a driver sees the
/// pre-change state and animates towards the flag.
pub trait TransitionDriver<V> {
    /// Start `transition` on every view in `targets`
    fn begin(&mut self, targets: &[V], transition: &Transition);
}

/// Driver that never animates
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransition;

impl<V> TransitionDriver<V> for NoTransition {
    fn begin(&mut self, _targets: &[V], _transition: &Transition) {}
}

impl<V, F> TransitionDriver<V> for F
where
    F: FnMut(&[V], &Transition),
{
    fn begin(&mut self, targets: &[V], transition: &Transition) {
        self(targets, transition)
    }
}
