//! # state-layout-headless
//!
//! Render-free reference host for [`state_layout`].
//!
//! - [`ViewTree`] - Arena of views implementing [`ViewHost`](state_layout::ViewHost)
//! - [`LayoutCatalog`] - Named layout templates the tree builds views from
//! - [`FadeAnimator`] - [`TransitionDriver`](state_layout::TransitionDriver) that
//!   interpolates view opacity frame by frame
//!
//! Useful for tests, for tooling that needs to reason about what a state
//! layout would draw, and as a template for hooking the container into a
//! real toolkit.

mod animator;
mod catalog;
mod tree;

pub use animator::*;
pub use catalog::*;
pub use tree::*;

use state_layout::StateLayout;

/// A state layout hosted on a [`ViewTree`] and animated by a [`FadeAnimator`]
pub type HeadlessStateLayout = StateLayout<ViewTree, FadeAnimator>;

/// Advance every running fade of `layout` by `dt` seconds
pub fn advance(layout: &mut HeadlessStateLayout, dt: f32) {
    let (tree, animator) = layout.parts_mut();
    animator.advance(tree, dt);
}
