//! Frame-stepped fade animations

use state_layout::{Fade, Transition, TransitionDriver};

use crate::tree::{ViewKey, ViewTree};

/// A fade currently running on one view
#[derive(Debug, Clone, Copy)]
pub struct ActiveFade {
    /// View being faded
    pub view: ViewKey,
    /// Effect, duration and easing
    pub transition: Transition,
    /// Opacity the fade started from, captured on the first frame for fade-outs
    pub from: Option<f32>,
    /// Seconds since the fade started
    pub elapsed: f32,
}

/// Runs fade transitions on a [`ViewTree`]
///
/// [`begin`](TransitionDriver::begin) only records the fade. The host calls
/// [`advance`](Self::advance) once per frame to interpolate opacity. A fade
/// issued on a view that is already fading replaces the running one.
#[derive(Debug, Clone, Default)]
pub struct FadeAnimator {
    fades: Vec<ActiveFade>,
}

impl FadeAnimator {
    /// Create an animator with no running fades
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no fade is running
    pub fn is_idle(&self) -> bool {
        self.fades.is_empty()
    }

    /// The fade running on `view`, if any
    pub fn fade_of(&self, view: ViewKey) -> Option<&ActiveFade> {
        self.fades.iter().find(|fade| fade.view == view)
    }

    /// Every running fade, oldest first
    pub fn fades(&self) -> &[ActiveFade] {
        &self.fades
    }

    /// Step every running fade by `dt` seconds and write opacity into `tree`
    pub fn advance(&mut self, tree: &mut ViewTree, dt: f32) {
        self.fades.retain_mut(|fade| {
            let Some(node) = tree.get(fade.view) else {
                // View was destroyed mid-fade
                return false;
            };
            if node.parent != Some(tree.root()) {
                // Removed from the container mid-fade; nothing left to draw
                tree.set_opacity(fade.view, 1.0);
                tree.set_ghost(fade.view, false);
                return false;
            }
            let from = *fade.from.get_or_insert(node.opacity);
            fade.elapsed += dt;

            let effect = fade.transition.effect;
            if fade.transition.is_finished(fade.elapsed) {
                log::trace!("{effect:?} finished on {:?}", fade.view);
                // Hidden views get their opacity back for the next time they are shown
                tree.set_opacity(fade.view, 1.0);
                tree.set_ghost(fade.view, false);
                return false;
            }

            tree.set_opacity(fade.view, fade.transition.opacity_at(from, fade.elapsed));
            tree.set_ghost(fade.view, effect == Fade::Out);
            true
        });
    }

    /// Finish every running fade immediately
    pub fn finish_all(&mut self, tree: &mut ViewTree) {
        for fade in self.fades.drain(..) {
            tree.set_opacity(fade.view, 1.0);
            tree.set_ghost(fade.view, false);
        }
    }
}

impl TransitionDriver<ViewKey> for FadeAnimator {
    fn begin(&mut self, targets: &[ViewKey], transition: &Transition) {
        for view in targets {
            self.fades.retain(|fade| fade.view != *view);
            log::trace!(
                "{:?} on {view:?} for {}s",
                transition.effect,
                transition.duration
            );
            self.fades.push(ActiveFade {
                view: *view,
                transition: *transition,
                from: match transition.effect {
                    Fade::In => Some(Fade::In.start_opacity()),
                    Fade::Out => None,
                },
                elapsed: 0.0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use state_layout::transition::linear;
    use state_layout::{ViewHost, Visibility};

    fn tree_with_view() -> (ViewTree, ViewKey) {
        let mut tree = ViewTree::default();
        let view = tree.create_view("content", Vec2::ONE);
        tree.add_child(view);
        (tree, view)
    }

    #[test]
    fn test_fade_in_interpolates_then_restores() {
        let (mut tree, view) = tree_with_view();
        let mut animator = FadeAnimator::new();
        let transition = Transition::fade_in().with_easing(linear).with_duration(1.0);

        animator.begin(&[view], &transition);
        animator.advance(&mut tree, 0.5);
        assert_eq!(tree.get(view).unwrap().opacity, 0.5);
        assert!(!tree.get(view).unwrap().ghost);

        animator.advance(&mut tree, 0.5);
        assert!(animator.is_idle());
        assert_eq!(tree.get(view).unwrap().opacity, 1.0);
    }

    #[test]
    fn test_fade_out_keeps_hidden_view_drawn() {
        let (mut tree, view) = tree_with_view();
        let mut animator = FadeAnimator::new();
        let transition = Transition::fade_out().with_easing(linear).with_duration(1.0);

        animator.begin(&[view], &transition);
        tree.set_visibility(&view, Visibility::Gone);
        animator.advance(&mut tree, 0.25);

        let drawn = tree.draw_list();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].opacity, 0.75);

        animator.advance(&mut tree, 1.0);
        assert!(tree.draw_list().is_empty());
        assert_eq!(tree.get(view).unwrap().opacity, 1.0);
    }

    #[test]
    fn test_last_issued_fade_wins() {
        let (_, view) = tree_with_view();
        let mut animator = FadeAnimator::new();

        animator.begin(&[view], &Transition::fade_out());
        animator.begin(&[view], &Transition::fade_in());

        assert_eq!(animator.fades().len(), 1);
        assert_eq!(animator.fade_of(view).unwrap().transition.effect, Fade::In);
    }

    #[test]
    fn test_destroyed_view_drops_fade() {
        let (mut tree, view) = tree_with_view();
        let mut animator = FadeAnimator::new();
        animator.begin(&[view], &Transition::fade_in());

        tree.destroy(view);
        animator.advance(&mut tree, 0.016);
        assert!(animator.is_idle());
    }

    #[test]
    fn test_removed_view_drops_fade_out() {
        let (mut tree, view) = tree_with_view();
        let mut animator = FadeAnimator::new();
        let transition = Transition::fade_out().with_easing(linear).with_duration(1.0);

        animator.begin(&[view], &transition);
        tree.set_visibility(&view, Visibility::Gone);
        animator.advance(&mut tree, 0.25);
        assert!(tree.get(view).unwrap().ghost);

        tree.remove_child(&view);
        animator.advance(&mut tree, 0.25);
        assert!(animator.is_idle());

        tree.add_child(view);
        animator.advance(&mut tree, 0.25);
        let node = tree.get(view).unwrap();
        assert!(!node.is_drawn());
        assert_eq!(node.opacity, 1.0);
        assert!(tree.draw_list().is_empty());
    }

    #[test]
    fn test_finish_all() {
        let (mut tree, view) = tree_with_view();
        let mut animator = FadeAnimator::new();
        animator.begin(&[view], &Transition::fade_out());
        animator.advance(&mut tree, 0.1);

        animator.finish_all(&mut tree);
        assert!(animator.is_idle());
        assert!(!tree.get(view).unwrap().ghost);
        assert_eq!(tree.get(view).unwrap().opacity, 1.0);
    }
}
