//! Enter/exit transition descriptors
//!
//! A [`Transition`] says *what* an animated visibility change looks like:
//! which fade, how long, and along which curve. Running it is the job of the
//! host's [`TransitionDriver`](crate::TransitionDriver).

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (no easing)
pub fn linear(t: f32) -> f32 {
    t
}

/// Ease in (quadratic) - slow start, accelerating
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Ease out (quadratic) - fast start, decelerating
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Ease in-out (quadratic) - slow start and end, fast middle
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Ease in (cubic) - stronger slow start effect
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Ease out (cubic) - stronger fast start effect
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t + 1.0
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Visual effect of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fade {
    /// Opacity goes from transparent to opaque
    In,
    /// Opacity goes from opaque to transparent
    Out,
}

impl Fade {
    /// Opacity at the start of the fade
    pub fn start_opacity(self) -> f32 {
        match self {
            Fade::In => 0.0,
            Fade::Out => 1.0,
        }
    }

    /// Opacity once the fade has finished
    pub fn target_opacity(self) -> f32 {
        match self {
            Fade::In => 1.0,
            Fade::Out => 0.0,
        }
    }
}

/// Transition configuration
///
/// Defines the fade effect, how long it takes and what easing function to use.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// Fade direction
    pub effect: Fade,

    /// Duration in seconds
    pub duration: f32,

    /// Easing function to apply
    pub easing: EasingFn,
}

impl Transition {
    /// Create a new transition with custom effect, duration and easing
    pub fn new(effect: Fade, duration: f32, easing: EasingFn) -> Self {
        Self {
            effect,
            duration,
            easing,
        }
    }

    /// Default enter transition: fade in over 300ms, accelerating
    pub fn fade_in() -> Self {
        Self::new(Fade::In, 0.3, ease_in)
    }

    /// Default exit transition: fade out over 300ms, decelerating
    pub fn fade_out() -> Self {
        Self::new(Fade::Out, 0.3, ease_out)
    }

    /// Replace the duration (seconds)
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Replace the easing function
    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Eased progress after `elapsed` seconds, clamped to 0.0..=1.0
    pub fn sample(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = (elapsed / self.duration).clamp(0.0, 1.0);
        (self.easing)(t).clamp(0.0, 1.0)
    }

    /// Opacity after `elapsed` seconds, starting from `from`
    pub fn opacity_at(&self, from: f32, elapsed: f32) -> f32 {
        lerp_f32(from, self.effect.target_opacity(), self.sample(elapsed))
    }

    /// Whether the transition has run its course after `elapsed` seconds
    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_easing() {
        assert_eq!(linear(0.0), 0.0);
        assert_eq!(linear(0.5), 0.5);
        assert_eq!(linear(1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        assert_eq!(ease_in(0.0), 0.0);
        assert!(ease_in(0.5) < 0.5); // Slower at start
        assert_eq!(ease_in(1.0), 1.0);
    }

    #[test]
    fn test_ease_out() {
        assert_eq!(ease_out(0.0), 0.0);
        assert!(ease_out(0.5) > 0.5); // Faster at start
        assert_eq!(ease_out(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!(ease_in_out(0.25) < 0.25); // Slow start
        assert_eq!(ease_in_out(0.5), 0.5);
        assert!(ease_in_out(0.75) > 0.75); // Slow end
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn test_cubic_easing() {
        assert_eq!(ease_in_cubic(0.0), 0.0);
        assert!(ease_in_cubic(0.5) < ease_in(0.5)); // Stronger than quadratic
        assert_eq!(ease_in_cubic(1.0), 1.0);

        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert!(ease_out_cubic(0.5) > ease_out(0.5));
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_custom_easing_shapes_opacity() {
        let transition = Transition::fade_in()
            .with_duration(1.0)
            .with_easing(ease_in_out);
        assert_eq!(transition.opacity_at(0.0, 0.5), 0.5);
        assert!(transition.opacity_at(0.0, 0.25) < 0.25);
    }

    #[test]
    fn test_defaults() {
        let enter = Transition::fade_in();
        assert_eq!(enter.effect, Fade::In);
        assert_eq!(enter.duration, 0.3);
        assert!(enter.sample(0.15) < 0.5); // Accelerating

        let exit = Transition::fade_out();
        assert_eq!(exit.effect, Fade::Out);
        assert!(exit.sample(0.15) > 0.5); // Decelerating
    }

    #[test]
    fn test_sample_clamps() {
        let t = Transition::fade_in().with_easing(linear).with_duration(1.0);
        assert_eq!(t.sample(-1.0), 0.0);
        assert_eq!(t.sample(0.25), 0.25);
        assert_eq!(t.sample(5.0), 1.0);
        assert!(!t.is_finished(0.5));
        assert!(t.is_finished(1.0));
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let t = Transition::fade_out().with_duration(0.0);
        assert_eq!(t.sample(0.0), 1.0);
        assert_eq!(t.opacity_at(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_opacity_at() {
        let t = Transition::fade_out().with_easing(linear).with_duration(2.0);
        assert_eq!(t.opacity_at(1.0, 1.0), 0.5);
        assert_eq!(t.opacity_at(0.8, 2.0), 0.0);
    }
}
