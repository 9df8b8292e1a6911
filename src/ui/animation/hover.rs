//! Hover highlight animation using iced_anim
//!
//! A card lifts its shadow slightly while the cursor rests on it.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover fade duration
const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Hover progress for a single element, 0.0 (idle) to 1.0 (hovered)
#[derive(Debug)]
pub struct HoverAnimation {
    animation: Animated<f32>,
    hovered: bool,
}

impl Default for HoverAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, hover_easing()),
            hovered: false,
        }
    }

    /// Switch hover state; repeated calls with the same state are ignored
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        let target = if hovered { 1.0 } else { 0.0 };
        self.animation.update(target.into());
    }

    #[cfg(test)]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current progress, clamped to 0.0..=1.0
    pub fn progress(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let anim = HoverAnimation::new();
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_hovered());
    }

    #[test]
    fn test_hover_targets_one() {
        let mut anim = HoverAnimation::new();
        anim.set_hovered(true);
        assert!(anim.is_hovered());
        assert!(anim.is_animating() || anim.progress() > 0.0);

        anim.tick(Instant::now() + Duration::from_secs(1));
        assert!(anim.progress() >= 0.0 && anim.progress() <= 1.0);
    }

    #[test]
    fn test_repeated_state_is_ignored() {
        let mut anim = HoverAnimation::new();
        anim.set_hovered(false);
        assert!(!anim.is_animating());
    }
}
