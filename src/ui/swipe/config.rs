//! Tunables for swipe cards

use std::time::Duration;

use crate::ui::animation::spring::{DEFAULT_SPEED, SpringParams};

/// Behavior and motion parameters shared by every card in a deck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Releasing with a horizontal offset below this value dismisses the card
    pub dismiss_threshold: f32,
    /// Initial downward displacement of the entry animation
    pub entry_offset: f32,
    /// Bounciness of the entry spring
    pub entry_bounciness: f32,
    /// Bounciness of the spring-back after a drag
    pub return_bounciness: f32,
    /// Speed paired with both bounciness values
    pub spring_speed: f32,
    /// Duration of the entry fade
    pub fade_duration: Duration,
    /// Rotation reached at a full screen width of displacement
    pub max_rotation_degrees: f32,
    /// Pointer travel below which a press is still a tap
    pub tap_slop: f32,
}

impl SwipeConfig {
    pub fn entry_spring(&self) -> SpringParams {
        SpringParams::from_bounciness(self.entry_bounciness as f64, self.spring_speed as f64)
    }

    pub fn return_spring(&self) -> SpringParams {
        SpringParams::from_bounciness(self.return_bounciness as f64, self.spring_speed as f64)
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            dismiss_threshold: -200.0,
            entry_offset: 50.0,
            entry_bounciness: 20.0,
            return_bounciness: 10.0,
            spring_speed: DEFAULT_SPEED as f32,
            fade_duration: Duration::from_millis(500),
            max_rotation_degrees: 50.0,
            tap_slop: 2.0,
        }
    }
}
