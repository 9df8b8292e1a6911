//! Tilt applied to a card while it is dragged

use iced::{Degrees, Radians};

/// Rotation for a horizontal displacement
///
/// Maps `[-screen_width, screen_width]` linearly onto
/// `[-max_degrees, max_degrees]` and clamps outside that range.
pub fn rotation_degrees(dx: f32, screen_width: f32, max_degrees: f32) -> Degrees {
    if screen_width <= 0.0 || !dx.is_finite() {
        return Degrees(0.0);
    }
    let t = (dx / screen_width).clamp(-1.0, 1.0);
    Degrees(t * max_degrees)
}

/// Same as [`rotation_degrees`], in radians for the renderer
pub fn rotation_radians(dx: f32, screen_width: f32, max_degrees: f32) -> Radians {
    rotation_degrees(dx, screen_width, max_degrees).into()
}
