//! Swipe card core
//!
//! Toolkit-facing state for a draggable card: springs, entry fade, gesture
//! responder and the tilt mapping. Rendering lives in
//! [`crate::ui::primitives::swipe_card_canvas`].

mod card;
mod config;
mod responder;
mod rotation;

pub use card::{CardEvent, CardTransform, SwipeCard};
pub use config::SwipeConfig;
