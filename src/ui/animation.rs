//! Animation system for swipe cards
//!
//! Three kinds of motion are used:
//!
//! - analytical springs ([`spring::Spring`]) for the card offset,
//! - a timed `iced::animation::Animation` for the entry fade,
//! - an `iced_anim` transition for the hover highlight.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::animation::prelude::*;
//!
//! let mut offset = Spring::from_params(50.0, SpringParams::from_bounciness(20.0, 12.0));
//! offset.set_target(0.0);
//! ```

mod hover;
pub mod prelude;
pub mod spring;

pub use hover::HoverAnimation;
