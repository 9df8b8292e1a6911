//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::animation::prelude::*;
//! ```

pub use super::HoverAnimation;
pub use super::spring::Spring;
pub use iced::animation::{Animation, Easing as TimingEasing};
