//! UI module for the card deck
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Low-level canvas programs
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//!
//! Card motion and gesture state live in `swipe`, on top of the spring and
//! hover animations in `animation`.

pub mod animation;
pub mod components;
pub mod primitives;
pub mod swipe;
pub mod theme;
pub mod widgets;
