//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait or `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`SwipeCardCanvas`] - Draws one card with its offset, tilt and fade applied

pub mod swipe_card_canvas;

pub use swipe_card_canvas::{CANVAS_HEIGHT, SwipeCardCanvas};
