//! Animated state of one swipe card
//!
//! The card owns its offset springs, entry fade, hover highlight and gesture
//! responder. Nothing else writes to them; the host only forwards pointer
//! events and animation frames.

use std::time::Instant;

use iced::{Radians, Vector};

use super::config::SwipeConfig;
use super::responder::{Release, Responder};
use super::rotation::rotation_radians;
use crate::ui::animation::prelude::*;

/// Something the card wants its owner to know
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// Tapped without dragging
    Selected,
    /// Released past the dismiss threshold
    Dismissed,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translation: Vector,
    pub rotation: Radians,
    pub opacity: f32,
    pub hover: f32,
}

pub struct SwipeCard {
    config: SwipeConfig,
    offset_x: Spring,
    offset_y: Spring,
    opacity: Animation<bool>,
    hover: HoverAnimation,
    responder: Responder,
    mounted: bool,
    last_tick: Option<Instant>,
}

impl std::fmt::Debug for SwipeCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeCard")
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .field("responder", &self.responder)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl SwipeCard {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            offset_x: Spring::from_params(0.0, config.return_spring()),
            offset_y: Spring::from_params(config.entry_offset as f64, config.entry_spring()),
            opacity: Animation::new(false)
                .duration(config.fade_duration)
                .easing(TimingEasing::EaseInOut),
            hover: HoverAnimation::new(),
            responder: Responder::new(config.tap_slop),
            mounted: false,
            last_tick: None,
            config,
        }
    }

    /// Start the entry animation; later calls do nothing
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.offset_y.set_target(0.0);
        self.opacity.go_mut(true, now);
        self.last_tick = Some(now);
    }

    pub fn pointer_pressed(&mut self, position: iced::Point) {
        self.responder.press(position);
    }

    /// Follow the pointer without smoothing while dragging
    pub fn pointer_moved(&mut self, position: iced::Point) {
        if let Some(dx) = self.responder.moved(position) {
            self.offset_x.set_position(dx as f64);
        }
    }

    pub fn pointer_released(&mut self) -> Option<CardEvent> {
        match self.responder.release() {
            Release::Ignored => None,
            Release::Tap => Some(CardEvent::Selected),
            Release::Drag { .. } => {
                let dismissed = self.offset_x.position() < self.config.dismiss_threshold as f64;
                self.spring_back();
                if dismissed {
                    tracing::debug!("card released past dismiss threshold");
                    Some(CardEvent::Dismissed)
                } else {
                    None
                }
            }
        }
    }

    /// The system took the gesture; spring back without judging the release
    pub fn gesture_terminated(&mut self) {
        if self.responder.terminate() {
            self.spring_back();
        }
    }

    /// Always refused while the card holds the pointer
    pub fn request_termination(&self) -> bool {
        self.responder.request_termination()
    }

    pub fn is_dragging(&self) -> bool {
        self.responder.is_dragging()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hover.set_hovered(hovered);
    }

    fn spring_back(&mut self) {
        let idle = self.offset_x.arrived() && self.offset_y.arrived();
        self.offset_x.set_target(0.0);
        // Frames stop while nothing moves; restart the clock so the first
        // frame does not cover idle time. A running clock is kept.
        if idle {
            self.last_tick = None;
        }
    }

    /// Advance all animations to `now`
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            let dt = now.saturating_duration_since(last).as_secs_f64();
            self.offset_x.update(dt);
            self.offset_y.update(dt);
        }
        self.last_tick = Some(now);
        self.hover.tick(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.offset_x.arrived()
            || !self.offset_y.arrived()
            || self.opacity.is_animating(now)
            || self.hover.is_animating()
    }

    pub fn offset(&self) -> Vector {
        Vector::new(
            self.offset_x.position() as f32,
            self.offset_y.position() as f32,
        )
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        self.opacity
            .interpolate(0.0_f32, 1.0_f32, now)
            .clamp(0.0, 1.0)
    }

    pub fn rotation(&self, screen_width: f32) -> Radians {
        rotation_radians(
            self.offset_x.position() as f32,
            screen_width,
            self.config.max_rotation_degrees,
        )
    }

    pub fn transform(&self, now: Instant, screen_width: f32) -> CardTransform {
        CardTransform {
            translation: self.offset(),
            rotation: self.rotation(screen_width),
            opacity: self.opacity(now),
            hover: self.hover.progress(),
        }
    }
}

impl Default for SwipeCard {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    /// Run frames for `seconds` starting at `start`, returning the last instant
    fn run_frames(card: &mut SwipeCard, start: Instant, seconds: u64) -> Instant {
        let mut now = start;
        let frames = seconds * 1000 / FRAME.as_millis() as u64;
        for _ in 0..frames {
            now += FRAME;
            card.tick(now);
        }
        now
    }

    fn mounted_card() -> (SwipeCard, Instant) {
        let mut card = SwipeCard::default();
        let start = Instant::now();
        card.mount(start);
        let now = run_frames(&mut card, start, 4);
        (card, now)
    }

    fn drag(card: &mut SwipeCard, to_x: f32) -> Option<CardEvent> {
        card.pointer_pressed(Point::new(300.0, 100.0));
        card.pointer_moved(Point::new(300.0 + to_x / 2.0, 101.0));
        card.pointer_moved(Point::new(300.0 + to_x, 102.0));
        card.pointer_released()
    }

    #[test]
    fn test_opacity_before_and_after_entry() {
        let mut card = SwipeCard::default();
        let start = Instant::now();
        card.mount(start);

        assert_eq!(card.opacity(start), 0.0);
        assert!(card.is_animating(start));

        let later = start + Duration::from_millis(600);
        assert_eq!(card.opacity(later), 1.0);
    }

    #[test]
    fn test_entry_springs_to_rest() {
        let mut card = SwipeCard::default();
        assert_eq!(card.offset(), Vector::new(0.0, 50.0));

        let start = Instant::now();
        card.mount(start);
        let now = run_frames(&mut card, start, 4);

        assert_eq!(card.offset(), Vector::new(0.0, 0.0));
        assert!(!card.is_animating(now));
    }

    #[test]
    fn test_mount_runs_once() {
        let (mut card, now) = mounted_card();
        card.mount(now);
        assert_eq!(card.offset().y, 0.0);
        assert_eq!(card.opacity(now), 1.0);
    }

    #[test]
    fn test_short_drag_springs_back_without_dismissal() {
        for dx in [-200.0, -199.0, -50.0, 0.0, 150.0, 600.0] {
            let (mut card, now) = mounted_card();
            let event = drag(&mut card, dx);
            assert_ne!(event, Some(CardEvent::Dismissed), "dx={dx}");

            run_frames(&mut card, now, 4);
            assert_eq!(card.offset(), Vector::new(0.0, 0.0), "dx={dx}");
        }
    }

    #[test]
    fn test_long_drag_dismisses_once() {
        for dx in [-201.0, -250.0, -800.0] {
            let (mut card, now) = mounted_card();
            assert_eq!(drag(&mut card, dx), Some(CardEvent::Dismissed), "dx={dx}");

            // A stray second release does nothing
            assert_eq!(card.pointer_released(), None);

            run_frames(&mut card, now, 4);
            assert_eq!(card.offset(), Vector::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_drag_tracks_pointer_directly() {
        let (mut card, _) = mounted_card();
        card.pointer_pressed(Point::new(200.0, 100.0));
        card.pointer_moved(Point::new(120.0, 100.0));
        assert_eq!(card.offset().x, -80.0);
        assert!(card.is_dragging());
        assert!(card.rotation(400.0).0 < 0.0);
    }

    #[test]
    fn test_termination_springs_back_without_dismissal() {
        let (mut card, now) = mounted_card();
        card.pointer_pressed(Point::new(300.0, 100.0));
        card.pointer_moved(Point::new(0.0, 100.0));
        assert!(!card.request_termination());

        card.gesture_terminated();
        assert_eq!(card.pointer_released(), None);

        run_frames(&mut card, now, 4);
        assert_eq!(card.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn test_tap_selects_without_moving() {
        let (mut card, _) = mounted_card();
        card.pointer_pressed(Point::new(150.0, 80.0));
        card.pointer_moved(Point::new(151.0, 80.0));
        assert_eq!(card.pointer_released(), Some(CardEvent::Selected));
        assert_eq!(card.offset(), Vector::new(0.0, 0.0));
        assert_eq!(card.pointer_released(), None);
    }

    #[test]
    fn test_drag_interrupts_spring_back() {
        let (mut card, now) = mounted_card();
        drag(&mut card, -150.0);
        card.tick(now);
        card.tick(now + FRAME);

        card.pointer_pressed(Point::new(300.0, 100.0));
        card.pointer_moved(Point::new(260.0, 100.0));
        assert_eq!(card.offset().x, -40.0);
    }

    #[test]
    fn test_release_during_entry_keeps_entry_moving() {
        let mut card = SwipeCard::default();
        let start = Instant::now();
        card.mount(start);
        let now = start + FRAME;
        card.tick(now);
        let y = card.offset().y;
        assert!(y > 0.0 && y < 50.0);

        drag(&mut card, -150.0);
        card.tick(now + FRAME);
        assert!(card.offset().y < y);
        assert!(card.offset().x > -150.0);
    }

    #[test]
    fn test_release_after_idle_skips_idle_time() {
        let (mut card, now) = mounted_card();
        drag(&mut card, -150.0);

        // The first frame after a long pause only starts the clock
        card.tick(now + Duration::from_secs(10));
        assert_eq!(card.offset().x, -150.0);
        card.tick(now + Duration::from_secs(10) + FRAME);
        assert!(card.offset().x > -150.0);
    }

    #[test]
    fn test_transform_matches_parts() {
        let (card, now) = mounted_card();
        let transform = card.transform(now, 400.0);
        assert_eq!(transform.translation, Vector::new(0.0, 0.0));
        assert_eq!(transform.rotation.0, 0.0);
        assert_eq!(transform.opacity, 1.0);
    }
}
