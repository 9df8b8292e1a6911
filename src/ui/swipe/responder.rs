//! Gesture responder for a single card
//!
//! A press does not claim the drag by itself: the card becomes the responder
//! only once the pointer moves past the tap slop. Until then a release is a
//! tap. While dragging, the responder never yields the gesture on request; it
//! can only be terminated by the system.

use iced::{Point, Vector};

/// Responder state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    /// Pointer is down but has not moved past the tap slop
    Pressed { origin: Point },
    /// Pointer owns the card and drives its horizontal offset
    Dragging { origin: Point, displacement: Vector },
}

/// Outcome of releasing the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Nothing was held
    Ignored,
    /// Released without dragging
    Tap,
    /// Released after dragging
    Drag { displacement: Vector },
}

#[derive(Debug, Clone)]
pub struct Responder {
    phase: Phase,
    tap_slop: f32,
}

impl Responder {
    pub fn new(tap_slop: f32) -> Self {
        Self {
            phase: Phase::Idle,
            tap_slop: tap_slop.max(0.0),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Whether a pointer is currently held on the card
    pub fn is_held(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Pointer went down on the card
    pub fn press(&mut self, position: Point) {
        if let Phase::Idle = self.phase {
            tracing::debug!("card pressed at {:?}", position);
            self.phase = Phase::Pressed { origin: position };
        }
    }

    /// Pointer moved; returns the horizontal displacement while dragging
    pub fn moved(&mut self, position: Point) -> Option<f32> {
        match self.phase {
            Phase::Idle => None,
            Phase::Pressed { origin } => {
                let displacement = position - origin;
                if displacement.x.hypot(displacement.y) > self.tap_slop {
                    tracing::debug!("card drag started");
                    self.phase = Phase::Dragging {
                        origin,
                        displacement,
                    };
                    Some(displacement.x)
                } else {
                    None
                }
            }
            Phase::Dragging { origin, .. } => {
                let displacement = position - origin;
                self.phase = Phase::Dragging {
                    origin,
                    displacement,
                };
                Some(displacement.x)
            }
        }
    }

    /// Pointer went up
    pub fn release(&mut self) -> Release {
        let release = match self.phase {
            Phase::Idle => Release::Ignored,
            Phase::Pressed { .. } => Release::Tap,
            Phase::Dragging { displacement, .. } => Release::Drag { displacement },
        };
        self.phase = Phase::Idle;
        release
    }

    /// The system took the gesture away
    ///
    /// Returns `true` when a drag was interrupted and the card must spring back.
    pub fn terminate(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if self.is_held() {
            tracing::debug!("card gesture terminated (dragging: {})", was_dragging);
        }
        self.phase = Phase::Idle;
        was_dragging
    }

    /// Another element asks to take over the gesture
    ///
    /// Refused while the pointer is held on this card.
    pub fn request_termination(&self) -> bool {
        !self.is_held()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_is_tap() {
        let mut responder = Responder::default();
        responder.press(Point::new(10.0, 10.0));
        assert_eq!(responder.moved(Point::new(11.0, 10.0)), None);
        assert_eq!(responder.release(), Release::Tap);
        assert_eq!(responder.phase(), Phase::Idle);
    }

    #[test]
    fn test_moving_past_slop_starts_drag() {
        let mut responder = Responder::default();
        responder.press(Point::new(100.0, 50.0));
        assert_eq!(responder.moved(Point::new(80.0, 52.0)), Some(-20.0));
        assert!(responder.is_dragging());

        // Tracks absolute displacement from the press origin
        assert_eq!(responder.moved(Point::new(-150.0, 60.0)), Some(-250.0));

        match responder.release() {
            Release::Drag { displacement } => assert_eq!(displacement.x, -250.0),
            other => panic!("expected drag release, got {:?}", other),
        }
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut responder = Responder::default();
        assert_eq!(responder.release(), Release::Ignored);
        assert_eq!(responder.moved(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_terminate() {
        let mut responder = Responder::default();
        responder.press(Point::ORIGIN);
        assert!(!responder.terminate(), "tap cancelled, nothing to spring back");

        responder.press(Point::ORIGIN);
        responder.moved(Point::new(40.0, 0.0));
        assert!(responder.terminate());
        assert_eq!(responder.release(), Release::Ignored);
    }

    #[test]
    fn test_refuses_termination_while_held() {
        let mut responder = Responder::default();
        assert!(responder.request_termination());

        responder.press(Point::ORIGIN);
        responder.moved(Point::new(30.0, 0.0));
        assert!(!responder.request_termination());
        assert!(responder.is_dragging());
    }

    #[test]
    fn test_second_press_keeps_origin() {
        let mut responder = Responder::default();
        responder.press(Point::new(0.0, 0.0));
        responder.press(Point::new(50.0, 0.0));
        assert_eq!(responder.moved(Point::new(10.0, 0.0)), Some(10.0));
    }
}
