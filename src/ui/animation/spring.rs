//! Spring physics for card motion
//!
//! Uses time-based analytical solutions rather than frame-by-frame integration,
//! so a spring can be advanced by any `dt` without accumulating error.
//!
//! ## Bounciness / speed
//!
//! Card springs are described by a `bounciness` and a `speed` pair, which is
//! converted to `stiffness` / `damping` (mass 1) with the origami mapping:
//!
//! ```text
//! b = project(normalize(bounciness / 1.7, 0, 20), 0, 0.8)
//! s = normalize(speed / 1.7, 0, 20)
//! tension  = project(s, 0.5, 200)
//! friction = quad_out(b, no_bounce(tension), 0.01)
//! stiffness = (tension - 30) * 3.62 + 194
//! damping   = (friction - 8) * 3 + 25
//! ```
//!
//! ### Overdamped formula
//! ```text
//! angular_frequency = -sqrt(stiffness / mass)
//! leftover = -angular_frequency * delta - velocity
//! position(t) = to - (delta + t * leftover) * e^(t * angular_frequency)
//! ```
//!
//! ### Underdamped formula
//! ```text
//! damping_frequency = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * velocity) / damping_frequency
//! dfm = 0.5 * damping_frequency / mass
//! dm = -0.5 * damping / mass
//! position(t) = to - (cos(t * dfm) * delta + sin(t * dfm) * leftover) * e^(t * dm)
//! ```

use std::f64::consts::E;
use std::sync::Arc;

pub type Num = f64;

/// Numerical derivative step size
const H: Num = 0.001;

/// Displacement below which a spring counts as settled
pub const REST_DISPLACEMENT: Num = 0.001;

/// Speed below which a spring counts as settled
pub const REST_SPEED: Num = 0.001;

/// Default speed paired with a bounciness value
pub const DEFAULT_SPEED: Num = 12.0;

/// Spring parameters for physics simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    /// Build params from a bounciness / speed pair
    pub fn from_bounciness(bounciness: Num, speed: Num) -> Self {
        let b = project_normal(normalize(bounciness / 1.7, 0.0, 20.0), 0.0, 0.8);
        let s = normalize(speed / 1.7, 0.0, 20.0);

        let tension = project_normal(s, 0.5, 200.0);
        let friction = quadratic_out_interpolation(b, no_bounce_friction(tension), 0.01);

        Self {
            mass: 1.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            stiffness: (tension - 30.0) * 3.62 + 194.0,
        }
    }

    /// Check if overdamped: 1.0 <= damping / (2.0 * sqrt(stiffness * mass))
    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::from_bounciness(8.0, DEFAULT_SPEED)
    }
}

fn normalize(value: Num, start: Num, end: Num) -> Num {
    (value - start) / (end - start)
}

fn project_normal(n: Num, start: Num, end: Num) -> Num {
    start + n * (end - start)
}

fn quadratic_out_interpolation(t: Num, start: Num, end: Num) -> Num {
    let t = 2.0 * t - t * t;
    t * end + (1.0 - t) * start
}

/// Friction that yields no bounce for the given tension
fn no_bounce_friction(tension: Num) -> Num {
    if tension <= 18.0 {
        0.0007 * tension.powi(3) - 0.031 * tension.powi(2) + 0.64 * tension + 1.28
    } else if tension <= 44.0 {
        0.000044 * tension.powi(3) - 0.006 * tension.powi(2) + 0.36 * tension + 2.0
    } else {
        0.00000045 * tension.powi(3) - 0.000332 * tension.powi(2) + 0.1078 * tension + 5.84
    }
}

/// Solver function type
type SolverFn = Arc<dyn Fn(Num) -> Num + Send + Sync>;

/// Create solver function for spring animation
fn solve_spring(from: Num, velocity: Num, to: Num, params: &SpringParams) -> SolverFn {
    let stiffness = params.stiffness;
    let damping = params.damping;
    let mass = params.mass;
    let delta = to - from;

    if params.is_overdamped() {
        let angular_frequency = -(stiffness / mass).sqrt();
        let leftover = -angular_frequency * delta - velocity;

        Arc::new(move |t: Num| {
            if t < 0.0 {
                return from;
            }
            to - (delta + t * leftover) * E.powf(t * angular_frequency)
        })
    } else {
        let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
        let leftover = (damping * delta - 2.0 * mass * velocity) / damping_frequency;
        let dfm = 0.5 * damping_frequency / mass;
        let dm = -0.5 * damping / mass;

        Arc::new(move |t: Num| {
            if t < 0.0 {
                return from;
            }
            to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * E.powf(t * dm)
        })
    }
}

/// Create velocity function from position function (numerical derivative)
fn get_velocity(f: SolverFn) -> SolverFn {
    Arc::new(move |t: Num| (f(t + H) - f(t - H)) / (2.0 * H))
}

/// Spring animation with analytical solution
///
/// Retargeting keeps the current velocity, so a spring interrupted mid-flight
/// continues smoothly toward its new target. `set_position` jumps instantly and
/// cancels whatever motion was in flight.
pub struct Spring {
    current_position: Num,
    target_position: Num,
    current_time: Num,
    params: SpringParams,
    /// Cached position solver
    current_solver: SolverFn,
    /// Cached velocity function (first derivative)
    get_v: SolverFn,
}

impl std::fmt::Debug for Spring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spring")
            .field("current_position", &self.current_position)
            .field("target_position", &self.target_position)
            .field("current_time", &self.current_time)
            .field("params", &self.params)
            .finish()
    }
}

impl Spring {
    /// Create spring at rest at the given position
    pub fn new(current_position: Num) -> Self {
        Self::from_params(current_position, SpringParams::default())
    }

    /// Create spring at rest with custom params
    pub fn from_params(current_position: Num, params: SpringParams) -> Self {
        let target = current_position;
        Self {
            current_position,
            target_position: target,
            current_time: 0.0,
            params,
            current_solver: Arc::new(move |_| target),
            get_v: Arc::new(|_| 0.0),
        }
    }

    /// Reset solver from the current state, preserving velocity
    fn reset_solver(&mut self) {
        let cur_v = (self.get_v)(self.current_time);
        self.current_time = 0.0;
        self.current_solver = solve_spring(
            self.current_position,
            cur_v,
            self.target_position,
            &self.params,
        );
        self.get_v = get_velocity(Arc::clone(&self.current_solver));
    }

    /// Check if spring has settled on its target
    pub fn arrived(&self) -> bool {
        (self.target_position - self.current_position).abs() < REST_DISPLACEMENT
            && self.velocity().abs() < REST_SPEED
    }

    /// Set position immediately without animation
    pub fn set_position(&mut self, position: Num) {
        self.target_position = position;
        self.current_position = position;
        self.current_time = 0.0;
        self.current_solver = Arc::new(move |_| position);
        self.get_v = Arc::new(|_| 0.0);
    }

    /// Advance the spring
    ///
    /// `delta` is the time since the last update in seconds.
    pub fn update(&mut self, delta: Num) {
        self.current_time += delta;
        self.current_position = (self.current_solver)(self.current_time);

        if self.arrived() {
            self.set_position(self.target_position);
        }
    }

    /// Animate toward a new target
    pub fn set_target(&mut self, target_position: Num) {
        self.target_position = target_position;
        self.reset_solver();
    }

    pub fn position(&self) -> Num {
        self.current_position
    }

    #[cfg(test)]
    pub fn target(&self) -> Num {
        self.target_position
    }

    /// Get current velocity
    pub fn velocity(&self) -> Num {
        (self.get_v)(self.current_time)
    }
}

impl Clone for Spring {
    fn clone(&self) -> Self {
        Self {
            current_position: self.current_position,
            target_position: self.target_position,
            current_time: self.current_time,
            params: self.params,
            current_solver: Arc::clone(&self.current_solver),
            get_v: Arc::clone(&self.get_v),
        }
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring, seconds: Num) {
        let steps = (seconds * 60.0) as usize;
        for _ in 0..steps {
            spring.update(1.0 / 60.0);
        }
    }

    #[test]
    fn test_spring_basic() {
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);

        for _ in 0..3 {
            spring.update(0.01);
        }

        let pos = spring.position();
        assert!(pos > 0.0, "Spring should move from 0");
        assert!(pos < 100.0, "Spring should not reach target yet");
    }

    #[test]
    fn test_spring_settles_and_snaps() {
        let mut spring = Spring::from_params(50.0, SpringParams::from_bounciness(20.0, 12.0));
        spring.set_target(0.0);
        settle(&mut spring, 5.0);

        assert!(spring.arrived());
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn test_bouncy_spring_overshoots() {
        let mut spring = Spring::from_params(-150.0, SpringParams::from_bounciness(10.0, 12.0));
        spring.set_target(0.0);

        let mut max = Num::MIN;
        for _ in 0..120 {
            spring.update(1.0 / 60.0);
            max = max.max(spring.position());
        }
        assert!(max > 0.0, "Bouncy spring should overshoot the target");
    }

    #[test]
    fn test_bounciness_conversion() {
        let calm = SpringParams::from_bounciness(0.0, 12.0);
        let bouncy = SpringParams::from_bounciness(20.0, 12.0);

        assert_eq!(calm.mass, 1.0);
        assert!((calm.stiffness - bouncy.stiffness).abs() < 1e-9);
        assert!(bouncy.damping < calm.damping);
        assert!(!bouncy.is_overdamped());

        // speed 12 maps to ~342 stiffness
        assert!((calm.stiffness - 342.1).abs() < 0.5);
    }

    #[test]
    fn test_set_position_cancels_motion() {
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);
        spring.update(0.05);

        spring.set_position(-30.0);
        assert_eq!(spring.position(), -30.0);
        assert_eq!(spring.target(), -30.0);
        assert!(spring.arrived());

        spring.update(0.5);
        assert_eq!(spring.position(), -30.0);
    }

    #[test]
    fn test_overdamped() {
        let params = SpringParams {
            mass: 1.0,
            damping: 100.0,
            stiffness: 100.0,
        };
        assert!(params.is_overdamped());

        let params2 = SpringParams {
            mass: 1.0,
            damping: 5.0,
            stiffness: 100.0,
        };
        assert!(!params2.is_overdamped());
    }
}
