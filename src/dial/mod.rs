use std::f64::consts::PI;
use std::time::Duration;

pub mod animator;
pub mod geometry;
pub mod machine;
pub mod tracker;

pub use animator::{AnimationStep, ReleaseAnimator};
pub use geometry::{DialMetrics, Digit, DigitError, DigitLayout, Point};
pub use machine::{DialPhase, DialSnapshot, DialState, GestureAction, RotaryDial, Session};

pub const DIGIT_COUNT: usize = 10;
pub const SLOT_COUNT: usize = DIGIT_COUNT + 1; // ten digits plus the limiter
pub const ANGLE_STEP: f64 = -2.0 * PI / SLOT_COUNT as f64;
pub const LIMIT_ANGLE: f64 = ANGLE_STEP * DIGIT_COUNT as f64;
pub const WRAP_THRESHOLD_DEGREES: f64 = 350.0;

pub const INNER_RADIUS: f64 = 70.0; // centre disc
pub const HIT_RADIUS: f64 = 30.0; // finger hole
pub const LIMITER_RADIUS_FACTOR: f64 = 0.25; // relative to HIT_RADIUS
pub const RELEASE_DURATION: Duration = Duration::from_millis(500);
