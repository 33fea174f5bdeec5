use crate::dial::{ANGLE_STEP, DIGIT_COUNT};
use derive_more::{Display, Into};
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigitError {
    #[error("{0} is not a dial digit (expected 0-9)")]
    OutOfRange(u8),
}

/// One of the ten positions on the dial plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Into)]
pub struct Digit(u8);

impl Digit {
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..DIGIT_COUNT as u8).map(Digit)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Slot on the plate counted clockwise-negative from digit 1. Zero follows nine.
    pub fn slot(self) -> usize {
        match self.0 {
            0 => DIGIT_COUNT - 1,
            n => n as usize - 1,
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < DIGIT_COUNT {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Nearest integer, halves going up.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn round_degrees(radians: f64) -> i64 {
    round_half_up(to_degrees(radians))
}

/// Rest angle of every digit, indexed by digit value. Built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitLayout {
    rest_angles: [f64; DIGIT_COUNT],
}

impl Default for DigitLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitLayout {
    pub fn new() -> Self {
        let mut rest_angles = [0.0; DIGIT_COUNT];
        for digit in Digit::all() {
            rest_angles[digit.as_index()] = digit.slot() as f64 * ANGLE_STEP;
        }
        Self { rest_angles }
    }

    pub fn rest_angle(&self, digit: Digit) -> f64 {
        self.rest_angles[digit.as_index()]
    }

    pub fn rest_angles(&self) -> &[f64; DIGIT_COUNT] {
        &self.rest_angles
    }

    pub fn position_of(&self, digit: Digit, radius: f64, center: Point) -> Point {
        point_on_circle(center, radius, self.rest_angle(digit))
    }

    /// First digit, in 0..=9 order, whose target lies within `hit_radius` of `point`.
    pub fn hit_test(
        &self,
        point: Point,
        center: Point,
        radius: f64,
        hit_radius: f64,
    ) -> Option<Digit> {
        Digit::all().find(|&d| self.position_of(d, radius, center).distance(point) <= hit_radius)
    }
}

pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Dimensions derived from the container on each layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialMetrics {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub inner_radius: f64,
    pub hit_radius: f64,
    pub ring_width: f64,
    pub orbit_radius: f64,
}

impl DialMetrics {
    pub fn from_size(width: f64, height: f64, inner_radius: f64, hit_radius: f64) -> Self {
        let ring_width = width / 2.0 - inner_radius;
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            width,
            height,
            inner_radius,
            hit_radius,
            ring_width,
            orbit_radius: (width - ring_width) / 2.0,
        }
    }

    pub fn with_radii(&self, inner_radius: f64, hit_radius: f64) -> Self {
        Self::from_size(self.width, self.height, inner_radius, hit_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::LIMIT_ANGLE;
    use proptest::prelude::*;

    fn digit(n: u8) -> Digit {
        Digit::try_from(n).unwrap()
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::all().count(), 10);
        assert_eq!(Digit::try_from(10), Err(DigitError::OutOfRange(10)));
        assert_eq!(digit(7).to_string(), "7");
        assert_eq!(u8::from(digit(3)), 3);
    }

    #[test]
    fn test_rest_angles() {
        let layout = DigitLayout::new();
        assert_eq!(layout.rest_angle(digit(1)), 0.0);
        assert!((layout.rest_angle(digit(2)) - ANGLE_STEP).abs() < 1e-12);
        assert!((layout.rest_angle(digit(0)) - 9.0 * ANGLE_STEP).abs() < 1e-12);
        assert_eq!(round_degrees(layout.rest_angle(digit(0))), -295);
        assert_eq!(round_degrees(LIMIT_ANGLE), -327);
    }

    #[test]
    fn test_rest_angles_distinct() {
        let angles = DigitLayout::new().rest_angles().to_vec();
        for (i, a) in angles.iter().enumerate() {
            for b in &angles[i + 1..] {
                assert!((a - b).abs() > 0.1);
            }
        }
    }

    #[test]
    fn test_round_half_up() {
        let cases = vec![
            (0.5, 1),
            (-0.5, 0),
            (2.5, 3),
            (-2.5, -2),
            (-327.27, -327),
            (32.6, 33),
        ];
        for (degrees, expected) in cases {
            assert_eq!(round_half_up(degrees), expected, "{degrees}");
        }
    }

    #[test]
    fn test_hit_test_miss() {
        let layout = DigitLayout::new();
        let center = Point::new(200.0, 200.0);
        assert_eq!(layout.hit_test(center, center, 135.0, 30.0), None);
        assert_eq!(
            layout.hit_test(Point::new(0.0, 0.0), center, 135.0, 30.0),
            None
        );
    }

    #[test]
    fn test_hit_test_edge_of_target() {
        let layout = DigitLayout::new();
        let center = Point::new(200.0, 200.0);
        // digit 1 sits at 3 o'clock
        assert_eq!(
            layout.hit_test(Point::new(365.0, 200.0), center, 135.0, 30.0),
            Some(digit(1))
        );
        assert_eq!(
            layout.hit_test(Point::new(366.0, 200.0), center, 135.0, 30.0),
            None
        );
    }

    #[test]
    fn test_metrics_from_size() {
        let m = DialMetrics::from_size(400.0, 400.0, 70.0, 30.0);
        assert_eq!(m.center, Point::new(200.0, 200.0));
        assert_eq!(m.ring_width, 130.0);
        assert_eq!(m.orbit_radius, 135.0);

        let m = m.with_radii(50.0, 20.0);
        assert_eq!(m.ring_width, 150.0);
        assert_eq!(m.orbit_radius, 125.0);
        assert_eq!(m.hit_radius, 20.0);
    }

    proptest! {
        #[test]
        fn prop_hit_test_finds_digit_at_its_position(
            n in 0u8..10,
            cx in -500.0f64..500.0,
            cy in -500.0f64..500.0,
            radius in 60.0f64..600.0,
        ) {
            let layout = DigitLayout::new();
            let center = Point::new(cx, cy);
            let d = digit(n);
            let position = layout.position_of(d, radius, center);
            prop_assert_eq!(layout.hit_test(position, center, radius, 30.0), Some(d));
        }
    }
}
