//! Turns consecutive pointer samples into an incremental rotation about the dial centre.
//!
//! Angles are measured from 12 o'clock and decrease while the pointer moves clockwise on
//! screen, matching the clockwise-negative digit layout. The arctangent is undefined on the
//! vertical axis, so a pointer crossing it can produce a jump of almost a full turn;
//! [`angle_change`] folds those jumps back into the short rotation actually performed.

use crate::dial::geometry::{Point, to_radians};
use crate::dial::WRAP_THRESHOLD_DEGREES;
use std::f64::consts::PI;

/// Angle of `point` around `center`. Screen y grows downward, so it is flipped first.
pub fn pointer_angle(point: Point, center: Point) -> f64 {
    let x = point.x - center.x;
    let y = center.y - point.y;

    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    let raw = (y / x).atan();
    if x > 0.0 {
        raw - PI / 2.0
    } else if x < 0.0 {
        raw - PI * 1.5
    } else {
        // vertical axis: atan(±inf) is left as is
        raw
    }
}

/// Signed rotation from `previous` to `current`, with near-full-turn jumps folded away.
pub fn angle_change(previous: Point, current: Point, center: Point) -> f64 {
    let change = pointer_angle(current, center) - pointer_angle(previous, center);
    fold_wrap(change)
}

pub fn fold_wrap(change: f64) -> f64 {
    let threshold = to_radians(WRAP_THRESHOLD_DEGREES);
    if change > threshold {
        change - to_radians(360.0)
    } else if change < -threshold {
        change + to_radians(360.0)
    } else {
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::geometry::to_degrees;
    use proptest::prelude::*;

    const CENTER: Point = Point { x: 100.0, y: 100.0 };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cardinal_angles() {
        // right of centre
        assert!(approx(pointer_angle(Point::new(150.0, 100.0), CENTER), -PI / 2.0));
        // below
        assert!(approx(pointer_angle(Point::new(100.0, 150.0), CENTER), -PI / 2.0));
        // left
        assert!(approx(pointer_angle(Point::new(50.0, 100.0), CENTER), -PI * 1.5));
    }

    #[test]
    fn test_vertical_axis_uses_raw_arctangent() {
        // straight above and below the centre have dx == 0
        assert!(approx(pointer_angle(Point::new(100.0, 40.0), CENTER), PI / 2.0));
        assert!(approx(pointer_angle(Point::new(100.0, 160.0), CENTER), -PI / 2.0));
    }

    #[test]
    fn test_centre_is_finite() {
        assert_eq!(pointer_angle(CENTER, CENTER), 0.0);
        assert!(angle_change(CENTER, Point::new(150.0, 100.0), CENTER).is_finite());
    }

    #[test]
    fn test_clockwise_motion_is_negative() {
        // from 1 o'clock to 2 o'clock
        let previous = Point::new(125.0, 57.0);
        let current = Point::new(143.0, 75.0);
        assert!(angle_change(previous, current, CENTER) < 0.0);
        assert!(angle_change(current, previous, CENTER) > 0.0);
    }

    #[test]
    fn test_crossing_twelve_o_clock_folds() {
        // just left of 12 is near -2π, just right of it is near 0
        let left = Point::new(99.0, 0.0);
        let right = Point::new(101.0, 0.0);
        let change = angle_change(left, right, CENTER);
        assert!(to_degrees(change).abs() < 2.0, "{}", to_degrees(change));
        assert!(change < 0.0);

        let back = angle_change(right, left, CENTER);
        assert!(to_degrees(back).abs() < 2.0);
        assert!(back > 0.0);
    }

    #[test]
    fn test_landing_on_vertical_axis() {
        // moving onto the axis above the centre from the right
        let right = Point::new(101.0, 0.0);
        let top = Point::new(100.0, 0.0);
        let change = angle_change(right, top, CENTER);
        assert!(change.is_finite());
        // raw atan at dx == 0 reports +π/2 instead of 0; the jump is left unfolded
        assert!(approx(change, PI / 2.0 - pointer_angle(right, CENTER)));
    }

    #[test]
    fn test_zero_displacement() {
        let p = Point::new(130.0, 20.0);
        assert_eq!(angle_change(p, p, CENTER), 0.0);
    }

    #[test]
    fn test_fold_wrap_bounds() {
        assert!(approx(fold_wrap(to_radians(355.0)), to_radians(-5.0)));
        assert!(approx(fold_wrap(to_radians(-355.0)), to_radians(5.0)));
        assert!(approx(fold_wrap(to_radians(350.0)), to_radians(350.0)));
        assert!(approx(fold_wrap(to_radians(-20.0)), to_radians(-20.0)));
    }

    proptest! {
        #[test]
        fn prop_fold_shrinks_anomalous_jumps(degrees in 350.001f64..360.0, negative in any::<bool>()) {
            let change = if negative { -degrees } else { degrees };
            let folded = to_degrees(fold_wrap(to_radians(change)));
            prop_assert!(folded.abs() <= 10.0 + 1e-9);
            prop_assert!(folded.abs() < change.abs());
        }

        #[test]
        fn prop_change_is_finite(
            x1 in -200.0f64..200.0, y1 in -200.0f64..200.0,
            x2 in -200.0f64..200.0, y2 in -200.0f64..200.0,
        ) {
            let change = angle_change(Point::new(x1, y1), Point::new(x2, y2), CENTER);
            prop_assert!(change.is_finite());
            prop_assert!(to_degrees(change).abs() <= 360.0);
        }
    }
}
