// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry helpers shared by the zoom/pan model and gesture code.

use kurbo::{Point, Vec2};

/// Tolerance used when deciding whether a zoom factor is "at rest" at `1.0`.
pub const CLOSE_TOLERANCE: f64 = 0.01;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Relative scale between a starting and a current pair of touch points.
///
/// Returns `None` when either slice has fewer than two points, or when the
/// starting points coincide (the ratio would divide by zero).
///
/// ```rust
/// use kurbo::Point;
/// use understory_view2d::pinch_scale;
///
/// let start = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
/// let end = [Point::new(0.0, 0.0), Point::new(200.0, 0.0)];
/// assert_eq!(pinch_scale(&start, &end), Some(2.0));
/// ```
#[must_use]
pub fn pinch_scale(start: &[Point], end: &[Point]) -> Option<f64> {
    let (&[s0, s1, ..], &[e0, e1, ..]) = (start, end) else {
        return None;
    };
    let start_distance = distance(s0, s1);
    if start_distance <= f64::EPSILON {
        return None;
    }
    Some(distance(e0, e1) / start_distance)
}

/// Arithmetic mean of a set of points, or `None` if `points` is empty.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let n = points.len() as f64;
    Some((sum / n).to_point())
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the lower bound
/// wins, matching how containment ranges collapse for oversized padding.
#[must_use]
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    value.min(max).max(min)
}

/// Returns `true` if `value` is within `tolerance` of `target`.
#[must_use]
pub fn is_close_to(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() < tolerance
}

/// Movement between two consecutive samples, `current - previous`.
#[must_use]
pub fn velocity(previous: Point, current: Point) -> Vec2 {
    current - previous
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{CLOSE_TOLERANCE, centroid, clamp, distance, is_close_to, pinch_scale, velocity};

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn pinch_scale_doubles_when_fingers_spread() {
        let start = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let end = [Point::new(0.0, 0.0), Point::new(200.0, 0.0)];
        assert_eq!(pinch_scale(&start, &end), Some(2.0));
    }

    #[test]
    fn pinch_scale_guards_missing_and_coincident_touches() {
        let one = [Point::new(1.0, 1.0)];
        let two = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert_eq!(pinch_scale(&one, &two), None);
        assert_eq!(pinch_scale(&two, &one), None);

        let coincident = [Point::new(5.0, 5.0), Point::new(5.0, 5.0)];
        assert_eq!(pinch_scale(&coincident, &two), None);
    }

    #[test]
    fn centroid_averages_points() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert_eq!(centroid(&pts), Some(Point::new(5.0, 5.0)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn clamp_prefers_lower_bound_on_inverted_range() {
        assert_eq!(clamp(0.0, 10.0, 12.0), 10.0);
        assert_eq!(clamp(0.0, 10.0, -3.0), 0.0);
        assert_eq!(clamp(0.0, 10.0, 4.0), 4.0);
        assert_eq!(clamp(5.0, 1.0, 3.0), 5.0);
    }

    #[test]
    fn closeness_uses_strict_tolerance() {
        assert!(is_close_to(1.005, 1.0, CLOSE_TOLERANCE));
        assert!(!is_close_to(1.02, 1.0, CLOSE_TOLERANCE));
    }

    #[test]
    fn velocity_is_current_minus_previous() {
        let v = velocity(Point::new(10.0, 10.0), Point::new(4.0, 12.0));
        assert_eq!(v, Vec2::new(-6.0, 2.0));
    }
}
