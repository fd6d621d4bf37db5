//! 2D line segment type.

use super::Point2;
use crate::metric::{SquaredEuclidean, SquaredMetric};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the projection factor of `p` onto the line through the
    /// segment, normalised by `length_squared`.
    #[inline]
    fn projection_factor(self, p: Point2<F>, length_squared: F) -> F {
        (p - self.start).dot(self.end - self.start) / length_squared
    }

    /// Computes the squared distance from `p` to this segment under `metric`.
    ///
    /// The metric measures the segment's squared length (the denominator of
    /// the projection factor) and the squared leg to the closest point. If
    /// the metric reports a zero length the segment is treated as the single
    /// point `start`. Otherwise the closest point is clamped to whichever
    /// endpoint the projection factor falls beyond.
    pub fn distance_squared_with<M>(self, p: Point2<F>, metric: &M) -> F
    where
        M: SquaredMetric<F> + ?Sized,
    {
        let length_squared = metric.distance_squared(self.start, self.end);
        if length_squared == F::zero() {
            return metric.distance_squared(p, self.start);
        }

        let t = self.projection_factor(p, length_squared);
        if t < F::zero() {
            metric.distance_squared(p, self.start)
        } else if t > F::one() {
            metric.distance_squared(p, self.end)
        } else {
            metric.distance_squared(p, self.point_at(t))
        }
    }

    /// Computes the perpendicular distance from `p` to this segment under
    /// `metric`: the square root of [`distance_squared_with`](Self::distance_squared_with).
    #[inline]
    pub fn distance_with<M>(self, p: Point2<F>, metric: &M) -> F
    where
        M: SquaredMetric<F> + ?Sized,
    {
        self.distance_squared_with(p, metric).sqrt()
    }

    /// Computes the Euclidean distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_with(p, &SquaredEuclidean)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    #[test]
    fn test_from_coords() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.start, Point2::new(1.0, 2.0));
        assert_eq!(s.end, Point2::new(3.0, 4.0));
        assert_eq!(Segment2::from((s.start, s.end)), s);
    }

    #[test]
    fn test_point_at() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.point_at(0.0).x, 0.0);
        assert_eq!(s.point_at(1.0).x, 10.0);
        assert_eq!(s.point_at(0.5).x, 5.0);
    }

    #[test]
    fn test_distance_to_point() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);

        // Point above segment
        assert_relative_eq!(s.distance_to_point(Point2::new(5.0, 3.0)), 3.0, epsilon = 1e-10);

        // Beyond start clamps to start
        assert_relative_eq!(s.distance_to_point(Point2::new(-3.0, 4.0)), 5.0, epsilon = 1e-10);

        // Beyond end clamps to end
        assert_relative_eq!(s.distance_to_point(Point2::new(13.0, -4.0)), 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_distance_on_segment_is_zero() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
        assert_eq!(s.distance_to_point(Point2::new(1.0, 1.0)), 0.0);
        assert_eq!(s.distance_to_point(Point2::new(0.0, 0.0)), 0.0);
        assert_eq!(s.distance_to_point(Point2::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_diagonal_chord() {
        // (0,1) against (0,0)-(1,1) is sqrt(2)/2 away.
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 1.0);
        assert_relative_eq!(
            s.distance_to_point(Point2::new(0.0, 1.0)),
            std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_degenerate_segment() {
        let s: Segment2<f64> = Segment2::from_coords(5.0, 5.0, 5.0, 5.0);
        assert_relative_eq!(s.distance_to_point(Point2::new(2.0, 1.0)), 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_degenerate_decided_by_metric() {
        // A metric that ignores y reports a vertical segment as zero length,
        // so the distance is measured to `start` alone.
        let x_only = |a: Point2<f64>, b: Point2<f64>| (a.x - b.x) * (a.x - b.x);
        let s = Segment2::from_coords(0.0, 0.0, 0.0, 10.0);
        assert_eq!(s.distance_squared_with(Point2::new(3.0, 8.0), &x_only), 9.0);
    }

    #[test]
    fn test_metric_used_for_every_leg() {
        let calls = Cell::new(0);
        let counting = |a: Point2<f64>, b: Point2<f64>| {
            calls.set(calls.get() + 1);
            a.distance_squared(b)
        };
        let s = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
        let d = s.distance_with(Point2::new(2.0, 3.0), &counting);
        assert_relative_eq!(d, 3.0, epsilon = 1e-12);
        // Once for the length, once for the leg.
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_scaled_metric() {
        let m = |a: Point2<f64>, b: Point2<f64>| {
            let dy = (a.y - b.y) * 2.0;
            (a.x - b.x) * (a.x - b.x) + dy * dy
        };
        let s = Segment2::from_coords(0.0, 0.0, 4.0, 0.0);
        // Horizontal chord: t is unaffected by the y scale, leg is 2 * 3.
        assert_relative_eq!(s.distance_with(Point2::new(2.0, 3.0), &m), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_f32() {
        let s: Segment2<f32> = Segment2::from_coords(0.0, 0.0, 0.0, 2.0);
        assert_relative_eq!(s.distance_to_point(Point2::new(1.5, 1.0)), 1.5, epsilon = 1e-6);
    }
}
