//! Pluggable distance metrics.
//!
//! A metric is queried for the squared length of a chord when computing the
//! projection factor along it, and for the squared leg distance from a query
//! point to the closest point on the chord. Both uses share one function, so
//! the contract is that it returns the *squared* distance. The perpendicular
//! distance reported to callers is the square root of that value.

use crate::primitives::Point2;
use num_traits::Float;

/// A distance function returning squared distances.
///
/// Implementations must be pure, deterministic and non-negative, and must
/// return exactly zero for coincident points. Any
/// `Fn(Point2<F>, Point2<F>) -> F` closure is a metric.
///
/// # Example
///
/// ```
/// use geosimplify::{Point2, SquaredMetric};
///
/// let manhattan_squared = |a: Point2<f64>, b: Point2<f64>| {
///     let d = (a.x - b.x).abs() + (a.y - b.y).abs();
///     d * d
/// };
/// assert_eq!(manhattan_squared.distance_squared(Point2::new(0.0, 0.0), Point2::new(1.0, 2.0)), 9.0);
/// ```
pub trait SquaredMetric<F> {
    /// Returns the squared distance between `a` and `b`.
    fn distance_squared(&self, a: Point2<F>, b: Point2<F>) -> F;
}

impl<F, M> SquaredMetric<F> for M
where
    M: Fn(Point2<F>, Point2<F>) -> F,
{
    #[inline]
    fn distance_squared(&self, a: Point2<F>, b: Point2<F>) -> F {
        self(a, b)
    }
}

/// Plain squared Euclidean distance, `dx² + dy²`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl<F: Float> SquaredMetric<F> for SquaredEuclidean {
    #[inline]
    fn distance_squared(&self, a: Point2<F>, b: Point2<F>) -> F {
        a.distance_squared(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_euclidean() {
        let d = SquaredEuclidean.distance_squared(Point2::new(1.0_f64, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(d, 25.0);
    }

    #[test]
    fn test_closure_metric() {
        let chebyshev = |a: Point2<f64>, b: Point2<f64>| {
            let d = (a.x - b.x).abs().max((a.y - b.y).abs());
            d * d
        };
        assert_eq!(
            chebyshev.distance_squared(Point2::new(0.0, 0.0), Point2::new(3.0, -5.0)),
            25.0
        );
    }

    #[test]
    fn test_coincident_is_zero() {
        let p = Point2::new(3.5_f32, -1.25);
        assert_eq!(SquaredEuclidean.distance_squared(p, p), 0.0);
    }
}
