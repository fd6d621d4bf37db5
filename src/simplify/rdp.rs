//! Ramer-Douglas-Peucker polyline simplification.
//!
//! The RDP algorithm divides a polyline at the point farthest from the chord
//! joining the ends of the current range, for as long as that point deviates
//! by more than the tolerance. A range whose every interior point is within
//! tolerance is replaced by its chord.
//!
//! Ranges are half-open, `[start, end)`. When `[start, end)` is divided at
//! `index`, the left range is `[start, index)` and the right range is
//! `[index, end)`, so the dividing point is emitted once, as the start of
//! the right range, and the left range's chord ends at `index - 1`.
//!
//! The ranges are kept on an explicit work stack rather than the call stack,
//! so staircase-shaped inputs that divide one point at a time cannot exhaust
//! the thread's stack.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::metric::{SquaredEuclidean, SquaredMetric};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Simplifies a polyline using the Ramer-Douglas-Peucker algorithm.
///
/// Returns a new vector containing only the points that remain after
/// simplification. The first and last points are always preserved.
///
/// # Arguments
///
/// * `points` - The input polyline as a slice of points
/// * `epsilon` - Distance tolerance. Points within this distance of the
///   simplified line are removed.
///
/// # Returns
///
/// A new vector with the simplified polyline. Inputs of two or fewer points
/// are returned unchanged.
///
/// # Example
///
/// ```
/// use geosimplify::{Point2, simplify::rdp};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 1.0),  // On the chord, will be removed
///     Point2::new(2.0, 2.0),
/// ];
///
/// let simplified = rdp(&points, 0.0001);
/// assert_eq!(simplified, vec![Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)]);
/// ```
pub fn rdp<F: Float>(points: &[Point2<F>], epsilon: F) -> Vec<Point2<F>> {
    let indices = rdp_indices(points, epsilon);
    indices.into_iter().map(|i| points[i]).collect()
}

/// Simplifies a polyline and returns the indices of retained points.
///
/// This is useful when you need to preserve the relationship between
/// the simplified points and associated data (e.g., timestamps, elevations).
///
/// # Returns
///
/// A strictly increasing vector of indices into `points`. Always includes
/// index 0 and the last index if the input is non-empty.
pub fn rdp_indices<F: Float>(points: &[Point2<F>], epsilon: F) -> Vec<usize> {
    rdp_indices_with(points, epsilon, &SquaredEuclidean)
}

/// Simplifies a polyline under a caller-supplied metric and returns the
/// indices of retained points.
///
/// The metric must return squared distances; see [`crate::metric`].
///
/// Negative tolerances divide every range of three or more points, so the
/// output equals the input. A NaN tolerance never divides, leaving only the
/// two endpoints.
pub fn rdp_indices_with<F, M>(points: &[Point2<F>], epsilon: F, metric: &M) -> Vec<usize>
where
    F: Float,
    M: SquaredMetric<F> + ?Sized,
{
    let n = points.len();
    let mut kept = Vec::new();
    if n == 0 {
        return kept;
    }

    // Right range is pushed first so the left range resolves first.
    let mut ranges = vec![(0, n)];
    while let Some((start, end)) = ranges.pop() {
        let last = end - 1;
        match farthest_interior(points, start, last, metric) {
            Some((index, max_dist)) if max_dist > epsilon => {
                ranges.push((index, end));
                ranges.push((start, index));
            }
            _ => {
                kept.push(start);
                if last > start {
                    kept.push(last);
                }
            }
        }
    }

    log::trace!(
        "rdp: kept {} of {} points (epsilon {:?})",
        kept.len(),
        n,
        epsilon.to_f64()
    );
    kept
}

/// Finds the interior point of `start..=last` farthest from the chord
/// `points[start]`-`points[last]`.
///
/// Returns `None` when the range has no interior. Ties go to the lowest
/// index; NaN distances never win.
fn farthest_interior<F, M>(
    points: &[Point2<F>],
    start: usize,
    last: usize,
    metric: &M,
) -> Option<(usize, F)>
where
    F: Float,
    M: SquaredMetric<F> + ?Sized,
{
    let chord = Segment2::new(points[start], points[last]);
    let mut max_dist = F::neg_infinity();
    let mut max_idx = None;

    for (i, &p) in points.iter().enumerate().take(last).skip(start + 1) {
        let dist = chord.distance_with(p, metric);
        if dist > max_dist {
            max_dist = dist;
            max_idx = Some(i);
        }
    }

    max_idx.map(|i| (i, max_dist))
}
