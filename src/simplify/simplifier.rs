//! Simplification over caller-defined point types.

use super::rdp::rdp_indices_with;
use crate::error::SimplifyError;
use crate::metric::{SquaredEuclidean, SquaredMetric};
use crate::primitives::{Point2, Segment2};
use crate::projection::Project;
use num_traits::Float;

/// Ramer-Douglas-Peucker simplifier bound to a projection and a metric.
///
/// The projection turns each caller point into a coordinate pair; the metric
/// measures squared distances between coordinate pairs. Both are fixed at
/// construction.
///
/// # Example
///
/// ```
/// use geosimplify::Simplifier;
///
/// struct Fix {
///     x: f64,
///     y: f64,
///     timestamp: u64,
/// }
///
/// let track = vec![
///     Fix { x: 0.0, y: 0.0, timestamp: 0 },
///     Fix { x: 1.0, y: 0.05, timestamp: 10 },
///     Fix { x: 2.0, y: 0.0, timestamp: 20 },
/// ];
///
/// let simplifier = Simplifier::euclidean(|f: &Fix| (f.x, f.y));
/// let kept = simplifier.simplify_indices(&track, 0.1);
/// let times: Vec<u64> = kept.iter().map(|&i| track[i].timestamp).collect();
/// assert_eq!(times, vec![0, 20]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simplifier<P, M = SquaredEuclidean> {
    projection: P,
    metric: M,
}

impl<P> Simplifier<P, SquaredEuclidean> {
    /// Creates a simplifier measuring plain Euclidean distances.
    pub fn euclidean(projection: P) -> Self {
        Self::new(projection, SquaredEuclidean)
    }
}

impl<P, M> Simplifier<P, M> {
    /// Creates a simplifier from a projection and a squared-distance metric.
    pub fn new(projection: P, metric: M) -> Self {
        Self { projection, metric }
    }

    /// Returns the projection.
    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Returns the metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Simplifies `line`, keeping points that deviate from the simplified
    /// path by more than `max_deviation`.
    ///
    /// The result is a subsequence of `line` in the original order, no longer
    /// than `line`. Lines of two or fewer points come back unchanged. The
    /// input is only read; kept points are cloned into the new vector.
    ///
    /// Never fails. Non-finite coordinates or a metric that does not return
    /// squared distances produce a meaningless but well-formed result.
    pub fn simplify<T, F>(&self, line: &[T], max_deviation: F) -> Vec<T>
    where
        T: Clone,
        F: Float,
        P: Project<T, F>,
        M: SquaredMetric<F>,
    {
        self.simplify_indices(line, max_deviation)
            .into_iter()
            .map(|i| line[i].clone())
            .collect()
    }

    /// Like [`simplify`](Self::simplify), but returns the indices of the kept
    /// points in ascending order.
    pub fn simplify_indices<T, F>(&self, line: &[T], max_deviation: F) -> Vec<usize>
    where
        F: Float,
        P: Project<T, F>,
        M: SquaredMetric<F>,
    {
        let coords: Vec<Point2<F>> = line.iter().map(|p| self.projection.project(p)).collect();
        rdp_indices_with(&coords, max_deviation, &self.metric)
    }

    /// Like [`simplify`](Self::simplify), but rejects a NaN tolerance.
    pub fn try_simplify<T, F>(&self, line: &[T], max_deviation: F) -> Result<Vec<T>, SimplifyError>
    where
        T: Clone,
        F: Float,
        P: Project<T, F>,
        M: SquaredMetric<F>,
    {
        if max_deviation.is_nan() {
            log::debug!("rejecting NaN tolerance for {} points", line.len());
            return Err(SimplifyError::NonFiniteTolerance);
        }
        Ok(self.simplify(line, max_deviation))
    }

    /// Perpendicular distance from `p` to the segment `v`-`w` under this
    /// simplifier's projection and metric.
    pub fn perpendicular_distance<T, F>(&self, p: &T, v: &T, w: &T) -> F
    where
        F: Float,
        P: Project<T, F>,
        M: SquaredMetric<F>,
    {
        let segment = Segment2::new(self.projection.project(v), self.projection.project(w));
        segment.distance_with(self.projection.project(p), &self.metric)
    }
}
