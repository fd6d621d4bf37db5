//! geosimplify - Ramer-Douglas-Peucker polyline simplification
//!
//! Reduces an ordered path (a GPS track, a vector outline) to a subsequence
//! that stays within a given perpendicular deviation of the original. Works
//! over any point type through a projection to `(x, y)` and a pluggable
//! squared-distance metric.

pub mod error;
pub mod metric;
pub mod primitives;
pub mod projection;
pub mod simplify;

pub use error::SimplifyError;
pub use metric::{SquaredEuclidean, SquaredMetric};
pub use primitives::{Point2, Segment2};
pub use projection::{Equirectangular, Project, Xy};
pub use simplify::{rdp, rdp_indices, rdp_indices_with, Simplifier};
