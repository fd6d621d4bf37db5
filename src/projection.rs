//! Projections from caller point types to coordinate pairs.

use crate::primitives::Point2;
use num_traits::Float;
use std::marker::PhantomData;

/// Mean length of one degree of latitude, in metres.
const METRES_PER_DEGREE_LAT: f64 = 110_574.0;

/// Length of one degree of longitude at the equator, in metres.
const METRES_PER_DEGREE_LON: f64 = 111_320.0;

/// Extracts an `(x, y)` coordinate pair from a point of type `T`.
///
/// The simplifier never constructs or mutates `T`; it only reads through a
/// projection. Projections should be pure and deterministic. Any
/// `Fn(&T) -> (F, F)` closure is a projection.
pub trait Project<T, F> {
    /// Returns the coordinates of `item`.
    fn project(&self, item: &T) -> Point2<F>;
}

impl<T, F, P> Project<T, F> for P
where
    F: Float,
    P: Fn(&T) -> (F, F),
{
    #[inline]
    fn project(&self, item: &T) -> Point2<F> {
        let (x, y) = self(item);
        Point2::new(x, y)
    }
}

/// Projection for types that already are coordinates: `Point2<F>`,
/// `(F, F)` and `[F; 2]`.
pub struct Xy<F>(PhantomData<fn() -> F>);

impl<F> Xy<F> {
    /// Creates the projection.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F> Default for Xy<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for Xy<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Xy<F> {}

impl<F> std::fmt::Debug for Xy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Xy")
    }
}

impl<T, F> Project<T, F> for Xy<F>
where
    F: Float,
    T: Copy + Into<Point2<F>>,
{
    #[inline]
    fn project(&self, item: &T) -> Point2<F> {
        (*item).into()
    }
}

/// Equirectangular projection of `(longitude, latitude)` degrees to metres.
///
/// Wraps another projection that yields degrees and scales its output so
/// that, near `reference_latitude`, the simplification tolerance is in
/// metres. Accurate for tracks spanning a few degrees of latitude at most.
#[derive(Debug, Clone, Copy)]
pub struct Equirectangular<P, F> {
    inner: P,
    sx: F,
    sy: F,
}

impl<P, F: Float> Equirectangular<P, F> {
    /// Creates the projection around `reference_latitude` (in degrees).
    pub fn new(inner: P, reference_latitude: F) -> Self {
        let lon = F::from(METRES_PER_DEGREE_LON).unwrap_or_else(F::one);
        let lat = F::from(METRES_PER_DEGREE_LAT).unwrap_or_else(F::one);
        Self {
            inner,
            sx: lon * reference_latitude.to_radians().cos(),
            sy: lat,
        }
    }

    /// Metres per degree of longitude and latitude.
    pub fn scale(&self) -> (F, F) {
        (self.sx, self.sy)
    }
}

impl<T, F, P> Project<T, F> for Equirectangular<P, F>
where
    F: Float,
    P: Project<T, F>,
{
    #[inline]
    fn project(&self, item: &T) -> Point2<F> {
        let p = self.inner.project(item);
        Point2::new(p.x * self.sx, p.y * self.sy)
    }
}
