//! Data and operations on planar points.
//!
//! Points are compared lexicographically (x, then y). The divide-and-conquer
//! triangulator relies on this order to split the input by count and still
//! obtain two spatially separated halves.

#![forbid(unsafe_code)]

use crate::geometry::traits::coordinate::{
    CoordinateScalar, CoordinateValidationError, FiniteCheck,
};
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// POINT STRUCT DEFINITION
// =============================================================================

/// A point in the plane with coordinates of generic scalar type `T`.
///
/// Points are immutable once created.
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::geometry::point::Point;
///
/// let p = Point::new([1.0, 2.0]);
/// assert_eq!(p.coords(), &[1.0, 2.0]);
/// assert_eq!(p.x(), 1.0);
/// assert_eq!(p.y(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T>
where
    T: CoordinateScalar,
{
    coords: [T; 2],
}

// =============================================================================
// PUBLIC API
// =============================================================================

impl<T> Point<T>
where
    T: CoordinateScalar,
{
    /// Creates a point from `[x, y]`.
    #[inline]
    #[must_use]
    pub const fn new(coords: [T; 2]) -> Self {
        Self { coords }
    }

    /// Returns a reference to the point's coordinates.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &[T; 2] {
        &self.coords
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> T {
        self.coords[0]
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> T {
        self.coords[1]
    }

    /// Coordinates widened to `f64`, the precision predicates run in.
    #[inline]
    #[must_use]
    pub fn to_f64(&self) -> [f64; 2] {
        [self.x().to_f64_lossless(), self.y().to_f64_lossless()]
    }

    /// Squared Euclidean norm `x² + y²`, in `f64`.
    #[inline]
    #[must_use]
    pub fn squared_norm(&self) -> f64 {
        let [x, y] = self.to_f64();
        x.mul_add(x, y * y)
    }

    /// Euclidean distance to `other`, in `f64`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let [ax, ay] = self.to_f64();
        let [bx, by] = other.to_f64();
        (ax - bx).hypot(ay - by)
    }

    /// Validates that both coordinates are finite.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateValidationError::InvalidCoordinate`] for the first
    /// coordinate that is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadedge_delaunay::geometry::point::Point;
    ///
    /// assert!(Point::new([0.0, 1.0]).validate().is_ok());
    /// assert!(Point::new([f64::NAN, 1.0]).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoordinateValidationError> {
        for (index, value) in self.coords.iter().enumerate() {
            if !value.is_finite_generic() {
                return Err(CoordinateValidationError::InvalidCoordinate {
                    coordinate_index: index,
                    coordinate_value: format!("{value:?}"),
                });
            }
        }
        Ok(())
    }

    /// Lexicographic comparison: by x, then by y.
    ///
    /// Non-finite coordinates compare as equal; callers validate first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadedge_delaunay::geometry::point::Point;
    /// use std::cmp::Ordering;
    ///
    /// let a = Point::new([0.0, 5.0]);
    /// let b = Point::new([1.0, 0.0]);
    /// let c = Point::new([1.0, 2.0]);
    /// assert_eq!(a.lexicographic_cmp(&b), Ordering::Less);
    /// assert_eq!(c.lexicographic_cmp(&b), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn lexicographic_cmp(&self, other: &Self) -> Ordering {
        self.x()
            .partial_cmp(&other.x())
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y().partial_cmp(&other.y()).unwrap_or(Ordering::Equal))
    }
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

impl<T> PartialOrd for Point<T>
where
    T: CoordinateScalar,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x().partial_cmp(&other.x()) {
            Some(Ordering::Equal) => self.y().partial_cmp(&other.y()),
            ordering => ordering,
        }
    }
}

impl<T> From<[T; 2]> for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from(coords: [T; 2]) -> Self {
        Self::new(coords)
    }
}

impl<T> From<(T, T)> for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new([x, y])
    }
}

impl<T> From<Point<T>> for [T; 2]
where
    T: CoordinateScalar,
{
    #[inline]
    fn from(point: Point<T>) -> [T; 2] {
        point.coords
    }
}

impl<T> fmt::Display for Point<T>
where
    T: CoordinateScalar + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
