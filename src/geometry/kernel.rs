//! Geometric kernel abstraction following CGAL's design.
//!
//! The Kernel trait defines the predicates the divide-and-conquer triangulator
//! consults. Separating them from the quad-edge mesh keeps the mesh purely
//! combinatorial and lets callers choose between plain floating-point
//! determinants and adaptive exact predicates.

use core::fmt::Debug;
use core::marker::PhantomData;

use crate::geometry::point::Point;
use crate::geometry::predicates::{
    InCircle, Orientation, incircle_determinant, orientation_determinant,
};
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Geometric kernel trait defining predicates for triangulation algorithms.
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::kernel::{FastKernel, Kernel};
/// use quadedge_delaunay::geometry::point::Point;
/// use quadedge_delaunay::geometry::predicates::{InCircle, Orientation};
///
/// let kernel = FastKernel::<f64>::new();
///
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// let c = Point::new([0.5, 1.0]);
/// assert_eq!(kernel.orientation(&a, &b, &c), Orientation::POSITIVE);
///
/// let inside = Point::new([0.5, 0.3]);
/// assert_eq!(kernel.in_circle(&a, &b, &c, &inside), InCircle::INSIDE);
/// ```
pub trait Kernel: Clone + Debug {
    /// The scalar type used for coordinates.
    type Scalar: CoordinateScalar;

    /// Orientation of the ordered triple `(a, b, c)`.
    fn orientation(
        &self,
        a: &Point<Self::Scalar>,
        b: &Point<Self::Scalar>,
        c: &Point<Self::Scalar>,
    ) -> Orientation;

    /// Position of `d` relative to the circumcircle of the counter-clockwise
    /// triangle `(a, b, c)`.
    fn in_circle(
        &self,
        a: &Point<Self::Scalar>,
        b: &Point<Self::Scalar>,
        c: &Point<Self::Scalar>,
        d: &Point<Self::Scalar>,
    ) -> InCircle;

    /// True iff `c` lies strictly left of `a → b`.
    #[inline]
    fn ccw(
        &self,
        a: &Point<Self::Scalar>,
        b: &Point<Self::Scalar>,
        c: &Point<Self::Scalar>,
    ) -> bool {
        self.orientation(a, b, c) == Orientation::POSITIVE
    }

    /// True iff `d` lies strictly inside the circumcircle of `(a, b, c)`.
    #[inline]
    fn in_circumcircle(
        &self,
        a: &Point<Self::Scalar>,
        b: &Point<Self::Scalar>,
        c: &Point<Self::Scalar>,
        d: &Point<Self::Scalar>,
    ) -> bool {
        self.in_circle(a, b, c, d) == InCircle::INSIDE
    }
}

/// Fast floating-point kernel.
///
/// Evaluates the orientation and lifted in-circle determinants directly in
/// `f64`. May misclassify nearly collinear or nearly co-circular inputs.
///
/// For applications requiring guaranteed correctness in degenerate cases,
/// use [`RobustKernel`] instead.
#[derive(Clone, Default, Debug)]
pub struct FastKernel<T: CoordinateScalar> {
    _phantom: PhantomData<T>,
}

impl<T: CoordinateScalar> FastKernel<T> {
    /// Create a new fast kernel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: CoordinateScalar> Kernel for FastKernel<T> {
    type Scalar = T;

    fn orientation(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation {
        Orientation::from_determinant(orientation_determinant(a, b, c))
    }

    fn in_circle(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>, d: &Point<T>) -> InCircle {
        classify_incircle(incircle_determinant(a, b, c, d))
    }
}

/// Robust adaptive-precision kernel.
///
/// Delegates to Shewchuk's adaptive predicates (`robust` crate), whose sign is
/// exact for every `f64` input. Slower than [`FastKernel`] on near-degenerate
/// input, within a small constant factor otherwise.
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::kernel::{Kernel, RobustKernel};
/// use quadedge_delaunay::geometry::point::Point;
/// use quadedge_delaunay::geometry::predicates::Orientation;
///
/// let kernel = RobustKernel::<f64>::new();
/// let a = Point::new([0.1, 0.1]);
/// let b = Point::new([0.2, 0.2]);
/// let c = Point::new([0.3, 0.3]);
/// assert_eq!(kernel.orientation(&a, &b, &c), Orientation::DEGENERATE);
/// ```
#[derive(Clone, Default, Debug)]
pub struct RobustKernel<T: CoordinateScalar> {
    _phantom: PhantomData<T>,
}

impl<T: CoordinateScalar> RobustKernel<T> {
    /// Create a new robust kernel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

#[inline]
fn to_coord<T: CoordinateScalar>(p: &Point<T>) -> robust::Coord<f64> {
    let [x, y] = p.to_f64();
    robust::Coord { x, y }
}

impl<T: CoordinateScalar> Kernel for RobustKernel<T> {
    type Scalar = T;

    fn orientation(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation {
        Orientation::from_determinant(robust::orient2d(to_coord(a), to_coord(b), to_coord(c)))
    }

    fn in_circle(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>, d: &Point<T>) -> InCircle {
        classify_incircle(robust::incircle(
            to_coord(a),
            to_coord(b),
            to_coord(c),
            to_coord(d),
        ))
    }
}

#[inline]
fn classify_incircle(det: f64) -> InCircle {
    if det > 0.0 {
        InCircle::INSIDE
    } else if det < 0.0 {
        InCircle::OUTSIDE
    } else {
        InCircle::BOUNDARY
    }
}
