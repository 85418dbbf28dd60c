//! Geometric predicates for planar triangulation.
//!
//! All predicates widen coordinates to `f64` and decide by the sign of a small
//! determinant over coordinates taken relative to one of the input points,
//! lifted onto the paraboloid for the in-circle test. They use plain
//! floating-point arithmetic: results for nearly collinear or nearly
//! co-circular inputs may be misclassified. Use
//! [`RobustKernel`](crate::geometry::kernel::RobustKernel) when that matters.

use thiserror::Error;

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Represents the position of a point relative to a circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCircle {
    /// The point is outside the circumcircle
    OUTSIDE,
    /// The point is exactly on the circumcircle
    BOUNDARY,
    /// The point is inside the circumcircle
    INSIDE,
}

impl std::fmt::Display for InCircle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Represents the orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise (determinant < 0)
    NEGATIVE,
    /// Collinear (determinant == 0)
    DEGENERATE,
    /// Counter-clockwise (determinant > 0)
    POSITIVE,
}

impl Orientation {
    /// Classifies a determinant by its sign.
    #[inline]
    #[must_use]
    pub fn from_determinant(det: f64) -> Self {
        if det > 0.0 {
            Self::POSITIVE
        } else if det < 0.0 {
            Self::NEGATIVE
        } else {
            Self::DEGENERATE
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Errors that can occur during circumcenter calculation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CircumcenterError {
    /// The three points are collinear; no circle passes through them.
    #[error("Cannot compute circumcenter of collinear points")]
    CollinearPoints,
    /// The circumcenter is not representable in the coordinate type.
    #[error("Circumcenter is not finite: ({x}, {y})")]
    NonFinite {
        /// Computed x coordinate in `f64`.
        x: f64,
        /// Computed y coordinate in `f64`.
        y: f64,
    },
}

// =============================================================================
// DETERMINANTS
// =============================================================================

/// Determinant of a 3×3 matrix given row by row.
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::predicates::det3x3;
///
/// let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// assert_eq!(det3x3(&identity), 1.0);
/// ```
#[inline]
#[must_use]
pub fn det3x3(m: &[[f64; 3]; 3]) -> f64 {
    let [[a, b, c], [d, e, f], [g, h, i]] = *m;
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

// =============================================================================
// PREDICATES
// =============================================================================

/// Signed area term of the orientation test, evaluated relative to `a`:
///
/// ```text
/// | bx-ax  by-ay |
/// | cx-ax  cy-ay |
/// ```
///
/// Positive iff `c` lies strictly left of the directed line `a → b`. A
/// repeated point yields exactly `0.0`.
#[must_use]
pub fn orientation_determinant<T: CoordinateScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> f64 {
    let [ax, ay] = a.to_f64();
    let [bx, by] = b.to_f64();
    let [cx, cy] = c.to_f64();
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Determine the orientation of the ordered triple `(a, b, c)`.
///
/// # Example
///
/// ```
/// use quadedge_delaunay::geometry::point::Point;
/// use quadedge_delaunay::geometry::predicates::{orientation, Orientation};
///
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// assert_eq!(orientation(&a, &b, &Point::new([1.0, 1.0])), Orientation::POSITIVE);
/// assert_eq!(orientation(&a, &b, &Point::new([1.0, -1.0])), Orientation::NEGATIVE);
/// assert_eq!(orientation(&a, &b, &Point::new([2.0, 0.0])), Orientation::DEGENERATE);
/// ```
#[inline]
#[must_use]
pub fn orientation<T: CoordinateScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation {
    Orientation::from_determinant(orientation_determinant(a, b, c))
}

/// True iff `c` lies strictly left of `a → b` (counter-clockwise turn).
///
/// Collinear triples are not counter-clockwise.
#[inline]
#[must_use]
pub fn ccw<T: CoordinateScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> bool {
    orientation_determinant(a, b, c) > 0.0
}

/// Offset of `p` from `origin` lifted onto the paraboloid `z = x² + y²`.
#[inline]
fn lifted_offset<T: CoordinateScalar>(p: &Point<T>, origin: [f64; 2]) -> [f64; 3] {
    let [px, py] = p.to_f64();
    let (dx, dy) = (px - origin[0], py - origin[1]);
    [dx, dy, dx.mul_add(dx, dy * dy)]
}

/// Signed lifted-paraboloid determinant, evaluated relative to `d`:
///
/// ```text
/// | ax-dx  ay-dy  |a-d|² |
/// | bx-dx  by-dy  |b-d|² |
/// | cx-dx  cy-dy  |c-d|² |
/// ```
///
/// Positive iff `d` lies strictly inside the circle through `a`, `b`, `c` when
/// those are in counter-clockwise order. The sign flips for clockwise input.
/// When `d` coincides with one of `a`, `b`, `c` the matching row is zero and
/// the result is exactly `0.0`.
#[must_use]
pub fn incircle_determinant<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
    d: &Point<T>,
) -> f64 {
    let origin = d.to_f64();
    det3x3(&[
        lifted_offset(a, origin),
        lifted_offset(b, origin),
        lifted_offset(c, origin),
    ])
}

/// Classify `d` against the circumcircle of the counter-clockwise triangle `(a, b, c)`.
///
/// # Example
///
/// ```
/// use quadedge_delaunay::geometry::point::Point;
/// use quadedge_delaunay::geometry::predicates::{incircle, InCircle};
///
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// let c = Point::new([0.0, 1.0]);
/// assert_eq!(incircle(&a, &b, &c, &Point::new([0.25, 0.25])), InCircle::INSIDE);
/// assert_eq!(incircle(&a, &b, &c, &Point::new([1.0, 1.0])), InCircle::BOUNDARY);
/// assert_eq!(incircle(&a, &b, &c, &Point::new([3.0, 3.0])), InCircle::OUTSIDE);
/// ```
#[must_use]
pub fn incircle<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
    d: &Point<T>,
) -> InCircle {
    let det = incircle_determinant(a, b, c, d);
    if det > 0.0 {
        InCircle::INSIDE
    } else if det < 0.0 {
        InCircle::OUTSIDE
    } else {
        InCircle::BOUNDARY
    }
}

/// True iff `d` lies strictly inside the circumcircle of the counter-clockwise
/// triangle `(a, b, c)`. This is the Delaunay acceptance test.
#[inline]
#[must_use]
pub fn in_circumcircle<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
    d: &Point<T>,
) -> bool {
    incircle_determinant(a, b, c, d) > 0.0
}

/// Closed-form circumcenter of the triangle `(a, b, c)`.
///
/// # Errors
///
/// Returns [`CircumcenterError::CollinearPoints`] when the points are collinear
/// and [`CircumcenterError::NonFinite`] when the center overflows the
/// coordinate type.
///
/// # Example
///
/// ```
/// use quadedge_delaunay::geometry::point::Point;
/// use quadedge_delaunay::geometry::predicates::circumcenter;
///
/// let center = circumcenter(
///     &Point::new([0.0, 0.0]),
///     &Point::new([2.0, 0.0]),
///     &Point::new([0.0, 2.0]),
/// )
/// .unwrap();
/// assert_eq!(center, Point::new([1.0, 1.0]));
/// ```
pub fn circumcenter<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
) -> Result<Point<T>, CircumcenterError> {
    let origin = a.to_f64();
    let [bx, by, b2] = lifted_offset(b, origin);
    let [cx, cy, c2] = lifted_offset(c, origin);

    let d = 2.0 * (bx * cy - by * cx);
    if d == 0.0 {
        return Err(CircumcenterError::CollinearPoints);
    }

    let x = origin[0] + (cy * b2 - by * c2) / d;
    let y = origin[1] + (bx * c2 - cx * b2) / d;

    match (T::from_f64(x), T::from_f64(y)) {
        (Some(px), Some(py)) if x.is_finite() && y.is_finite() => Ok(Point::new([px, py])),
        _ => Err(CircumcenterError::NonFinite { x, y }),
    }
}

/// Radius of the circle through `a`, `b`, `c`.
///
/// # Errors
///
/// Propagates [`circumcenter`] failures.
pub fn circumradius<T: CoordinateScalar>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
) -> Result<f64, CircumcenterError> {
    let center = circumcenter(a, b, c)?;
    Ok(center.distance(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new([x, y])
    }

    #[test]
    fn test_enum_display_and_debug_implementations() {
        assert_eq!(format!("{}", InCircle::INSIDE), "INSIDE");
        assert_eq!(format!("{}", InCircle::OUTSIDE), "OUTSIDE");
        assert_eq!(format!("{}", InCircle::BOUNDARY), "BOUNDARY");
        assert_eq!(format!("{:?}", InCircle::INSIDE), "INSIDE");

        assert_eq!(format!("{}", Orientation::POSITIVE), "POSITIVE");
        assert_eq!(format!("{}", Orientation::NEGATIVE), "NEGATIVE");
        assert_eq!(format!("{}", Orientation::DEGENERATE), "DEGENERATE");
        assert_eq!(format!("{:?}", Orientation::DEGENERATE), "DEGENERATE");
    }

    #[test]
    fn test_det3x3_matches_explicit_expansion() {
        let m = [[2.0, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]];
        assert_relative_eq!(det3x3(&m), 49.0);
    }

    #[test]
    fn test_orientation_is_cyclic_and_antisymmetric() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 1.0), p(1.0, 3.0));
        assert_eq!(orientation(&a, &b, &c), Orientation::POSITIVE);
        assert_eq!(orientation(&b, &c, &a), Orientation::POSITIVE);
        assert_eq!(orientation(&c, &a, &b), Orientation::POSITIVE);
        assert_eq!(orientation(&a, &c, &b), Orientation::NEGATIVE);
        assert!(ccw(&a, &b, &c));
        assert!(!ccw(&a, &c, &b));
    }

    #[test]
    fn test_collinear_is_not_ccw() {
        let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
        assert_eq!(orientation(&a, &b, &c), Orientation::DEGENERATE);
        assert!(!ccw(&a, &b, &c));
        assert!(!ccw(&a, &c, &b));
    }

    #[test]
    fn test_incircle_inside_outside_boundary() {
        let (a, b, c) = (p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0));
        assert!(in_circumcircle(&a, &b, &c, &p(1.0, 1.0)));
        assert!(in_circumcircle(&a, &b, &c, &p(1.9, 1.0)));
        assert!(!in_circumcircle(&a, &b, &c, &p(2.0, 2.0)));
        assert!(!in_circumcircle(&a, &b, &c, &p(5.0, -1.0)));
        assert_eq!(incircle(&a, &b, &c, &p(2.0, 2.0)), InCircle::BOUNDARY);
    }

    #[test]
    fn test_incircle_sign_flips_for_clockwise_triangle() {
        let (a, b, c) = (p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0));
        let d = p(1.0, 1.0);
        assert!(incircle_determinant(&a, &b, &c, &d) > 0.0);
        assert!(incircle_determinant(&a, &c, &b, &d) < 0.0);
    }

    #[test]
    fn test_incircle_is_translation_invariant() {
        let shift = |q: Point<f64>| p(q.x() + 100.0, q.y() - 50.0);
        let (a, b, c, d) = (p(0.0, 0.0), p(3.0, 0.0), p(1.0, 2.0), p(1.5, 0.5));
        assert_eq!(
            incircle(&a, &b, &c, &d),
            incircle(&shift(a), &shift(b), &shift(c), &shift(d))
        );
    }

    #[test]
    fn test_repeated_corner_is_exactly_on_circle() {
        let points =
            crate::geometry::util::generate_random_points_seeded(24, (-1.0, 1.0), 1).unwrap();
        let mut checked = 0;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                for c in points.iter().skip(i + 2).step_by(3) {
                    if orientation_determinant(a, b, c) <= 0.0 {
                        continue;
                    }
                    for d in [a, b, c] {
                        assert_eq!(incircle_determinant(a, b, c, d), 0.0);
                        assert!(!in_circumcircle(a, b, c, d));
                        assert_eq!(incircle(a, b, c, d), InCircle::BOUNDARY);
                    }
                    assert_eq!(orientation(a, b, a), Orientation::DEGENERATE);
                    assert_eq!(orientation(a, b, b), Orientation::DEGENERATE);
                    checked += 1;
                }
            }
        }
        assert!(checked > 100);
    }

    #[test]
    fn test_circumcenter_far_from_origin_matches_unshifted() {
        let (a, b, c) = (p(0.1, 0.2), p(0.5, -0.1), p(0.3, 0.6));
        let expected = circumcenter(&a, &b, &c).unwrap();
        let shift = |q: Point<f64>| p(q.x() + 1.0e6, q.y() - 2.0e6);
        let center = circumcenter(&shift(a), &shift(b), &shift(c)).unwrap();
        assert_relative_eq!(center.x() - 1.0e6, expected.x(), epsilon = 1e-6);
        assert_relative_eq!(center.y() + 2.0e6, expected.y(), epsilon = 1e-6);
    }

    #[test]
    fn test_circumcenter_equidistant() {
        let (a, b, c) = (p(1.0, 2.0), p(5.0, -1.0), p(3.0, 6.0));
        let center = circumcenter(&a, &b, &c).unwrap();
        let r = center.distance(&a);
        assert_relative_eq!(center.distance(&b), r, epsilon = 1e-10);
        assert_relative_eq!(center.distance(&c), r, epsilon = 1e-10);
        assert_relative_eq!(circumradius(&a, &b, &c).unwrap(), r, epsilon = 1e-12);
    }

    #[test]
    fn test_circumcenter_right_triangle_is_hypotenuse_midpoint() {
        let center = circumcenter(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0)).unwrap();
        assert_relative_eq!(center.x(), 0.5);
        assert_relative_eq!(center.y(), 0.5);
        assert_relative_eq!(
            circumradius(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0)).unwrap(),
            2.0_f64.sqrt() / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_circumcenter_collinear_fails() {
        assert_eq!(
            circumcenter(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)),
            Err(CircumcenterError::CollinearPoints)
        );
    }

    #[test]
    fn test_circumcenter_f32_overflow_is_non_finite() {
        let a = Point::new([0.0_f32, 0.0]);
        let b = Point::new([1e30_f32, 0.0]);
        let c = Point::new([5e29_f32, 1.0]);
        assert!(matches!(
            circumcenter(&a, &b, &c),
            Err(CircumcenterError::NonFinite { .. })
        ));
    }
}
