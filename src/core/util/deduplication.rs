//! Point deduplication utilities.

#![forbid(unsafe_code)]

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Sorts points lexicographically by `(x, y)` and drops exact duplicates.
///
/// Two points are duplicates when both coordinates compare equal, so `+0.0`
/// and `-0.0` coincide. The first occurrence in sorted order is kept.
/// Returns the unique points together with the number removed.
///
/// # Complexity
///
/// O(n log n).
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::core::util::sort_and_dedup_points;
/// use quadedge_delaunay::geometry::point::Point;
///
/// let points = vec![
///     Point::new([1.0, 1.0]),
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 1.0]),
/// ];
/// let (unique, removed) = sort_and_dedup_points(points);
/// assert_eq!(unique, vec![Point::new([0.0, 0.0]), Point::new([1.0, 1.0])]);
/// assert_eq!(removed, 1);
/// ```
#[must_use]
pub fn sort_and_dedup_points<T: CoordinateScalar>(mut points: Vec<Point<T>>) -> (Vec<Point<T>>, usize) {
    let before = points.len();
    points.sort_by(Point::lexicographic_cmp);
    points.dedup_by(|a, b| a.lexicographic_cmp(b).is_eq());
    let removed = before - points.len();
    if removed > 0 {
        tracing::debug!(removed, remaining = points.len(), "dropped duplicate points");
    }
    (points, removed)
}
