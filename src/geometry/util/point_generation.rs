//! Point-set generation.
//!
//! Seeded generators make triangulation tests and benchmarks reproducible.

use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

pub use super::RandomPointGenerationError;

/// Generate random points with a seeded RNG for reproducible results.
///
/// Coordinates are drawn uniformly from the half-open interval `[min, max)`.
///
/// # Errors
///
/// * `RandomPointGenerationError::InvalidRange` if `min >= max`
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::util::generate_random_points_seeded;
///
/// let points1 = generate_random_points_seeded::<f64>(100, (-5.0, 5.0), 42).unwrap();
/// let points2 = generate_random_points_seeded::<f64>(100, (-5.0, 5.0), 42).unwrap();
/// assert_eq!(points1, points2);
///
/// let points3 = generate_random_points_seeded::<f64>(100, (-5.0, 5.0), 123).unwrap();
/// assert_ne!(points1, points3);
/// ```
pub fn generate_random_points_seeded<T: CoordinateScalar + SampleUniform>(
    n_points: usize,
    range: (T, T),
    seed: u64,
) -> Result<Vec<Point<T>>, RandomPointGenerationError> {
    if range.0 >= range.1 {
        return Err(RandomPointGenerationError::InvalidRange {
            min: format!("{:?}", range.0),
            max: format!("{:?}", range.1),
        });
    }

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(n_points);

    for _ in 0..n_points {
        let x = rng.random_range(range.0..range.1);
        let y = rng.random_range(range.0..range.1);
        points.push(Point::new([x, y]));
    }

    Ok(points)
}

/// Generate random points on the integer lattice `[0, side) × [0, side)`.
///
/// This mirrors the classic demo setup of integer pixel coordinates.
/// Duplicates are likely for large `n_points`; the triangulation
/// constructors remove them.
///
/// # Errors
///
/// * `RandomPointGenerationError::InvalidRange` if `side == 0`
/// * `RandomPointGenerationError::GenerationFailed` if a lattice coordinate
///   cannot be represented in `T`
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::util::generate_random_lattice_points_seeded;
///
/// let points = generate_random_lattice_points_seeded::<f64>(50, 512, 7).unwrap();
/// assert_eq!(points.len(), 50);
/// assert!(points.iter().all(|p| p.x().fract() == 0.0 && p.x() < 512.0));
/// ```
pub fn generate_random_lattice_points_seeded<T: CoordinateScalar>(
    n_points: usize,
    side: u32,
    seed: u64,
) -> Result<Vec<Point<T>>, RandomPointGenerationError> {
    if side == 0 {
        return Err(RandomPointGenerationError::InvalidRange {
            min: "0".to_string(),
            max: "0".to_string(),
        });
    }

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(n_points);

    for _ in 0..n_points {
        let x = lattice_coordinate::<T>(rng.random_range(0..side))?;
        let y = lattice_coordinate::<T>(rng.random_range(0..side))?;
        points.push(Point::new([x, y]));
    }

    Ok(points)
}

/// Generate points arranged in a regular `points_per_side × points_per_side` grid.
///
/// Grids are maximally co-circular and exercise the tie-breaking paths of
/// the in-circle test.
///
/// # Errors
///
/// * `RandomPointGenerationError::InvalidPointCount` if `points_per_side` is zero
/// * `RandomPointGenerationError::GenerationFailed` if an index cannot be
///   represented in `T`
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::util::generate_grid_points;
///
/// let grid = generate_grid_points::<f64>(4, 1.0, [0.0, 0.0]).unwrap();
/// assert_eq!(grid.len(), 16);
/// ```
pub fn generate_grid_points<T: CoordinateScalar>(
    points_per_side: usize,
    spacing: T,
    offset: [T; 2],
) -> Result<Vec<Point<T>>, RandomPointGenerationError> {
    if points_per_side == 0 {
        return Err(RandomPointGenerationError::InvalidPointCount { n_points: 0 });
    }

    let total = points_per_side.checked_mul(points_per_side).ok_or_else(|| {
        RandomPointGenerationError::GenerationFailed {
            details: format!("Requested grid size {points_per_side}^2 overflows usize"),
        }
    })?;

    let mut points = Vec::with_capacity(total);
    for i in 0..points_per_side {
        for j in 0..points_per_side {
            let (fi, fj) = (grid_index::<T>(i)?, grid_index::<T>(j)?);
            points.push(Point::new([offset[0] + fi * spacing, offset[1] + fj * spacing]));
        }
    }

    Ok(points)
}

fn lattice_coordinate<T: CoordinateScalar>(value: u32) -> Result<T, RandomPointGenerationError> {
    T::from_f64(f64::from(value)).ok_or_else(|| RandomPointGenerationError::GenerationFailed {
        details: format!("Failed to convert lattice coordinate {value} to coordinate type"),
    })
}

fn grid_index<T: CoordinateScalar>(index: usize) -> Result<T, RandomPointGenerationError> {
    num_traits::cast(index).ok_or_else(|| RandomPointGenerationError::GenerationFailed {
        details: format!("Failed to convert grid index {index} to coordinate type"),
    })
}
