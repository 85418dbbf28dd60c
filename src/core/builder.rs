//! Fluent builder for [`DelaunayTriangulation`].
//!
//! [`DelaunayTriangulationBuilder`] gathers the ways of obtaining an input
//! point set (a caller slice, seeded uniform random points, seeded lattice
//! points, a regular grid) behind one API and optionally runs the
//! triangulation as part of [`build`](DelaunayTriangulationBuilder::build).
//!
//! # When to use the builder
//!
//! | Situation | Recommended API |
//! |---|---|
//! | `f64` points, fast predicates | [`DelaunayTriangulation::new`] |
//! | Generated input (random, lattice, grid) | [`DelaunayTriangulationBuilder`] |
//! | Custom kernel (`RobustKernel`, etc.) | [`DelaunayTriangulationBuilder::build_with_kernel`] |
//!
//! # Examples
//!
//! ```rust
//! use quadedge_delaunay::core::builder::DelaunayTriangulationBuilder;
//!
//! let dt = DelaunayTriangulationBuilder::random_points(100, (0.0, 1.0), 42)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(dt.number_of_vertices(), 100);
//! assert!(dt.is_triangulated());
//! ```
//!
//! ```rust
//! use quadedge_delaunay::core::builder::DelaunayTriangulationBuilder;
//! use quadedge_delaunay::geometry::kernel::RobustKernel;
//! use quadedge_delaunay::geometry::point::Point;
//!
//! let points = vec![
//!     Point::new([0.0, 0.0]),
//!     Point::new([1.0, 0.0]),
//!     Point::new([0.0, 1.0]),
//! ];
//! let dt = DelaunayTriangulationBuilder::new(&points)
//!     .triangulate(false)
//!     .build_with_kernel(RobustKernel::new())
//!     .unwrap();
//!
//! assert!(!dt.is_triangulated());
//! ```

#![forbid(unsafe_code)]

use std::borrow::Cow;

use rand::distr::uniform::SampleUniform;

use crate::core::delaunay_triangulation::{
    DelaunayTriangulation, TriangulationConstructionError, TriangulationError,
};
use crate::geometry::kernel::{FastKernel, Kernel};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::util::{
    RandomPointGenerationError, generate_grid_points, generate_random_lattice_points_seeded,
    generate_random_points_seeded,
};

/// Fluent builder for [`DelaunayTriangulation`].
///
/// Generation errors are deferred to [`build`](Self::build) so the chain
/// stays infallible.
#[derive(Clone, Debug)]
pub struct DelaunayTriangulationBuilder<'p, T>
where
    T: CoordinateScalar,
{
    points: Result<Cow<'p, [Point<T>]>, RandomPointGenerationError>,
    triangulate: bool,
}

// Pins T = f64 so the common case needs no annotations.
impl<'p> DelaunayTriangulationBuilder<'p, f64> {
    /// Creates a builder over borrowed `f64` points.
    #[must_use]
    pub fn new(points: &'p [Point<f64>]) -> Self {
        Self::from_points(points)
    }
}

impl<'p, T> DelaunayTriangulationBuilder<'p, T>
where
    T: CoordinateScalar,
{
    /// Creates a builder over borrowed points of any scalar type.
    #[must_use]
    pub fn from_points(points: &'p [Point<T>]) -> Self {
        Self {
            points: Ok(Cow::Borrowed(points)),
            triangulate: true,
        }
    }

    /// Uses `count` random integer points in `[0, side)²`.
    ///
    /// Duplicates are likely for dense lattices; construction drops them.
    #[must_use]
    pub fn lattice_points(count: usize, side: u32, seed: u64) -> Self {
        Self::generated(generate_random_lattice_points_seeded(count, side, seed))
    }

    /// Uses a `points_per_side × points_per_side` grid.
    #[must_use]
    pub fn grid_points(points_per_side: usize, spacing: T, offset: [T; 2]) -> Self {
        Self::generated(generate_grid_points(points_per_side, spacing, offset))
    }

    fn generated(points: Result<Vec<Point<T>>, RandomPointGenerationError>) -> Self {
        Self {
            points: points.map(Cow::Owned),
            triangulate: true,
        }
    }

    /// Whether [`build`](Self::build) also triangulates (default `true`).
    #[must_use]
    pub fn triangulate(mut self, triangulate: bool) -> Self {
        self.triangulate = triangulate;
        self
    }

    /// Builds with the fast floating-point kernel.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::Construction`] if point generation or
    /// input validation fails.
    pub fn build(self) -> Result<DelaunayTriangulation<FastKernel<T>>, TriangulationError> {
        self.build_with_kernel(FastKernel::<T>::new())
    }

    /// Builds with an explicit kernel.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_with_kernel<K>(self, kernel: K) -> Result<DelaunayTriangulation<K>, TriangulationError>
    where
        K: Kernel<Scalar = T>,
    {
        let points = self
            .points
            .map_err(TriangulationConstructionError::PointGeneration)?;
        let mut dt = DelaunayTriangulation::with_kernel(kernel, &points)?;
        if self.triangulate {
            dt.triangulate()?;
        }
        Ok(dt)
    }
}

impl<T> DelaunayTriangulationBuilder<'_, T>
where
    T: CoordinateScalar + SampleUniform,
{
    /// Uses `count` uniform random points in `range × range`.
    #[must_use]
    pub fn random_points(count: usize, range: (T, T), seed: u64) -> Self {
        Self::generated(generate_random_points_seeded(count, range, seed))
    }
}
