//! Euler characteristic of a planar triangulation.
//!
//! Counts vertices, edges and bounded triangles and evaluates
//! χ = V − E + F. [`euler_characteristic`] leaves out the unbounded face, so
//! a triangulated disk has χ = 1, as does a collinear polyline;
//! [`planar_euler_characteristic`] counts it and gives 2.
//!
//! # Examples
//!
//! ```rust
//! use quadedge_delaunay::prelude::*;
//! use quadedge_delaunay::topology::characteristics::euler;
//!
//! let points = vec![
//!     Point::new([0.0, 0.0]),
//!     Point::new([1.0, 0.0]),
//!     Point::new([0.5, 1.0]),
//! ];
//! let mut dt = DelaunayTriangulation::new(&points).unwrap();
//! dt.triangulate().unwrap();
//!
//! let counts = euler::count_simplices(dt.mesh(), dt.kernel()).unwrap();
//! assert_eq!(euler::euler_characteristic(&counts), 1);
//! ```

#![forbid(unsafe_code)]

use crate::core::face::collect_faces;
use crate::core::mesh::{Mesh, MeshError};
use crate::geometry::kernel::Kernel;

/// Simplex counts `f_k` by dimension: vertices, edges, triangles.
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::topology::characteristics::euler::FVector;
///
/// let counts = FVector { by_dim: vec![3, 3, 1] };
/// assert_eq!(counts.count(1), 3);
/// assert_eq!(counts.count(5), 0);
/// assert_eq!(counts.dimension(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FVector {
    /// `by_dim[k]` = number of `k`-simplices
    pub by_dim: Vec<usize>,
}

impl FVector {
    /// Number of `k`-simplices; 0 if `k` is out of range.
    #[must_use]
    #[inline]
    pub fn count(&self, k: usize) -> usize {
        self.by_dim.get(k).copied().unwrap_or(0)
    }

    /// Highest `k` with `f_k > 0`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.by_dim.iter().rposition(|&f| f > 0).unwrap_or(0)
    }
}

/// Topological classification of a planar triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyClassification {
    /// No vertices.
    Empty,
    /// A single vertex, edge or triangle; the value is its dimension.
    SingleSimplex(usize),
    /// A connected complex with boundary; the value is its dimension.
    /// Collinear input gives `Ball(1)`, anything else `Ball(2)`.
    Ball(usize),
}

/// Counts the input vertices, primal edges and bounded triangles of `mesh`.
///
/// Voronoi vertices are not counted.
///
/// # Errors
///
/// Returns [`MeshError`] if the mesh is corrupted.
pub fn count_simplices<K: Kernel>(
    mesh: &Mesh<K::Scalar>,
    kernel: &K,
) -> Result<FVector, MeshError> {
    let vertices = mesh.vertices().filter(|(_, v)| !v.is_dual()).count();
    let edges = mesh.number_of_quad_edges();
    let triangles = collect_faces(mesh, kernel)?.len();
    Ok(FVector {
        by_dim: vec![vertices, edges, triangles],
    })
}

/// χ = Σ (−1)^k · f_k.
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::topology::characteristics::euler::{FVector, euler_characteristic};
///
/// // Square split by one diagonal: V=4, E=5, F=2.
/// assert_eq!(euler_characteristic(&FVector { by_dim: vec![4, 5, 2] }), 1);
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn euler_characteristic(counts: &FVector) -> isize {
    counts
        .by_dim
        .iter()
        .enumerate()
        .map(|(k, &f_k)| {
            let sign = if k % 2 == 0 { 1 } else { -1 };
            sign * (f_k as isize)
        })
        .sum()
}

/// V − E + F for the planar graph, counting the unbounded face in F.
///
/// Any connected planar graph gives 2.
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::topology::characteristics::euler::{FVector, planar_euler_characteristic};
///
/// assert_eq!(planar_euler_characteristic(&FVector { by_dim: vec![3, 3, 1] }), 2);
/// assert_eq!(planar_euler_characteristic(&FVector { by_dim: vec![3, 2, 0] }), 2);
/// ```
#[must_use]
pub fn planar_euler_characteristic(counts: &FVector) -> isize {
    euler_characteristic(counts) + 1
}

/// Classifies a complex from its simplex counts.
#[must_use]
pub fn classify(counts: &FVector) -> TopologyClassification {
    let dimension = counts.dimension();
    if counts.count(0) == 0 {
        TopologyClassification::Empty
    } else if counts.count(dimension) == 1 {
        TopologyClassification::SingleSimplex(dimension)
    } else {
        TopologyClassification::Ball(dimension)
    }
}

/// Expected χ for a classification.
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::topology::characteristics::euler::{TopologyClassification, expected_chi_for};
///
/// assert_eq!(expected_chi_for(TopologyClassification::Empty), 0);
/// assert_eq!(expected_chi_for(TopologyClassification::Ball(2)), 1);
/// ```
#[must_use]
pub const fn expected_chi_for(classification: TopologyClassification) -> isize {
    match classification {
        TopologyClassification::Empty => 0,
        TopologyClassification::SingleSimplex(_) | TopologyClassification::Ball(_) => 1,
    }
}

/// Result of an Euler characteristic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyCheckResult {
    /// Computed χ.
    pub chi: isize,
    /// χ implied by the classification.
    pub expected: isize,
    /// Classification derived from the counts.
    pub classification: TopologyClassification,
    /// The simplex counts.
    pub counts: FVector,
}

impl TopologyCheckResult {
    /// True when the computed and expected χ agree.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.chi == self.expected
    }
}

/// Counts, classifies and evaluates χ for `mesh`.
///
/// # Errors
///
/// Returns [`MeshError`] if the mesh is corrupted.
pub fn validate_euler<K: Kernel>(
    mesh: &Mesh<K::Scalar>,
    kernel: &K,
) -> Result<TopologyCheckResult, MeshError> {
    let counts = count_simplices(mesh, kernel)?;
    let classification = classify(&counts);
    let result = TopologyCheckResult {
        chi: euler_characteristic(&counts),
        expected: expected_chi_for(classification),
        classification,
        counts,
    };
    if !result.is_valid() {
        tracing::warn!(
            chi = result.chi,
            expected = result.expected,
            ?classification,
            "Euler characteristic mismatch"
        );
    }
    Ok(result)
}
