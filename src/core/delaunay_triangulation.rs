//! Planar Delaunay triangulation over a quad-edge mesh.
//!
//! [`DelaunayTriangulation`] owns the mesh and the deduplicated, sorted input
//! vertices. Construction only prepares the vertex set; [`triangulate`]
//! runs the divide-and-conquer algorithm once, after which the Voronoi
//! diagram and a spanning tree can be derived from the same mesh.
//!
//! [`triangulate`]: DelaunayTriangulation::triangulate

use thiserror::Error;

use crate::core::algorithms::divide_and_conquer::{self, HullEdges, TriangulationStatistics};
use crate::core::algorithms::spanning_tree::{self, SpanningTreeEdge};
use crate::core::algorithms::voronoi::{self, VoronoiDiagram};
use crate::core::face::{Face, collect_faces};
use crate::core::mesh::{Mesh, MeshError, QuadEdgeKey, VertexKey};
use crate::core::quad_edge::QuadEdge;
use crate::core::util::{DelaunayValidationError, sort_and_dedup_points, validate_delaunay};
use crate::core::vertex::{Vertex, VertexKind};
use crate::geometry::kernel::{FastKernel, Kernel};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateValidationError;
use crate::geometry::util::{RandomPointGenerationError, generate_random_points_seeded};
use crate::topology::characteristics::euler::{
    TopologyCheckResult, count_simplices, planar_euler_characteristic, validate_euler,
};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while preparing the input vertex set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangulationConstructionError {
    /// Fewer than two distinct points remain after deduplication.
    #[error("Insufficient vertices for a planar triangulation: need at least 2 distinct points, got {actual}")]
    InsufficientVertices {
        /// Number of distinct points available.
        actual: usize,
    },
    /// An input point has a NaN or infinite coordinate.
    #[error("Invalid coordinate in input point {index}: {source}")]
    InvalidCoordinate {
        /// Position of the point in the caller's slice.
        index: usize,
        /// The underlying validation error.
        #[source]
        source: CoordinateValidationError,
    },
    /// Random point generation failed.
    #[error("Point generation failed: {0}")]
    PointGeneration(#[from] RandomPointGenerationError),
}

/// Errors raised by triangulation operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangulationError {
    /// [`triangulate`](DelaunayTriangulation::triangulate) was already called.
    #[error("Triangulation has already been computed")]
    AlreadyTriangulated,
    /// The operation needs a triangulated mesh.
    #[error("Triangulation has not been computed yet")]
    NotTriangulated,
    /// The operation needs the Voronoi diagram.
    #[error("Voronoi diagram has not been computed yet")]
    VoronoiNotComputed,
    /// Input preparation failed.
    #[error(transparent)]
    Construction(#[from] TriangulationConstructionError),
    /// A mesh operation failed.
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

// =============================================================================
// DELAUNAY TRIANGULATION
// =============================================================================

/// Delaunay triangulation of a planar point set.
///
/// # Type Parameters
/// - `K`: Geometric kernel supplying the orientation and in-circle predicates
///
/// # Degenerate input
///
/// Exact duplicates are dropped during construction. Collinear input yields
/// a polyline with no triangles. Four or more co-circular points admit
/// several Delaunay triangulations; which one is produced depends on the
/// merge order and is deterministic for a given input. [`FastKernel`] can
/// misjudge nearly collinear or nearly co-circular points; use
/// [`RobustKernel`](crate::geometry::kernel::RobustKernel) with
/// [`with_kernel`](Self::with_kernel) when that matters.
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::prelude::*;
///
/// let points = vec![
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
/// ];
/// let mut dt = DelaunayTriangulation::new(&points).unwrap();
/// dt.triangulate().unwrap();
///
/// assert_eq!(dt.number_of_vertices(), 3);
/// assert_eq!(dt.number_of_edges(), 3);
/// assert_eq!(dt.number_of_triangles(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DelaunayTriangulation<K>
where
    K: Kernel,
{
    kernel: K,
    mesh: Mesh<K::Scalar>,
    /// Input vertices in lexicographic order.
    sorted_vertices: Vec<VertexKey>,
    hull: Option<HullEdges>,
    statistics: TriangulationStatistics,
    faces: Vec<Face>,
    voronoi: Option<VoronoiDiagram>,
    duplicates_removed: usize,
}

// Most common case: f64 with FastKernel
impl DelaunayTriangulation<FastKernel<f64>> {
    /// Prepares `points` for triangulation with the fast floating-point
    /// kernel.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationConstructionError`] if a coordinate is not
    /// finite or fewer than two distinct points remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadedge_delaunay::prelude::*;
    ///
    /// let points = vec![Point::new([0.0, 0.0]), Point::new([0.0, 0.0])];
    /// assert!(matches!(
    ///     DelaunayTriangulation::new(&points),
    ///     Err(TriangulationConstructionError::InsufficientVertices { actual: 1 })
    /// ));
    /// ```
    pub fn new(points: &[Point<f64>]) -> Result<Self, TriangulationConstructionError> {
        Self::with_kernel(FastKernel::<f64>::new(), points)
    }

    /// Prepares `count` uniformly random points in `range × range`.
    ///
    /// The same `seed` always yields the same points.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationConstructionError::PointGeneration`] for an
    /// empty range, and the errors of [`new`](Self::new) otherwise.
    pub fn from_random_points(
        count: usize,
        range: (f64, f64),
        seed: u64,
    ) -> Result<Self, TriangulationConstructionError> {
        let points = generate_random_points_seeded(count, range, seed)?;
        Self::new(&points)
    }
}

// Generic implementation for all kernels
impl<K> DelaunayTriangulation<K>
where
    K: Kernel,
{
    /// Prepares `points` for triangulation with an explicit kernel.
    ///
    /// Points are validated, sorted lexicographically by `(x, y)` and
    /// stripped of exact duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationConstructionError::InvalidCoordinate`] for the
    /// first non-finite point and
    /// [`TriangulationConstructionError::InsufficientVertices`] if fewer than
    /// two distinct points remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadedge_delaunay::prelude::*;
    ///
    /// let points = vec![
    ///     Point::new([0.0, 0.0]),
    ///     Point::new([1.0, 0.0]),
    ///     Point::new([0.0, 1.0]),
    ///     Point::new([1.0, 1.0]),
    /// ];
    /// let mut dt = DelaunayTriangulation::with_kernel(RobustKernel::new(), &points).unwrap();
    /// dt.triangulate().unwrap();
    /// assert_eq!(dt.number_of_triangles(), 2);
    /// ```
    pub fn with_kernel(
        kernel: K,
        points: &[Point<K::Scalar>],
    ) -> Result<Self, TriangulationConstructionError> {
        for (index, point) in points.iter().enumerate() {
            point
                .validate()
                .map_err(|source| TriangulationConstructionError::InvalidCoordinate {
                    index,
                    source,
                })?;
        }

        let (unique, duplicates_removed) = sort_and_dedup_points(points.to_vec());
        if unique.len() < 2 {
            return Err(TriangulationConstructionError::InsufficientVertices {
                actual: unique.len(),
            });
        }

        let mut mesh = Mesh::with_capacity(unique.len(), 3 * unique.len());
        let sorted_vertices = unique
            .into_iter()
            .map(|point| mesh.insert_vertex(point, VertexKind::Input))
            .collect();

        Ok(Self {
            kernel,
            mesh,
            sorted_vertices,
            hull: None,
            statistics: TriangulationStatistics::default(),
            faces: Vec::new(),
            voronoi: None,
            duplicates_removed,
        })
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Computes the Delaunay triangulation.
    ///
    /// Returns the hull edges leaving the leftmost and rightmost vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::AlreadyTriangulated`] on a second call.
    /// A [`TriangulationError::Mesh`] indicates an internal inconsistency.
    pub fn triangulate(&mut self) -> Result<HullEdges, TriangulationError> {
        if self.hull.is_some() {
            return Err(TriangulationError::AlreadyTriangulated);
        }

        let (hull, statistics) =
            divide_and_conquer::triangulate(&mut self.mesh, &self.kernel, &self.sorted_vertices)?;
        self.faces = collect_faces(&self.mesh, &self.kernel)?;
        self.hull = Some(hull);
        self.statistics = statistics;

        tracing::debug!(
            vertices = self.sorted_vertices.len(),
            edges = self.mesh.number_of_quad_edges(),
            triangles = self.faces.len(),
            "triangulated"
        );
        Ok(hull)
    }

    /// Whether [`triangulate`](Self::triangulate) has run.
    #[must_use]
    pub const fn is_triangulated(&self) -> bool {
        self.hull.is_some()
    }

    /// Binds circumcenters of adjacent triangles to the dual slots of the
    /// mesh and returns the resulting Voronoi diagram.
    ///
    /// The diagram is computed once; later calls return the cached result.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::NotTriangulated`] before
    /// [`triangulate`](Self::triangulate).
    pub fn compute_voronoi(&mut self) -> Result<&VoronoiDiagram, TriangulationError> {
        if !self.is_triangulated() {
            return Err(TriangulationError::NotTriangulated);
        }
        let diagram = match self.voronoi.take() {
            Some(diagram) => diagram,
            None => voronoi::compute_voronoi(&mut self.mesh, &self.kernel)?,
        };
        Ok(self.voronoi.insert(diagram))
    }

    /// The Voronoi diagram, if computed.
    #[must_use]
    pub const fn voronoi(&self) -> Option<&VoronoiDiagram> {
        self.voronoi.as_ref()
    }

    /// Bounded Voronoi edges as point pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::VoronoiNotComputed`] before
    /// [`compute_voronoi`](Self::compute_voronoi).
    pub fn voronoi_edges(
        &self,
    ) -> Result<Vec<(Point<K::Scalar>, Point<K::Scalar>)>, TriangulationError> {
        let diagram = self
            .voronoi
            .as_ref()
            .ok_or(TriangulationError::VoronoiNotComputed)?;
        Ok(diagram.segments(&self.mesh)?)
    }

    /// Breadth-first spanning tree rooted at the lexicographically smallest
    /// vertex.
    ///
    /// Edges are unweighted, so the tree is not a minimum spanning tree.
    /// It has `number_of_vertices() - 1` edges.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::NotTriangulated`] before
    /// [`triangulate`](Self::triangulate).
    pub fn spanning_tree(&self) -> Result<Vec<SpanningTreeEdge>, TriangulationError> {
        if !self.is_triangulated() {
            return Err(TriangulationError::NotTriangulated);
        }
        let root = self
            .sorted_vertices
            .first()
            .copied()
            .ok_or(TriangulationConstructionError::InsufficientVertices { actual: 0 })?;
        Ok(spanning_tree::spanning_tree(&self.mesh, root)?)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The geometric kernel.
    #[must_use]
    pub const fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The underlying quad-edge mesh.
    #[must_use]
    pub const fn mesh(&self) -> &Mesh<K::Scalar> {
        &self.mesh
    }

    /// Number of distinct input vertices.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.sorted_vertices.len()
    }

    /// Number of triangulation edges (one per quad-edge record).
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.mesh.number_of_quad_edges()
    }

    /// Number of bounded triangles.
    #[must_use]
    pub fn number_of_triangles(&self) -> usize {
        self.faces.len()
    }

    /// Input vertices in lexicographic order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexKey, &Vertex<K::Scalar>)> {
        self.sorted_vertices
            .iter()
            .filter_map(|&key| self.mesh.vertex(key).map(|v| (key, v)))
    }

    /// Input vertex keys in lexicographic order.
    #[must_use]
    pub fn sorted_vertices(&self) -> &[VertexKey] {
        &self.sorted_vertices
    }

    /// Quad-edge records of the mesh.
    pub fn quad_edges(&self) -> impl Iterator<Item = (QuadEdgeKey, &QuadEdge)> {
        self.mesh.quad_edges()
    }

    /// Visible triangulation edges as point pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::Mesh`] if the mesh is corrupted.
    pub fn edges(&self) -> Result<Vec<(Point<K::Scalar>, Point<K::Scalar>)>, TriangulationError> {
        let mut segments = Vec::with_capacity(self.mesh.number_of_quad_edges());
        for edge in self.mesh.primal_edges() {
            if self.mesh.is_visible(edge)? {
                segments.push((self.mesh.org_point(edge)?, self.mesh.dest_point(edge)?));
            }
        }
        Ok(segments)
    }

    /// Bounded triangles, corners counter-clockwise.
    pub fn triangles(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }

    /// Hull edges returned by [`triangulate`](Self::triangulate).
    #[must_use]
    pub const fn hull_edges(&self) -> Option<HullEdges> {
        self.hull
    }

    /// Convex hull vertices, counter-clockwise from the leftmost vertex.
    ///
    /// Vertices lying on a hull edge are included. Collinear input yields
    /// its two extreme points.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::NotTriangulated`] before
    /// [`triangulate`](Self::triangulate).
    pub fn convex_hull(&self) -> Result<Vec<VertexKey>, TriangulationError> {
        let hull = self.hull.ok_or(TriangulationError::NotTriangulated)?;
        if self.faces.is_empty() {
            let first = self.sorted_vertices.first();
            let last = self.sorted_vertices.last();
            return Ok(first.into_iter().chain(last).copied().collect());
        }

        let mut vertices = Vec::new();
        let mut edge = hull.left;
        loop {
            vertices.push(self.mesh.org(edge)?);
            edge = self.mesh.rprev(edge)?;
            if edge == hull.left {
                break;
            }
            if vertices.len() > self.sorted_vertices.len() {
                return Err(MeshError::RingNotClosed {
                    edge: hull.left,
                    limit: self.sorted_vertices.len(),
                }
                .into());
            }
        }
        Ok(vertices)
    }

    /// Counters from the last triangulation.
    #[must_use]
    pub const fn statistics(&self) -> &TriangulationStatistics {
        &self.statistics
    }

    /// Number of exact duplicate points dropped during construction.
    #[must_use]
    pub const fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Checks the structural invariants of the mesh.
    ///
    /// # Errors
    ///
    /// Returns the first [`MeshError`] found, wrapped in
    /// [`TriangulationError::Mesh`].
    pub fn is_valid(&self) -> Result<(), TriangulationError> {
        self.mesh.is_valid()?;
        Ok(())
    }

    /// Checks the empty-circumcircle property of every triangle.
    ///
    /// Quadratic in the number of vertices.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayValidationError::Violation`] for the first
    /// offending triangle.
    pub fn validate_delaunay(&self) -> Result<(), DelaunayValidationError> {
        validate_delaunay(&self.mesh, &self.kernel)
    }

    /// V − E + F of the planar graph, counting the unbounded face.
    ///
    /// 2 for every triangulated point set.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::NotTriangulated`] before
    /// [`triangulate`](Self::triangulate).
    pub fn euler_characteristic(&self) -> Result<isize, TriangulationError> {
        if !self.is_triangulated() {
            return Err(TriangulationError::NotTriangulated);
        }
        let counts = count_simplices(&self.mesh, &self.kernel)?;
        Ok(planar_euler_characteristic(&counts))
    }

    /// Classifies the triangulation and checks its Euler characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::NotTriangulated`] before
    /// [`triangulate`](Self::triangulate).
    pub fn validate_topology(&self) -> Result<TopologyCheckResult, TriangulationError> {
        if !self.is_triangulated() {
            return Err(TriangulationError::NotTriangulated);
        }
        Ok(validate_euler(&self.mesh, &self.kernel)?)
    }
}
