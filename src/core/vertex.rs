//! Mesh vertices.
//!
//! A vertex owns its position and a back-reference to one directed edge whose
//! origin it is. The back-reference is the entry point for walking the
//! vertex's origin ring.
//!
//! # Examples
//!
//! ```rust
//! use quadedge_delaunay::core::vertex::{Vertex, VertexKind};
//! use quadedge_delaunay::geometry::point::Point;
//!
//! let v = Vertex::new(Point::new([1.0, 2.0]), VertexKind::Input);
//! assert_eq!(v.point().x(), 1.0);
//! assert!(v.edge().is_none());
//! assert!(!v.is_dual());
//! ```

#![forbid(unsafe_code)]

use crate::core::quad_edge::DirectedEdge;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};

/// Role of a vertex in the mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// A deduplicated input point; origin of primal edges.
    #[default]
    Input,
    /// A Voronoi vertex (circumcenter of a triangle); origin of dual edges.
    Dual,
}

/// A vertex of the quad-edge mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex<T>
where
    T: CoordinateScalar,
{
    point: Point<T>,
    pub(crate) edge: Option<DirectedEdge>,
    kind: VertexKind,
}

impl<T> Vertex<T>
where
    T: CoordinateScalar,
{
    /// Creates a vertex with no incident edge.
    #[inline]
    #[must_use]
    pub const fn new(point: Point<T>, kind: VertexKind) -> Self {
        Self {
            point,
            edge: None,
            kind,
        }
    }

    /// Position of the vertex.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> &Point<T> {
        &self.point
    }

    /// One directed edge with this vertex as origin, if any.
    #[inline]
    #[must_use]
    pub const fn edge(&self) -> Option<DirectedEdge> {
        self.edge
    }

    /// Whether this is an input or a Voronoi vertex.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> VertexKind {
        self.kind
    }

    /// True for Voronoi vertices.
    #[inline]
    #[must_use]
    pub fn is_dual(&self) -> bool {
        self.kind == VertexKind::Dual
    }

    /// Validates the vertex position.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateValidationError`] if a coordinate is NaN or infinite.
    pub fn is_valid(&self) -> Result<(), CoordinateValidationError> {
        self.point.validate()
    }
}

impl<T> From<Point<T>> for Vertex<T>
where
    T: CoordinateScalar,
{
    fn from(point: Point<T>) -> Self {
        Self::new(point, VertexKind::Input)
    }
}
