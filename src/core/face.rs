//! Triangular faces of a quad-edge mesh.
//!
//! Faces are not stored: a face is the left face of any of its bounding
//! directed edges. A [`Face`] records the three edges in counter-clockwise
//! order, starting at the smallest handle, so each bounded triangle has
//! exactly one `Face` value.

#![forbid(unsafe_code)]

use crate::core::mesh::{Mesh, MeshError, VertexKey};
use crate::core::quad_edge::DirectedEdge;
use crate::geometry::kernel::Kernel;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// A bounded triangular face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    edges: [DirectedEdge; 3],
    vertices: [VertexKey; 3],
}

impl Face {
    /// The left face of `edge` if it is a bounded triangle.
    ///
    /// A face qualifies when following `lnext` three times returns to `edge`
    /// and its corners are strictly counter-clockwise. The unbounded face of
    /// a triangle-shaped mesh also has three edges, but its corners run
    /// clockwise, so it is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError`] if `edge` is stale or a corner is unbound.
    pub fn left_of<K: Kernel>(
        mesh: &Mesh<K::Scalar>,
        kernel: &K,
        edge: DirectedEdge,
    ) -> Result<Option<Self>, MeshError> {
        if !edge.is_primal() {
            return Ok(None);
        }
        let second = mesh.lnext(edge)?;
        let third = mesh.lnext(second)?;
        if mesh.lnext(third)? != edge {
            return Ok(None);
        }

        let vertices = [mesh.org(edge)?, mesh.org(second)?, mesh.org(third)?];
        let [a, b, c] = [
            mesh.point(vertices[0])?,
            mesh.point(vertices[1])?,
            mesh.point(vertices[2])?,
        ];
        if !kernel.ccw(&a, &b, &c) {
            return Ok(None);
        }

        let mut edges = [edge, second, third];
        let mut vertices = vertices;
        let start = (0..3).min_by_key(|&i| edges[i]).unwrap_or(0);
        edges.rotate_left(start);
        vertices.rotate_left(start);
        Ok(Some(Self { edges, vertices }))
    }

    /// Bounding edges, counter-clockwise, smallest handle first.
    #[must_use]
    pub const fn edges(&self) -> &[DirectedEdge; 3] {
        &self.edges
    }

    /// Corners, counter-clockwise; `vertices()[i]` is the origin of `edges()[i]`.
    #[must_use]
    pub const fn vertices(&self) -> &[VertexKey; 3] {
        &self.vertices
    }

    /// Handle identifying this face; stable for the lifetime of the mesh.
    #[must_use]
    pub const fn key(&self) -> DirectedEdge {
        self.edges[0]
    }

    /// Corner positions.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidVertex`] if a corner is missing.
    pub fn points<T: CoordinateScalar>(&self, mesh: &Mesh<T>) -> Result<[Point<T>; 3], MeshError> {
        Ok([
            mesh.point(self.vertices[0])?,
            mesh.point(self.vertices[1])?,
            mesh.point(self.vertices[2])?,
        ])
    }
}

/// All bounded triangular faces of `mesh`.
///
/// # Errors
///
/// Returns [`MeshError`] if the mesh is corrupted.
pub fn collect_faces<K: Kernel>(
    mesh: &Mesh<K::Scalar>,
    kernel: &K,
) -> Result<Vec<Face>, MeshError> {
    let mut faces = Vec::new();
    for edge in mesh.primal_edges() {
        for side in [edge, edge.sym()] {
            if let Some(face) = Face::left_of(mesh, kernel, side)?
                && face.key() == side
            {
                faces.push(face);
            }
        }
    }
    Ok(faces)
}
