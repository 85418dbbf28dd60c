//! Voronoi diagram as the dual of a Delaunay mesh.
//!
//! Every bounded triangle contributes one Voronoi vertex at its circumcenter.
//! A primal edge whose two sides are both bounded triangles contributes one
//! Voronoi edge, stored in the same quad-edge record: the circumcenter of
//! the right triangle becomes the origin of `rot(e)` and the circumcenter of
//! the left triangle the origin of `inv_rot(e)`. Edges on the convex hull
//! border the unbounded face and keep unbound dual slots.

#![forbid(unsafe_code)]

use crate::core::collections::{
    Entry, FaceToDualVertexMap, FastHashSet, fast_hash_map_with_capacity,
};
use crate::core::face::Face;
use crate::core::mesh::{Mesh, MeshError, VertexKey};
use crate::core::quad_edge::DirectedEdge;
use crate::core::vertex::VertexKind;
use crate::geometry::kernel::Kernel;
use crate::geometry::point::Point;
use crate::geometry::predicates::circumcenter;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Keys of the Voronoi vertices and edges stored in a mesh.
///
/// The diagram holds handles only; positions are read back from the mesh it
/// was computed on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoronoiDiagram {
    vertices: Vec<VertexKey>,
    edges: Vec<DirectedEdge>,
    skipped_faces: usize,
}

impl VoronoiDiagram {
    /// Voronoi vertices, one per bounded triangle with an interior edge.
    #[must_use]
    pub fn vertices(&self) -> &[VertexKey] {
        &self.vertices
    }

    /// Dual edges, each directed from the right face to the left face of
    /// its primal edge.
    #[must_use]
    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }

    /// Number of Voronoi vertices.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of bounded Voronoi edges.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Triangles whose circumcenter could not be computed.
    #[must_use]
    pub const fn skipped_faces(&self) -> usize {
        self.skipped_faces
    }

    /// Endpoint pairs of the Voronoi edges.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError`] if `mesh` is not the mesh this diagram was
    /// computed on.
    pub fn segments<T: CoordinateScalar>(
        &self,
        mesh: &Mesh<T>,
    ) -> Result<Vec<(Point<T>, Point<T>)>, MeshError> {
        self.edges
            .iter()
            .map(|&e| Ok((mesh.org_point(e)?, mesh.dest_point(e)?)))
            .collect()
    }
}

/// Binds Voronoi vertices to the dual slots of a triangulated mesh.
///
/// # Errors
///
/// Returns [`MeshError`] if the mesh is corrupted.
pub fn compute_voronoi<K: Kernel>(
    mesh: &mut Mesh<K::Scalar>,
    kernel: &K,
) -> Result<VoronoiDiagram, MeshError> {
    let primal: Vec<DirectedEdge> = mesh.primal_edges().collect();
    let mut face_vertices: FaceToDualVertexMap = fast_hash_map_with_capacity(primal.len());
    let mut failed_faces = FastHashSet::default();
    let mut diagram = VoronoiDiagram::default();

    for e in primal {
        // Same as ccw(org, dest, dest(onext)) and ccw(org, dest(oprev), dest)
        // on a well-formed triangulation.
        let (Some(left), Some(right)) = (
            Face::left_of(mesh, kernel, e)?,
            Face::left_of(mesh, kernel, e.sym())?,
        ) else {
            continue;
        };

        let Some(left_center) =
            dual_vertex(mesh, &left, &mut face_vertices, &mut failed_faces, &mut diagram)?
        else {
            continue;
        };
        let Some(right_center) =
            dual_vertex(mesh, &right, &mut face_vertices, &mut failed_faces, &mut diagram)?
        else {
            continue;
        };

        mesh.set_origin(e.rot(), right_center)?;
        mesh.set_origin(e.inv_rot(), left_center)?;
        diagram.edges.push(e.rot());
    }

    diagram.skipped_faces = failed_faces.len();
    tracing::debug!(
        vertices = diagram.vertices.len(),
        edges = diagram.edges.len(),
        skipped_faces = diagram.skipped_faces,
        "voronoi diagram computed"
    );
    Ok(diagram)
}

/// Circumcenter vertex of `face`, created on first use.
fn dual_vertex<T: CoordinateScalar>(
    mesh: &mut Mesh<T>,
    face: &Face,
    face_vertices: &mut FaceToDualVertexMap,
    failed_faces: &mut FastHashSet<DirectedEdge>,
    diagram: &mut VoronoiDiagram,
) -> Result<Option<VertexKey>, MeshError> {
    if failed_faces.contains(&face.key()) {
        return Ok(None);
    }
    match face_vertices.entry(face.key()) {
        Entry::Occupied(entry) => Ok(Some(*entry.get())),
        Entry::Vacant(entry) => {
            let [a, b, c] = face.points(mesh)?;
            match circumcenter(&a, &b, &c) {
                Ok(center) => {
                    let key = mesh.insert_vertex(center, VertexKind::Dual);
                    diagram.vertices.push(key);
                    Ok(Some(*entry.insert(key)))
                }
                Err(error) => {
                    tracing::warn!(face = ?face.key(), %error, "skipping face without circumcenter");
                    failed_faces.insert(face.key());
                    Ok(None)
                }
            }
        }
    }
}
