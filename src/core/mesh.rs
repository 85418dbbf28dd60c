//! Quad-edge mesh: the arena of vertices and quad-edge records.
//!
//! [`Mesh`] is purely combinatorial. It stores vertices and quad-edge
//! records in [`StorageMap`]s and implements the Guibas–Stolfi edge algebra
//! together with the topological operators `make_edge`, `splice`, `kill` and
//! `connect`. Geometry enters only through the points stored on vertices;
//! predicates are evaluated by the callers.
//!
//! Every accessor takes a [`DirectedEdge`] and fails with
//! [`MeshError::InvalidEdge`] if its record is no longer live, so a stale
//! handle can never read or corrupt another record.
//!
//! # Examples
//!
//! ```rust
//! use quadedge_delaunay::core::mesh::Mesh;
//! use quadedge_delaunay::core::vertex::VertexKind;
//! use quadedge_delaunay::geometry::point::Point;
//!
//! let mut mesh = Mesh::<f64>::new();
//! let a = mesh.insert_vertex(Point::new([0.0, 0.0]), VertexKind::Input);
//! let b = mesh.insert_vertex(Point::new([1.0, 0.0]), VertexKind::Input);
//!
//! let e = mesh.make_edge();
//! mesh.set_origin(e, a).unwrap();
//! mesh.set_destination(e, b).unwrap();
//!
//! assert_eq!(mesh.org(e).unwrap(), a);
//! assert_eq!(mesh.dest(e).unwrap(), b);
//! assert_eq!(mesh.onext(e).unwrap(), e);
//! assert!(mesh.is_valid().is_ok());
//! ```

#![forbid(unsafe_code)]

use slotmap::new_key_type;
use thiserror::Error;

use crate::core::collections::{EdgeRingBuffer, StorageMap};
use crate::core::quad_edge::{DirectedEdge, EdgeSlot, QuadEdge, SLOTS_PER_QUAD_EDGE};
use crate::core::vertex::{Vertex, VertexKind};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

// =============================================================================
// KEY TYPES
// =============================================================================

new_key_type! {
    /// Key type for accessing vertices in the mesh.
    pub struct VertexKey;
}

new_key_type! {
    /// Key type for accessing quad-edge records in the mesh.
    pub struct QuadEdgeKey;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by mesh accessors, operators and validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// The edge's quad-edge record is not live.
    #[error("Directed edge {edge:?} does not belong to a live quad-edge record")]
    InvalidEdge {
        /// The offending handle.
        edge: DirectedEdge,
    },
    /// The vertex key is not present in the mesh.
    #[error("Vertex {vertex:?} is not present in the mesh")]
    InvalidVertex {
        /// The offending key.
        vertex: VertexKey,
    },
    /// An origin was required but the slot is unbound.
    #[error("Directed edge {edge:?} has no origin vertex")]
    MissingOrigin {
        /// The edge without an origin.
        edge: DirectedEdge,
    },
    /// Following `onext` from `edge` did not come back to it.
    #[error("Origin ring of {edge:?} does not close within {limit} steps")]
    RingNotClosed {
        /// Start of the walk.
        edge: DirectedEdge,
        /// Number of steps attempted.
        limit: usize,
    },
    /// `rot.onext.rot.onext` did not return to the edge.
    #[error("Edge algebra violated at {edge:?}")]
    AlgebraViolation {
        /// The edge at which the identity fails.
        edge: DirectedEdge,
    },
    /// Two members of one origin ring have different origins.
    #[error("Origin ring of {edge:?} mixes origins {expected:?} and {found:?}")]
    OriginMismatch {
        /// Start of the ring.
        edge: DirectedEdge,
        /// Origin of `edge`.
        expected: VertexKey,
        /// Conflicting origin found on the ring.
        found: VertexKey,
    },
    /// A vertex's back-reference points at an edge that does not start there.
    #[error("Vertex {vertex:?} refers to edge {edge:?}, which does not originate at it")]
    BrokenBackReference {
        /// The vertex holding the reference.
        vertex: VertexKey,
        /// The referenced edge.
        edge: DirectedEdge,
    },
}

// =============================================================================
// MESH
// =============================================================================

/// Arena of vertices and quad-edge records.
#[derive(Clone, Debug, Default)]
pub struct Mesh<T>
where
    T: CoordinateScalar,
{
    vertices: StorageMap<VertexKey, Vertex<T>>,
    quads: StorageMap<QuadEdgeKey, QuadEdge>,
}

impl<T> Mesh<T>
where
    T: CoordinateScalar,
{
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: StorageMap::with_key(),
            quads: StorageMap::with_key(),
        }
    }

    /// Creates an empty mesh with room for `vertices` vertices and `edges`
    /// quad-edge records.
    #[must_use]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: StorageMap::with_capacity_and_key(vertices),
            quads: StorageMap::with_capacity_and_key(edges),
        }
    }

    // -------------------------------------------------------------------------
    // Vertices
    // -------------------------------------------------------------------------

    /// Adds a vertex with no incident edge.
    pub fn insert_vertex(&mut self, point: Point<T>, kind: VertexKind) -> VertexKey {
        self.vertices.insert(Vertex::new(point, kind))
    }

    /// Looks up a vertex.
    #[must_use]
    pub fn vertex(&self, key: VertexKey) -> Option<&Vertex<T>> {
        self.vertices.get(key)
    }

    /// Iterates over all vertices, input and dual.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexKey, &Vertex<T>)> {
        self.vertices.iter()
    }

    /// Number of vertices, input and dual.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidVertex`] if `key` is not in the mesh.
    pub fn point(&self, key: VertexKey) -> Result<Point<T>, MeshError> {
        self.vertices
            .get(key)
            .map(|v| *v.point())
            .ok_or(MeshError::InvalidVertex { vertex: key })
    }

    // -------------------------------------------------------------------------
    // Records
    // -------------------------------------------------------------------------

    /// Number of live quad-edge records (undirected primal edges).
    #[must_use]
    pub fn number_of_quad_edges(&self) -> usize {
        self.quads.len()
    }

    /// Iterates over all live quad-edge records.
    pub fn quad_edges(&self) -> impl Iterator<Item = (QuadEdgeKey, &QuadEdge)> {
        self.quads.iter()
    }

    /// Slot 0 of every live record.
    pub fn primal_edges(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
        self.quads.keys().map(|key| DirectedEdge::new(key, 0))
    }

    /// True if the edge's record is live.
    #[must_use]
    pub fn contains_edge(&self, edge: DirectedEdge) -> bool {
        self.quads.contains_key(edge.quad())
    }

    /// Stored data for a directed edge.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] if the record is not live.
    pub fn edge_slot(&self, edge: DirectedEdge) -> Result<&EdgeSlot, MeshError> {
        self.quads
            .get(edge.quad())
            .map(|quad| quad.slot(edge.slot()))
            .ok_or(MeshError::InvalidEdge { edge })
    }

    fn edge_slot_mut(&mut self, edge: DirectedEdge) -> Result<&mut EdgeSlot, MeshError> {
        self.quads
            .get_mut(edge.quad())
            .map(|quad| quad.slot_mut(edge.slot()))
            .ok_or(MeshError::InvalidEdge { edge })
    }

    // -------------------------------------------------------------------------
    // Edge algebra
    // -------------------------------------------------------------------------

    /// Next edge counter-clockwise around the origin of `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    #[inline]
    pub fn onext(&self, edge: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        self.edge_slot(edge).map(EdgeSlot::onext)
    }

    /// Next edge clockwise around the origin.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    #[inline]
    pub fn oprev(&self, edge: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        Ok(self.onext(edge.rot())?.rot())
    }

    /// Next edge counter-clockwise around the destination.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    #[inline]
    pub fn dnext(&self, edge: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        Ok(self.onext(edge.sym())?.sym())
    }

    /// Next edge clockwise around the destination.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    #[inline]
    pub fn dprev(&self, edge: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        Ok(self.onext(edge.inv_rot())?.inv_rot())
    }

    /// Next edge counter-clockwise around the left face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    #[inline]
    pub fn lnext(&self, edge: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        Ok(self.onext(edge.inv_rot())?.rot())
    }

    /// Previous edge around the left face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    #[inline]
    pub fn lprev(&self, edge: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        Ok(self.onext(edge)?.sym())
    }

    /// Next edge around the right face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    #[inline]
    pub fn rnext(&self, edge: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        Ok(self.onext(edge.rot())?.inv_rot())
    }

    /// Previous edge around the right face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    #[inline]
    pub fn rprev(&self, edge: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        self.onext(edge.sym())
    }

    // -------------------------------------------------------------------------
    // Endpoints
    // -------------------------------------------------------------------------

    /// Origin of `edge`, `None` if unbound.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    pub fn origin(&self, edge: DirectedEdge) -> Result<Option<VertexKey>, MeshError> {
        self.edge_slot(edge).map(EdgeSlot::origin)
    }

    /// Origin of `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MissingOrigin`] if the slot is unbound, or
    /// [`MeshError::InvalidEdge`] for a stale handle.
    pub fn org(&self, edge: DirectedEdge) -> Result<VertexKey, MeshError> {
        self.origin(edge)?.ok_or(MeshError::MissingOrigin { edge })
    }

    /// Destination of `edge`, i.e. the origin of `edge.sym()`.
    ///
    /// # Errors
    ///
    /// Same as [`org`](Self::org).
    pub fn dest(&self, edge: DirectedEdge) -> Result<VertexKey, MeshError> {
        self.org(edge.sym())
    }

    /// Position of the origin of `edge`.
    ///
    /// # Errors
    ///
    /// Same as [`org`](Self::org).
    pub fn org_point(&self, edge: DirectedEdge) -> Result<Point<T>, MeshError> {
        self.point(self.org(edge)?)
    }

    /// Position of the destination of `edge`.
    ///
    /// # Errors
    ///
    /// Same as [`org`](Self::org).
    pub fn dest_point(&self, edge: DirectedEdge) -> Result<Point<T>, MeshError> {
        self.point(self.dest(edge)?)
    }

    /// Render flag of `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] for a stale handle.
    pub fn is_visible(&self, edge: DirectedEdge) -> Result<bool, MeshError> {
        self.edge_slot(edge).map(EdgeSlot::is_visible)
    }

    // -------------------------------------------------------------------------
    // Topological operators
    // -------------------------------------------------------------------------

    /// Allocates an isolated edge with unbound endpoints.
    pub fn make_edge(&mut self) -> DirectedEdge {
        let key = self.quads.insert_with_key(QuadEdge::isolated);
        DirectedEdge::new(key, 0)
    }

    /// Binds `vertex` as origin of `edge`, records the back-reference on the
    /// vertex and marks the edge visible.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidVertex`] or [`MeshError::InvalidEdge`] if
    /// either handle is stale. Nothing is modified on error.
    pub fn set_origin(&mut self, edge: DirectedEdge, vertex: VertexKey) -> Result<(), MeshError> {
        if !self.vertices.contains_key(vertex) {
            return Err(MeshError::InvalidVertex { vertex });
        }
        let slot = self.edge_slot_mut(edge)?;
        slot.origin = Some(vertex);
        slot.visible = true;
        if let Some(v) = self.vertices.get_mut(vertex) {
            v.edge = Some(edge);
        }
        Ok(())
    }

    /// Binds `vertex` as destination of `edge`.
    ///
    /// # Errors
    ///
    /// Same as [`set_origin`](Self::set_origin).
    pub fn set_destination(
        &mut self,
        edge: DirectedEdge,
        vertex: VertexKey,
    ) -> Result<(), MeshError> {
        self.set_origin(edge.sym(), vertex)
    }

    /// Guibas–Stolfi splice.
    ///
    /// Merges the origin rings of `a` and `b` if they are distinct, splits
    /// them if they are the same, and does the dual operation on the left
    /// faces. Splice is its own inverse.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] if any handle involved is stale.
    /// Nothing is modified on error.
    pub fn splice(&mut self, a: DirectedEdge, b: DirectedEdge) -> Result<(), MeshError> {
        let a_next = self.onext(a)?;
        let b_next = self.onext(b)?;
        let alpha = a_next.rot();
        let beta = b_next.rot();
        let alpha_next = self.onext(alpha)?;
        let beta_next = self.onext(beta)?;

        self.edge_slot_mut(a)?.onext = b_next;
        self.edge_slot_mut(b)?.onext = a_next;
        self.edge_slot_mut(alpha)?.onext = beta_next;
        self.edge_slot_mut(beta)?.onext = alpha_next;
        Ok(())
    }

    /// Detaches `edge` from both endpoint rings and frees its record.
    ///
    /// Vertices whose back-reference pointed into the record are re-seated on
    /// a surviving edge of the same origin ring, or cleared if none is left.
    /// All four handles of the record are stale afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidEdge`] if the record is not live.
    pub fn kill(&mut self, edge: DirectedEdge) -> Result<(), MeshError> {
        let quad = edge.quad();
        let mut survivors = [None; SLOTS_PER_QUAD_EDGE];
        for (slot, survivor) in (0u8..).zip(survivors.iter_mut()) {
            let member = DirectedEdge::new(quad, slot);
            if self.origin(member)?.is_some() {
                *survivor = self.origin_ring(member).find(|e| e.quad() != quad);
            }
        }

        let e_oprev = self.oprev(edge)?;
        self.splice(edge, e_oprev)?;
        let sym = edge.sym();
        let sym_oprev = self.oprev(sym)?;
        self.splice(sym, sym_oprev)?;

        let record = self
            .quads
            .remove(quad)
            .ok_or(MeshError::InvalidEdge { edge })?;

        for (slot, survivor) in record.slots.iter().zip(survivors) {
            let Some(vertex) = slot.origin else { continue };
            if let Some(v) = self.vertices.get_mut(vertex)
                && v.edge.is_some_and(|e| e.quad() == quad)
            {
                v.edge = survivor;
            }
        }
        Ok(())
    }

    /// Adds an edge from `dest(a)` to `org(b)` such that `a`, the new edge
    /// and `b` share a left face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MissingOrigin`] if `a` has no destination or `b`
    /// no origin, or [`MeshError::InvalidEdge`] for stale handles. Nothing
    /// is modified on error.
    pub fn connect(&mut self, a: DirectedEdge, b: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        let from = self.dest(a)?;
        let to = self.org(b)?;
        let a_lnext = self.lnext(a)?;

        let e = self.make_edge();
        self.set_origin(e, from)?;
        self.set_destination(e, to)?;
        self.splice(e, a_lnext)?;
        self.splice(e.sym(), b)?;
        Ok(e)
    }

    // -------------------------------------------------------------------------
    // Ring traversal
    // -------------------------------------------------------------------------

    /// Upper bound on the length of any ring: the number of directed edges.
    fn ring_limit(&self) -> usize {
        self.quads.len() * SLOTS_PER_QUAD_EDGE
    }

    /// Edges leaving the origin of `edge`, counter-clockwise, starting at
    /// `edge`.
    #[must_use]
    pub fn origin_ring(&self, edge: DirectedEdge) -> RingIter<'_, T> {
        RingIter::new(self, edge, RingStep::Onext)
    }

    /// Edges bounding the left face of `edge`, counter-clockwise, starting at
    /// `edge`.
    #[must_use]
    pub fn left_face(&self, edge: DirectedEdge) -> RingIter<'_, T> {
        RingIter::new(self, edge, RingStep::Lnext)
    }

    /// Directed edges leaving `vertex`, counter-clockwise from its stored
    /// edge. Empty for a vertex with no incident edge.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidVertex`] if `vertex` is not in the mesh.
    pub fn vertex_edges(&self, vertex: VertexKey) -> Result<EdgeRingBuffer, MeshError> {
        let v = self
            .vertices
            .get(vertex)
            .ok_or(MeshError::InvalidVertex { vertex })?;
        Ok(v.edge()
            .map(|edge| self.origin_ring(edge).collect())
            .unwrap_or_default())
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Checks the structural invariants of the mesh.
    ///
    /// - every `onext` link targets a live record
    /// - `rot.onext.rot.onext` is the identity on every directed edge
    /// - every primal edge has an origin
    /// - every origin ring closes, and its bound origins agree
    /// - every vertex back-reference names an edge originating at it
    ///
    /// # Errors
    ///
    /// Returns the first [`MeshError`] found.
    pub fn is_valid(&self) -> Result<(), MeshError> {
        let limit = self.ring_limit();

        for (key, record) in &self.quads {
            for slot in 0..SLOTS_PER_QUAD_EDGE as u8 {
                let edge = DirectedEdge::new(key, slot);
                let next = record.slot(slot).onext();
                if !self.contains_edge(next) {
                    return Err(MeshError::InvalidEdge { edge: next });
                }
                if self.onext(self.onext(edge.rot())?.rot())? != edge {
                    return Err(MeshError::AlgebraViolation { edge });
                }
                if edge.is_primal() && record.slot(slot).origin().is_none() {
                    return Err(MeshError::MissingOrigin { edge });
                }
                self.check_origin_ring(edge, limit)?;
            }
        }

        for (key, vertex) in &self.vertices {
            if let Some(edge) = vertex.edge()
                && self.origin(edge).ok().flatten() != Some(key)
            {
                return Err(MeshError::BrokenBackReference { vertex: key, edge });
            }
        }
        Ok(())
    }

    fn check_origin_ring(&self, start: DirectedEdge, limit: usize) -> Result<(), MeshError> {
        let expected = self.origin(start)?;
        let mut current = start;
        for _ in 0..limit {
            current = self.onext(current)?;
            if let (Some(expected), Some(found)) = (expected, self.origin(current)?)
                && expected != found
            {
                return Err(MeshError::OriginMismatch {
                    edge: start,
                    expected,
                    found,
                });
            }
            if current == start {
                return Ok(());
            }
        }
        Err(MeshError::RingNotClosed { edge: start, limit })
    }
}

// =============================================================================
// RING ITERATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RingStep {
    Onext,
    Lnext,
}

/// Iterator over an origin ring or a face ring.
///
/// Yields the start edge first and stops when the walk returns to it. The
/// walk is capped at the number of directed edges in the mesh, so a
/// corrupted ring terminates; use [`Mesh::is_valid`] to detect that case.
#[derive(Clone, Debug)]
pub struct RingIter<'a, T>
where
    T: CoordinateScalar,
{
    mesh: &'a Mesh<T>,
    start: DirectedEdge,
    current: Option<DirectedEdge>,
    remaining: usize,
    step: RingStep,
}

impl<'a, T> RingIter<'a, T>
where
    T: CoordinateScalar,
{
    fn new(mesh: &'a Mesh<T>, start: DirectedEdge, step: RingStep) -> Self {
        Self {
            mesh,
            start,
            current: mesh.contains_edge(start).then_some(start),
            remaining: mesh.ring_limit(),
            step,
        }
    }
}

impl<T> Iterator for RingIter<'_, T>
where
    T: CoordinateScalar,
{
    type Item = DirectedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;
        let next = match self.step {
            RingStep::Onext => self.mesh.onext(current),
            RingStep::Lnext => self.mesh.lnext(current),
        };
        self.current = next.ok().filter(|e| *e != self.start);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_with_points(points: &[[f64; 2]]) -> (Mesh<f64>, Vec<VertexKey>) {
        let mut mesh = Mesh::new();
        let keys = points
            .iter()
            .map(|p| mesh.insert_vertex(Point::new(*p), VertexKind::Input))
            .collect();
        (mesh, keys)
    }

    fn segment(mesh: &mut Mesh<f64>, from: VertexKey, to: VertexKey) -> DirectedEdge {
        let e = mesh.make_edge();
        mesh.set_origin(e, from).unwrap();
        mesh.set_destination(e, to).unwrap();
        e
    }

    /// Counter-clockwise triangle p0, p1, p2 built the way the base case does.
    fn triangle(mesh: &mut Mesh<f64>, v: &[VertexKey]) -> (DirectedEdge, DirectedEdge, DirectedEdge) {
        let a = segment(mesh, v[0], v[1]);
        let b = segment(mesh, v[1], v[2]);
        mesh.splice(a.sym(), b).unwrap();
        let c = mesh.connect(b, a).unwrap();
        (a, b, c)
    }

    #[test]
    fn make_edge_initial_rings() {
        let mut mesh = Mesh::<f64>::new();
        let e = mesh.make_edge();

        assert_eq!(mesh.onext(e).unwrap(), e);
        assert_eq!(mesh.onext(e.sym()).unwrap(), e.sym());
        assert_eq!(mesh.onext(e.rot()).unwrap(), e.inv_rot());
        assert_eq!(mesh.onext(e.inv_rot()).unwrap(), e.rot());

        // One face on both sides: the face ring runs e, sym(e).
        assert_eq!(mesh.lnext(e).unwrap(), e.sym());
        assert_eq!(mesh.rnext(e).unwrap(), e.sym());
        assert_eq!(mesh.oprev(e).unwrap(), e);
        assert_eq!(mesh.dnext(e).unwrap(), e);
        assert_eq!(mesh.dprev(e).unwrap(), e);
        assert_eq!(mesh.lprev(e).unwrap(), e.sym());
        assert_eq!(mesh.rprev(e).unwrap(), e.sym());

        assert_eq!(mesh.origin(e).unwrap(), None);
        assert!(!mesh.is_visible(e).unwrap());
    }

    #[test]
    fn set_origin_marks_visible_and_records_back_reference() {
        let (mut mesh, v) = mesh_with_points(&[[0.0, 0.0], [1.0, 0.0]]);
        let e = segment(&mut mesh, v[0], v[1]);

        assert!(mesh.is_visible(e).unwrap());
        assert!(mesh.is_visible(e.sym()).unwrap());
        assert!(!mesh.is_visible(e.rot()).unwrap());
        assert_eq!(mesh.vertex(v[0]).unwrap().edge(), Some(e));
        assert_eq!(mesh.vertex(v[1]).unwrap().edge(), Some(e.sym()));
        assert_eq!(mesh.org_point(e).unwrap(), Point::new([0.0, 0.0]));
        assert_eq!(mesh.dest_point(e).unwrap(), Point::new([1.0, 0.0]));
    }

    #[test]
    fn set_origin_rejects_unknown_vertex() {
        let (mut mesh, v) = mesh_with_points(&[[0.0, 0.0]]);
        let mut other = Mesh::<f64>::new();
        other.insert_vertex(Point::new([9.0, 9.0]), VertexKind::Input);
        let stale = other.insert_vertex(Point::new([8.0, 8.0]), VertexKind::Input);

        let e = mesh.make_edge();
        assert!(mesh.set_origin(e, v[0]).is_ok());
        assert_eq!(
            mesh.set_origin(e.sym(), stale),
            Err(MeshError::InvalidVertex { vertex: stale })
        );
        assert_eq!(mesh.origin(e.sym()).unwrap(), None);
    }

    #[test]
    fn splice_is_self_inverse() {
        let (mut mesh, v) = mesh_with_points(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        let a = segment(&mut mesh, v[0], v[1]);
        let b = segment(&mut mesh, v[0], v[2]);

        mesh.splice(a, b).unwrap();
        assert_eq!(mesh.onext(a).unwrap(), b);
        assert_eq!(mesh.onext(b).unwrap(), a);
        assert!(mesh.is_valid().is_ok());

        mesh.splice(a, b).unwrap();
        assert_eq!(mesh.onext(a).unwrap(), a);
        assert_eq!(mesh.onext(b).unwrap(), b);
        assert!(mesh.is_valid().is_ok());
    }

    #[test]
    fn connect_closes_a_triangle() {
        let (mut mesh, v) = mesh_with_points(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        let (a, b, c) = triangle(&mut mesh, &v);

        assert_eq!(mesh.org(c).unwrap(), v[2]);
        assert_eq!(mesh.dest(c).unwrap(), v[0]);

        let face: Vec<_> = mesh.left_face(a).collect();
        assert_eq!(face, vec![a, b, c]);

        let outer: Vec<_> = mesh.left_face(a.sym()).collect();
        assert_eq!(outer.len(), 3);
        assert!(outer.contains(&c.sym()));

        for e in [a, b, c, a.sym(), b.sym(), c.sym()] {
            assert_eq!(mesh.origin_ring(e).count(), 2);
        }
        assert!(mesh.is_valid().is_ok());
    }

    #[test]
    fn kill_repairs_rings_and_reseats_back_references() {
        let (mut mesh, v) = mesh_with_points(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        let (a, b, c) = triangle(&mut mesh, &v);

        mesh.kill(a).unwrap();
        assert!(!mesh.contains_edge(a));
        assert_eq!(mesh.number_of_quad_edges(), 2);
        assert_eq!(mesh.onext(a), Err(MeshError::InvalidEdge { edge: a }));

        // v0 keeps c.sym(), v1 keeps b.
        assert_eq!(mesh.vertex(v[0]).unwrap().edge(), Some(c.sym()));
        assert_eq!(mesh.vertex(v[1]).unwrap().edge(), Some(b));
        assert_eq!(mesh.onext(b).unwrap(), b);
        assert_eq!(mesh.onext(c.sym()).unwrap(), c.sym());
        assert!(mesh.is_valid().is_ok());

        mesh.kill(b).unwrap();
        assert_eq!(mesh.vertex(v[1]).unwrap().edge(), None);
        assert!(mesh.is_valid().is_ok());
    }

    #[test]
    fn validation_detects_broken_back_reference() {
        let (mut mesh, v) = mesh_with_points(&[[0.0, 0.0], [1.0, 0.0]]);
        let e = segment(&mut mesh, v[0], v[1]);
        mesh.vertices[v[0]].edge = Some(e.sym());

        assert_eq!(
            mesh.is_valid(),
            Err(MeshError::BrokenBackReference {
                vertex: v[0],
                edge: e.sym()
            })
        );
    }

    #[test]
    fn validation_detects_missing_origin() {
        let mut mesh = Mesh::<f64>::new();
        let e = mesh.make_edge();
        assert_eq!(mesh.is_valid(), Err(MeshError::MissingOrigin { edge: e }));
    }

    #[test]
    fn ring_iter_on_stale_edge_is_empty() {
        let mut mesh = Mesh::<f64>::new();
        let e = mesh.make_edge();
        mesh.kill(e).unwrap();
        assert_eq!(mesh.origin_ring(e).count(), 0);
        assert_eq!(mesh.number_of_quad_edges(), 0);
    }
}
