//! Quad-edge records and directed-edge handles.
//!
//! A quad-edge record groups the four directed edges that share one
//! undirected edge of the primal mesh and its dual: slot 0 is the primal
//! edge, slot 2 its reverse, and slots 1 and 3 the dual edge in both
//! directions. A [`DirectedEdge`] is a `(record, slot)` pair, so the rotation
//! operators are slot arithmetic and never touch storage.
//!
//! Operators that follow stored `onext` links (`onext`, `lnext`, ...) live on
//! [`Mesh`](crate::core::mesh::Mesh), since they need the arena.

use crate::core::mesh::{QuadEdgeKey, VertexKey};

/// Number of directed edges in one quad-edge record.
pub const SLOTS_PER_QUAD_EDGE: usize = 4;

// =============================================================================
// DIRECTED EDGE HANDLE
// =============================================================================

/// Handle to one of the four directed edges of a quad-edge record.
///
/// Handles are plain keys. A handle whose record has been killed is stale;
/// every [`Mesh`](crate::core::mesh::Mesh) accessor rejects it with
/// [`MeshError::InvalidEdge`](crate::core::mesh::MeshError::InvalidEdge).
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::core::mesh::Mesh;
///
/// let mut mesh = Mesh::<f64>::new();
/// let e = mesh.make_edge();
///
/// assert_eq!(e.rot().rot(), e.sym());
/// assert_eq!(e.rot().rot().rot().rot(), e);
/// assert_eq!(e.sym().sym(), e);
/// assert_eq!(e.inv_rot(), e.rot().rot().rot());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedEdge {
    quad: QuadEdgeKey,
    slot: u8,
}

impl DirectedEdge {
    /// Builds a handle for `slot` (taken modulo 4) of record `quad`.
    #[inline]
    #[must_use]
    pub const fn new(quad: QuadEdgeKey, slot: u8) -> Self {
        Self {
            quad,
            slot: slot & 3,
        }
    }

    /// The record this edge belongs to.
    #[inline]
    #[must_use]
    pub const fn quad(self) -> QuadEdgeKey {
        self.quad
    }

    /// Position within the record, in `0..4`.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> u8 {
        self.slot
    }

    /// Dual edge directed from the right face to the left face.
    #[inline]
    #[must_use]
    pub const fn rot(self) -> Self {
        Self::new(self.quad, self.slot + 1)
    }

    /// Dual edge directed from the left face to the right face.
    #[inline]
    #[must_use]
    pub const fn inv_rot(self) -> Self {
        Self::new(self.quad, self.slot + 3)
    }

    /// Same edge, opposite direction.
    #[inline]
    #[must_use]
    pub const fn sym(self) -> Self {
        Self::new(self.quad, self.slot + 2)
    }

    /// True for slots 0 and 2 (edges between input vertices).
    #[inline]
    #[must_use]
    pub const fn is_primal(self) -> bool {
        self.slot & 1 == 0
    }

    /// Slot 0 of the same record.
    #[inline]
    #[must_use]
    pub const fn canonical(self) -> Self {
        Self::new(self.quad, 0)
    }
}

// =============================================================================
// RECORD STORAGE
// =============================================================================

/// Per-directed-edge data stored in a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSlot {
    pub(crate) origin: Option<VertexKey>,
    pub(crate) onext: DirectedEdge,
    pub(crate) visible: bool,
}

impl EdgeSlot {
    /// Origin vertex, if bound.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Option<VertexKey> {
        self.origin
    }

    /// Next edge counter-clockwise around the origin.
    #[inline]
    #[must_use]
    pub const fn onext(&self) -> DirectedEdge {
        self.onext
    }

    /// Render flag, set whenever an origin is bound.
    #[inline]
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// One quad-edge record: the unit of allocation and deletion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadEdge {
    pub(crate) slots: [EdgeSlot; SLOTS_PER_QUAD_EDGE],
}

impl QuadEdge {
    /// An isolated edge: both primal slots are self-loops around their own
    /// origin and the two dual slots form a single ring (one face on both
    /// sides).
    #[must_use]
    pub(crate) fn isolated(quad: QuadEdgeKey) -> Self {
        let slot = |onext: u8| EdgeSlot {
            origin: None,
            onext: DirectedEdge::new(quad, onext),
            visible: false,
        };
        Self {
            slots: [slot(0), slot(3), slot(2), slot(1)],
        }
    }

    /// Slot data for `slot`.
    #[inline]
    #[must_use]
    pub const fn slot(&self, slot: u8) -> &EdgeSlot {
        &self.slots[(slot & 3) as usize]
    }

    #[inline]
    pub(crate) const fn slot_mut(&mut self, slot: u8) -> &mut EdgeSlot {
        &mut self.slots[(slot & 3) as usize]
    }

    /// Origins of the primal edge, `(org, dest)`.
    #[inline]
    #[must_use]
    pub const fn endpoints(&self) -> (Option<VertexKey>, Option<VertexKey>) {
        (self.slots[0].origin, self.slots[2].origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn some_quad() -> QuadEdgeKey {
        let mut quads: SlotMap<QuadEdgeKey, ()> = SlotMap::with_key();
        quads.insert(())
    }

    #[test]
    fn test_rotation_has_order_four() {
        let quad = some_quad();
        for slot in 0..4 {
            let e = DirectedEdge::new(quad, slot);
            assert_eq!(e.rot().rot().rot().rot(), e);
            assert_eq!(e.rot().rot(), e.sym());
            assert_eq!(e.sym().sym(), e);
            assert_eq!(e.rot().inv_rot(), e);
            assert_ne!(e.sym(), e);
        }
    }

    #[test]
    fn test_slot_is_taken_modulo_four() {
        let quad = some_quad();
        assert_eq!(DirectedEdge::new(quad, 6).slot(), 2);
        assert!(DirectedEdge::new(quad, 2).is_primal());
        assert!(!DirectedEdge::new(quad, 3).is_primal());
        assert_eq!(DirectedEdge::new(quad, 3).canonical().slot(), 0);
    }

    #[test]
    fn test_isolated_record_rings() {
        let quad = some_quad();
        let record = QuadEdge::isolated(quad);
        let e = DirectedEdge::new(quad, 0);

        assert_eq!(record.slot(0).onext(), e);
        assert_eq!(record.slot(2).onext(), e.sym());
        assert_eq!(record.slot(1).onext(), e.inv_rot());
        assert_eq!(record.slot(3).onext(), e.rot());
        assert_eq!(record.endpoints(), (None, None));
        assert!(!record.slot(0).is_visible());
    }
}
