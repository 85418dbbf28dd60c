use crate::core::mesh::VertexKey;
use crate::core::quad_edge::DirectedEdge;

use super::{FastHashMap, SmallBuffer};

// =============================================================================
// ALGORITHM-SPECIFIC BUFFER TYPES
// =============================================================================

/// Inline capacity for origin rings.
///
/// Planar Delaunay meshes have mean vertex degree below 6, so 8 keeps almost
/// every ring on the stack.
pub const RING_BUFFER_SIZE: usize = 8;

/// Directed edges collected while walking an origin or face ring.
pub type EdgeRingBuffer = SmallBuffer<DirectedEdge, RING_BUFFER_SIZE>;

/// Map from a face (identified by its smallest bounding directed edge) to the
/// dual vertex placed at its circumcenter.
pub type FaceToDualVertexMap = FastHashMap<DirectedEdge, VertexKey>;

/// BFS distance of each reached vertex from the spanning-tree root.
pub type VertexDistanceMap = FastHashMap<VertexKey, usize>;
