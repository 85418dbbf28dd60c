//! Breadth-first spanning tree over the primal vertex adjacency.

#![forbid(unsafe_code)]

use std::collections::VecDeque;

use crate::core::collections::{Entry, VertexDistanceMap, fast_hash_map_with_capacity};
use crate::core::mesh::{Mesh, MeshError, VertexKey};
use crate::core::quad_edge::DirectedEdge;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// One edge of a spanning tree, directed away from the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpanningTreeEdge {
    /// Vertex already in the tree.
    pub from: VertexKey,
    /// Vertex reached through this edge.
    pub to: VertexKey,
    /// Mesh edge from `from` to `to`.
    pub edge: DirectedEdge,
}

/// Builds an unweighted BFS spanning tree rooted at `root`.
///
/// Neighbors of each vertex are visited in origin-ring (`onext`) order
/// starting from the vertex's stored edge, so the tree is deterministic for
/// a given mesh. Only vertices connected to `root` are reached; on a
/// triangulated mesh that is every input vertex, giving `n - 1` edges.
///
/// # Errors
///
/// Returns [`MeshError`] if `root` is missing or the mesh is corrupted.
pub fn spanning_tree<T: CoordinateScalar>(
    mesh: &Mesh<T>,
    root: VertexKey,
) -> Result<Vec<SpanningTreeEdge>, MeshError> {
    let mut distances: VertexDistanceMap = fast_hash_map_with_capacity(mesh.number_of_vertices());
    distances.insert(root, 0);
    let mut queue = VecDeque::from([root]);
    let mut tree = Vec::new();

    while let Some(from) = queue.pop_front() {
        let depth = distances.get(&from).copied().unwrap_or_default();
        for edge in mesh.vertex_edges(from)? {
            let to = mesh.dest(edge)?;
            if let Entry::Vacant(slot) = distances.entry(to) {
                slot.insert(depth + 1);
                tree.push(SpanningTreeEdge { from, to, edge });
                queue.push_back(to);
            }
        }
    }

    tracing::debug!(
        reached = distances.len(),
        depth = distances.values().copied().max().unwrap_or_default(),
        "spanning tree built"
    );
    Ok(tree)
}
