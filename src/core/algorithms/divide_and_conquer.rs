//! Guibas–Stolfi divide-and-conquer Delaunay triangulation.
//!
//! The input is a slice of vertex keys sorted lexicographically by `(x, y)`
//! and free of duplicates. The slice is split in half by count, which (thanks
//! to the sort) yields two point sets separated by a vertical line. Each half
//! is triangulated recursively and the two triangulations are merged by
//! walking up from their lower common tangent.
//!
//! Every recursive call returns the two hull edges the merge step needs:
//!
//! - `left`: the counter-clockwise hull edge leaving the leftmost vertex
//! - `right`: the clockwise hull edge leaving the rightmost vertex
//!
//! # References
//!
//! - Guibas, L. and Stolfi, J. "Primitives for the Manipulation of General
//!   Subdivisions and the Computation of Voronoi Diagrams." ACM TOG 4(2), 1985.

#![forbid(unsafe_code)]

use crate::core::delaunay_triangulation::{TriangulationConstructionError, TriangulationError};
use crate::core::mesh::{Mesh, MeshError, VertexKey};
use crate::core::quad_edge::DirectedEdge;
use crate::geometry::kernel::Kernel;

/// Hull edges returned by each recursion level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullEdges {
    /// Counter-clockwise hull edge whose origin is the leftmost vertex.
    pub left: DirectedEdge,
    /// Clockwise hull edge whose origin is the rightmost vertex.
    pub right: DirectedEdge,
}

/// Counters collected while triangulating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriangulationStatistics {
    /// Quad-edge records allocated, including those later killed.
    pub edges_created: usize,
    /// Quad-edge records killed during merges.
    pub edges_killed: usize,
    /// Iterations of the hull-zipping loop, summed over all merges.
    pub merge_steps: usize,
    /// Three-point base cases that turned out collinear.
    pub collinear_base_cases: usize,
    /// Deepest recursion level reached (the root call is level 0).
    pub max_depth: usize,
}

/// Triangulates the vertices `sorted` of `mesh`.
///
/// `sorted` must be lexicographically sorted and duplicate-free; the
/// façade in [`DelaunayTriangulation`](crate::core::delaunay_triangulation::DelaunayTriangulation)
/// guarantees this.
///
/// # Errors
///
/// Returns [`TriangulationConstructionError::InsufficientVertices`] for fewer
/// than two vertices, and [`TriangulationError::Mesh`] if a mesh operation
/// fails, which indicates a corrupted mesh or unsorted input.
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::core::algorithms::divide_and_conquer::triangulate;
/// use quadedge_delaunay::core::mesh::Mesh;
/// use quadedge_delaunay::core::vertex::VertexKind;
/// use quadedge_delaunay::geometry::kernel::FastKernel;
/// use quadedge_delaunay::geometry::point::Point;
///
/// let mut mesh = Mesh::<f64>::new();
/// let keys: Vec<_> = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]
///     .into_iter()
///     .map(|p| mesh.insert_vertex(Point::new(p), VertexKind::Input))
///     .collect();
///
/// let (hull, stats) = triangulate(&mut mesh, &FastKernel::<f64>::new(), &keys).unwrap();
/// assert_eq!(mesh.number_of_quad_edges(), 5);
/// assert_eq!(mesh.org(hull.left).unwrap(), keys[0]);
/// assert_eq!(stats.edges_created - stats.edges_killed, 5);
/// ```
pub fn triangulate<K: Kernel>(
    mesh: &mut Mesh<K::Scalar>,
    kernel: &K,
    sorted: &[VertexKey],
) -> Result<(HullEdges, TriangulationStatistics), TriangulationError> {
    let mut builder = DivideAndConquer {
        mesh,
        kernel,
        stats: TriangulationStatistics::default(),
    };
    let hull = builder.build(sorted, 0)?;

    tracing::debug!(
        vertices = sorted.len(),
        edges_created = builder.stats.edges_created,
        edges_killed = builder.stats.edges_killed,
        merge_steps = builder.stats.merge_steps,
        max_depth = builder.stats.max_depth,
        "divide-and-conquer triangulation complete"
    );
    Ok((hull, builder.stats))
}

struct DivideAndConquer<'a, K: Kernel> {
    mesh: &'a mut Mesh<K::Scalar>,
    kernel: &'a K,
    stats: TriangulationStatistics,
}

impl<K: Kernel> DivideAndConquer<'_, K> {
    fn build(
        &mut self,
        vertices: &[VertexKey],
        depth: usize,
    ) -> Result<HullEdges, TriangulationError> {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        match *vertices {
            [] | [_] => Err(TriangulationConstructionError::InsufficientVertices {
                actual: vertices.len(),
            }
            .into()),
            [p0, p1] => self.line(p0, p1),
            [p0, p1, p2] => self.triangle(p0, p1, p2),
            _ => {
                let (left, right) = vertices.split_at(vertices.len() / 2);
                let left = self.build(left, depth + 1)?;
                let right = self.build(right, depth + 1)?;
                self.merge(left, right)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Base cases
    // -------------------------------------------------------------------------

    fn edge_between(
        &mut self,
        from: VertexKey,
        to: VertexKey,
    ) -> Result<DirectedEdge, MeshError> {
        let e = self.mesh.make_edge();
        self.mesh.set_origin(e, from)?;
        self.mesh.set_destination(e, to)?;
        self.stats.edges_created += 1;
        Ok(e)
    }

    fn connect(&mut self, a: DirectedEdge, b: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        let e = self.mesh.connect(a, b)?;
        self.stats.edges_created += 1;
        Ok(e)
    }

    fn line(&mut self, p0: VertexKey, p1: VertexKey) -> Result<HullEdges, TriangulationError> {
        let a = self.edge_between(p0, p1)?;
        Ok(HullEdges {
            left: a,
            right: a.sym(),
        })
    }

    fn triangle(
        &mut self,
        p0: VertexKey,
        p1: VertexKey,
        p2: VertexKey,
    ) -> Result<HullEdges, TriangulationError> {
        let a = self.edge_between(p0, p1)?;
        let b = self.edge_between(p1, p2)?;
        self.mesh.splice(a.sym(), b)?;

        let (q0, q1, q2) = (
            self.mesh.point(p0)?,
            self.mesh.point(p1)?,
            self.mesh.point(p2)?,
        );

        if self.kernel.ccw(&q0, &q1, &q2) {
            self.connect(b, a)?;
            Ok(HullEdges {
                left: a,
                right: b.sym(),
            })
        } else if self.kernel.ccw(&q0, &q2, &q1) {
            let c = self.connect(b, a)?;
            Ok(HullEdges {
                left: c.sym(),
                right: c,
            })
        } else {
            tracing::warn!(?p0, ?p1, ?p2, "collinear base case; leaving a polyline");
            self.stats.collinear_base_cases += 1;
            Ok(HullEdges {
                left: a,
                right: b.sym(),
            })
        }
    }

    // -------------------------------------------------------------------------
    // Predicates on edges
    // -------------------------------------------------------------------------

    /// `z` strictly left of `e`.
    fn left_of(&self, e: DirectedEdge, z: VertexKey) -> Result<bool, MeshError> {
        let z = self.mesh.point(z)?;
        let org = self.mesh.org_point(e)?;
        let dest = self.mesh.dest_point(e)?;
        Ok(self.kernel.ccw(&z, &org, &dest))
    }

    /// `z` strictly right of `e`.
    fn right_of(&self, e: DirectedEdge, z: VertexKey) -> Result<bool, MeshError> {
        let z = self.mesh.point(z)?;
        let org = self.mesh.org_point(e)?;
        let dest = self.mesh.dest_point(e)?;
        Ok(self.kernel.ccw(&z, &dest, &org))
    }

    /// A candidate is usable iff its destination lies above the base edge.
    fn valid(&self, e: DirectedEdge, base: DirectedEdge) -> Result<bool, MeshError> {
        self.right_of(base, self.mesh.dest(e)?)
    }

    fn in_circle(
        &self,
        a: VertexKey,
        b: VertexKey,
        c: VertexKey,
        d: VertexKey,
    ) -> Result<bool, MeshError> {
        let (a, b, c, d) = (
            self.mesh.point(a)?,
            self.mesh.point(b)?,
            self.mesh.point(c)?,
            self.mesh.point(d)?,
        );
        Ok(self.kernel.in_circumcircle(&a, &b, &c, &d))
    }

    // -------------------------------------------------------------------------
    // Merge
    // -------------------------------------------------------------------------

    fn lower_common_tangent(
        &mut self,
        mut ldi: DirectedEdge,
        mut rdi: DirectedEdge,
    ) -> Result<(DirectedEdge, DirectedEdge, DirectedEdge), MeshError> {
        loop {
            if self.left_of(ldi, self.mesh.org(rdi)?)? {
                ldi = self.mesh.lnext(ldi)?;
            } else if self.right_of(rdi, self.mesh.org(ldi)?)? {
                rdi = self.mesh.rprev(rdi)?;
            } else {
                break;
            }
        }
        let base = self.connect(rdi.sym(), ldi)?;
        Ok((base, ldi, rdi))
    }

    /// Kills left-candidate edges whose triangle with `base` fails the
    /// empty-circle test, returning the surviving candidate.
    fn left_candidate(&mut self, base: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        let mut lcand = self.mesh.onext(base.sym())?;
        if self.valid(lcand, base)? {
            let (base_org, base_dest) = (self.mesh.org(base)?, self.mesh.dest(base)?);
            loop {
                let next = self.mesh.onext(lcand)?;
                let candidate_dest = self.mesh.dest(lcand)?;
                let next_dest = self.mesh.dest(next)?;
                if !self.in_circle(base_dest, base_org, candidate_dest, next_dest)? {
                    break;
                }
                self.mesh.kill(lcand)?;
                self.stats.edges_killed += 1;
                lcand = next;
            }
        }
        Ok(lcand)
    }

    /// Mirror image of [`left_candidate`](Self::left_candidate).
    fn right_candidate(&mut self, base: DirectedEdge) -> Result<DirectedEdge, MeshError> {
        let mut rcand = self.mesh.oprev(base)?;
        if self.valid(rcand, base)? {
            let (base_org, base_dest) = (self.mesh.org(base)?, self.mesh.dest(base)?);
            loop {
                let next = self.mesh.oprev(rcand)?;
                let candidate_dest = self.mesh.dest(rcand)?;
                let next_dest = self.mesh.dest(next)?;
                if !self.in_circle(base_dest, base_org, candidate_dest, next_dest)? {
                    break;
                }
                self.mesh.kill(rcand)?;
                self.stats.edges_killed += 1;
                rcand = next;
            }
        }
        Ok(rcand)
    }

    fn merge(
        &mut self,
        left: HullEdges,
        right: HullEdges,
    ) -> Result<HullEdges, TriangulationError> {
        let HullEdges {
            left: mut ldo,
            right: ldi,
        } = left;
        let HullEdges {
            left: rdi,
            right: mut rdo,
        } = right;

        let (mut base, ldi, rdi) = self.lower_common_tangent(ldi, rdi)?;
        if self.mesh.org(ldi)? == self.mesh.org(ldo)? {
            ldo = base.sym();
        }
        if self.mesh.org(rdi)? == self.mesh.org(rdo)? {
            rdo = base;
        }

        loop {
            self.stats.merge_steps += 1;

            let lcand = self.left_candidate(base)?;
            let rcand = self.right_candidate(base)?;
            let left_valid = self.valid(lcand, base)?;
            let right_valid = self.valid(rcand, base)?;

            if !left_valid && !right_valid {
                break;
            }

            let take_right = !left_valid
                || (right_valid
                    && self.in_circle(
                        self.mesh.dest(lcand)?,
                        self.mesh.org(lcand)?,
                        self.mesh.org(rcand)?,
                        self.mesh.dest(rcand)?,
                    )?);

            base = if take_right {
                self.connect(rcand, base.sym())?
            } else {
                self.connect(base.sym(), lcand.sym())?
            };
        }

        Ok(HullEdges {
            left: ldo,
            right: rdo,
        })
    }
}
