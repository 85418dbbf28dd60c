//! # quadedge-delaunay
//!
//! Planar Delaunay triangulation by the divide-and-conquer algorithm of
//! Guibas and Stolfi over a quad-edge mesh, with the Voronoi diagram and a
//! spanning tree derived from the result.
//!
//! # Features
//!
//! - O(n log n) divide-and-conquer construction
//! - Quad-edge mesh with the full edge algebra (`rot`, `sym`, `onext`, `lnext`, ...)
//!   and the `make_edge` / `splice` / `connect` / `kill` operators
//! - Voronoi diagram stored in the dual slots of the same mesh
//! - Breadth-first spanning tree over the vertex adjacency
//! - Fast floating-point predicates by default, adaptive exact predicates on request
//! - Generic `f32` / `f64` coordinates
//!
//! # Basic Usage
//!
//! ```rust
//! use quadedge_delaunay::prelude::*;
//!
//! let points = vec![
//!     Point::new([0.0, 0.0]),
//!     Point::new([4.0, 0.0]),
//!     Point::new([2.0, 3.0]),
//!     Point::new([2.0, 1.0]),
//!     Point::new([4.0, 0.0]), // duplicate, dropped
//! ];
//!
//! let mut dt = DelaunayTriangulation::new(&points).unwrap();
//! dt.triangulate().unwrap();
//!
//! assert_eq!(dt.number_of_vertices(), 4);
//! assert_eq!(dt.duplicates_removed(), 1);
//! assert_eq!(dt.number_of_triangles(), 3);
//! assert_eq!(dt.euler_characteristic().unwrap(), 2);
//! assert!(dt.validate_delaunay().is_ok());
//!
//! let tree = dt.spanning_tree().unwrap();
//! assert_eq!(tree.len(), dt.number_of_vertices() - 1);
//!
//! let voronoi = dt.compute_voronoi().unwrap();
//! assert_eq!(voronoi.number_of_vertices(), 3);
//! ```
//!
//! # Mesh Invariants
//!
//! [`Mesh::is_valid`](core::mesh::Mesh::is_valid) (and
//! [`DelaunayTriangulation::is_valid`](core::delaunay_triangulation::DelaunayTriangulation::is_valid))
//! checks the structural invariants that every operator preserves:
//!
//! - **Live links** – every `onext` link names a live quad-edge record.
//! - **Edge algebra** – `rot(onext(rot(onext(e)))) == e` for every directed edge.
//! - **Origins** – every primal directed edge has an origin vertex.
//! - **Rings** – every origin ring closes and its bound origins agree.
//! - **Back-references** – each vertex's stored edge originates at that vertex.
//!
//! The geometric **Delaunay property** (no input vertex strictly inside any
//! triangle's circumcircle) is checked separately by
//! [`DelaunayTriangulation::validate_delaunay`](core::delaunay_triangulation::DelaunayTriangulation::validate_delaunay),
//! which is quadratic and meant for tests.
//!
//! # Numerical Robustness
//!
//! [`FastKernel`](geometry::kernel::FastKernel) evaluates the orientation and
//! in-circle determinants in plain `f64` and may misclassify nearly collinear
//! or nearly co-circular points.
//! [`RobustKernel`](geometry::kernel::RobustKernel) uses adaptive exact
//! predicates and is selected with
//! [`DelaunayTriangulation::with_kernel`](core::delaunay_triangulation::DelaunayTriangulation::with_kernel).
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `debug` for construction summaries,
//! `warn` for degenerate fallbacks (collinear base cases, triangles without a
//! circumcenter). Install any subscriber to see them.

#![forbid(unsafe_code)]

/// The `core` module contains the quad-edge mesh and the algorithms that
/// build and traverse it.
///
/// It includes [`Mesh`](core::mesh::Mesh) and the
/// [`DelaunayTriangulation`](core::delaunay_triangulation::DelaunayTriangulation)
/// façade. The crate also includes a `prelude` module for convenient access
/// to commonly used types.
pub mod core {
    /// Triangulation algorithms for construction and derived structures
    pub mod algorithms {
        /// Guibas–Stolfi divide-and-conquer triangulation
        pub mod divide_and_conquer;
        /// Breadth-first spanning tree over the vertex adjacency
        pub mod spanning_tree;
        /// Voronoi diagram in the dual slots of the mesh
        pub mod voronoi;
    }
    /// Fluent builder for Delaunay triangulations
    pub mod builder;
    /// High-performance collection types for quad-edge meshes
    pub mod collections;
    pub mod delaunay_triangulation;
    pub mod face;
    pub mod mesh;
    pub mod quad_edge;
    /// Deduplication and validation helpers
    pub mod util;
    pub mod vertex;

    // Re-export the `core` modules.
    pub use builder::*;
    pub use delaunay_triangulation::*;
    pub use face::*;
    pub use mesh::*;
    pub use quad_edge::*;
    pub use util::*;
    pub use vertex::*;
    // Note: collections module not re-exported here to avoid namespace pollution
    // Import specific types via prelude or use crate::core::collections::
}

/// Contains geometric types including the `Point` struct and geometry predicates.
///
/// Predicates are evaluated through the [`Kernel`](geometry::kernel::Kernel)
/// trait so the triangulator can switch between floating-point and adaptive
/// exact arithmetic.
pub mod geometry {
    /// Geometric kernel abstraction (CGAL-style)
    pub mod kernel;
    pub mod point;
    pub mod predicates;
    /// Point-set generators
    pub mod util;
    /// Traits module containing coordinate abstractions.
    ///
    /// [`CoordinateScalar`](traits::coordinate::CoordinateScalar) bundles the
    /// numeric requirements on `f32` / `f64` coordinates and
    /// [`FiniteCheck`](traits::coordinate::FiniteCheck) their validation.
    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }
    pub use kernel::*;
    pub use point::*;
    pub use predicates::*;
    pub use traits::*;
    pub use util::*;
}

/// Topological characteristics of triangulations.
pub mod topology {
    /// Euler characteristic and classification
    pub mod characteristics {
        pub mod euler;
    }
}

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        algorithms::{
            divide_and_conquer::{HullEdges, TriangulationStatistics},
            spanning_tree::SpanningTreeEdge,
            voronoi::VoronoiDiagram,
        },
        builder::*,
        delaunay_triangulation::*,
        face::*,
        mesh::*,
        quad_edge::*,
        util::*,
        vertex::*,
    };

    // Re-export commonly used collection types from core::collections
    pub use crate::core::collections::{
        FastHashMap, FastHashSet, SmallBuffer, fast_hash_map_with_capacity,
        fast_hash_set_with_capacity,
    };

    // Re-export from geometry
    pub use crate::geometry::{
        kernel::*, point::*, predicates::*, traits::coordinate::*, util::*,
    };
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
