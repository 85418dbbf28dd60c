//! Empty-circumcircle validation.

#![forbid(unsafe_code)]

use thiserror::Error;

use crate::core::face::{Face, collect_faces};
use crate::core::mesh::{Mesh, MeshError, VertexKey};
use crate::core::vertex::VertexKind;
use crate::geometry::kernel::Kernel;

/// Errors reported by [`validate_delaunay`].
///
/// # Examples
///
/// ```rust
/// use quadedge_delaunay::core::mesh::VertexKey;
/// use quadedge_delaunay::core::util::DelaunayValidationError;
/// use slotmap::KeyData;
///
/// let v = VertexKey::from(KeyData::from_ffi(1));
/// let err = DelaunayValidationError::Violation { triangle: [v; 3], vertex: v };
/// assert!(err.to_string().contains("circumcircle"));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DelaunayValidationError {
    /// An input vertex lies strictly inside the circumcircle of a triangle.
    #[error("Vertex {vertex:?} lies inside the circumcircle of triangle {triangle:?}")]
    Violation {
        /// Corners of the offending triangle, counter-clockwise.
        triangle: [VertexKey; 3],
        /// The vertex inside its circumcircle.
        vertex: VertexKey,
    },
    /// The mesh could not be traversed.
    #[error("Mesh corruption: {0}")]
    Mesh(#[from] MeshError),
}

/// A triangle whose circumcircle strictly contains an input vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelaunayViolation {
    /// The offending triangle.
    pub face: Face,
    /// First input vertex found inside its circumcircle.
    pub vertex: VertexKey,
}

/// Finds every bounded triangle that violates the empty-circumcircle
/// property.
///
/// Every input vertex is tested against every triangle, so this is
/// quadratic; meant for tests and debug builds. Points on a circumcircle do
/// not count as violations.
///
/// # Errors
///
/// Returns [`MeshError`] if the mesh is corrupted.
pub fn find_delaunay_violations<K: Kernel>(
    mesh: &Mesh<K::Scalar>,
    kernel: &K,
) -> Result<Vec<DelaunayViolation>, MeshError> {
    let faces = collect_faces(mesh, kernel)?;
    let inputs: Vec<(VertexKey, _)> = mesh
        .vertices()
        .filter(|(_, v)| v.kind() == VertexKind::Input)
        .map(|(key, v)| (key, *v.point()))
        .collect();

    let mut violations = Vec::new();
    for face in faces {
        let [a, b, c] = face.points(mesh)?;
        let inside = inputs.iter().find(|(key, p)| {
            !face.vertices().contains(key) && kernel.in_circumcircle(&a, &b, &c, p)
        });
        if let Some(&(vertex, _)) = inside {
            violations.push(DelaunayViolation { face, vertex });
        }
    }

    tracing::debug!(violations = violations.len(), "checked empty-circumcircle property");
    Ok(violations)
}

/// Checks the empty-circumcircle property.
///
/// # Errors
///
/// Returns [`DelaunayValidationError::Violation`] for the first offending
/// triangle found, or [`DelaunayValidationError::Mesh`] if the mesh is
/// corrupted.
pub fn validate_delaunay<K: Kernel>(
    mesh: &Mesh<K::Scalar>,
    kernel: &K,
) -> Result<(), DelaunayValidationError> {
    match find_delaunay_violations(mesh, kernel)?.first() {
        Some(violation) => Err(DelaunayValidationError::Violation {
            triangle: *violation.face.vertices(),
            vertex: violation.vertex,
        }),
        None => Ok(()),
    }
}
