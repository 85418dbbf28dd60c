//! Scalar traits for planar coordinates.
//!
//! The triangulation is generic over the coordinate scalar type. Every scalar
//! must be a floating-point type (`f32` or `f64`) that can be checked for
//! finiteness and losslessly widened to `f64`, which is the precision all
//! geometric predicates are evaluated in.
//!
//! # Examples
//!
//! ```rust
//! use quadedge_delaunay::geometry::traits::coordinate::{CoordinateScalar, FiniteCheck};
//!
//! assert!(1.5f64.is_finite_generic());
//! assert!(!f32::NAN.is_finite_generic());
//! assert_eq!(f32::default_tolerance(), 1e-6);
//! assert_eq!(2.5f32.to_f64_lossless(), 2.5);
//! ```

use num_traits::Float;
use std::fmt::Debug;

/// Errors that can occur during coordinate validation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoordinateValidationError {
    /// A coordinate value is invalid (NaN or infinite).
    #[error("Invalid coordinate at index {coordinate_index}: {coordinate_value}")]
    InvalidCoordinate {
        /// Index of the invalid coordinate (0 = x, 1 = y).
        coordinate_index: usize,
        /// Value of the invalid coordinate, as a string.
        coordinate_value: String,
    },
}

/// Default tolerance for f32 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F32: f32 = 1e-6;

/// Default tolerance for f64 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F64: f64 = 1e-15;

// =============================================================================
// SUPPORTING TRAITS
// =============================================================================

/// Helper trait for checking finiteness of coordinates.
///
/// # Examples
///
/// ```
/// use quadedge_delaunay::geometry::traits::coordinate::FiniteCheck;
///
/// assert!(3.14f64.is_finite_generic());
/// assert!(!f64::INFINITY.is_finite_generic());
/// ```
pub trait FiniteCheck {
    /// Returns true if the value is finite (not NaN or infinite).
    fn is_finite_generic(&self) -> bool;
}

macro_rules! impl_finite_check {
    (float: $($t:ty),*) => {
        $(
            impl FiniteCheck for $t {
                #[inline(always)]
                fn is_finite_generic(&self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_finite_check!(float: f32, f64);

/// Trait alias consolidating the requirements on a coordinate scalar.
///
/// Predicates widen every coordinate to `f64` through
/// [`to_f64_lossless`](CoordinateScalar::to_f64_lossless) before building
/// determinants, so `f32` inputs are evaluated with `f64` precision.
pub trait CoordinateScalar: Float + FiniteCheck + Default + Debug + Send + Sync + 'static {
    /// Returns the appropriate default tolerance for this coordinate scalar type.
    ///
    /// - `f32`: `1e-6`
    /// - `f64`: `1e-15`
    fn default_tolerance() -> Self;

    /// Widens the value to `f64` without loss.
    fn to_f64_lossless(self) -> f64;

    /// Narrows an `f64` back into this scalar type.
    ///
    /// Returns `None` when the value is not representable (e.g. overflow to
    /// infinity for `f32`).
    fn from_f64(value: f64) -> Option<Self>;
}

impl CoordinateScalar for f32 {
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F32
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Option<Self> {
        let narrowed: Option<Self> = num_traits::cast(value);
        narrowed.filter(|v| v.is_finite() || !value.is_finite())
    }
}

impl CoordinateScalar for f64 {
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F64
    }

    #[inline]
    fn to_f64_lossless(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Option<Self> {
        Some(value)
    }
}
