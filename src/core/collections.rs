//! High-performance collection types for quad-edge meshes.
//!
//! Storage for vertices and quad-edge records goes through [`StorageMap`],
//! whose backend is selected by the `dense-slotmap` feature. Scratch
//! collections use `rustc-hash` maps and `smallvec` buffers.

mod aliases;
mod buffers;
mod helpers;

pub use aliases::*;
pub use buffers::*;
pub use helpers::*;
