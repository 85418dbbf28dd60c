//! General helper utilities

pub mod deduplication;
pub mod delaunay_validation;

pub use deduplication::*;
pub use delaunay_validation::*;
