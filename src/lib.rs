//! dynalg: dynamically sized dense vector and matrix value types
//!
//! This crate provides two owned numeric containers, [`DenseVector`] and
//! [`DenseMatrix`], with bounds-checked element access and shape-checked
//! arithmetic: scalar add/subtract/multiply, element-wise add/subtract,
//! dot product, matrix-vector product, and matrix-matrix product.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod vector;

// Re-exports for convenience
pub use config::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use core::Element;
pub use error::DynError;
pub use matrix::DenseMatrix;
pub use vector::DenseVector;
