//! Process-wide configuration: hard caps on container dimensions.

pub mod limits;
pub use limits::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
