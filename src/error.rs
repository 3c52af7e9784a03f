use thiserror::Error;

// Unified error type for dynalg

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DynError {
    #[error("requested size {0} outside [1, {1}]")]
    SizeOutOfRange(usize, usize),
    #[error("index {0} out of range for length {1}")]
    IndexOutOfRange(usize, usize),
    #[error("dimension mismatch: {0} vs {1}")]
    DimensionMismatch(String, String),
    #[error("token {1:?} at position {0} is not a valid element")]
    Parse(usize, String),
}
