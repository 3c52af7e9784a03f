//! Dimension caps enforced by every constructor.
//!
//! Both bounds are hard caps: a requested size of zero or anything above
//! the cap is rejected with `DynError::SizeOutOfRange` before any
//! allocation happens.

use crate::error::DynError;

/// Largest element count a vector constructor accepts.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest row or column count a matrix constructor accepts.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Validate a requested dimension against its cap.
pub(crate) fn check_dim(requested: usize, max: usize) -> Result<(), DynError> {
    if requested == 0 || requested > max {
        return Err(DynError::SizeOutOfRange(requested, max));
    }
    Ok(())
}
