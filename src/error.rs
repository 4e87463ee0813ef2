// src/error.rs
// Error type shared by the checked matrix operations.

/// Errors that can occur while building or indexing a matrix
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("Invalid argument: matrix data must hold 16 values (4x4), got {len}")]
    InvalidArgument { len: usize },

    #[error("Index out of range: {axis} index {index} is not in 0..4")]
    IndexOutOfRange { axis: Axis, index: usize },
}

/// Which coordinate of the matrix an index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

pub type Result<T, E = MatrixError> = core::result::Result<T, E>;
