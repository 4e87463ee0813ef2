//! Prelude for matrix4
//!
//! Re-exports the matrix type, its capability traits and the error type.

pub use crate::error::{Axis, MatrixError};
pub use crate::numerics::types::matrix::{identity_matrix, Matrix4x4};
pub use crate::numerics::types::multiply::multiply_raw;
pub use crate::numerics::types::tolerance::Tolerance;
pub use crate::numerics::types::traits::{MatrixView, MatrixViewMut};
