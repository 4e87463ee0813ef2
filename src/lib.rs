//! # matrix4
//!
//! Dense 4x4 single precision matrices for 3D transformation math: model,
//! view and projection matrices stored row-major (`data[row * 4 + col]`).
//!
//! ```rust
//! use matrix4::prelude::*;
//!
//! # fn main() -> Result<(), MatrixError> {
//! let projection = Matrix4x4::orthographic(-1.0, 1.0, 1.0, -1.0, 1.0, 100.0);
//! let mut model = Matrix4x4::new();
//! model.set_row(3, 0.5, 0.0, -10.0, 1.0)?;
//!
//! let mut mvp = Matrix4x4::new();
//! mvp.multiply(&model, &projection);
//! assert_eq!(mvp.at(0, 0)?, 1.0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod numerics;
pub mod prelude;

pub use error::{Axis, MatrixError, Result};
pub use numerics::types::matrix::{identity_matrix, Matrix4x4};
pub use numerics::types::multiply::multiply_raw;
pub use numerics::types::tolerance::Tolerance;
pub use numerics::types::traits::{MatrixView, MatrixViewMut};
