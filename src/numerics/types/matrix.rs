// src/numerics/types/matrix.rs
// Dense row-major 4x4 f32 matrix used for model, view and projection math.

use core::fmt;
use core::ops::{Index, IndexMut, Mul, MulAssign};

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};
use crate::numerics::types::format::write_values;
use crate::numerics::types::multiply::multiply_raw;
use crate::numerics::types::tolerance::Tolerance;
use crate::numerics::types::traits::{
    read_column, write_row, MatrixView, MatrixViewMut, DIMENSION,
};

const IDENTITY_VALUES: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// The 16 values of the identity matrix.
pub const fn identity_matrix() -> [f32; 16] {
    IDENTITY_VALUES
}

/// A 4x4 single precision matrix stored row-major (`data[row * 4 + col]`).
///
/// Defaults to the identity. The type is plain data: it owns its buffer,
/// holds no other resources and mutation goes through `&mut self`, so sharing
/// across threads needs the usual external synchronization.
///
/// Read access (`at`, `row`, `column`, ...) comes from [`MatrixView`] and the
/// checked mutators (`set`, `set_row`, `set_column`, ...) from
/// [`MatrixViewMut`].
///
/// # Examples
/// ```
/// use matrix4::prelude::*;
///
/// let mut m = Matrix4x4::new();
/// m.set_row(3, 5.0, 6.0, 7.0, 1.0)?;
/// assert_eq!(m.at(3, 1)?, 6.0);
///
/// m.transpose();
/// assert_eq!(m.column(3)?, [5.0, 6.0, 7.0, 1.0]);
/// # Ok::<(), matrix4::MatrixError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4 {
    pub data: [f32; 16],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self { data: IDENTITY_VALUES };

    /// Identity matrix
    pub fn new() -> Self {
        Self::IDENTITY
    }

    pub fn new_from(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Builds a matrix from a runtime sequence of values, row-major.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] unless exactly 16 values
    /// are given.
    pub fn from_values(values: &[f32]) -> Result<Self> {
        let data = <[f32; 16]>::try_from(values).map_err(|_| {
            tracing::trace!(len = values.len(), "rejected matrix data with wrong length");
            MatrixError::InvalidArgument { len: values.len() }
        })?;
        Ok(Self { data })
    }

    /// Construct a new matrix from 4 rows
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut m = Self::IDENTITY;
        for (n, row) in rows.iter().enumerate() {
            write_row(&mut m.data, n, row);
        }
        m
    }

    /// Orthographic projection matrix, see [`Matrix4x4::set_to_orthographic`].
    pub fn orthographic(left: f32, top: f32, right: f32, bottom: f32, near: f32, far: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.set_to_orthographic(left, top, right, bottom, near, far);
        m
    }

    /// Overwrites all 16 values, one row at a time.
    pub fn set_to(&mut self, values: [f32; 16]) -> &mut Self {
        for n in 0..DIMENSION {
            let m = n * DIMENSION;
            write_row(
                &mut self.data,
                n,
                &[values[m], values[m + 1], values[m + 2], values[m + 3]],
            );
        }
        self
    }

    /// Resets this matrix to the identity.
    pub fn identity(&mut self) -> &mut Self {
        self.set_to(IDENTITY_VALUES)
    }

    /// Transposes in place using caller-provided scratch storage.
    ///
    /// `self` is first copied into `temp`; row `i` of `self` is then
    /// rewritten from column `i` of `temp`, with `line` holding the column in
    /// between. Neither buffer is retained and their previous contents do not
    /// matter.
    pub fn transpose_with(&mut self, temp: &mut Matrix4x4, line: &mut [f32; 4]) -> &mut Self {
        temp.copy_from(&*self);
        for n in 0..DIMENSION {
            read_column(&temp.data, n, line);
            write_row(&mut self.data, n, line);
        }
        self
    }

    /// Transposes in place with stack scratch storage.
    pub fn transpose(&mut self) -> &mut Self {
        let mut temp = Self::IDENTITY;
        let mut line = [0.0; 4];
        self.transpose_with(&mut temp, &mut line)
    }

    /// Transposed copy, `self` is left untouched.
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Sets `self` to `left × right`.
    ///
    /// `self` cannot be passed as an operand here; use
    /// [`Matrix4x4::pre_multiply`] or [`Matrix4x4::post_multiply`] for
    /// in-place products.
    pub fn multiply<L, R>(&mut self, left: &L, right: &R) -> &mut Self
    where
        L: MatrixView + ?Sized,
        R: MatrixView + ?Sized,
    {
        multiply_raw(&mut self.data, left.data(), right.data());
        self
    }

    /// Sets `self` to `left × self`.
    pub fn pre_multiply<L: MatrixView + ?Sized>(&mut self, left: &L) -> &mut Self {
        let right = self.data;
        multiply_raw(&mut self.data, left.data(), &right);
        self
    }

    /// Sets `self` to `self × right`.
    pub fn post_multiply<R: MatrixView + ?Sized>(&mut self, right: &R) -> &mut Self {
        let left = self.data;
        multiply_raw(&mut self.data, &left, right.data());
        self
    }

    /// Turns this matrix into an orthographic projection that maps the box
    /// `[left, right] x [top, bottom] x [near, far]` onto the `[-1, 1]` clip
    /// cube (OpenGL convention, translation stored in row 3).
    ///
    /// Degenerate bounds (`left == right`, `top == bottom` or `near == far`)
    /// are not rejected: the resulting infinities and NaNs are written as is.
    pub fn set_to_orthographic(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        if left == right || top == bottom || near == far {
            tracing::warn!(
                left, top, right, bottom, near, far,
                "degenerate orthographic bounds, projection will contain non-finite values"
            );
        }

        let lr = 1.0 / (left - right);
        let bt = 1.0 / (bottom - top);
        let nf = 1.0 / (near - far);

        self.set_to([
            -2.0 * lr, 0.0, 0.0, 0.0,
            0.0, -2.0 * bt, 0.0, 0.0,
            0.0, 0.0, 2.0 * nf, 0.0,
            (left + right) * lr, (top + bottom) * bt, (far + near) * nf, 1.0,
        ])
    }

    /// Element-wise comparison within `tolerance`.
    pub fn approx_eq<V: MatrixView + ?Sized>(&self, other: &V, tolerance: Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data().iter())
            .all(|(a, b)| tolerance.matches(*a, *b))
    }
}

impl MatrixView for Matrix4x4 {
    fn data(&self) -> &[f32; 16] {
        &self.data
    }
}

impl MatrixViewMut for Matrix4x4 {
    fn data_mut(&mut self) -> &mut [f32; 16] {
        &mut self.data
    }
}

// Conversions

impl From<[f32; 16]> for Matrix4x4 {
    fn from(data: [f32; 16]) -> Self {
        Self { data }
    }
}

impl From<Matrix4x4> for [f32; 16] {
    fn from(m: Matrix4x4) -> Self {
        m.data
    }
}

impl TryFrom<&[f32]> for Matrix4x4 {
    type Error = MatrixError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_values(values)
    }
}

impl TryFrom<Vec<f32>> for Matrix4x4 {
    type Error = MatrixError;

    fn try_from(values: Vec<f32>) -> Result<Self> {
        Self::from_values(&values)
    }
}

/// Panicking element access, `m[(row, col)]`.
impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < DIMENSION && col < DIMENSION, "matrix index ({row}, {col}) out of range");
        &self.data[row * DIMENSION + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < DIMENSION && col < DIMENSION, "matrix index ({row}, {col}) out of range");
        &mut self.data[row * DIMENSION + col]
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<'a, 'b> Mul<&'b Matrix4x4> for &'a Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: &'b Matrix4x4) -> Matrix4x4 {
        let mut out = Matrix4x4::IDENTITY;
        out.multiply(self, rhs);
        out
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Self) {
        self.post_multiply(&rhs);
    }
}

impl MulAssign<&Matrix4x4> for Matrix4x4 {
    fn mul_assign(&mut self, rhs: &Matrix4x4) {
        self.post_multiply(rhs);
    }
}

/// Debug dump of all 16 values; the layout is not a stable format.
impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matrix4x4(")?;
        write_values(f, &self.data)?;
        f.write_str(")")
    }
}

// Serialized as a plain sequence of 16 values; the length is checked on the
// way back in.
impl Serialize for Matrix4x4 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.data.iter())
    }
}

impl<'de> Deserialize<'de> for Matrix4x4 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(MatrixVisitor)
    }
}

/// Fills the 16 values straight from the sequence, no intermediate buffer.
struct MatrixVisitor;

impl<'de> serde::de::Visitor<'de> for MatrixVisitor {
    type Value = Matrix4x4;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of 16 f32 values")
    }

    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Matrix4x4, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut data = [0.0f32; 16];
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| <A::Error as serde::de::Error>::invalid_length(i, &self))?;
        }

        // count the surplus so the error reports the real length
        let mut len = data.len();
        while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
            len += 1;
        }
        if len != data.len() {
            tracing::trace!(len, "rejected matrix data with wrong length");
            return Err(serde::de::Error::invalid_length(len, &self));
        }

        Ok(Matrix4x4 { data })
    }
}
