// src/numerics/types/traits.rs
// Read-only and mutable capabilities over a row-major 4x4 f32 buffer.

use crate::error::{Axis, MatrixError, Result};

/// Number of rows (and columns) of the matrices handled here.
pub const DIMENSION: usize = 4;

/// Read access to anything that exposes a row-major `[f32; 16]` buffer.
///
/// Every accessor is bounds-checked: row and column indices must be in
/// `0..4`, otherwise [`MatrixError::IndexOutOfRange`] is returned.
pub trait MatrixView {
    /// The 16 backing values, `data[row * 4 + col]`.
    fn data(&self) -> &[f32; 16];

    /// Element at `(row, col)`.
    fn at(&self, row: usize, col: usize) -> Result<f32> {
        let row = checked_index(Axis::Row, row)?;
        let col = checked_index(Axis::Column, col)?;
        Ok(self.data()[row * DIMENSION + col])
    }

    /// Copy of row `n`.
    fn row(&self, n: usize) -> Result<[f32; 4]> {
        let mut target = [0.0; 4];
        self.row_into(n, &mut target)?;
        Ok(target)
    }

    /// Copies row `n` into `target` without allocating and hands it back.
    fn row_into<'a>(&self, n: usize, target: &'a mut [f32; 4]) -> Result<&'a [f32; 4]> {
        let n = checked_index(Axis::Row, n)?;
        read_row(self.data(), n, target);
        Ok(target)
    }

    /// Copy of column `n`.
    fn column(&self, n: usize) -> Result<[f32; 4]> {
        let mut target = [0.0; 4];
        self.column_into(n, &mut target)?;
        Ok(target)
    }

    /// Copies column `n` into `target` without allocating and hands it back.
    fn column_into<'a>(&self, n: usize, target: &'a mut [f32; 4]) -> Result<&'a [f32; 4]> {
        let n = checked_index(Axis::Column, n)?;
        read_column(self.data(), n, target);
        Ok(target)
    }
}

/// Write access layered on top of [`MatrixView`].
///
/// Mutators return `&mut Self` so calls can be chained with `?`.
pub trait MatrixViewMut: MatrixView {
    fn data_mut(&mut self) -> &mut [f32; 16];

    fn set(&mut self, row: usize, col: usize, value: f32) -> Result<&mut Self> {
        let row = checked_index(Axis::Row, row)?;
        let col = checked_index(Axis::Column, col)?;
        self.data_mut()[row * DIMENSION + col] = value;
        Ok(self)
    }

    fn set_row(&mut self, n: usize, a: f32, b: f32, c: f32, d: f32) -> Result<&mut Self> {
        self.set_row_from(n, &[a, b, c, d])
    }

    fn set_row_from(&mut self, n: usize, values: &[f32; 4]) -> Result<&mut Self> {
        let n = checked_index(Axis::Row, n)?;
        write_row(self.data_mut(), n, values);
        Ok(self)
    }

    fn set_column(&mut self, n: usize, a: f32, b: f32, c: f32, d: f32) -> Result<&mut Self> {
        self.set_column_from(n, &[a, b, c, d])
    }

    fn set_column_from(&mut self, n: usize, values: &[f32; 4]) -> Result<&mut Self> {
        let n = checked_index(Axis::Column, n)?;
        write_column(self.data_mut(), n, values);
        Ok(self)
    }

    /// Element-wise copy of `other` into this buffer.
    fn copy_from<V: MatrixView + ?Sized>(&mut self, other: &V) -> &mut Self {
        self.data_mut().copy_from_slice(other.data());
        self
    }
}

impl MatrixView for [f32; 16] {
    fn data(&self) -> &[f32; 16] {
        self
    }
}

pub(crate) fn checked_index(axis: Axis, index: usize) -> Result<usize> {
    if index < DIMENSION {
        Ok(index)
    } else {
        tracing::trace!(%axis, index, "matrix index out of range");
        Err(MatrixError::IndexOutOfRange { axis, index })
    }
}

// Unchecked buffer helpers; `n` must already be in 0..4.

pub(crate) fn read_row(data: &[f32; 16], n: usize, target: &mut [f32; 4]) {
    let m = n * DIMENSION;
    target.copy_from_slice(&data[m..m + DIMENSION]);
}

pub(crate) fn read_column(data: &[f32; 16], n: usize, target: &mut [f32; 4]) {
    target[0] = data[n];
    target[1] = data[n + 4];
    target[2] = data[n + 8];
    target[3] = data[n + 12];
}

pub(crate) fn write_row(data: &mut [f32; 16], n: usize, values: &[f32; 4]) {
    let m = n * DIMENSION;
    data[m..m + DIMENSION].copy_from_slice(values);
}

pub(crate) fn write_column(data: &mut [f32; 16], n: usize, values: &[f32; 4]) {
    data[n] = values[0];
    data[n + 4] = values[1];
    data[n + 8] = values[2];
    data[n + 12] = values[3];
}
