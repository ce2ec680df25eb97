//! Small dense complex linear algebra sized for the projection engine:
//! products, conjugate transpose, Gauss–Jordan inverse and the
//! `Bᴴ·(B·Bᴴ)⁻¹` pseudoinverse.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::config::singular_tolerance;
use crate::num::{Complex, Float};

/// Errors produced by matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand shapes are incompatible, e.g. `(2×3)·(2×3)`.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} by {}x{}",
                left.0, left.1, right.0, right.1
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

/// Row-major dense complex matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Float> {
    rows: usize,
    cols: usize,
    data: Vec<Complex<T>>,
}

impl<T: Float> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Complex::zero(); rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| {
            if r == c {
                Complex::one()
            } else {
                Complex::zero()
            }
        })
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Complex<T>) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex<T> {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Complex<T>) {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[Complex<T>] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.data
    }

    /// Largest entry magnitude, `0` for an empty matrix.
    pub fn max_abs(&self) -> T {
        self.data
            .iter()
            .map(|c| c.norm())
            .fold(T::zero(), |acc, v| if v > acc { v } else { acc })
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|c| c.is_zero())
    }

    pub fn scale(&self, factor: T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|c| c.scale(factor)).collect(),
        }
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self.get(c, r))
    }

    pub fn conj_transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self.get(c, r).conj())
    }

    /// Matrix product `self · rhs`.
    pub fn mul(&self, rhs: &Self) -> Result<Self, LinalgError> {
        if self.cols != rhs.rows {
            return Err(LinalgError::DimensionMismatch {
                left: (self.rows, self.cols),
                right: (rhs.rows, rhs.cols),
            });
        }
        Ok(self.mul_unchecked(rhs))
    }

    fn mul_unchecked(&self, rhs: &Self) -> Self {
        let mut out = Self::zeros(self.rows, rhs.cols);
        for r in 0..self.rows {
            let lhs_row = self.row(r);
            let out_row = &mut out.data[r * rhs.cols..(r + 1) * rhs.cols];
            for (i, &a) in lhs_row.iter().enumerate() {
                if a.is_zero() {
                    continue;
                }
                for (o, &b) in out_row.iter_mut().zip(rhs.row(i)) {
                    *o += a * b;
                }
            }
        }
        out
    }

    /// Row vector times matrix: `out_j = Σ_i v_i · self[i][j]`.
    pub fn vec_mul(&self, v: &[Complex<T>]) -> Result<Vec<Complex<T>>, LinalgError> {
        if v.len() != self.rows {
            return Err(LinalgError::DimensionMismatch {
                left: (1, v.len()),
                right: (self.rows, self.cols),
            });
        }
        Ok(self.vec_mul_unchecked(v))
    }

    pub(crate) fn vec_mul_unchecked(&self, v: &[Complex<T>]) -> Vec<Complex<T>> {
        let mut out = vec![Complex::zero(); self.cols];
        for (i, &a) in v.iter().enumerate().take(self.rows) {
            for (o, &b) in out.iter_mut().zip(self.row(i)) {
                *o += a * b;
            }
        }
        out
    }

    /// Magnitude at or below which a pivot counts as zero.
    fn pivot_threshold(&self) -> T {
        singular_tolerance::<T>() * self.max_abs()
    }

    /// Inverse by Gauss–Jordan elimination with partial pivoting.
    ///
    /// Returns `None` for non-square or (numerically) singular matrices.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_square() {
            return None;
        }
        let n = self.rows;
        let threshold = self.pivot_threshold();
        let mut a = self.clone();
        let mut inv = Self::identity(n);
        for col in 0..n {
            let (pivot_row, pivot_mag) = (col..n)
                .map(|r| (r, a.get(r, col).norm()))
                .fold((col, T::zero()), |best, cur| if cur.1 > best.1 { cur } else { best });
            // NaN pivots fail the comparison too.
            if !(pivot_mag > threshold) {
                return None;
            }
            a.swap_rows(col, pivot_row);
            inv.swap_rows(col, pivot_row);

            let pivot = a.get(col, col);
            let recip = Complex::one().div(pivot);
            a.scale_row(col, recip);
            inv.scale_row(col, recip);

            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = a.get(r, col);
                if factor.is_zero() {
                    continue;
                }
                a.sub_row_multiple(r, col, factor);
                inv.sub_row_multiple(r, col, factor);
            }
        }
        Some(inv)
    }

    /// Determinant by Gaussian elimination with partial pivoting. `None` for
    /// non-square matrices; the empty matrix has determinant `1`.
    pub fn determinant(&self) -> Option<Complex<T>> {
        if !self.is_square() {
            return None;
        }
        let n = self.rows;
        let mut a = self.clone();
        let mut det = Complex::one();
        for col in 0..n {
            let (pivot_row, pivot_mag) = (col..n)
                .map(|r| (r, a.get(r, col).norm()))
                .fold((col, T::zero()), |best, cur| if cur.1 > best.1 { cur } else { best });
            if pivot_mag == T::zero() {
                return Some(Complex::zero());
            }
            if pivot_row != col {
                a.swap_rows(col, pivot_row);
                det = -det;
            }
            let pivot = a.get(col, col);
            det = det * pivot;
            for r in col + 1..n {
                let factor = a.get(r, col).div(pivot);
                if !factor.is_zero() {
                    a.sub_row_multiple(r, col, factor);
                }
            }
        }
        Some(det)
    }

    /// `true` when the matrix is non-square or has a numerically zero pivot.
    pub fn is_singular(&self) -> bool {
        self.inverse().is_none()
    }

    /// Moore–Penrose pseudoinverse for full-row-rank matrices,
    /// `Bᴴ·(B·Bᴴ)⁻¹`.
    ///
    /// When `B·Bᴴ` is singular the result is the `cols × rows` zero matrix;
    /// this path never fails.
    pub fn pseudoinverse(&self) -> Self {
        let adjoint = self.conj_transpose();
        let gram = self.mul_unchecked(&adjoint);
        match gram.inverse() {
            Some(gram_inv) => adjoint.mul_unchecked(&gram_inv),
            None => {
                crate::debug_log!(
                    "pseudoinverse: {}x{} gram matrix is singular, using zero matrix",
                    gram.rows,
                    gram.cols
                );
                Self::zeros(self.cols, self.rows)
            }
        }
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    fn scale_row(&mut self, row: usize, factor: Complex<T>) {
        let cols = self.cols;
        for v in &mut self.data[row * cols..(row + 1) * cols] {
            *v = *v * factor;
        }
    }

    /// `row[target] -= factor · row[source]`
    fn sub_row_multiple(&mut self, target: usize, source: usize, factor: Complex<T>) {
        for c in 0..self.cols {
            let s = self.data[source * self.cols + c];
            let t = &mut self.data[target * self.cols + c];
            *t = *t - factor * s;
        }
    }
}
