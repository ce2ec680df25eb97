//! Projection of real samples onto a [`Basis`] family and reconstruction
//! through the basis pseudoinverse.
//!
//! `project` scales the inner products by [`PROJECTION_SCALE`] and
//! `reconstruct` undoes it with [`RECONSTRUCTION_SCALE`]. The sine and
//! cosine bases are rank deficient on a uniform grid (column `k` and
//! `N - k` coincide up to sign), so for most sizes their basis Gram matrix
//! is singular and `reconstruct` returns all zeros instead of failing.

use alloc::vec::Vec;

use crate::basis::{basis_matrix, Basis, BasisError};
use crate::num::{Complex, Float};

/// Factor applied to every inner product in [`project`].
pub const PROJECTION_SCALE: f64 = 0.25;
/// Factor applied in [`reconstruct`]; the reciprocal of [`PROJECTION_SCALE`].
pub const RECONSTRUCTION_SCALE: f64 = 4.0;

/// Project `samples` onto `basis`.
///
/// `amplitude_k = 0.25 · Σ_n samples[n] · kernel(x_n, k)` with
/// `x_n = 2πn/N`. Real bases produce amplitudes with a zero imaginary part.
pub fn project<T: Float>(samples: &[T], basis: Basis) -> Vec<Complex<T>> {
    let n = samples.len();
    crate::trace_log!("project: n = {}, basis = {}", n, basis);
    if n == 0 {
        return Vec::new();
    }
    let matrix = basis_matrix::<T>(basis, n);
    let row: Vec<Complex<T>> = samples.iter().map(|&x| Complex::from_real(x)).collect();
    let scale = T::from_f64(PROJECTION_SCALE);
    matrix
        .vec_mul_unchecked(&row)
        .into_iter()
        .map(|c| c.scale(scale))
        .collect()
}

/// [`project`] for real bases, returning only the real parts.
///
/// For [`Basis::ComplexExponential`] the imaginary parts are discarded.
pub fn project_real<T: Float>(samples: &[T], basis: Basis) -> Vec<T> {
    project(samples, basis).into_iter().map(|c| c.re).collect()
}

/// Reconstruct samples from amplitudes produced by [`project`].
///
/// `samples = 4 · amplitudes · pinv(B)` where `pinv(B) = Bᴴ·(B·Bᴴ)⁻¹`. A
/// singular `B·Bᴴ` yields an all-zero result. The output may carry an
/// imaginary residue; callers with real signals can drop it.
pub fn reconstruct<T: Float>(amplitudes: &[Complex<T>], basis: Basis) -> Vec<Complex<T>> {
    let n = amplitudes.len();
    crate::trace_log!("reconstruct: n = {}, basis = {}", n, basis);
    if n == 0 {
        return Vec::new();
    }
    let pinv = basis_matrix::<T>(basis, n).pseudoinverse();
    let scale = T::from_f64(RECONSTRUCTION_SCALE);
    pinv.vec_mul_unchecked(amplitudes)
        .into_iter()
        .map(|c| c.scale(scale))
        .collect()
}

/// [`project`] with the basis selected by name.
pub fn project_named<T: Float>(samples: &[T], basis: &str) -> Result<Vec<Complex<T>>, BasisError> {
    let basis: Basis = basis.parse()?;
    Ok(project(samples, basis))
}

/// [`reconstruct`] with the basis selected by name.
pub fn reconstruct_named<T: Float>(
    amplitudes: &[Complex<T>],
    basis: &str,
) -> Result<Vec<Complex<T>>, BasisError> {
    let basis: Basis = basis.parse()?;
    Ok(reconstruct(amplitudes, basis))
}
