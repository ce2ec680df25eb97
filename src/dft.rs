//! Direct (O(N²)) discrete Fourier transform of real, uniformly sampled
//! signals and its inverse.
//!
//! # Scaling and sign convention
//!
//! [`forward`] returns the **raw, unnormalised** sum
//!
//! ```text
//! re_k = Σ x[n]·cos(-2πkn/N)
//! im_k = Σ x[n]·sin(-2πkn/N)
//! ```
//!
//! No `1/N` factor is applied on the way in. [`inverse`] applies `1/N` and
//! reuses the *same* kernel signs rather than the conjugate:
//!
//! ```text
//! x[n] = (1/N)·Σ (re_k·cos(-2πkn/N) + im_k·sin(-2πkn/N))
//! ```
//!
//! For real input this pair round-trips exactly (up to rounding), which is
//! the contract callers rely on. Do not "fix" either side independently.

use alloc::vec::Vec;

use crate::num::{turn_fraction, Complex, Float};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Kernel angle `-2π·k·n/N`, with `k·n` reduced modulo `N` first so the
/// argument stays in `(-2π, 0]` for any length.
#[inline]
pub(crate) fn kernel_angle<T: Float>(k: usize, n: usize, len: usize) -> T {
    let reduced = ((k as u128 * n as u128) % len as u128) as usize;
    -turn_fraction::<T>(reduced, len)
}

fn forward_bin<T: Float>(samples: &[T], k: usize) -> Complex<T> {
    let len = samples.len();
    let mut acc = Complex::zero();
    for (n, &x) in samples.iter().enumerate() {
        let (sin, cos) = kernel_angle::<T>(k, n, len).sin_cos();
        acc.re = x.mul_add(cos, acc.re);
        acc.im = x.mul_add(sin, acc.im);
    }
    acc
}

fn inverse_sample<T: Float>(coefficients: &[Complex<T>], n: usize, inv_len: T) -> T {
    let len = coefficients.len();
    let mut acc = T::zero();
    for (k, c) in coefficients.iter().enumerate() {
        let (sin, cos) = kernel_angle::<T>(k, n, len).sin_cos();
        acc = c.re.mul_add(cos, acc);
        acc = c.im.mul_add(sin, acc);
    }
    acc * inv_len
}

#[cfg(feature = "parallel")]
fn use_parallel(len: usize) -> bool {
    len >= crate::config::parallel_threshold()
}

/// Forward DFT of a real signal.
///
/// Returns one coefficient per frequency index `k` in `0..N`, in increasing
/// order. Empty input yields an empty output.
pub fn forward<T: Float>(samples: &[T]) -> Vec<Complex<T>> {
    let len = samples.len();
    crate::trace_log!("dft forward: n = {}", len);
    #[cfg(feature = "parallel")]
    {
        if use_parallel(len) {
            return (0..len)
                .into_par_iter()
                .map(|k| forward_bin(samples, k))
                .collect();
        }
    }
    (0..len).map(|k| forward_bin(samples, k)).collect()
}

/// Inverse of [`forward`]. See the module docs for the sign convention.
///
/// Empty input yields an empty output.
pub fn inverse<T: Float>(coefficients: &[Complex<T>]) -> Vec<T> {
    let len = coefficients.len();
    crate::trace_log!("dft inverse: n = {}", len);
    if len == 0 {
        return Vec::new();
    }
    let inv_len = T::one() / crate::num::index_to_float::<T>(len);
    #[cfg(feature = "parallel")]
    {
        if use_parallel(len) {
            return (0..len)
                .into_par_iter()
                .map(|n| inverse_sample(coefficients, n, inv_len))
                .collect();
        }
    }
    (0..len)
        .map(|n| inverse_sample(coefficients, n, inv_len))
        .collect()
}

/// [`forward`] returning plain `(real, imag)` pairs.
pub fn forward_pairs<T: Float>(samples: &[T]) -> Vec<(T, T)> {
    forward(samples).into_iter().map(Into::into).collect()
}

/// [`inverse`] accepting plain `(real, imag)` pairs.
pub fn inverse_pairs<T: Float>(pairs: &[(T, T)]) -> Vec<T> {
    let coefficients: Vec<Complex<T>> = pairs.iter().map(|&p| p.into()).collect();
    inverse(&coefficients)
}

/// Magnitude `|c_k|` of each coefficient.
pub fn magnitudes<T: Float>(coefficients: &[Complex<T>]) -> Vec<T> {
    coefficients.iter().map(|c| c.norm()).collect()
}
