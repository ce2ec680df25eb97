//! Point lists for plotting transform output against sample angles.
//!
//! Each value is paired with its angle `x_n = 2πn/N`, where `N` is the
//! length of the slice.

use alloc::vec::Vec;

use crate::basis::sample_angles;
use crate::num::{Complex, Float};

/// Pair each value with its sample angle: `(x_n, values[n])`.
pub fn points<T: Float>(values: &[T]) -> Vec<(T, T)> {
    sample_angles::<T>(values.len())
        .into_iter()
        .zip(values.iter().copied())
        .collect()
}

/// Split complex values into a real curve and an imaginary curve, both
/// sampled at the same angles.
pub fn complex_points<T: Float>(values: &[Complex<T>]) -> (Vec<(T, T)>, Vec<(T, T)>) {
    let angles = sample_angles::<T>(values.len());
    let re = angles.iter().zip(values).map(|(&x, c)| (x, c.re)).collect();
    let im = angles.iter().zip(values).map(|(&x, c)| (x, c.im)).collect();
    (re, im)
}
