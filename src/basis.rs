//! Basis families used by the projection engine.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::linalg::Matrix;
use crate::num::{index_to_float, turn_fraction, Complex, Float};

/// Errors raised when selecting a basis family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasisError {
    /// The requested basis name is not one of `complex_exponential`, `sin`
    /// or `cos`. Carries the rejected name.
    InvalidArgument(String),
}

impl fmt::Display for BasisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisError::InvalidArgument(name) => write!(
                f,
                "unknown basis `{name}` (expected one of: complex_exponential, sin, cos)"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BasisError {}

/// Kernel family a signal is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Basis {
    /// `exp(-i·k·x)`
    #[default]
    ComplexExponential,
    /// `sin(k·x)`
    Sin,
    /// `cos(k·x)`
    Cos,
}

impl Basis {
    pub const ALL: [Basis; 3] = [Basis::ComplexExponential, Basis::Sin, Basis::Cos];

    pub fn name(self) -> &'static str {
        match self {
            Basis::ComplexExponential => "complex_exponential",
            Basis::Sin => "sin",
            Basis::Cos => "cos",
        }
    }

    /// `true` when every kernel value is real.
    pub fn is_real(self) -> bool {
        match self {
            Basis::ComplexExponential => false,
            Basis::Sin | Basis::Cos => true,
        }
    }

    /// Evaluate the kernel at angle `x` for frequency index `k`.
    #[inline]
    pub fn kernel<T: Float>(self, x: T, k: usize) -> Complex<T> {
        let kx = index_to_float::<T>(k) * x;
        match self {
            Basis::ComplexExponential => Complex::expi(-kx),
            Basis::Sin => Complex::from_real(kx.sin()),
            Basis::Cos => Complex::from_real(kx.cos()),
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Basis {
    type Err = BasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complex_exponential" => Ok(Basis::ComplexExponential),
            "sin" => Ok(Basis::Sin),
            "cos" => Ok(Basis::Cos),
            other => Err(BasisError::InvalidArgument(other.to_string())),
        }
    }
}

/// `N` evenly spaced angles `x_n = 2πn/N` over one period.
pub fn sample_angles<T: Float>(n: usize) -> Vec<T> {
    (0..n).map(|i| turn_fraction::<T>(i, n)).collect()
}

/// Build the `n × n` basis matrix whose entry `(row, k)` is
/// `basis.kernel(x_row, k)`.
pub fn basis_matrix<T: Float>(basis: Basis, n: usize) -> Matrix<T> {
    let angles = sample_angles::<T>(n);
    Matrix::from_fn(n, n, |row, k| basis.kernel(angles[row], k))
}
