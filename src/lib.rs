//! # kodft - naive DFT and basis-projection transforms for Rust
//!
//! Two small, composable numeric engines for real, uniformly sampled,
//! 2π-periodic signals:
//!
//! - **[`dft`]**: direct O(N²) forward DFT and its inverse. The forward sum
//!   is *not* normalised; the inverse divides by `N`.
//! - **[`projection`]**: projection onto a [`Basis`] family (complex
//!   exponential, sine, cosine) scaled by `0.25`, and reconstruction through
//!   the basis pseudoinverse.
//!
//! Every call is a pure function of its inputs: no caches, no shared mutable
//! state, safe to call from many threads at once.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls and environment-variable
//!   configuration (see [`config`])
//! - `parallel`: evaluate DFT bins in parallel with Rayon above a size
//!   threshold
//! - `verbose-logging`: emit `log` records (transform sizes, singular
//!   pseudoinverse fallbacks)
//!
//! ## Example
//!
//! ```
//! use kodft::{dft, projection, Basis};
//!
//! let x = [1.0f64, 0.0, -1.0, 0.0];
//! let coeffs = dft::forward(&x);
//! assert!((coeffs[1].re - 2.0).abs() < 1e-12);
//!
//! let back = dft::inverse(&coeffs);
//! assert!((back[0] - 1.0).abs() < 1e-12);
//!
//! let amps = projection::project(&[1.0f64; 4], Basis::Cos);
//! assert!((amps[0].re - 1.0).abs() < 1e-12);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::trace!($($arg)*);
        }
    };
}

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::debug!($($arg)*);
        }
    };
}

pub(crate) use debug_log;
pub(crate) use trace_log;

/// Scalar and complex primitives.
pub mod num;

/// Runtime tuning knobs (singularity tolerance, parallel threshold).
pub mod config;

/// Forward and inverse DFT.
///
/// Raw-sum forward transform and the matching `1/N` inverse.
pub mod dft;

/// Basis families and basis-matrix construction.
pub mod basis;

/// Dense complex matrices with inverse and pseudoinverse.
pub mod linalg;

/// Basis projection and pseudoinverse reconstruction.
pub mod projection;

/// Angle/value point lists for plotting.
pub mod points;

pub use basis::{Basis, BasisError};
pub use linalg::{LinalgError, Matrix};
pub use num::{Complex, Complex32, Complex64, Float};
