//! Runtime tuning knobs.
//!
//! Each knob resolves in order: an override set from code, an environment
//! variable read once per process (`std` only), then a built-in default.
//! A value of `0` always means "not set".

use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

#[cfg(feature = "std")]
use std::sync::OnceLock;

use crate::num::Float;

/// Environment variable overriding the relative pivot tolerance used to
/// detect singular matrices.
pub const PINV_TOLERANCE_ENV: &str = "FOURIER_PINV_TOLERANCE";

/// Environment variable overriding the minimum transform length that is
/// fanned out across threads when the `parallel` feature is enabled.
pub const PARALLEL_THRESHOLD_ENV: &str = "FOURIER_PAR_THRESHOLD";

/// Default minimum length before parallel evaluation kicks in.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Bit pattern of an `f64` tolerance; `0` means no override.
static SINGULAR_TOLERANCE_OVERRIDE: AtomicU64 = AtomicU64::new(0);
static PARALLEL_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "std")]
struct EnvConfig {
    singular_tolerance: f64,
    parallel_threshold: usize,
}

#[cfg(feature = "std")]
static ENV_CONFIG: OnceLock<EnvConfig> = OnceLock::new();

#[cfg(feature = "std")]
fn env_config() -> &'static EnvConfig {
    ENV_CONFIG.get_or_init(|| {
        let singular_tolerance = std::env::var(PINV_TOLERANCE_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(0.0);
        let parallel_threshold = std::env::var(PARALLEL_THRESHOLD_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        EnvConfig {
            singular_tolerance,
            parallel_threshold,
        }
    })
}

/// Set the relative pivot tolerance below which a matrix is considered
/// singular.
///
/// Non-finite or non-positive values clear the override and revert to the
/// environment variable or the type default (`sqrt(epsilon)`).
pub fn set_singular_tolerance(tolerance: f64) {
    let bits = if tolerance.is_finite() && tolerance > 0.0 {
        tolerance.to_bits()
    } else {
        0
    };
    SINGULAR_TOLERANCE_OVERRIDE.store(bits, Ordering::Relaxed);
}

/// Resolve the relative singularity tolerance for `T`.
pub fn singular_tolerance<T: Float>() -> T {
    let bits = SINGULAR_TOLERANCE_OVERRIDE.load(Ordering::Relaxed);
    if bits != 0 {
        return T::from_f64(f64::from_bits(bits));
    }
    #[cfg(feature = "std")]
    {
        let env = env_config().singular_tolerance;
        if env > 0.0 {
            return T::from_f64(env);
        }
    }
    T::epsilon().sqrt()
}

/// Set a custom minimum length for parallel evaluation. Passing `0` reverts
/// to the environment variable or [`DEFAULT_PARALLEL_THRESHOLD`].
pub fn set_parallel_threshold(threshold: usize) {
    PARALLEL_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

/// Resolve the minimum length for parallel evaluation.
pub fn parallel_threshold() -> usize {
    let override_thr = PARALLEL_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if override_thr != 0 {
        return override_thr;
    }
    #[cfg(feature = "std")]
    {
        let env = env_config().parallel_threshold;
        if env != 0 {
            return env;
        }
    }
    DEFAULT_PARALLEL_THRESHOLD
}
