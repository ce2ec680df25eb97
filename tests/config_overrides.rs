//! Process-wide configuration overrides. Kept in a single test so no other
//! test in this binary observes a half-applied override.

use kodft::config::{parallel_threshold, set_parallel_threshold, set_singular_tolerance};
use kodft::dft::{forward, inverse};
use kodft::projection::{project, reconstruct};
use kodft::{Basis, Matrix};

#[test]
fn overrides_apply_and_reset() {
    let x = [1.0f64, -2.0, 3.0, 0.5];
    let amps = project(&x, Basis::ComplexExponential);
    let before = reconstruct(&amps, Basis::ComplexExponential);
    assert!((before[1].re + 2.0).abs() < 1e-9);

    // A tolerance above 1 treats every Gram matrix as singular.
    set_singular_tolerance(2.0);
    assert!(Matrix::<f64>::identity(3).inverse().is_none());
    let zeroed = reconstruct(&amps, Basis::ComplexExponential);
    assert!(zeroed.iter().all(|c| c.is_zero()));

    set_singular_tolerance(0.0);
    assert!(Matrix::<f64>::identity(3).inverse().is_some());
    assert_eq!(reconstruct(&amps, Basis::ComplexExponential), before);

    // Parallel evaluation, when enabled, must not change results.
    let signal: Vec<f64> = (0..64).map(|i| (i as f64 * 0.3).sin()).collect();
    let sequential = forward(&signal);
    set_parallel_threshold(1);
    assert_eq!(parallel_threshold(), 1);
    assert_eq!(forward(&signal), sequential);
    assert_eq!(inverse(&sequential), inverse(&forward(&signal)));
    set_parallel_threshold(0);
    assert_ne!(parallel_threshold(), 1);
}
