//! Property tests over random signals.

use kodft::dft::{forward, inverse};
use kodft::projection::{project, project_named, reconstruct, reconstruct_named};
use kodft::Basis;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_dft_roundtrip(signal in proptest::collection::vec(-1000.0f64..1000.0, 1..64)) {
        let back = inverse(&forward(&signal));
        prop_assert_eq!(back.len(), signal.len());
        let scale = signal.iter().fold(1.0f64, |m, v| m.max(v.abs()));
        for (a, b) in signal.iter().zip(back.iter()) {
            prop_assert!((a - b).abs() <= 1e-9 * scale, "{} vs {}", a, b);
        }
    }

    #[test]
    fn prop_dc_is_sum(signal in proptest::collection::vec(-1000.0f64..1000.0, 1..64)) {
        let out = forward(&signal);
        let sum: f64 = signal.iter().sum();
        prop_assert!((out[0].re - sum).abs() <= 1e-9 * (1.0 + sum.abs()));
        prop_assert!(out[0].im.abs() < 1e-9);
    }

    #[test]
    fn prop_complex_exponential_roundtrip(signal in proptest::collection::vec(-100.0f64..100.0, 1..24)) {
        let back = reconstruct(&project(&signal, Basis::ComplexExponential), Basis::ComplexExponential);
        for (a, b) in signal.iter().zip(back.iter()) {
            prop_assert!((a - b.re).abs() < 1e-7, "{} vs {:?}", a, b);
        }
    }

    #[test]
    fn prop_unknown_names_rejected(name in "[a-z_]{1,12}") {
        let known = matches!(name.as_str(), "complex_exponential" | "sin" | "cos");
        let amps = project_named(&[1.0f64, 2.0], &name);
        prop_assert_eq!(amps.is_ok(), known);
        prop_assert_eq!(reconstruct_named::<f64>(&[], &name).is_ok(), known);
    }
}
