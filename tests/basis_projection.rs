//! Integration tests for basis projection and pseudoinverse reconstruction.

use kodft::basis::{basis_matrix, sample_angles};
use kodft::projection::{
    project, project_named, project_real, reconstruct, reconstruct_named, PROJECTION_SCALE,
    RECONSTRUCTION_SCALE,
};
use kodft::{Basis, BasisError, Complex64};

const EPSILON: f64 = 1e-9;

#[test]
fn unknown_basis_is_invalid_argument() {
    let x = [1.0f64, 2.0, 3.0];
    let err = project_named(&x, "bogus").unwrap_err();
    assert_eq!(err, BasisError::InvalidArgument("bogus".into()));
    assert!(err.to_string().contains("bogus"));

    let amps = [Complex64::one(); 3];
    assert!(matches!(
        reconstruct_named(&amps, "bogus"),
        Err(BasisError::InvalidArgument(name)) if name == "bogus"
    ));
}

// Every valid name works for every non-empty length.
#[test]
fn valid_names_never_fail() {
    for n in 1..=6 {
        let x: Vec<f64> = (0..n).map(|i| i as f64 - 1.5).collect();
        for basis in Basis::ALL {
            let amps = project_named(&x, basis.name()).expect("valid basis");
            assert_eq!(amps.len(), n);
            let back = reconstruct_named(&amps, basis.name()).expect("valid basis");
            assert_eq!(back.len(), n);
        }
    }
}

#[test]
fn constant_signal_cos_dc_is_one() {
    let amps = project(&[1.0f64, 1.0, 1.0, 1.0], Basis::Cos);
    assert!((amps[0].re - 1.0).abs() < EPSILON);
    assert_eq!(PROJECTION_SCALE * RECONSTRUCTION_SCALE, 1.0);
}

#[test]
fn default_basis_is_complex_exponential() {
    let x = [1.0f64, -2.0, 0.5];
    assert_eq!(project(&x, Basis::default()), project(&x, Basis::ComplexExponential));
}

// The complex exponential basis is invertible at every size.
#[test]
fn complex_exponential_roundtrip() {
    for n in 1..=9 {
        let x: Vec<f64> = (0..n).map(|i| ((i * 7) % 5) as f64 - 2.0).collect();
        let back = reconstruct(&project(&x, Basis::ComplexExponential), Basis::ComplexExponential);
        for (a, b) in x.iter().zip(back.iter()) {
            assert!((a - b.re).abs() < EPSILON, "n = {n}: {a} vs {:?}", b);
            assert!(b.im.abs() < EPSILON);
        }
    }
}

// Rank-deficient sine/cosine grids fall back to an all-zero reconstruction.
#[test]
fn degenerate_reconstruct_is_all_zero() {
    let single = reconstruct(&[Complex64::from_real(5.0)], Basis::Sin);
    assert_eq!(single.len(), 1);
    assert!(single[0].is_zero());

    let x = [1.0f64, 2.0, 3.0, 4.0, 5.0];
    for basis in [Basis::Sin, Basis::Cos] {
        let out = reconstruct(&project(&x, basis), basis);
        assert_eq!(out.len(), x.len());
        assert!(out.iter().all(|c| c.is_zero()), "{basis}: {out:?}");
    }
}

#[test]
fn basis_matrix_entries_follow_kernel() {
    let n = 5;
    let angles = sample_angles::<f64>(n);
    for basis in Basis::ALL {
        let m = basis_matrix::<f64>(basis, n);
        for (row, &x) in angles.iter().enumerate() {
            for k in 0..n {
                assert_eq!(m.get(row, k), basis.kernel(x, k));
            }
        }
    }
}

#[test]
fn sin_projection_matches_direct_sum() {
    let x = [0.0f64, 1.0, 0.0, -1.0];
    let amps = project_real(&x, Basis::Sin);
    // 0.25 · Σ x_n·sin(k·πn/2): k = 1 gives 0.25·(1 + 1) = 0.5.
    assert!((amps[1] - 0.5).abs() < EPSILON);
    assert!(amps[0].abs() < EPSILON);
}

#[test]
fn empty_inputs() {
    assert!(project::<f64>(&[], Basis::ComplexExponential).is_empty());
    assert!(reconstruct::<f64>(&[], Basis::Sin).is_empty());
    assert_eq!(project_named::<f64>(&[], "cos"), Ok(vec![]));
}
