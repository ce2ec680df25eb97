//! Basic forward/inverse DFT walkthrough.
use kodft::dft::{forward, inverse, magnitudes};
use kodft::points::points;

fn main() {
    println!("=== kodft basic usage ===");
    println!();

    // 1. Forward DFT (raw sums, no 1/N)
    println!("1. Forward DFT");
    let signal = vec![1.0f64, 2.0, 3.0];
    let coeffs = forward(&signal);
    println!("   Input: {:?}", signal);
    for (k, c) in coeffs.iter().enumerate() {
        println!("   X[{}] = {:.4} {:+.4}i", k, c.re, c.im);
    }
    println!();

    // 2. Magnitude spectrum as plot points
    println!("2. Magnitude spectrum");
    let mags = magnitudes(&coeffs);
    for (x, y) in points(&mags) {
        println!("   angle {:.3} -> {:.4}", x, y);
    }
    println!();

    // 3. Inverse DFT
    println!("3. Inverse DFT");
    let back = inverse(&coeffs);
    println!(
        "   Reconstructed: {:?}",
        back.iter().map(|&x| format!("{:.4}", x)).collect::<Vec<_>>()
    );
    println!();

    // 4. Timing a larger transform
    println!("4. Performance");
    let large: Vec<f64> = (0..1024).map(|i| (i as f64 * 0.1).sin()).collect();
    let start = std::time::Instant::now();
    let _ = forward(&large);
    println!("   1024-point DFT completed in {:?}", start.elapsed());
    println!();

    println!("=== Example completed successfully! ===");
}
