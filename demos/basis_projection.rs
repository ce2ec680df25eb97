//! Project a signal onto each basis family and reconstruct it.
use kodft::projection::{project, reconstruct};
use kodft::Basis;

fn main() {
    let signal = vec![1.0f64, 2.0, 3.0, 4.0];
    println!("Input: {:?}", signal);
    for basis in Basis::ALL {
        let amps = project(&signal, basis);
        let back = reconstruct(&amps, basis);
        println!();
        println!("[{}]", basis);
        println!(
            "   amplitudes: {:?}",
            amps.iter()
                .map(|c| format!("{:.3}{:+.3}i", c.re, c.im))
                .collect::<Vec<_>>()
        );
        println!(
            "   reconstructed (real part): {:?}",
            back.iter().map(|c| format!("{:.3}", c.re)).collect::<Vec<_>>()
        );
    }
}
