//! Demonstrates enabling verbose logging for kodft.
use kodft::dft::forward;
use kodft::projection::{project, reconstruct};
use kodft::Basis;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal = vec![1.0, 2.0, 3.0, 4.0];
    let _ = forward(&signal);

    // The cosine grid is rank deficient at N = 4; the singular fallback is logged.
    let amps = project(&signal, Basis::Cos);
    let _ = reconstruct(&amps, Basis::Cos);
}
