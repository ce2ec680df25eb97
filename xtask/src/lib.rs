use std::env;
use std::process::Command;

/// Options used to configure cargo commands for the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }
}

/// Detect build configuration from the current machine and environment.
pub fn detect_config() -> BuildConfig {
    let nproc = detect_nproc();
    let extra = env::var("KODFT_FEATURES").unwrap_or_default();
    compute_config(nproc, &extra)
}

fn detect_nproc() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(nproc: usize, extra: &str) -> BuildConfig {
    let mut features: Vec<String> = Vec::new();
    if nproc > 1 {
        features.push("parallel".into());
    }
    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }
    BuildConfig { features }
}

fn cargo_with_features(subcommand: &str, cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg(subcommand);
    if let Some(f) = cfg.features_arg() {
        cmd.arg("--features").arg(f);
    }
    cmd
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("build", cfg)
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("test", cfg)
}

/// Run the test suite without default features to keep the `no_std` path honest.
pub fn no_std_test_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["test", "-p", "kodft", "--no-default-features", "--lib"]);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = cargo_with_features("bench", cfg);
    cmd.args(["--bench", "bench_dft"]);
    cmd
}

pub fn example_command(name: &str, cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--release", "--example", name]);
    let mut features = cfg.features.clone();
    if name == "verbose_logging" && !features.iter().any(|f| f == "verbose-logging") {
        features.push("verbose-logging".into());
    }
    if !features.is_empty() {
        cmd.arg("--features").arg(features.join(" "));
    }
    cmd
}
