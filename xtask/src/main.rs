use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for kodft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    /// Run the library tests without default features
    #[command(name = "test-no-std")]
    TestNoStd,
    Clippy,
    Fmt,
    /// Format, then lint
    Analyze,
    Bench,
    /// Run one of the demos
    Example {
        /// Demo name: basic_usage, basis_projection or verbose_logging
        name: String,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status(),
        Commands::Test => test_command(&cfg).status(),
        Commands::TestNoStd => no_std_test_command().status(),
        Commands::Clippy => clippy_command().status(),
        Commands::Fmt => fmt_command().status(),
        Commands::Analyze => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                Ok(fmt)
            } else {
                clippy_command().status()
            }
        }
        Commands::Bench => bench_command(&cfg).status(),
        Commands::Example { name } => example_command(&name, &cfg).status(),
    }?;

    std::process::exit(status.code().unwrap_or(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_example_command() {
        let cli = Cli::parse_from(["xtask", "example", "basic_usage"]);
        match cli.command {
            Commands::Example { name } => assert_eq!(name, "basic_usage"),
            _ => panic!("parsed wrong command"),
        }
    }

    #[test]
    fn parse_test_no_std() {
        let cli = Cli::parse_from(["xtask", "test-no-std"]);
        assert!(matches!(cli.command, Commands::TestNoStd));
    }
}
