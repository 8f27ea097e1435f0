//! Command-line entry point: sums the numbers given as the only argument.

use clap::Parser;
use string_calculator::{AppConfig, StringCalculator};
use tracing::debug;

/// Run the String Calculator.
#[derive(Parser, Debug)]
#[command(name = "string-calculator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// A string containing numbers separated by delimiters.
    #[arg(allow_hyphen_values = true)]
    numbers: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env_with(AppConfig::cli_defaults()).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring logging configuration ({e})");
        AppConfig::cli_defaults()
    });
    string_calculator::setup_cli_logging(&config);

    debug!(numbers = %cli.numbers, "Summing command-line input");
    let result = StringCalculator::new().add(Some(&cli.numbers))?;
    println!("{result}");
    Ok(())
}
