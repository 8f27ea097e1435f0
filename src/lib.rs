//! String Calculator - sums delimiter-separated integers.
//!
//! The crate is built around one pure routine, [`StringCalculator::add`], and
//! two thin adapters:
//! 1. A command-line program (`string-calculator`) printing the sum
//! 2. An API Lambda (`string-calculator-api`) serving `POST /add` and an HTML
//!    form on `GET /`
//!
//! # Example
//!
//! ```
//! use string_calculator::{StringCalculator, ValidationError};
//!
//! let calc = StringCalculator::new();
//! assert_eq!(calc.add(None), Ok(0));
//! assert_eq!(calc.add(Some("1,2,100,101")), Ok(103));
//! assert_eq!(calc.add(Some("1,-2,3")), Err(ValidationError::Negative));
//! ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod form_parser;
pub mod views;

pub use crate::core::calculator::{StringCalculator, add};
pub use crate::core::config::{AppConfig, LogFormat};
pub use crate::errors::{RequestError, ValidationError};

/// Configure structured logging for the API Lambda.
///
/// JSON output is suitable for `CloudWatch` Logs integration. Calling this
/// more than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// string_calculator::setup_logging(&string_calculator::AppConfig::default());
/// ```
pub fn setup_logging(config: &AppConfig) {
    install_subscriber(config, std::io::stdout);
}

/// Configure logging for the command-line program, writing to stderr so that
/// stdout only carries the result.
pub fn setup_cli_logging(config: &AppConfig) {
    install_subscriber(config, std::io::stderr);
}

fn install_subscriber<W>(config: &AppConfig, writer: W)
where
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let level = LevelFilter::from_level(config.log_level);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true);

    // A subscriber installed earlier (tests, embedding applications) wins.
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt_layer.json().with_filter(level))
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt_layer.with_filter(level))
            .try_init(),
    }
    .ok();
}
