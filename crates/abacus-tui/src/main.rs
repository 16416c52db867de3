//! Abacus terminal calculator entry point.

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use abacus_app::{AppConfig, EngineConfig, Runtime};
use abacus_core::{DEFAULT_MAX_DIGITS, DEFAULT_RESULT_DECIMALS};
use abacus_tui::TerminalDriver;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Abacus terminal calculator
#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(about = "Four-function calculator with an on-screen keypad")]
#[command(version)]
struct Args {
    /// Digits accepted per operand
    #[arg(long, default_value_t = DEFAULT_MAX_DIGITS)]
    max_digits: usize,

    /// Decimal places shown on the result display
    #[arg(long, default_value_t = DEFAULT_RESULT_DECIMALS)]
    decimals: usize,

    /// How long a pressed key stays highlighted, in milliseconds
    #[arg(long, default_value_t = 100)]
    pulse_ms: u64,

    /// Idle tick interval, in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file. Logging is off when not set, since the
    /// terminal is owned by the UI.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        let writer = Mutex::new(File::create(path)?);

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .with(filter)
            .init();
    }

    let config = AppConfig {
        engine: EngineConfig { max_digits: args.max_digits, result_decimals: args.decimals },
        pulse: Duration::from_millis(args.pulse_ms),
    };

    tracing::info!("Abacus starting with {:?}", config);

    let driver = TerminalDriver::new(Duration::from_millis(args.tick_ms))?;
    Runtime::new(driver, config).run().await?;

    Ok(())
}
