use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use reflux::config::Config;

#[derive(Parser)]
#[command(
    name = "reflux",
    about = "Login-gate and counter demo for the reflux state container"
)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file. Overrides the config value. Logging is off
    /// by default so the TUI owns the terminal.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let log_file = cli.log_file.or_else(|| config.demo.log_file.clone());
    init_tracing(log_file.as_deref());

    reflux::ui::runtime::run(&config)
}

/// Initialize tracing with file output, if a log path is configured.
fn init_tracing(path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let Ok(file) = std::fs::File::create(path) else {
        eprintln!("Warning: failed to create log file: {}", path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
