//! Binary entry point for `siggi-bot`.
//!
//! This module provides the command-line interface for siggi-bot with options
//! for configuration file paths, the log file, and logging verbosity. It
//! initializes logging, loads the configuration, and starts the bot.

use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::Parser;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use siggi_bot::base::{
    config::{Config, TOKEN_ENV_VAR},
    types::{Res, Void},
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Siggi-bot – a Discord bot serving pictures of Albert Einstein.
///
/// The Discord token is read from `DISCORD_TOKEN` (a `.env` file in the
/// current directory is honored). Other settings can come from
/// `config.toml` or `SIGGI_BOT_*` environment variables.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the bot will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Append log records to this file in addition to the console.
    #[arg(long, default_value = "bot.log")]
    log_file: PathBuf,
    /// Export spans to an OTLP collector over HTTP.
    ///
    /// The endpoint is taken from the standard `OTEL_EXPORTER_OTLP_*`
    /// environment variables.
    #[arg(long)]
    otlp: bool,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the siggi-bot binary.
///
/// Sets up logging based on verbosity, loads configuration, and starts the bot.
#[tokio::main]
async fn main() -> Void {
    // A missing `.env` is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layers.

    let stdout = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    // A log file that cannot be opened is reported once the console layer is up.

    let (log_file, log_file_error) = match open_log_file(&args.log_file) {
        Ok(log_file) => (Some(log_file), None),
        Err(err) => (None, Some(err)),
    };

    let file = log_file.map(|log_file| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_level(true)
            .with_file(false)
            .with_target(false)
            .with_writer(log_file)
    });

    // Prepare the otlp layer.

    let otel = if args.otlp {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("siggi-bot");

        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stdout).with(file).init();

    if let Some(err) = log_file_error {
        error!("{}", err);
        return Err(err);
    }

    // Load the configuration; a missing token ends startup here.

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            if std::env::var(TOKEN_ENV_VAR).is_err() {
                error!("Please set your Discord bot token in the .env file");
            }
            return Err(err);
        }
    };

    match siggi_bot::start(config).await {
        Ok(()) => {
            info!("Bot stopped.");
            Ok(())
        }
        Err(err) => {
            error!("Error starting bot: {}", err);
            Err(err)
        }
    }
}

/// Opens the append-only log file.
fn open_log_file(path: &Path) -> Res<Arc<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file `{}`: {}", path.display(), e))?;

    Ok(Arc::new(file))
}
