//! Color Changer
//!
//! Live background color picker: RGB sliders, solid presets and gradient presets.
//! Runs as a window, optionally driven over a stdin/stdout JSON control channel,
//! or headless with the control channel only.

mod app;
mod config;
mod engine;
mod ipc;
mod render;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use app::PickerApp;
use config::AppConfig;
use engine::ColorEngine;

/// Color Changer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use stdin/stdout as a control channel next to the window
    #[arg(long)]
    stdio: bool,

    /// Run the stdin/stdout control channel without opening a window
    #[arg(long, conflicts_with = "stdio")]
    headless: bool,

    /// Seed for the randomize action
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for the control channel
    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Color Changer starting...");

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
        info!("Loading config from: {:?}", config_path);
        match AppConfig::load_from_file(config_path) {
            Ok(config) => {
                info!("Config loaded successfully:");
                info!("  - presets: {}", config.catalog.presets.len());
                info!("  - gradients: {}", config.catalog.gradients.len());
                config
            }
            Err(e) => {
                tracing::error!("Failed to load config, using defaults: {:#}", e);
                AppConfig::default()
            }
        }
    } else {
        AppConfig::default()
    };

    let catalog = config.catalog.clone();
    let mut engine = match args.seed.or(config.seed) {
        Some(seed) => {
            info!("Randomize seed: {}", seed);
            ColorEngine::with_seed(catalog, seed)
        }
        None => ColorEngine::new(catalog),
    };

    if args.headless {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return ipc::run_headless(&mut engine, stdin.lock(), stdout.lock());
    }

    let ipc = if args.stdio {
        info!("IPC server started");
        Some(ipc::start_ipc_server())
    } else {
        None
    };

    // Create native options for eframe
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([420.0, 480.0])
            .with_title(config.window.title.as_str()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        &config.window.title,
        native_options,
        Box::new(move |cc| Ok(Box::new(PickerApp::new(cc, engine, ipc)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
