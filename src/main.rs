use clap::Parser;
use serimon::core::config;
use serimon::{device, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "serimon", about = "Live status monitor for a serial-connected device")]
struct Args {
    /// Path to the device node (defaults to a platform-typical serial port)
    device: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("serimon.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = config::resolve(args.device.as_deref());
    log::info!("serimon starting up on {}", config.device_path);

    // Setup failures are fatal and surface before any terminal state exists.
    let port = device::open(&config)?;

    tui::run(config, port)?;
    Ok(())
}
