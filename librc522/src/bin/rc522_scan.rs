// rc522-rs/librc522/src/bin/rc522_scan.rs
//! Scan loop for an RC522 board on a Raspberry Pi: bring the chip up, then
//! log every debounced card scan until Ctrl+C.

use std::error::Error;

use clap::Parser;
use librc522::prelude::*;
use librc522::transport::RppalTransport;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// BCM number of the GPIO wired to the reader's RST pin
    #[arg(long = "reset", short = 'r', default_value_t = 25)]
    reset_pin: u8,
    /// SPI clock in Hz (at most 1 MHz)
    #[arg(long = "clock-hz", default_value_t = librc522::constants::DEFAULT_CLOCK_HZ)]
    clock_hz: u32,
    /// Label passed to the reporter with every scan
    #[arg(
        long = "device-label",
        env = "RC522_DEVICE_LABEL",
        default_value = librc522::constants::DEFAULT_DEVICE_LABEL
    )]
    device_label: String,
    /// Whole bring-up attempts before giving up
    #[arg(long = "init-attempts", default_value_t = 1)]
    init_attempts: usize,
    #[arg(long = "dedup-ms", default_value_t = librc522::constants::DEDUP_WINDOW_MS)]
    dedup_ms: u64,
    #[arg(long = "poll-ms", default_value_t = librc522::constants::POLL_INTERVAL_MS)]
    poll_ms: u64,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = ReaderConfig {
        bus: BusConfig {
            clock_hz: cli.clock_hz,
        },
        init_attempts: cli.init_attempts,
        ..ReaderConfig::default()
    };
    // Checked before spidev is opened with the requested clock
    config.validate()?;

    let transport = RppalTransport::with_reset_pin(cli.reset_pin, &config.bus)?;
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(transport))
        .with_config(config)
        .build_uninitialized()?;

    let mut reader = match reader.initialize() {
        Ok(r) => r,
        Err(e) => {
            log::error!("bring-up failed: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "Reader version: {} ({})",
        reader.version(),
        reader.version().describe()
    );

    let token = CancellationToken::new();
    let token_clone = token.clone();
    ctrlc::set_handler(move || {
        eprintln!("Ctrl+C received, stopping...");
        token_clone.cancel();
    })?;

    let mut monitor = PresenceMonitor::new(MonitorConfig {
        poll_interval_ms: cli.poll_ms,
        dedup_window_ms: cli.dedup_ms,
        device_label: cli.device_label,
    });
    monitor.run(&mut reader, &mut LogReporter, &token);

    reader.shutdown()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
