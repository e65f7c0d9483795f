//! CLI for randbeacon — paced hardware-randomness reports as hex lines.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::Parser;

use randbeacon_core::{Beacon, DEFAULT_INTERVAL_MS, OsSource, REPORT_BYTES, ThreadPacer};

#[derive(Parser)]
#[command(name = "randbeacon")]
#[command(about = "randbeacon — fetch a block of randomness, report it as hex, repeat")]
#[command(version = randbeacon_core::VERSION)]
struct Cli {
    /// Bytes of randomness per report (max 256)
    #[arg(long, default_value_t = REPORT_BYTES)]
    bytes: usize,

    /// Pause between reports in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Number of reports to emit (0 = run until Ctrl+C)
    #[arg(long, default_value_t = 0)]
    cycles: u64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Ctrl+C flips the stop flag; the loop finishes its current cycle and
    // returns cleanly.
    let stop = Arc::new(AtomicBool::new(false));
    let s = stop.clone();
    ctrlc::set_handler(move || {
        s.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    let mut beacon = Beacon::with_config(
        OsSource,
        ThreadPacer,
        cli.bytes,
        Duration::from_millis(cli.interval_ms),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match beacon.run(&mut out, cli.cycles, &stop) {
        Ok(cycles) => log::info!("stopped after {cycles} reports"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
