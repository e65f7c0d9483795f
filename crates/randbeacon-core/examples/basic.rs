//! Basic beacon example.
//!
//! Emits three full 256-byte hex report lines to stdout, paced 500 ms apart.
//!
//! Run: `cargo run --example basic`

use std::sync::atomic::AtomicBool;

use randbeacon_core::{Beacon, OsSource, ThreadPacer};

fn main() {
    let mut beacon = Beacon::new(OsSource, ThreadPacer);

    let stop = AtomicBool::new(false);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match beacon.run(&mut out, 3, &stop) {
        Ok(cycles) => eprintln!("emitted {cycles} reports"),
        Err(e) => eprintln!("beacon failed: {e}"),
    }
}
