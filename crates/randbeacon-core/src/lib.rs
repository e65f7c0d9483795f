//! # randbeacon-core
//!
//! A paced hardware-randomness beacon: fill a fixed 256-byte buffer from a
//! randomness source, render it as one hex report line, emit it, pause, and
//! repeat.
//!
//! ## Quick Start
//!
//! ```no_run
//! use randbeacon_core::{Beacon, OsSource, ThreadPacer};
//! use std::sync::atomic::AtomicBool;
//!
//! let mut beacon = Beacon::new(OsSource, ThreadPacer);
//!
//! // Emit one report line to stdout.
//! let stop = AtomicBool::new(false);
//! beacon
//!     .run(&mut std::io::stdout(), 1, &stop)
//!     .expect("beacon cycle failed");
//! ```
//!
//! ## Architecture
//!
//! Source → Buffer → Hex Renderer → Sink → Pacer
//!
//! The per-cycle logic ([`Beacon::run_once`]) is separate from the unbounded
//! driver ([`Beacon::run`]) so it can be tested with stub sources and pacers,
//! without real timers. The driver accepts a cycle bound and a stop flag; the
//! default configuration (unbounded, 256 bytes, 500 ms pace) reproduces the
//! classic RNG test-app loop.
//!
//! Rendering is bounds-checked: a report that would not fit its declared
//! output capacity fails with [`BeaconError::CapacityExceeded`] instead of
//! being truncated.

pub mod beacon;
pub mod error;
pub mod pacer;
pub mod report;
pub mod source;

pub use beacon::Beacon;
pub use error::BeaconError;
pub use pacer::{Pacer, ThreadPacer};
pub use report::{REPORT_CAPACITY, REPORT_PREFIX, render_report, rendered_len};
pub use source::{OsSource, RandomnessSource};

/// Size of the randomness buffer in bytes: every full report covers this many.
pub const REPORT_BYTES: usize = 256;

/// Default pause between report cycles, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
