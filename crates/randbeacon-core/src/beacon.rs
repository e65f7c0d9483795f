//! The reporting loop: fill, render, emit, pace.
//!
//! [`Beacon::run_once`] is one full cycle and is independently testable with
//! stub sources and pacers. [`Beacon::run`] is the unbounded driver around
//! it, stoppable via a cycle bound or an external flag.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::BeaconError;
use crate::pacer::Pacer;
use crate::report::{REPORT_CAPACITY, render_report};
use crate::source::RandomnessSource;
use crate::{DEFAULT_INTERVAL_MS, REPORT_BYTES};

/// Drives the acquire → encode → report → pace cycle.
///
/// The randomness buffer is owned by the beacon, allocated once, and
/// overwritten in place every cycle. Nothing carries over between cycles
/// except the cycle counter.
pub struct Beacon<S, P> {
    source: S,
    pacer: P,
    request_len: usize,
    interval: Duration,
    buf: [u8; REPORT_BYTES],
    cycles: u64,
}

impl<S: RandomnessSource, P: Pacer> Beacon<S, P> {
    /// Beacon with the default configuration: full 256-byte reports every
    /// 500 ms.
    pub fn new(source: S, pacer: P) -> Self {
        Self::with_config(
            source,
            pacer,
            REPORT_BYTES,
            Duration::from_millis(DEFAULT_INTERVAL_MS),
        )
    }

    /// Beacon with an explicit request length and pace interval.
    ///
    /// `request_len` is not validated here; a length larger than the buffer
    /// is rejected by [`run_once`](Self::run_once) before the source is
    /// consulted.
    pub fn with_config(source: S, pacer: P, request_len: usize, interval: Duration) -> Self {
        Self {
            source,
            pacer,
            request_len,
            interval,
            buf: [0u8; REPORT_BYTES],
            cycles: 0,
        }
    }

    /// Number of completed cycles so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run one cycle: fill the buffer, render the report line, write and
    /// flush it to `sink`, then pace.
    ///
    /// A request larger than the buffer fails with
    /// [`BeaconError::CapacityExceeded`] before any external call is made.
    /// Source and sink failures abort the cycle; the pacer is not invoked
    /// after a failed cycle.
    pub fn run_once<W: Write>(&mut self, sink: &mut W) -> Result<(), BeaconError> {
        if self.request_len > self.buf.len() {
            return Err(BeaconError::CapacityExceeded {
                requested: self.request_len,
                capacity: self.buf.len(),
            });
        }

        let block = &mut self.buf[..self.request_len];
        self.source.fill(block)?;

        let line = render_report(block, REPORT_CAPACITY)?;
        sink.write_all(line.as_bytes())?;
        sink.flush()?;

        self.cycles += 1;
        log::debug!("cycle {}: reported {} bytes", self.cycles, self.request_len);

        self.pacer.pause(self.interval);
        Ok(())
    }

    /// Repeat [`run_once`](Self::run_once) until `max_cycles` is reached
    /// (0 = unbounded) or `stop` is set. Returns the number of cycles
    /// completed by this call.
    ///
    /// The stop flag is checked between cycles only; the core defines no
    /// mid-cycle cancellation. The first error aborts the loop and
    /// propagates.
    pub fn run<W: Write>(
        &mut self,
        sink: &mut W,
        max_cycles: u64,
        stop: &AtomicBool,
    ) -> Result<u64, BeaconError> {
        let mut completed = 0u64;
        while !stop.load(Ordering::SeqCst) {
            if max_cycles > 0 && completed >= max_cycles {
                break;
            }
            self.run_once(sink)?;
            completed += 1;
        }
        Ok(completed)
    }
}
