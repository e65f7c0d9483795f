//! Timed suspension between report cycles.

use std::time::Duration;

/// Suspends the calling flow between cycles.
///
/// `pause` must not return before `interval` has elapsed; it may return
/// later under scheduling pressure.
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

/// Pacer backed by `std::thread::sleep`.
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}
