//! Abstract randomness source trait and the OS-backed implementation.

use crate::error::BeaconError;

/// A synchronous producer of random bytes.
///
/// `fill` blocks until every byte of `dest` has been written, or fails with
/// [`BeaconError::SourceUnavailable`]. No retry semantics are defined here;
/// a failure is fatal to the cycle that requested it.
pub trait RandomnessSource {
    /// Fill `dest` completely with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), BeaconError>;
}

/// Randomness from the OS CSPRNG via the `getrandom` crate.
///
/// Works cross-platform without manual file I/O. A failure here indicates a
/// platform-level problem and is propagated rather than retried.
pub struct OsSource;

impl RandomnessSource for OsSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), BeaconError> {
        getrandom::fill(dest)?;
        Ok(())
    }
}
