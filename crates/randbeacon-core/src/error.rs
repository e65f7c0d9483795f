//! Error type for the beacon pipeline.

use std::fmt;
use std::io;

/// Errors that can occur while filling, rendering, or emitting a report.
#[derive(Debug)]
pub enum BeaconError {
    /// A fill request or rendered line is larger than its destination can
    /// hold. Detected before any out-of-bounds write or external call.
    CapacityExceeded {
        /// Bytes the operation would have needed.
        requested: usize,
        /// Bytes the destination can hold.
        capacity: usize,
    },
    /// The randomness source could not supply the requested bytes.
    SourceUnavailable(String),
    /// The output sink rejected the write or flush.
    Io(io::Error),
}

impl fmt::Display for BeaconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "capacity exceeded: {requested} bytes requested, destination holds {capacity}"
            ),
            Self::SourceUnavailable(e) => write!(f, "randomness source unavailable: {e}"),
            Self::Io(e) => write!(f, "output channel error: {e}"),
        }
    }
}

impl std::error::Error for BeaconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CapacityExceeded { .. } | Self::SourceUnavailable(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for BeaconError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<getrandom::Error> for BeaconError {
    fn from(err: getrandom::Error) -> Self {
        Self::SourceUnavailable(err.to_string())
    }
}
