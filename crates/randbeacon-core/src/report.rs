//! Hex rendering of a randomness buffer into the fixed report line.
//!
//! A report line is the literal prefix `"Randomness: "`, two lowercase hex
//! digits per byte in order (zero-padded, no separators), then a blank line.
//! Rendering is pure and bounds-checked: the rendered length is computed up
//! front and checked against the declared capacity, so the line is either
//! complete or refused — never truncated mid-write.

use std::fmt::Write as _;

use crate::error::BeaconError;

/// Literal prefix of every report line.
pub const REPORT_PREFIX: &str = "Randomness: ";

/// Default output capacity in bytes. Holds a full 256-byte report
/// (12 prefix + 512 hex + 2 terminators = 526) with headroom.
pub const REPORT_CAPACITY: usize = 600;

/// Exact length in bytes of the report line for `n_bytes` input bytes.
pub fn rendered_len(n_bytes: usize) -> usize {
    REPORT_PREFIX.len() + 2 * n_bytes + 2
}

/// Render `bytes` as a report line that must fit in `capacity` bytes.
///
/// Returns [`BeaconError::CapacityExceeded`] before writing anything if the
/// rendered line would be longer than `capacity`. The hex encoding is
/// injective over fixed-length inputs and round-trips via standard hex
/// decoding.
pub fn render_report(bytes: &[u8], capacity: usize) -> Result<String, BeaconError> {
    let needed = rendered_len(bytes.len());
    if needed > capacity {
        return Err(BeaconError::CapacityExceeded {
            requested: needed,
            capacity,
        });
    }

    let mut line = String::with_capacity(needed);
    line.push_str(REPORT_PREFIX);
    for b in bytes {
        // write! to a String cannot fail.
        let _ = write!(line, "{b:02x}");
    }
    line.push_str("\n\n");
    Ok(line)
}
