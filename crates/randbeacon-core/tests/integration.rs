//! Integration tests for randbeacon-core.
//!
//! These exercise the full pipeline: OS randomness source → fixed buffer →
//! hex rendering → sink, plus the round-trip law of the renderer.

use std::sync::atomic::AtomicBool;
use std::time::Duration;

use rand::RngCore;

use randbeacon_core::{
    Beacon, BeaconError, OsSource, Pacer, REPORT_BYTES, REPORT_CAPACITY, REPORT_PREFIX,
    RandomnessSource, render_report, rendered_len,
};

/// Pacer that does not sleep, for tests that only care about output.
struct NullPacer;

impl Pacer for NullPacer {
    fn pause(&mut self, _interval: Duration) {}
}

fn decode_hex(hex: &str) -> Vec<u8> {
    assert_eq!(hex.len() % 2, 0, "hex string must have even length");
    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            let s = std::str::from_utf8(pair).expect("ascii hex");
            u8::from_str_radix(s, 16).expect("valid hex digit pair")
        })
        .collect()
}

fn hex_portion(line: &str) -> &str {
    line.strip_prefix(REPORT_PREFIX)
        .and_then(|rest| rest.strip_suffix("\n\n"))
        .expect("well-formed report line")
}

#[test]
fn round_trip_law_holds_for_random_full_buffers() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let mut bytes = [0u8; REPORT_BYTES];
        rng.fill_bytes(&mut bytes);

        let line = render_report(&bytes, REPORT_CAPACITY).unwrap();
        let hex = hex_portion(&line);
        assert_eq!(hex.len(), 2 * REPORT_BYTES);
        assert_eq!(decode_hex(hex), bytes.to_vec());
    }
}

#[test]
fn os_source_cycle_emits_a_well_formed_line() {
    let mut beacon = Beacon::with_config(OsSource, NullPacer, REPORT_BYTES, Duration::ZERO);
    let mut out = Vec::new();
    beacon.run_once(&mut out).unwrap();

    let line = String::from_utf8(out).unwrap();
    assert_eq!(line.len(), rendered_len(REPORT_BYTES));
    let hex = hex_portion(&line);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn consecutive_os_cycles_emit_distinct_blocks() {
    // 256 bytes of CSPRNG output repeating across two cycles is effectively
    // impossible, so equality here means the buffer was not refilled.
    let mut beacon = Beacon::with_config(OsSource, NullPacer, REPORT_BYTES, Duration::ZERO);
    let mut first = Vec::new();
    let mut second = Vec::new();
    beacon.run_once(&mut first).unwrap();
    beacon.run_once(&mut second).unwrap();
    assert_ne!(first, second);
}

#[test]
fn bounded_run_against_the_os_source_completes() {
    let mut beacon = Beacon::with_config(OsSource, NullPacer, 32, Duration::ZERO);
    let stop = AtomicBool::new(false);
    let mut out = Vec::new();
    let completed = beacon.run(&mut out, 5, &stop).unwrap();
    assert_eq!(completed, 5);
    assert_eq!(out.len(), 5 * rendered_len(32));
}

#[test]
fn oversized_request_fails_against_the_real_source_too() {
    let mut beacon =
        Beacon::with_config(OsSource, NullPacer, REPORT_BYTES + 1, Duration::ZERO);
    let mut out = Vec::new();
    let err = beacon.run_once(&mut out).unwrap_err();
    assert!(matches!(err, BeaconError::CapacityExceeded { .. }));
}

#[test]
fn trait_object_sources_work() {
    // The source seam accepts any RandomnessSource implementation.
    struct Wrapped(Box<dyn FnMut(&mut [u8])>);
    impl RandomnessSource for Wrapped {
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), BeaconError> {
            (self.0)(dest);
            Ok(())
        }
    }

    let source = Wrapped(Box::new(|dest| dest.fill(0x7f)));
    let mut beacon = Beacon::with_config(source, NullPacer, 3, Duration::ZERO);
    let mut out = Vec::new();
    beacon.run_once(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Randomness: 7f7f7f\n\n");
}
