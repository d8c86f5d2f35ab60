//! End-to-end tests of the acquisition pipeline through the public API,
//! driving the monitor with a scripted in-memory transport.

use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

use approx::assert_relative_eq;
use wt901::checksum::compute_checksum;
use wt901::{SensorMonitor, StreamParser, Transport};

fn valid_frame(kind: u8, payload: [u8; 8]) -> Vec<u8> {
    let mut bytes = vec![0x55, kind];
    bytes.extend_from_slice(&payload);
    bytes.push(compute_checksum(&bytes));
    bytes
}

/// Transport that replays pre-scripted chunks, then reads as idle.
struct ScriptedTransport {
    chunks: VecDeque<Vec<u8>>,
}

impl ScriptedTransport {
    fn new(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            chunks: chunks.into_iter().collect(),
        }
    }
}

impl Transport for ScriptedTransport {
    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.chunks.pop_front() {
            Some(chunk) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            None => {
                // behave like a bounded-timeout read on a quiet line
                thread::sleep(Duration::from_millis(5));
                Ok(0)
            }
        }
    }
}

#[test]
fn monitor_decodes_scripted_stream() {
    // noise, then a clock frame and a GPS motion frame split mid-frame
    let clock = valid_frame(0x50, [24, 3, 1, 12, 34, 56, 0x07, 0x00]);
    let motion = valid_frame(0x58, [0xDC, 0x05, 0x84, 0x03, 0xB0, 0x04, 0x00, 0x00]);

    let mut first = vec![0xDE, 0xAD];
    first.extend_from_slice(&clock);
    first.extend_from_slice(&motion[..5]);

    let transport = ScriptedTransport::new(vec![first, motion[5..].to_vec()]);
    let mut monitor = SensorMonitor::new(Box::new(transport));
    monitor.start().unwrap();

    // a few poll intervals are plenty for two small chunks
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        let state = monitor.snapshot();
        if state.gps_motion.height != 0.0 || Instant::now() > deadline {
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }

    let state = monitor.snapshot();
    let stats = monitor.stats();
    monitor.stop();

    assert_eq!(state.clock.year, 2024);
    assert_eq!(state.clock.minute, 34);
    assert_relative_eq!(state.gps_motion.height, 150.0);
    assert_relative_eq!(state.gps_motion.heading, 90.0);
    assert_relative_eq!(state.gps_motion.ground_speed, 1.2);
    assert_eq!(stats.bytes_discarded, 2);
    assert_eq!(stats.updates_applied, 2);
}

#[test]
fn monitor_stop_joins_cleanly() {
    let transport = ScriptedTransport::new(Vec::new());
    let mut monitor = SensorMonitor::new(Box::new(transport));
    monitor.start().unwrap();

    thread::sleep(Duration::from_millis(30));
    monitor.stop();

    // stopping twice is harmless
    monitor.stop();
}

#[test]
fn monitor_start_twice_is_an_error() {
    let transport = ScriptedTransport::new(Vec::new());
    let mut monitor = SensorMonitor::new(Box::new(transport));
    monitor.start().unwrap();
    assert!(monitor.start().is_err());
    monitor.stop();
}

#[test]
fn corrupted_frame_does_not_poison_the_stream() {
    let mut bad = valid_frame(0x51, [0x00, 0x40, 0, 0, 0, 0, 0xC4, 0x09]);
    bad[3] ^= 0x5A;
    let good = valid_frame(0x51, [0x00, 0x20, 0, 0, 0, 0, 0xC4, 0x09]);

    let mut parser = StreamParser::new();
    parser.extend(&bad);
    parser.extend(&good);
    let applied = parser.process();

    assert_eq!(applied, 1);
    assert_relative_eq!(parser.state().acceleration.x, 4.0);
    assert_eq!(parser.stats().checksum_failures, 1);
}

#[test]
fn split_feed_equivalence_over_a_mixed_stream() {
    let mut stream = Vec::new();
    stream.extend_from_slice(&[0x01, 0x55, 0x02]); // noise, incl. a decoy sync byte
    stream.extend_from_slice(&valid_frame(0x56, [0xCD, 0x8B, 0x01, 0x00, 0xD2, 0x04, 0, 0]));
    stream.extend_from_slice(&valid_frame(0x57, [0x15, 0xCD, 0x5B, 0x07, 0, 0, 0, 0]));

    // reference: single feed
    let mut reference = StreamParser::new();
    reference.extend(&stream);
    reference.process();

    // byte-at-a-time feed, processing after every byte
    let mut trickled = StreamParser::new();
    for &byte in &stream {
        trickled.extend(&[byte]);
        trickled.process();
    }

    assert_eq!(
        reference.state().barometric.pressure,
        trickled.state().barometric.pressure
    );
    assert_relative_eq!(
        reference.state().barometric.altitude,
        trickled.state().barometric.altitude
    );
    assert_eq!(
        reference.state().gps_position.longitude,
        trickled.state().gps_position.longitude
    );
    assert_eq!(
        reference.stats().updates_applied,
        trickled.stats().updates_applied
    );
}
