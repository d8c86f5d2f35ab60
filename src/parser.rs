//! Streaming frame parser: buffer, extract, validate, decode, gate, apply.

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::checksum::Checksummed;
use crate::frame;
use crate::messages::TelemetryMessage;
use crate::rate_gate::RateGate;
use crate::state::SensorState;

/// Receive-buffer backlog that triggers the slow-consumer warning.
pub const BUFFER_WARN_THRESHOLD: usize = 4096;

/// Counters describing link quality and parser behavior.
///
/// Frame-local failures (bad checksum, unknown kind) never surface as
/// errors; they only show up here.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkStats {
    /// Total bytes appended by the transport
    pub bytes_received: u64,
    /// Bytes discarded while hunting for a sync pattern
    pub bytes_discarded: u64,
    /// Frames dropped on checksum mismatch
    pub checksum_failures: u64,
    /// Checksum-valid frames with an unrecognized kind byte
    pub unknown_frames: u64,
    /// Messages applied to the state
    pub updates_applied: u64,
    /// Messages suppressed by the rate gate
    pub updates_suppressed: u64,
    /// Largest backlog observed in the receive buffer, bytes
    pub buffer_high_watermark: usize,
}

/// Incremental parser over the raw receive stream.
///
/// Owns the receive buffer, the decoded [`SensorState`], and the rate
/// gate. Bytes go in via [`extend`](Self::extend); each
/// [`process`](Self::process) call drains every complete frame currently
/// buffered. The buffer is consumed strictly from the front; no frame is
/// ever re-read.
#[derive(Debug, Default)]
pub struct StreamParser {
    buffer: Vec<u8>,
    state: SensorState,
    gate: RateGate,
    stats: LinkStats,
    backlog_warned: bool,
}

impl StreamParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes received from the transport.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
        self.stats.bytes_received += bytes.len() as u64;

        if self.buffer.len() > self.stats.buffer_high_watermark {
            self.stats.buffer_high_watermark = self.buffer.len();
        }
        if self.buffer.len() > BUFFER_WARN_THRESHOLD && !self.backlog_warned {
            self.backlog_warned = true;
            warn!(
                backlog = self.buffer.len(),
                "receive backlog keeps growing; parsing is not keeping up"
            );
        }
    }

    /// Drain every complete frame currently buffered, applying updates
    /// with `now` as the rate-gate timestamp.
    ///
    /// Returns the number of messages applied to the state.
    pub fn process_at(&mut self, now: Instant) -> usize {
        let extraction = frame::extract(&self.buffer);
        if extraction.consumed == 0 {
            return 0;
        }

        if extraction.discarded > 0 {
            self.stats.bytes_discarded += extraction.discarded as u64;
            trace!(bytes = extraction.discarded, "discarded noise ahead of sync");
        }
        self.buffer.drain(..extraction.consumed);

        let mut applied = 0;
        for frame in &extraction.frames {
            if !frame.verify_checksum() {
                self.stats.checksum_failures += 1;
                debug!(kind = frame.kind, "dropping frame with bad checksum");
                continue;
            }

            let Some(message) = TelemetryMessage::decode(frame) else {
                self.stats.unknown_frames += 1;
                continue;
            };

            if !self.gate.accept(message.kind(), now) {
                self.stats.updates_suppressed += 1;
                continue;
            }

            self.state.apply(&message);
            self.stats.updates_applied += 1;
            applied += 1;
        }

        applied
    }

    /// Drain at the current instant.
    pub fn process(&mut self) -> usize {
        self.process_at(Instant::now())
    }

    /// The latest decoded state.
    pub fn state(&self) -> &SensorState {
        &self.state
    }

    /// Link-quality counters.
    pub fn stats(&self) -> LinkStats {
        self.stats
    }

    /// Bytes currently waiting in the receive buffer.
    pub fn backlog(&self) -> usize {
        self.buffer.len()
    }
}
