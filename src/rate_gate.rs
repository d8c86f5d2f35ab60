//! Minimum-interval filtering for the high-rate motion channels.
//!
//! The module streams acceleration, angular velocity, attitude, and
//! magnetometer frames far faster than consumers sample the decoded state;
//! updates on those four channels are throttled to one per interval. Every
//! other channel passes unconditionally.

use std::time::{Duration, Instant};

use crate::messages::FrameKind;

/// Minimum spacing between accepted updates on a throttled channel.
pub const MIN_UPDATE_INTERVAL: Duration = Duration::from_millis(100);

/// Per-channel minimum-interval filter.
///
/// Time is supplied by the caller, so the gate can be driven with a
/// synthetic clock in tests.
#[derive(Debug, Default)]
pub struct RateGate {
    last_accepted: [Option<Instant>; 4],
}

impl RateGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an update for `kind` observed at `now` should be applied.
    ///
    /// Acceptance records `now` as the channel's last update time; a
    /// rejected update leaves the gate unchanged.
    pub fn accept(&mut self, kind: FrameKind, now: Instant) -> bool {
        let Some(slot) = Self::slot(kind) else {
            return true;
        };

        if let Some(last) = self.last_accepted[slot] {
            if now.duration_since(last) < MIN_UPDATE_INTERVAL {
                return false;
            }
        }

        self.last_accepted[slot] = Some(now);
        true
    }

    fn slot(kind: FrameKind) -> Option<usize> {
        match kind {
            FrameKind::Acceleration => Some(0),
            FrameKind::AngularVelocity => Some(1),
            FrameKind::Orientation => Some(2),
            FrameKind::MagneticField => Some(3),
            _ => None,
        }
    }
}
