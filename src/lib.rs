//! WT901 serial telemetry decoding.
//!
//! This crate decodes the continuous binary stream emitted by WitMotion
//! WT901-class IMU/GPS modules over a serial link into a continuously
//! updated [`SensorState`]: acceleration, angular velocity, attitude,
//! magnetic field, temperature, barometric pressure/altitude, GPS fix and
//! motion, and the on-chip clock.
//!
//! The stream has no delimiters beyond a two-byte sync pattern; frames are
//! a fixed 11 bytes with a trailing mod-256 checksum. The pipeline
//! resynchronizes on noise, validates each frame independently, decodes
//! the ten payload layouts, and throttles the four high-rate motion
//! channels so bursty output does not overwhelm consumers.
//!
//! # Layers
//!
//! - [`frame`] / [`checksum`]: sync scan, frame extraction, validation
//! - [`messages`]: the closed frame-kind set and typed payload decoding
//! - [`rate_gate`] / [`state`]: update throttling and the decoded snapshot
//! - [`parser`]: the incremental pipeline over a receive buffer
//! - [`transport`] / [`link`]: serial I/O and the background threads
//!
//! Most applications only need [`SensorMonitor`]:
//!
//! ```no_run
//! use wt901::{SensorMonitor, DEFAULT_BAUD};
//!
//! let mut monitor = SensorMonitor::open_serial("/dev/ttyUSB0", DEFAULT_BAUD)?;
//! monitor.start()?;
//! let state = monitor.snapshot();
//! println!("acceleration: {:?} g", state.acceleration);
//! # Ok::<(), wt901::TelemetryError>(())
//! ```

pub mod checksum;
pub mod frame;
pub mod link;
pub mod messages;
pub mod parser;
pub mod rate_gate;
pub mod state;
pub mod transport;

pub use frame::{extract, find_sync, Extraction, Frame, FRAME_LEN, SYNC_BYTE};
pub use link::{SensorMonitor, POLL_INTERVAL};
pub use messages::{
    Acceleration, AngularVelocity, Barometric, DeviceClock, FrameKind, GpsMotion, GpsPosition,
    MagneticField, Orientation, PortLevels, TelemetryMessage,
};
pub use parser::{LinkStats, StreamParser, BUFFER_WARN_THRESHOLD};
pub use rate_gate::{RateGate, MIN_UPDATE_INTERVAL};
pub use state::SensorState;
pub use transport::{
    SerialTransport, TelemetryError, TelemetryResult, Transport, DEFAULT_BAUD, READ_TIMEOUT,
};
