//! Byte transport abstraction and the serial-port implementation.
//!
//! The core pipeline never talks to hardware directly; it only consumes
//! the bytes a [`Transport`] produces. The serial implementation wraps the
//! `serialport` crate with a bounded read timeout so the ingestion thread
//! can re-check its stop flag promptly.

use std::io::{self, Read};
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Bounded read timeout for transport reads.
pub const READ_TIMEOUT: Duration = Duration::from_millis(50);

/// Factory-default baud rate of WT901 modules.
pub const DEFAULT_BAUD: u32 = 9600;

/// Errors surfaced by the telemetry link.
///
/// Only startup failures propagate; frame-local problems (bad checksum,
/// unknown kind) are recovered inside the parser and reported through
/// [`crate::parser::LinkStats`].
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Failed to open the serial port. Fatal at startup; no retry.
    #[error("failed to open serial port {port}: {source}")]
    Open {
        /// Port path that was requested
        port: String,
        /// Underlying serial error
        #[source]
        source: serialport::Error,
    },

    /// Low-level I/O failure on an open transport.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The monitor's background threads were already started.
    #[error("monitor already started")]
    AlreadyStarted,
}

/// Result type for telemetry link operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Source of raw telemetry bytes.
///
/// `recv` must not block past a bounded timeout; an expired timeout with
/// no data reads as `Ok(0)` so the caller can re-check its stop flag.
pub trait Transport: Send {
    /// Read whatever bytes are available into `buf`, returning the count.
    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Serial-port transport for a physically attached module.
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialTransport {
    /// Open `port` at `baud` with the bounded read timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Open`] if the port cannot be opened.
    pub fn open(port: &str, baud: u32) -> TelemetryResult<Self> {
        let handle = serialport::new(port, baud)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(|source| TelemetryError::Open {
                port: port.to_string(),
                source,
            })?;

        debug!(port, baud, "serial port open");
        Ok(Self { port: handle })
    }
}

impl Transport for SerialTransport {
    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.port.read(buf) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(0),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(0),
            Err(e) => Err(e),
        }
    }
}
