//! Background acquisition: ingestion and parsing threads over a shared
//! parser.
//!
//! Two threads run concurrently with no synchronous handoff: the ingestion
//! thread blocks on the transport (bounded timeout) and appends whatever
//! arrives; the parsing thread free-runs on a short poll interval and
//! drains complete frames. Both check a shared stop flag each iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::parser::{LinkStats, StreamParser};
use crate::state::SensorState;
use crate::transport::{SerialTransport, TelemetryError, TelemetryResult, Transport};

/// Parsing-thread poll interval.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Ingestion read chunk size, bytes.
const READ_CHUNK: usize = 256;

/// Owns the background acquisition threads and the shared decoded state.
///
/// Consumers poll [`snapshot`](Self::snapshot) at will; reads are
/// lock-protected copies, never blocking waits for fresh data.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use wt901::{SensorMonitor, DEFAULT_BAUD};
///
/// let mut monitor = SensorMonitor::open_serial("/dev/ttyUSB0", DEFAULT_BAUD)?;
/// monitor.start()?;
///
/// for _ in 0..10 {
///     std::thread::sleep(Duration::from_secs(1));
///     let state = monitor.snapshot();
///     println!("attitude: {:?}  temp: {:.2} C", state.orientation, state.temperature);
/// }
/// monitor.stop();
/// # Ok::<(), wt901::TelemetryError>(())
/// ```
pub struct SensorMonitor {
    parser: Arc<Mutex<StreamParser>>,
    running: Arc<AtomicBool>,
    transport: Option<Box<dyn Transport>>,
    workers: Vec<JoinHandle<()>>,
}

impl SensorMonitor {
    /// Create a monitor over an arbitrary transport. Threads are not
    /// started until [`start`](Self::start).
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            parser: Arc::new(Mutex::new(StreamParser::new())),
            running: Arc::new(AtomicBool::new(false)),
            transport: Some(transport),
            workers: Vec::new(),
        }
    }

    /// Open a serial port and wrap it in a monitor.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Open`] if the port cannot be opened;
    /// there is no automatic retry.
    pub fn open_serial(port: &str, baud: u32) -> TelemetryResult<Self> {
        Ok(Self::new(Box::new(SerialTransport::open(port, baud)?)))
    }

    /// Spawn the ingestion and parsing threads.
    ///
    /// A monitor runs at most once; calling `start` a second time returns
    /// [`TelemetryError::AlreadyStarted`].
    pub fn start(&mut self) -> TelemetryResult<()> {
        let Some(mut transport) = self.transport.take() else {
            return Err(TelemetryError::AlreadyStarted);
        };
        self.running.store(true, Ordering::SeqCst);

        let running = self.running.clone();
        let parser = self.parser.clone();
        let ingest = thread::spawn(move || {
            let mut chunk = [0u8; READ_CHUNK];
            while running.load(Ordering::SeqCst) {
                match transport.recv(&mut chunk) {
                    // timeout with no data; re-check the stop flag
                    Ok(0) => {}
                    Ok(n) => parser.lock().unwrap().extend(&chunk[..n]),
                    Err(e) => {
                        warn!("transport read failed, ingestion stopping: {e}");
                        break;
                    }
                }
            }
        });

        let running = self.running.clone();
        let parser = self.parser.clone();
        let parse = thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                thread::sleep(POLL_INTERVAL);
                parser.lock().unwrap().process();
            }
        });

        self.workers.push(ingest);
        self.workers.push(parse);
        debug!("sensor monitor started");
        Ok(())
    }

    /// Signal both threads to exit after their current iteration and wait
    /// for them.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }

    /// Consistent copy of the latest decoded state.
    pub fn snapshot(&self) -> SensorState {
        self.parser.lock().unwrap().state().clone()
    }

    /// Link-quality counters.
    pub fn stats(&self) -> LinkStats {
        self.parser.lock().unwrap().stats()
    }
}

impl Drop for SensorMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
