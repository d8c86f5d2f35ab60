//! Live telemetry watcher for a WT901 module on a serial port.
//!
//! Opens the port, starts the background monitor, and prints a snapshot of
//! the decoded state on a fixed interval. Link statistics are reported on
//! exit.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use wt901::{SensorMonitor, SensorState, DEFAULT_BAUD};

/// Print live telemetry from a WT901 module
#[derive(Parser, Debug)]
#[command(name = "wt_watch")]
#[command(about = "Print live telemetry from a WT901 module")]
#[command(version)]
struct Args {
    /// Serial port device path (e.g. /dev/ttyUSB0)
    #[arg(short, long)]
    port: String,

    /// Baud rate
    #[arg(short, long, default_value_t = DEFAULT_BAUD)]
    baud: u32,

    /// Seconds between printed snapshots
    #[arg(short, long, default_value = "1.0")]
    interval: f64,

    /// Number of snapshots to print before exiting (0 = run until killed)
    #[arg(short, long, default_value = "0")]
    count: u64,

    /// Emit snapshots as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

fn print_text(state: &SensorState) {
    println!(
        "{}  accel ({:+7.3} {:+7.3} {:+7.3}) g  gyro ({:+8.2} {:+8.2} {:+8.2}) deg/s",
        state.clock,
        state.acceleration.x,
        state.acceleration.y,
        state.acceleration.z,
        state.angular_velocity.x,
        state.angular_velocity.y,
        state.angular_velocity.z,
    );
    println!(
        "  attitude roll {:+8.3} pitch {:+8.3} yaw {:+8.3} deg  temp {:6.2} C  alt {:8.2} m",
        state.orientation.roll,
        state.orientation.pitch,
        state.orientation.yaw,
        state.temperature,
        state.barometric.altitude,
    );
    println!(
        "  gps lon {} lat {}  height {:.1} m  heading {:.1} deg  speed {:.3}",
        state.gps_position.longitude,
        state.gps_position.latitude,
        state.gps_motion.height,
        state.gps_motion.heading,
        state.gps_motion.ground_speed,
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut monitor = SensorMonitor::open_serial(&args.port, args.baud)?;
    monitor.start()?;

    let mut printed = 0u64;
    loop {
        thread::sleep(Duration::from_secs_f64(args.interval));

        let state = monitor.snapshot();
        if args.json {
            println!("{}", serde_json::to_string(&state)?);
        } else {
            print_text(&state);
        }

        printed += 1;
        if args.count > 0 && printed >= args.count {
            break;
        }
    }

    let stats = monitor.stats();
    monitor.stop();
    eprintln!(
        "{} updates applied, {} suppressed, {} checksum failures, {} unknown frames, {} noise bytes",
        stats.updates_applied,
        stats.updates_suppressed,
        stats.checksum_failures,
        stats.unknown_frames,
        stats.bytes_discarded,
    );

    Ok(())
}
