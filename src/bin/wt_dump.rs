//! Decode a raw WT901 capture file into CSV.
//!
//! Replays a byte dump through the same extraction/validation/decode path
//! used on the live link and writes one row per decoded record. Useful for
//! post-mortem analysis of logged serial traffic.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wt901::checksum::Checksummed;
use wt901::{extract, TelemetryMessage};

/// Decode a raw WT901 capture to CSV
#[derive(Parser, Debug)]
#[command(name = "wt_dump")]
#[command(about = "Decode a raw WT901 serial capture to CSV")]
#[command(version)]
struct Args {
    /// Raw capture file
    dump: PathBuf,

    /// Output CSV path
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let data = fs::read(&args.dump)
        .with_context(|| format!("failed to read {}", args.dump.display()))?;
    println!("read {} bytes from {}", data.len(), args.dump.display());

    let extraction = extract(&data);
    let trailing = data.len() - extraction.consumed;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(
        out,
        "kind,x,y,z,temperature_c,d0,d1,d2,d3,pressure,altitude_m,longitude,latitude,height_m,heading_deg,ground_speed,clock"
    )?;

    let mut decoded = 0usize;
    let mut bad_checksum = 0usize;
    let mut unknown = 0usize;

    for frame in &extraction.frames {
        if !frame.verify_checksum() {
            bad_checksum += 1;
            continue;
        }
        let Some(message) = TelemetryMessage::decode(frame) else {
            unknown += 1;
            continue;
        };
        decoded += 1;

        match message {
            TelemetryMessage::Clock(clock) => {
                writeln!(out, "clock,,,,,,,,,,,,,,,,{clock}")?;
            }
            TelemetryMessage::Acceleration { accel, temperature } => {
                writeln!(
                    out,
                    "accel,{:.6},{:.6},{:.6},{:.2},,,,,,,,,,,,",
                    accel.x, accel.y, accel.z, temperature
                )?;
            }
            TelemetryMessage::AngularVelocity { rate, temperature } => {
                writeln!(
                    out,
                    "gyro,{:.6},{:.6},{:.6},{:.2},,,,,,,,,,,,",
                    rate.x, rate.y, rate.z, temperature
                )?;
            }
            TelemetryMessage::Orientation { angles, temperature } => {
                writeln!(
                    out,
                    "angle,{:.6},{:.6},{:.6},{:.2},,,,,,,,,,,,",
                    angles.roll, angles.pitch, angles.yaw, temperature
                )?;
            }
            TelemetryMessage::MagneticField { field, temperature } => {
                writeln!(
                    out,
                    "mag,{},{},{},{:.2},,,,,,,,,,,,",
                    field.x, field.y, field.z, temperature
                )?;
            }
            TelemetryMessage::PortLevels(levels) => {
                writeln!(
                    out,
                    "port,,,,,{},{},{},{},,,,,,,,",
                    levels.d0, levels.d1, levels.d2, levels.d3
                )?;
            }
            TelemetryMessage::Barometric(baro) => {
                writeln!(
                    out,
                    "baro,,,,,,,,,{},{:.2},,,,,,",
                    baro.pressure, baro.altitude
                )?;
            }
            TelemetryMessage::GpsPosition(fix) => {
                writeln!(
                    out,
                    "gps_pos,,,,,,,,,,,{},{},,,,",
                    fix.longitude, fix.latitude
                )?;
            }
            TelemetryMessage::GpsMotion(motion) => {
                writeln!(
                    out,
                    "gps_motion,,,,,,,,,,,,,{:.1},{:.1},{:.3},",
                    motion.height, motion.heading, motion.ground_speed
                )?;
            }
        }
    }

    println!(
        "{decoded} records decoded, {bad_checksum} checksum failures, {unknown} unknown frames, \
         {} noise bytes skipped, {trailing} trailing bytes unconsumed",
        extraction.discarded
    );
    println!("wrote {}", args.output.display());

    Ok(())
}
