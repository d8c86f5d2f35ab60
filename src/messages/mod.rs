//! Message types for the WT901 telemetry protocol.

mod clock;
mod gps;
mod motion;
mod port;
mod pressure;

pub use clock::DeviceClock;
pub use gps::{GpsMotion, GpsPosition};
pub use motion::{
    temperature_celsius, Acceleration, AngularVelocity, MagneticField, Orientation,
    ACCEL_RANGE_G, ANGLE_RANGE_DEG, GYRO_RANGE_DPS,
};
pub use port::PortLevels;
pub use pressure::Barometric;

use crate::frame::Frame;

/// The closed set of frame kinds the module emits.
///
/// Any kind byte outside this set is checksummed like every other frame but
/// never decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FrameKind {
    /// On-chip real-time clock
    Clock = 0x50,
    /// Three-axis acceleration plus temperature
    Acceleration = 0x51,
    /// Three-axis angular velocity plus temperature
    AngularVelocity = 0x52,
    /// Roll/pitch/yaw attitude plus temperature
    Orientation = 0x53,
    /// Raw magnetometer counts plus temperature
    MagneticField = 0x54,
    /// Digital port levels
    PortLevels = 0x55,
    /// Barometric pressure and derived altitude
    Barometric = 0x56,
    /// GPS longitude/latitude fix
    GpsPosition = 0x57,
    /// GPS height, heading, and ground speed
    GpsMotion = 0x58,
}

impl FrameKind {
    /// Map a wire kind byte onto the enumeration.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x50 => Some(Self::Clock),
            0x51 => Some(Self::Acceleration),
            0x52 => Some(Self::AngularVelocity),
            0x53 => Some(Self::Orientation),
            0x54 => Some(Self::MagneticField),
            0x55 => Some(Self::PortLevels),
            0x56 => Some(Self::Barometric),
            0x57 => Some(Self::GpsPosition),
            0x58 => Some(Self::GpsMotion),
            _ => None,
        }
    }
}

/// One decoded telemetry message.
///
/// The four motion variants carry the shared temperature word alongside
/// their axis data; the decoded state keeps a single last-write-wins
/// temperature field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TelemetryMessage {
    Clock(DeviceClock),
    Acceleration {
        accel: Acceleration,
        temperature: f64,
    },
    AngularVelocity {
        rate: AngularVelocity,
        temperature: f64,
    },
    Orientation {
        angles: Orientation,
        temperature: f64,
    },
    MagneticField {
        field: MagneticField,
        temperature: f64,
    },
    PortLevels(PortLevels),
    Barometric(Barometric),
    GpsPosition(GpsPosition),
    GpsMotion(GpsMotion),
}

impl TelemetryMessage {
    /// Decode a checksum-valid frame.
    ///
    /// Returns `None` for kind bytes outside [`FrameKind`]; such frames are
    /// ignored without being treated as an error.
    pub fn decode(frame: &Frame) -> Option<Self> {
        let kind = FrameKind::from_byte(frame.kind)?;
        let words = frame.payload_words();

        Some(match kind {
            FrameKind::Clock => Self::Clock(DeviceClock::from_payload(&frame.payload)),
            FrameKind::Acceleration => Self::Acceleration {
                accel: Acceleration::from_counts(words[0], words[1], words[2]),
                temperature: temperature_celsius(words[3]),
            },
            FrameKind::AngularVelocity => Self::AngularVelocity {
                rate: AngularVelocity::from_counts(words[0], words[1], words[2]),
                temperature: temperature_celsius(words[3]),
            },
            FrameKind::Orientation => Self::Orientation {
                angles: Orientation::from_counts(words[0], words[1], words[2]),
                temperature: temperature_celsius(words[3]),
            },
            FrameKind::MagneticField => Self::MagneticField {
                field: MagneticField {
                    x: words[0],
                    y: words[1],
                    z: words[2],
                },
                temperature: temperature_celsius(words[3]),
            },
            FrameKind::PortLevels => Self::PortLevels(PortLevels {
                d0: words[0],
                d1: words[1],
                d2: words[2],
                d3: words[3],
            }),
            FrameKind::Barometric => {
                let longs = frame.payload_longs();
                Self::Barometric(Barometric::from_longs(longs[0], longs[1]))
            }
            FrameKind::GpsPosition => {
                let longs = frame.payload_longs();
                Self::GpsPosition(GpsPosition {
                    longitude: longs[0],
                    latitude: longs[1],
                })
            }
            FrameKind::GpsMotion => {
                Self::GpsMotion(GpsMotion::from_counts(words[0], words[1], words[2]))
            }
        })
    }

    /// The frame kind this message was decoded from.
    pub fn kind(&self) -> FrameKind {
        match self {
            Self::Clock(_) => FrameKind::Clock,
            Self::Acceleration { .. } => FrameKind::Acceleration,
            Self::AngularVelocity { .. } => FrameKind::AngularVelocity,
            Self::Orientation { .. } => FrameKind::Orientation,
            Self::MagneticField { .. } => FrameKind::MagneticField,
            Self::PortLevels(_) => FrameKind::PortLevels,
            Self::Barometric(_) => FrameKind::Barometric,
            Self::GpsPosition(_) => FrameKind::GpsPosition,
            Self::GpsMotion(_) => FrameKind::GpsMotion,
        }
    }
}
