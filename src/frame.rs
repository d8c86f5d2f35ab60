//! Frame layout and extraction for the WT901 wire protocol.
//!
//! The stream has no length fields or escaping; the only structure is the
//! fixed 11-byte frame opened by a two-byte sync pattern: a 0x55 sync byte
//! followed by a kind byte in the 0x5X message block.

use bytemuck::{Pod, Zeroable};

use crate::checksum::Checksummed;

/// Frame length on the wire, bytes.
pub const FRAME_LEN: usize = 11;

/// Sync byte opening every frame.
pub const SYNC_BYTE: u8 = 0x55;

/// Bit pattern a kind byte must carry to open a frame.
pub const KIND_MASK: u8 = 0x50;

/// One telemetry frame as received.
///
/// The payload is left raw here; interpretation depends on `kind` and is
/// handled by [`crate::messages::TelemetryMessage::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, packed)]
pub struct Frame {
    /// Sync byte, always 0x55
    pub sync: u8,
    /// Message kind (0x50..=0x58 for known frames)
    pub kind: u8,
    /// Raw payload bytes
    pub payload: [u8; 8],
    /// Mod-256 sum of the preceding ten bytes
    pub checksum: u8,
}

// SAFETY: Frame is repr(C, packed) and all fields are Pod
unsafe impl Pod for Frame {}
// SAFETY: Frame is repr(C, packed) and all fields are Zeroable
unsafe impl Zeroable for Frame {}

impl Checksummed for Frame {}

impl Frame {
    /// Reinterpret the payload as four little-endian i16 words.
    pub fn payload_words(&self) -> [i16; 4] {
        let p = self.payload;
        [
            i16::from_le_bytes([p[0], p[1]]),
            i16::from_le_bytes([p[2], p[3]]),
            i16::from_le_bytes([p[4], p[5]]),
            i16::from_le_bytes([p[6], p[7]]),
        ]
    }

    /// Reinterpret the payload as two little-endian i32 words.
    pub fn payload_longs(&self) -> [i32; 2] {
        let p = self.payload;
        [
            i32::from_le_bytes([p[0], p[1], p[2], p[3]]),
            i32::from_le_bytes([p[4], p[5], p[6], p[7]]),
        ]
    }
}

/// True if the pair of bytes can open a frame.
pub fn is_sync_candidate(first: u8, second: u8) -> bool {
    first == SYNC_BYTE && (second & KIND_MASK) == KIND_MASK
}

/// Search forward for the first sync candidate.
///
/// The scan stops once fewer than two unexamined bytes remain; a lone
/// trailing 0x55 is not enough to decide.
pub fn find_sync(data: &[u8]) -> Option<usize> {
    (0..data.len().saturating_sub(1)).find(|&i| is_sync_candidate(data[i], data[i + 1]))
}

/// Result of slicing complete frames out of the front of a receive buffer.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Complete frames, in stream order
    pub frames: Vec<Frame>,
    /// Bytes the caller must remove from the front of the buffer
    pub consumed: usize,
    /// Noise bytes dropped ahead of the first sync candidate
    pub discarded: usize,
}

/// Slice every complete frame currently available out of `buf`.
///
/// Without a sync candidate nothing is consumed and the caller should wait
/// for more bytes. Once a candidate is found, the noise ahead of it is
/// consumed unconditionally (and reported via `discarded`) even if no full
/// frame has arrived yet.
pub fn extract(buf: &[u8]) -> Extraction {
    let Some(head) = find_sync(buf) else {
        return Extraction::default();
    };

    let count = (buf.len() - head) / FRAME_LEN;
    let frames: Vec<Frame> = buf[head..head + count * FRAME_LEN]
        .chunks_exact(FRAME_LEN)
        .map(|chunk| *bytemuck::from_bytes(chunk))
        .collect();

    Extraction {
        frames,
        consumed: head + count * FRAME_LEN,
        discarded: head,
    }
}
