//! Checksum computation for WT901 telemetry frames.
//!
//! The checksum is the low byte of the sum of the frame's first ten
//! bytes (sync, kind, and the eight payload bytes), carried as the
//! eleventh byte.
//!
//! This module provides both standalone functions and a trait for
//! working with checksums on frame structs.

use bytemuck::{bytes_of, bytes_of_mut, Pod};

/// Trait for frames with a trailing one-byte checksum.
///
/// Provides methods to verify, compute, and update checksums on frame
/// structs. The checksum is assumed to be the last byte of the struct.
pub trait Checksummed: Pod {
    /// Verify the frame's stored checksum matches the computed value.
    fn verify_checksum(&self) -> bool {
        verify_checksum_bytes(bytes_of(self))
    }

    /// Compute what the checksum should be for this frame.
    ///
    /// Does not modify the frame; it just returns the computed value.
    fn compute_checksum(&self) -> u8 {
        let bytes = bytes_of(self);
        compute_checksum(&bytes[..bytes.len() - 1])
    }

    /// Compute and write the correct checksum into the frame.
    ///
    /// After calling this, `verify_checksum()` will return `true`.
    fn update_checksum(&mut self) {
        let bytes = bytes_of_mut(self);
        let len = bytes.len();
        bytes[len - 1] = compute_checksum(&bytes[..len - 1]);
    }
}

/// Compute the mod-256 sum of a byte slice.
pub fn compute_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Verify that a frame's trailing checksum byte is valid.
///
/// The slice should include all bytes up to and including the checksum.
/// Slices too short to hold any data ahead of the checksum fail.
pub fn verify_checksum_bytes(frame: &[u8]) -> bool {
    if frame.len() < 2 {
        return false;
    }

    let data_end = frame.len() - 1;
    compute_checksum(&frame[..data_end]) == frame[data_end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_known_acceleration_frame() {
        // 8 g on X, -8 g on Y, level Z, 25.00 C: checksum works out to 0x73
        let frame: [u8; 11] = [
            0x55, 0x51, 0x00, 0x40, 0x00, 0xC0, 0x00, 0x00, 0xC4, 0x09, 0x73,
        ];

        assert_eq!(compute_checksum(&frame[..10]), 0x73);
        assert!(verify_checksum_bytes(&frame));
    }

    #[test]
    fn test_checksum_wrapping() {
        // 0xFF + 0xFF + 0x03 = 0x201, truncated to 0x01
        let data: [u8; 3] = [0xFF, 0xFF, 0x03];
        assert_eq!(compute_checksum(&data), 0x01);
    }

    #[test]
    fn test_verify_checksum_bytes_invalid() {
        let mut frame: [u8; 11] = [
            0x55, 0x51, 0x00, 0x40, 0x00, 0xC0, 0x00, 0x00, 0xC4, 0x09, 0x73,
        ];

        frame[4] ^= 0xFF;
        assert!(!verify_checksum_bytes(&frame));
    }

    #[test]
    fn test_verify_checksum_bytes_short_frame() {
        assert!(!verify_checksum_bytes(&[]));
        assert!(!verify_checksum_bytes(&[0x55]));
    }

    mod checksummed_trait_tests {
        use super::*;
        use crate::frame::Frame;

        fn make_frame() -> Frame {
            Frame {
                sync: 0x55,
                kind: 0x52,
                payload: [0x10, 0x00, 0x20, 0x00, 0x30, 0x00, 0xC4, 0x09],
                checksum: 0,
            }
        }

        #[test]
        fn test_update_and_verify() {
            let mut frame = make_frame();
            assert!(!frame.verify_checksum());

            frame.update_checksum();
            assert!(frame.verify_checksum());
        }

        #[test]
        fn test_compute_checksum_returns_stored_value() {
            let mut frame = make_frame();
            let computed = frame.compute_checksum();

            frame.update_checksum();
            assert_eq!(computed, frame.checksum);
        }

        #[test]
        fn test_update_checksum_is_idempotent() {
            let mut frame = make_frame();

            frame.update_checksum();
            let first = frame.checksum;

            frame.update_checksum();
            assert_eq!(first, frame.checksum);
        }

        #[test]
        fn test_checksum_changes_with_payload() {
            let mut a = make_frame();
            let mut b = make_frame();
            b.payload[0] = 0x99;

            a.update_checksum();
            b.update_checksum();
            assert_ne!(a.checksum, b.checksum);
        }
    }
}
