//! Request framing and response validation for the read-pressure exchange.
//!
//! The controller speaks a fixed command/response protocol: the host sends an
//! 11-byte request (9 command bytes plus their CRC16, low byte first) and the
//! controller answers with the echoed command header, a 4-byte big-endian
//! pressure field and a trailing CRC16 over everything that precedes it.

use crate::constants::{
    CRC_SIZE, MIN_RESPONSE_SIZE, PRESSURE_FIELD_SIZE, PRESSURE_OFFSET, READ_PRESSURE_COMMAND,
    REQUEST_FRAME_SIZE, RESPONSE_HEADER_SIZE,
};
use crate::crc::Crc16;
use crate::error::GaugeError;
use bytes::{Buf, Bytes};

/// Build the fixed read-pressure request frame.
///
/// The CRC16 covers exactly the 9 command bytes and is appended low byte
/// first.
pub fn build_request(crc: &Crc16) -> [u8; REQUEST_FRAME_SIZE] {
    let mut frame = [0u8; REQUEST_FRAME_SIZE];
    frame[..RESPONSE_HEADER_SIZE].copy_from_slice(&READ_PRESSURE_COMMAND);
    let checksum = crc.compute(&READ_PRESSURE_COMMAND);
    frame[RESPONSE_HEADER_SIZE..].copy_from_slice(&checksum.to_le_bytes());
    frame
}

/// A response frame as received from the controller, length-checked but not
/// yet CRC-verified.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseFrame {
    bytes: Bytes,
}

impl ResponseFrame {
    /// Wrap received bytes, rejecting responses too short to hold the echoed
    /// header and the pressure field.
    pub fn new(bytes: Bytes) -> Result<Self, GaugeError> {
        if bytes.is_empty() {
            return Err(GaugeError::EmptyResponse);
        }
        if bytes.len() < MIN_RESPONSE_SIZE {
            return Err(GaugeError::ShortFrame {
                expected: MIN_RESPONSE_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Verify the trailing CRC16 over all preceding bytes.
    pub fn verify(&self, crc: &Crc16) -> Result<(), GaugeError> {
        let split = self.bytes.len() - CRC_SIZE;
        let computed = crc.compute(&self.bytes[..split]);
        let received = u16::from_le_bytes([self.bytes[split], self.bytes[split + 1]]);
        if computed != received {
            return Err(GaugeError::ChecksumMismatch { computed, received });
        }
        Ok(())
    }

    /// Extract the raw fixed-point pressure field (big-endian u32 at offset 9).
    ///
    /// Callers must run [`ResponseFrame::verify`] first; a value from an
    /// unverified frame must never be surfaced.
    pub fn pressure_raw(&self) -> u32 {
        let mut field = self
            .bytes
            .slice(PRESSURE_OFFSET..PRESSURE_OFFSET + PRESSURE_FIELD_SIZE);
        field.get_u32()
    }
}
