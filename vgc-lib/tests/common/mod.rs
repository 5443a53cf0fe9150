//! Common test utilities and shared imports

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#[allow(unused_imports)]
pub use bytes::Bytes;
#[allow(unused_imports)]
pub use vgc_lib::constants::{
    MIN_RESPONSE_SIZE, READ_PRESSURE_COMMAND, REQUEST_FRAME_SIZE, RESPONSE_HEADER_SIZE,
};
#[allow(unused_imports)]
pub use vgc_lib::crc::Crc16;
#[allow(unused_imports)]
pub use vgc_lib::error::GaugeError;
#[allow(unused_imports)]
pub use vgc_lib::frame::{ResponseFrame, build_request};
#[allow(unused_imports)]
pub use vgc_lib::pressure::PressureReading;

/// Decode hex string to bytes for testing
#[allow(dead_code)]
pub fn hex_to_bytes(hex_data: &str) -> Bytes {
    Bytes::from(hex::decode(hex_data).expect("Failed to decode hex"))
}

/// Install a fmt subscriber honoring RUST_LOG, once per test binary
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Build a well-formed 15-byte response: echoed command header, pressure
/// field, trailing CRC16 (low byte first)
#[allow(dead_code)]
pub fn make_response(pressure_field: [u8; 4]) -> Vec<u8> {
    let crc = Crc16::new();
    let mut frame = Vec::with_capacity(15);
    frame.extend_from_slice(&READ_PRESSURE_COMMAND);
    frame.extend_from_slice(&pressure_field);
    let checksum = crc.compute(&frame);
    frame.extend_from_slice(&checksum.to_le_bytes());
    frame
}

/// A captured valid response carrying exactly 1.0 mbar (raw 0x00100000)
#[allow(dead_code)]
pub const ONE_MBAR_RESPONSE: &str = "000000050100dd0000001000005abe";

/// CRC16 of the fixed 9-byte read-pressure command
#[allow(dead_code)]
pub const COMMAND_CRC: u16 = 0x21AB;
