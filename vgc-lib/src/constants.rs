// Protocol constants for the VGC gauge controller

/// Fixed 9-byte read-pressure command
pub const READ_PRESSURE_COMMAND: [u8; 9] = [0x00, 0x00, 0x00, 0x05, 0x01, 0x00, 0xDD, 0x00, 0x00];

/// Size of the outbound request frame (command + CRC16)
pub const REQUEST_FRAME_SIZE: usize = 11;

/// Size of the echoed command header at the start of a response
pub const RESPONSE_HEADER_SIZE: usize = 9;

/// Offset of the 4-byte big-endian pressure field in a response frame
pub const PRESSURE_OFFSET: usize = 9;

/// Size of the pressure field
pub const PRESSURE_FIELD_SIZE: usize = 4;

/// Size of the trailing CRC16 (low byte first)
pub const CRC_SIZE: usize = 2;

/// Minimum response length that can hold the echoed header and the pressure field
pub const MIN_RESPONSE_SIZE: usize = PRESSURE_OFFSET + PRESSURE_FIELD_SIZE;

/// Receive buffer capacity for a single response read
pub const READ_BUFFER_SIZE: usize = 1024;

/// Fixed-point scale of the pressure field: value = raw / 2^20 mbar
pub const PRESSURE_SCALE: f64 = 1_048_576.0;

/// Default TCP port of the gauge controller
pub const DEFAULT_PORT: u16 = 4012;
