use std::io;
use thiserror::Error;

/// The primary error type for the `vgc-lib` library.
#[derive(Error, Debug)]
pub enum GaugeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Timeout during gauge exchange: {0}")]
    Timeout(#[from] tokio::time::error::Elapsed),

    #[error("Pressure reading failed: checksum mismatch (computed {computed:#06x}, received {received:#06x})")]
    ChecksumMismatch { computed: u16, received: u16 },

    #[error("Response too short: expected at least {expected} bytes, got {actual}")]
    ShortFrame { expected: usize, actual: usize },

    #[error("Empty response - controller returned no data")]
    EmptyResponse,
}
