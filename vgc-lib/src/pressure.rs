//! Decoded pressure readings.

use crate::constants::PRESSURE_SCALE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated pressure reading with its acquisition time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureReading {
    /// Pressure in millibar
    pub mbar: f64,
    /// UTC time the response was decoded
    pub timestamp: DateTime<Utc>,
}

impl PressureReading {
    /// Convert the raw fixed-point field into millibar, stamped with the
    /// current UTC time.
    ///
    /// The divide is floating-point so fractional millibar survive.
    pub fn from_raw(raw: u32) -> Self {
        Self {
            mbar: f64::from(raw) / PRESSURE_SCALE,
            timestamp: Utc::now(),
        }
    }

    /// ISO-8601 timestamp with a trailing `Z`, the form the publisher emits.
    pub fn timestamp_iso8601(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
    }
}

impl fmt::Display for PressureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} mbar at {}", self.mbar, self.timestamp_iso8601())
    }
}
