pub mod constants;
pub mod crc;
pub mod error;
pub mod frame;
pub mod gauge;
pub mod pressure;

// Re-export the client types for easy access
pub use error::GaugeError;
pub use gauge::Gauge;
pub use pressure::PressureReading;
