//! TCP client for the gauge controller: one connection per read.

use crate::constants::{DEFAULT_PORT, READ_BUFFER_SIZE};
use crate::crc::Crc16;
use crate::error::GaugeError;
use crate::frame::{self, ResponseFrame};
use crate::pressure::PressureReading;
use bytes::Bytes;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info};

// Default deadline applied to connect, send and receive individually
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// A client for one gauge controller.
///
/// Holds only the address, the per-operation deadline and the CRC table;
/// every read opens a fresh TCP connection and closes it before returning,
/// so no connection state survives between polls. Retry policy belongs to
/// the caller driving the scan period.
pub struct Gauge {
    host: String,
    port: u16,
    timeout: Duration,
    crc: Crc16,
}

impl Gauge {
    /// Create a client for `host` on the default controller port.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_port(host, DEFAULT_PORT)
    }

    /// Create a client for `host` on a specific port.
    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: DEFAULT_TIMEOUT,
            crc: Crc16::new(),
        }
    }

    /// Replace the per-operation deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Perform one full read-pressure exchange.
    ///
    /// Connects, sends the fixed request frame, reads a single response of up
    /// to 1024 bytes, verifies its CRC and decodes the pressure field. A
    /// deadline expiry on any step surfaces as [`GaugeError::Timeout`].
    pub async fn read_pressure(&self) -> Result<PressureReading, GaugeError> {
        let response = self.exchange().await?;
        let frame = ResponseFrame::new(response)?;
        frame.verify(&self.crc)?;
        let reading = PressureReading::from_raw(frame.pressure_raw());
        info!("pressure {:.6} mbar", reading.mbar);
        Ok(reading)
    }

    /// Send the request frame and collect the raw response bytes.
    ///
    /// The connection is dropped on every path out of this function,
    /// including read failures.
    async fn exchange(&self) -> Result<Bytes, GaugeError> {
        let request = frame::build_request(&self.crc);

        debug!("connecting to {}:{}", self.host, self.port);
        let mut stream = timeout(
            self.timeout,
            TcpStream::connect((self.host.as_str(), self.port)),
        )
        .await??;

        debug!("request frame: {}", hex::encode(request));
        timeout(self.timeout, stream.write_all(&request)).await??;

        let mut buffer = vec![0u8; READ_BUFFER_SIZE];
        let received = timeout(self.timeout, stream.read(&mut buffer)).await??;
        drop(stream);

        buffer.truncate(received);
        debug!("received {} bytes: {}", received, hex::encode(&buffer));
        Ok(Bytes::from(buffer))
    }
}
