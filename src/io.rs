//! Adapter from blocking `std::io::Write` ports to the serial trait.
//!
//! Host serial libraries expose an opened, configured port as a
//! `std::io::Write` whose `flush` waits for the output queue to drain (for
//! example `tcdrain` on a Unix tty). [`IoSerial`] maps that onto
//! [`embedded_hal_nb::serial::Write`] so a [`Transmitter`](crate::driver::Transmitter)
//! can drive it.

use embedded_hal_nb::serial::{self, ErrorKind, ErrorType, Write};

/// I/O error from a wrapped `std::io::Write` port.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct IoError(#[from] pub std::io::Error);

impl serial::Error for IoError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// A `std::io::Write` port viewed as a byte-wise serial transmitter.
///
/// `write` is a one-byte `write_all`; `flush` is the port's `flush`.
#[derive(Debug)]
pub struct IoSerial<P> {
    port: P,
}

impl<P: std::io::Write> IoSerial<P> {
    /// Wraps an opened and configured port.
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Returns the wrapped port.
    pub fn into_inner(self) -> P {
        self.port
    }

    /// The wrapped port.
    pub fn get_ref(&self) -> &P {
        &self.port
    }
}

impl<P: std::io::Write> ErrorType for IoSerial<P> {
    type Error = IoError;
}

impl<P: std::io::Write> Write<u8> for IoSerial<P> {
    fn write(&mut self, word: u8) -> nb::Result<(), IoError> {
        self.port
            .write_all(&[word])
            .map_err(|e| nb::Error::Other(e.into()))
    }

    fn flush(&mut self) -> nb::Result<(), IoError> {
        self.port.flush().map_err(|e| nb::Error::Other(e.into()))
    }
}
