//! Drained byte-by-byte frame transmitter.
//!
//! This module provides the [`Transmitter`], which pushes encoded frames to a
//! serial port one byte at a time. After every byte it blocks until the port
//! reports the byte as physically sent, so a frame is never partially buffered
//! in the UART when the next byte is queued.
//!
//! The port is any [`embedded_hal_nb::serial::Write<u8>`]:
//!
//! | Protocol step | Serial call |
//! |---------------|-------------|
//! | write byte    | [`write`](embedded_hal_nb::serial::Write::write) |
//! | drain         | [`flush`](embedded_hal_nb::serial::Write::flush) |
//!
//! Both calls are driven to completion with [`nb::block!`].
//!
//! ## Example
//!
//! ```rust
//! # use embedded_hal_mock::eh1::serial::{Mock as Serial, Transaction};
//! use touchframe::driver::Transmitter;
//! use touchframe::encoding::{IntoFrame, RawSample};
//! use touchframe::consts::PEN_DOWN;
//!
//! let frame = RawSample::point(PEN_DOWN, 0x0fff, 0x0fff).to_frame();
//! # let expectations: Vec<_> = frame
//! #     .as_bytes()
//! #     .iter()
//! #     .flat_map(|&b| [Transaction::write(b), Transaction::flush()])
//! #     .collect();
//! # let serial = Serial::new(&expectations);
//! let mut tx = Transmitter::new(serial);
//! tx.send(&frame).unwrap();
//! assert_eq!(tx.frames_sent(), 1);
//! # tx.release().done();
//! ```
//!
//! ## Failure
//!
//! A write or drain error ends the frame at that byte and is returned as
//! [`Error::Transport`]. Nothing is retried; the caller decides whether the
//! port is still usable.

use embedded_hal_nb::serial::Write;
use nb::block;

use crate::encoding::{Frame, IntoFrame};
use crate::error::Error;

/// Sends frames over an exclusively owned serial port, draining after every byte.
///
/// The port is acquired by [`Transmitter::new`] and handed back by
/// [`Transmitter::release`]. If the transmitter is dropped instead, for example
/// after a transport fault, the port is dropped with it.
#[derive(Debug)]
pub struct Transmitter<W> {
    serial: W,

    /// Counter of frames sent in full.
    frames_sent: u32,

    /// Counter of bytes written and drained, including those of an aborted frame.
    bytes_sent: u32,
}

impl<W> Transmitter<W>
where
    W: Write<u8>,
{
    /// Takes ownership of a configured serial port.
    ///
    /// Line settings (baud rate, parity, stop bits, flow control) must already
    /// be applied; the transmitter never touches them.
    pub fn new(serial: W) -> Self {
        Self {
            serial,
            frames_sent: 0,
            bytes_sent: 0,
        }
    }

    /// Returns the serial port, ending the transmitter's ownership of it.
    pub fn release(self) -> W {
        self.serial
    }

    /// Number of frames sent in full.
    pub fn frames_sent(&self) -> u32 {
        self.frames_sent
    }

    /// Number of bytes written and drained.
    pub fn bytes_sent(&self) -> u32 {
        self.bytes_sent
    }

    /// Writes one byte and blocks until the port has drained it.
    fn push_byte(&mut self, byte: u8) -> Result<(), W::Error> {
        block!(self.serial.write(byte))?;
        block!(self.serial.flush())?;
        self.bytes_sent = self.bytes_sent.wrapping_add(1);
        Ok(())
    }

    /// Sends one frame, offsets 0 to 16 in order.
    ///
    /// Returns once the last byte has drained. Stops at the first failing
    /// byte; the frame is not counted as sent.
    pub fn send(&mut self, frame: &Frame) -> Result<(), Error<W::Error>> {
        for (offset, &byte) in frame.as_bytes().iter().enumerate() {
            if let Err(e) = self.push_byte(byte) {
                warn!(
                    "transport fault at byte {} of frame {}",
                    offset,
                    self.frames_sent.wrapping_add(1)
                );
                return Err(Error::Transport(e));
            }
        }
        self.frames_sent = self.frames_sent.wrapping_add(1);
        trace!(
            "frame {} sent, checksum {}",
            self.frames_sent,
            frame.checksum()
        );
        Ok(())
    }

    /// Encodes `input` and sends the resulting frame.
    ///
    /// Returns the frame that was sent.
    pub fn send_input<I: IntoFrame + ?Sized>(
        &mut self,
        input: &I,
    ) -> Result<Frame, Error<W::Error>> {
        let frame = input.to_frame();
        self.send(&frame)?;
        Ok(frame)
    }
}
