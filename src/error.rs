//! Error types for touchframe.

use thiserror::Error;

use crate::consts::{FRAME_LEN, SAMPLE_LEN};

/// Errors raised by a [`SampleSource`](crate::source::SampleSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// `next_input` was called after the source reported exhaustion.
    #[error("sample source exhausted")]
    Exhausted,

    /// The input ended partway through a sample record.
    #[error("sample underrun: {available} of {} bytes available", SAMPLE_LEN)]
    Underrun {
        /// Number of bytes that were available for the trailing sample.
        available: usize,
    },

    /// I/O error while reading from a stream-backed source.
    #[cfg(feature = "std")]
    #[error("sample source I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing received bytes back into a [`Frame`](crate::encoding::Frame).
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum FrameError {
    /// The buffer is not exactly one frame long.
    #[error("frame length {len}, expected {}", FRAME_LEN)]
    Length {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// A header byte does not match the fixed header.
    #[error("unexpected header byte {found:#04x} at offset {offset}")]
    Header {
        /// Offset of the mismatching byte (0 to 3).
        offset: usize,
        /// Byte found at that offset.
        found: u8,
    },

    /// The trailing checksum does not match the payload window.
    #[error("checksum mismatch: expected {expected:#04x}, got {found:#04x}")]
    Checksum {
        /// Checksum computed over offsets 4 to 15.
        expected: u8,
        /// Checksum byte carried by the frame.
        found: u8,
    },
}

/// Errors that abort a transmission run.
///
/// `T` is the error type of the serial transport.
#[derive(Debug, Error)]
pub enum Error<T> {
    /// Writing or draining a byte failed. The run stops at this byte.
    #[error("serial transport fault: {0:?}")]
    Transport(T),

    /// The sample source could not produce the next input.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Result type alias using [`Error`].
pub type Result<T, E> = core::result::Result<T, Error<E>>;
