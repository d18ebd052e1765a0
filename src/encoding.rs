//! Point frame encoding.
//!
//! This module maps raw 16-byte digitizer samples onto the fixed 17-byte point
//! frame described in [`crate::consts`], and computes the trailing checksum.
//!
//! ## Inputs
//!
//! Two kinds of input produce frames, both through the [`IntoFrame`] trait:
//!
//! - [`RawSample`]: a 16-byte record read from a sample stream. Only the
//!   direction flag (offset 4) and the X/Y coordinates (offsets 6 to 9) are
//!   used; every other frame field comes from [`POINT_FRAME`].
//! - [`FrameLiteral`]: a pre-built frame taken as-is, with only the checksum
//!   byte recomputed. Used for fixed tables such as [`PEN_TAP`].
//!
//! A literal holding the same fields as a sample encodes to the same bytes.
//!
//! ## Example
//!
//! ```rust
//! use touchframe::encoding::{IntoFrame, RawSample};
//! use touchframe::consts::PEN_DOWN;
//!
//! let frame = RawSample::point(PEN_DOWN, 0x0fff, 0x0fff).to_frame();
//! assert_eq!(
//!     frame.as_bytes(),
//!     &[0x55, 0xaa, 0x82, 0x0c, 0x07, 0x00, 0xff, 0x0f, 0xff, 0x0f, 0x00, 0x00, 0xb0, 0x00, 0x00, 0x01, 0xd4]
//! );
//! ```

use crate::checksum::window_checksum;
use crate::consts::{
    CHECKSUM_OFFSET, DIRECTION_OFFSET, FRAME_LEN, FRAME_TYPE_POINT, HEADER, HEADER_LEN,
    MODE_OFFSET, MODE_POINT, PAYLOAD_LEN, PEN_DOWN, PEN_UP, POINT_COUNT_OFFSET, SAMPLE_LEN,
    SEQUENCE_OFFSET, SYNC_1, SYNC_2, TILT_X_OFFSET, TILT_Y_OFFSET, X_OFFSET, Y_OFFSET, Z_OFFSET,
};
use crate::error::{FrameError, SourceError};

/// One raw 16-byte input record.
///
/// Byte 4 is the direction flag, bytes 6-7 the little-endian X coordinate and
/// bytes 8-9 the little-endian Y coordinate. The remaining bytes are carried
/// along but never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct RawSample([u8; SAMPLE_LEN]);

impl RawSample {
    /// Wraps a complete sample record.
    pub const fn new(bytes: [u8; SAMPLE_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a sample from a slice holding at least one full record.
    ///
    /// Bytes past the first record are ignored. Shorter slices are rejected
    /// with [`SourceError::Underrun`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SourceError> {
        match bytes.get(..SAMPLE_LEN) {
            Some(record) => {
                let mut buf = [0u8; SAMPLE_LEN];
                buf.copy_from_slice(record);
                Ok(Self(buf))
            }
            None => Err(SourceError::Underrun {
                available: bytes.len(),
            }),
        }
    }

    /// Builds a sample holding only the fields the encoder reads.
    pub const fn point(direction: u8, x: u16, y: u16) -> Self {
        let mut buf = [0u8; SAMPLE_LEN];
        let [x_lo, x_hi] = x.to_le_bytes();
        let [y_lo, y_hi] = y.to_le_bytes();
        buf[DIRECTION_OFFSET] = direction;
        buf[X_OFFSET] = x_lo;
        buf[X_OFFSET + 1] = x_hi;
        buf[Y_OFFSET] = y_lo;
        buf[Y_OFFSET + 1] = y_hi;
        Self(buf)
    }

    /// The raw record bytes.
    pub fn as_bytes(&self) -> &[u8; SAMPLE_LEN] {
        &self.0
    }

    /// Direction flag, e.g. [`PEN_DOWN`] or [`PEN_UP`].
    pub fn direction(&self) -> u8 {
        self.0[DIRECTION_OFFSET]
    }

    /// X coordinate.
    pub fn x(&self) -> u16 {
        u16::from_le_bytes([self.0[X_OFFSET], self.0[X_OFFSET + 1]])
    }

    /// Y coordinate.
    pub fn y(&self) -> u16 {
        u16::from_le_bytes([self.0[Y_OFFSET], self.0[Y_OFFSET + 1]])
    }
}

impl From<[u8; SAMPLE_LEN]> for RawSample {
    fn from(bytes: [u8; SAMPLE_LEN]) -> Self {
        Self(bytes)
    }
}

/// A complete, checksummed 17-byte frame.
///
/// A `Frame` can only be obtained through encoding or [`Frame::parse`], so its
/// checksum byte always matches its payload window. It is never modified
/// afterwards.
///
/// The header is not guaranteed: a [`FrameLiteral`] is sent with whatever
/// header it was written with, so a frame encoded from one may fail
/// [`Frame::is_valid`]. Frames encoded from a [`RawSample`] always pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Seals a frame buffer by writing its checksum.
    fn seal(mut bytes: [u8; FRAME_LEN]) -> Self {
        bytes[CHECKSUM_OFFSET] = window_checksum(&bytes);
        Self(bytes)
    }

    /// Parses and verifies one frame, e.g. bytes captured on the receiving end.
    ///
    /// # Errors
    /// - [`FrameError::Length`] if `bytes` is not exactly [`FRAME_LEN`] long
    /// - [`FrameError::Header`] for the first header byte that differs from [`HEADER`]
    /// - [`FrameError::Checksum`] if offset 16 is not the sum of offsets 4 to 15
    pub fn parse(bytes: &[u8]) -> Result<Self, FrameError> {
        let bytes: [u8; FRAME_LEN] = bytes
            .try_into()
            .map_err(|_| FrameError::Length { len: bytes.len() })?;

        if let Some((offset, &found)) = bytes[..HEADER_LEN]
            .iter()
            .enumerate()
            .find(|&(i, b)| *b != HEADER[i])
        {
            return Err(FrameError::Header { offset, found });
        }

        let expected = window_checksum(&bytes);
        let found = bytes[CHECKSUM_OFFSET];
        if expected != found {
            return Err(FrameError::Checksum { expected, found });
        }
        Ok(Self(bytes))
    }

    /// The encoded bytes, in transmission order.
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Checksum byte (offset 16).
    pub fn checksum(&self) -> u8 {
        self.0[CHECKSUM_OFFSET]
    }

    /// Direction flag (offset 4).
    pub fn direction(&self) -> u8 {
        self.0[DIRECTION_OFFSET]
    }

    /// X coordinate (offsets 6-7).
    pub fn x(&self) -> u16 {
        u16::from_le_bytes([self.0[X_OFFSET], self.0[X_OFFSET + 1]])
    }

    /// Y coordinate (offsets 8-9).
    pub fn y(&self) -> u16 {
        u16::from_le_bytes([self.0[Y_OFFSET], self.0[Y_OFFSET + 1]])
    }

    /// Point count `n` (offset 15).
    pub fn point_count(&self) -> u8 {
        self.0[POINT_COUNT_OFFSET]
    }

    /// Checks the header and the checksum window.
    pub fn is_valid(&self) -> bool {
        Self::parse(&self.0).is_ok()
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The constant fields of a point frame.
///
/// Every frame produced from a [`RawSample`] is this template with the
/// direction and coordinates filled in. See [`POINT_FRAME`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct FrameTemplate {
    /// Frame type (offset 2).
    pub frame_type: u8,
    /// Payload length (offset 3).
    pub payload_len: u8,
    /// Z / pressure (offsets 10-11).
    pub z: u16,
    /// Mode byte (offset 12).
    pub mode: u8,
    /// X tilt (offset 13).
    pub tilt_x: u8,
    /// Y tilt (offset 14).
    pub tilt_y: u8,
    /// Number of points `n` (offset 15). The sequence index at offset 5 is `n - 1`.
    pub point_count: u8,
}

/// Template for single-point frames.
pub const POINT_FRAME: FrameTemplate = FrameTemplate {
    frame_type: FRAME_TYPE_POINT,
    payload_len: PAYLOAD_LEN,
    z: 0,
    mode: MODE_POINT,
    tilt_x: 0,
    tilt_y: 0,
    point_count: 1,
};

impl FrameTemplate {
    /// Lays out the frame bytes for one point, leaving the checksum at zero.
    pub const fn layout(&self, direction: u8, x: u16, y: u16) -> [u8; FRAME_LEN] {
        let mut buf = [0u8; FRAME_LEN];
        let [x_lo, x_hi] = x.to_le_bytes();
        let [y_lo, y_hi] = y.to_le_bytes();
        let [z_lo, z_hi] = self.z.to_le_bytes();

        buf[0] = SYNC_1;
        buf[1] = SYNC_2;
        buf[2] = self.frame_type;
        buf[3] = self.payload_len;
        buf[DIRECTION_OFFSET] = direction;
        buf[SEQUENCE_OFFSET] = self.point_count.wrapping_sub(1);
        buf[X_OFFSET] = x_lo;
        buf[X_OFFSET + 1] = x_hi;
        buf[Y_OFFSET] = y_lo;
        buf[Y_OFFSET + 1] = y_hi;
        buf[Z_OFFSET] = z_lo;
        buf[Z_OFFSET + 1] = z_hi;
        buf[MODE_OFFSET] = self.mode;
        buf[TILT_X_OFFSET] = self.tilt_x;
        buf[TILT_Y_OFFSET] = self.tilt_y;
        buf[POINT_COUNT_OFFSET] = self.point_count;
        buf
    }

    /// Builds a checksummed frame for one point.
    pub fn fill(&self, direction: u8, x: u16, y: u16) -> Frame {
        Frame::seal(self.layout(direction, x, y))
    }
}

/// A pre-built frame whose checksum byte is recomputed on encode.
///
/// All other bytes, header included, are sent exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct FrameLiteral(pub [u8; FRAME_LEN]);

impl FrameLiteral {
    /// A literal built from [`POINT_FRAME`], with a zero checksum byte.
    pub const fn point(direction: u8, x: u16, y: u16) -> Self {
        Self(POINT_FRAME.layout(direction, x, y))
    }
}

/// A pen-down then pen-up tap at X = Y = 0x0FFF.
pub static PEN_TAP: [FrameLiteral; 2] = [
    FrameLiteral::point(PEN_DOWN, 0x0fff, 0x0fff),
    FrameLiteral::point(PEN_UP, 0x0fff, 0x0fff),
];

/// Anything that can be turned into one complete frame.
pub trait IntoFrame {
    /// Encodes `self` as a checksummed frame.
    fn to_frame(&self) -> Frame;
}

impl IntoFrame for RawSample {
    fn to_frame(&self) -> Frame {
        POINT_FRAME.fill(self.direction(), self.x(), self.y())
    }
}

impl IntoFrame for FrameLiteral {
    fn to_frame(&self) -> Frame {
        Frame::seal(self.0)
    }
}

impl IntoFrame for Frame {
    fn to_frame(&self) -> Frame {
        *self
    }
}
