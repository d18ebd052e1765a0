//! Constants used across the point frame protocol.
//!
//! This module defines the fixed byte layout of a single-point digitizer frame:
//! sync bytes, frame type, payload length, the offsets of every field, and the
//! constant values carried in the fields the encoder never copies from input.
//!
//! ## Frame layout
//!
//! ```text
//!  0    1    2    3    4    5    6..8  8..10  10..12  12    13    14    15   16
//! 0x55 0xAA 0x82 0x0C  dir  n-1  X      Y      Z       mode  tilt  tilt  n    sum
//! |----- header ----|  |-------------------- payload (12) ----------------|
//! ```
//!
//! The checksum is the wrapping sum of the payload window only (offsets 4 to 15).

/// First sync byte of every frame.
pub const SYNC_1: u8 = 0x55;

/// Second sync byte of every frame.
pub const SYNC_2: u8 = 0xAA;

/// Frame type for a pen/touch point report.
pub const FRAME_TYPE_POINT: u8 = 0x82;

/// Length (in bytes) of the payload that follows the header, excluding the checksum.
pub const PAYLOAD_LEN: u8 = 12;

/// The fixed 4-byte header prepended to every frame.
pub const HEADER: [u8; HEADER_LEN] = [SYNC_1, SYNC_2, FRAME_TYPE_POINT, PAYLOAD_LEN];

/// Length (in bytes) of the fixed header.
pub const HEADER_LEN: usize = 4;

/// Total length (in bytes) of an encoded frame: header, payload, checksum.
pub const FRAME_LEN: usize = HEADER_LEN + PAYLOAD_LEN as usize + 1;

/// Length (in bytes) of one raw input sample record.
pub const SAMPLE_LEN: usize = 16;

/// Offset of the direction flag, both in a raw sample and in a frame.
pub const DIRECTION_OFFSET: usize = 4;

/// Offset of the sequence index (`n - 1`) in a frame.
pub const SEQUENCE_OFFSET: usize = 5;

/// Offset of the little-endian X coordinate, both in a raw sample and in a frame.
pub const X_OFFSET: usize = 6;

/// Offset of the little-endian Y coordinate, both in a raw sample and in a frame.
pub const Y_OFFSET: usize = 8;

/// Offset of the little-endian Z (pressure) field in a frame.
pub const Z_OFFSET: usize = 10;

/// Offset of the mode byte in a frame.
pub const MODE_OFFSET: usize = 12;

/// Offset of the X tilt byte in a frame.
pub const TILT_X_OFFSET: usize = 13;

/// Offset of the Y tilt byte in a frame.
pub const TILT_Y_OFFSET: usize = 14;

/// Offset of the point count `n` in a frame.
pub const POINT_COUNT_OFFSET: usize = 15;

/// Offset of the checksum byte, the last byte of a frame.
pub const CHECKSUM_OFFSET: usize = FRAME_LEN - 1;

/// Mode byte carried by every point frame.
pub const MODE_POINT: u8 = 0xB0;

/// Direction flag reported while the pen or finger is in contact.
pub const PEN_DOWN: u8 = 0x07;

/// Direction flag reported when the pen or finger lifts.
pub const PEN_UP: u8 = 0x04;
