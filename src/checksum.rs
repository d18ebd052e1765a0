//! Additive checksum over the payload window of a frame.

use crate::consts::{CHECKSUM_OFFSET, FRAME_LEN, HEADER_LEN};

/// Adds one byte to a running checksum accumulator.
///
/// The accumulator is wide enough that a full window never overflows;
/// truncation happens once, in [`finish`].
pub(crate) fn sum_update(sum: u32, data: &u8) -> u32 {
    sum + *data as u32
}

/// Truncates an accumulator to the 8-bit checksum value.
pub(crate) fn finish(sum: u32) -> u8 {
    (sum & 0xff) as u8
}

/// Computes the checksum of a frame: the sum of offsets 4 through 15, modulo 256.
///
/// The header and the checksum byte itself are not part of the window, so the
/// current value at offset 16 does not matter.
pub fn window_checksum(frame: &[u8; FRAME_LEN]) -> u8 {
    finish(
        frame[HEADER_LEN..CHECKSUM_OFFSET]
            .iter()
            .fold(0, sum_update),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_excludes_header_and_checksum() {
        let mut frame = [0u8; FRAME_LEN];
        frame[..HEADER_LEN].copy_from_slice(&[0x55, 0xAA, 0x82, 0x0C]);
        frame[CHECKSUM_OFFSET] = 0x77;
        assert_eq!(window_checksum(&frame), 0);

        frame[HEADER_LEN] = 0x10;
        frame[CHECKSUM_OFFSET - 1] = 0x01;
        assert_eq!(window_checksum(&frame), 0x11);
    }

    #[test]
    fn test_window_wraps_modulo_256() {
        let frame = [0xffu8; FRAME_LEN];
        // 12 * 0xff = 0xbf4
        assert_eq!(window_checksum(&frame), 0xf4);
    }

    #[test]
    fn test_finish_truncates() {
        assert_eq!(finish(0x1ff), 0xff);
        assert_eq!(finish(0x100), 0x00);
        assert_eq!(sum_update(0xff, &0x01), 0x100);
    }
}
