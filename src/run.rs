//! The frame loop: source to encoder to transmitter.
//!
//! [`run_frame_loop`] asks the source whether input remains, takes the next
//! input, encodes it and sends it, until the source is exhausted. It is fully
//! sequential: one input is read only after the previous frame has drained.

use embedded_hal_nb::serial::Write;

use crate::driver::Transmitter;
use crate::encoding::IntoFrame;
use crate::error::Result;
use crate::source::SampleSource;

/// Counts reported by a completed [`run_frame_loop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct RunSummary {
    /// Frames sent in full during this run.
    pub frames: u32,
    /// Bytes written and drained during this run.
    pub bytes: u32,
}

/// Sends one frame per input until `source` is exhausted.
///
/// An empty source never touches the transport. The first transport or source
/// error aborts the run and is returned as-is; the frame in flight is not
/// retried.
///
/// # Example
/// ```rust
/// # use embedded_hal_mock::eh1::serial::{Mock as Serial, Transaction};
/// use touchframe::driver::Transmitter;
/// use touchframe::encoding::PEN_TAP;
/// use touchframe::run::run_frame_loop;
/// use touchframe::source::TableSource;
///
/// # let expectations: Vec<_> = PEN_TAP
/// #     .iter()
/// #     .flat_map(|l| *touchframe::encoding::IntoFrame::to_frame(l).as_bytes())
/// #     .flat_map(|b| [Transaction::write(b), Transaction::flush()])
/// #     .collect();
/// # let serial = Serial::new(&expectations);
/// let mut tx = Transmitter::new(serial);
/// let summary = run_frame_loop(&mut TableSource::new(&PEN_TAP), &mut tx).unwrap();
/// assert_eq!(summary.frames, 2);
/// assert_eq!(summary.bytes, 34);
/// # tx.release().done();
/// ```
pub fn run_frame_loop<S, W>(
    source: &mut S,
    tx: &mut Transmitter<W>,
) -> Result<RunSummary, W::Error>
where
    S: SampleSource + ?Sized,
    W: Write<u8>,
{
    let start_frames = tx.frames_sent();
    let start_bytes = tx.bytes_sent();
    debug!("frame loop started");

    while source.has_next() {
        let input = source.next_input()?;
        tx.send(&input.to_frame())?;
    }

    let summary = RunSummary {
        frames: tx.frames_sent().wrapping_sub(start_frames),
        bytes: tx.bytes_sent().wrapping_sub(start_bytes),
    };
    debug!(
        "frame loop finished: {} frames, {} bytes",
        summary.frames,
        summary.bytes
    );
    Ok(summary)
}
