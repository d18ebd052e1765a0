//! # touchframe
//!
//! A portable, no_std Rust encoder and transmitter for single-point digitizer
//! (touch/pen) frames sent over a serial line.
//!
//! Every input sample becomes one fixed 17-byte frame:
//!
//! ```text
//! 55 AA 82 0C | dir 00 Xl Xh Yl Yh 00 00 B0 00 00 01 | sum
//! ```
//!
//! where `sum` is the 8-bit wrapping sum of the 12 payload bytes. Frames are
//! written one byte at a time, and the serial port is drained after every byte
//! before the next one is queued.
//!
//! ## Crate features
//! | Feature     | Description |
//! |-------------|-------------|
//! | `std`       | Disables `#![no_std]`, adds `source::ReaderSource` and the `io` port adapter |
//! | `defmt-0-3` | Uses `defmt` logging and derives `defmt::Format` on public data types |
//! | `log`       | Uses `log` logging |
//!
//! ## Pipeline
//!
//! - [`source`]: where inputs come from (byte stream, fixed table, or `std` reader)
//! - [`encoding`]: sample to frame mapping and checksum
//! - [`driver`]: drained byte-by-byte [`Transmitter`](driver::Transmitter)
//! - [`run`]: the loop tying them together
//!
//! ## Usage
//!
//! ```rust,ignore
//! use touchframe::driver::Transmitter;
//! use touchframe::run::run_frame_loop;
//! use touchframe::source::SliceSource;
//!
//! let mut tx = Transmitter::new(uart);
//! let summary = run_frame_loop(&mut SliceSource::new(SAMPLES), &mut tx)?;
//! let uart = tx.release();
//! ```
//!
//! The serial port must be configured (baud rate, 8 data bits, no parity, one
//! stop bit, no flow control, or whatever the receiver expects) before it is
//! handed to the transmitter.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod fmt;

pub(crate) mod checksum;
pub mod consts;
pub mod driver;
pub mod encoding;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
pub mod run;
pub mod source;

pub use checksum::window_checksum;
pub use driver::Transmitter;
pub use encoding::{Frame, FrameLiteral, IntoFrame, RawSample};
pub use error::{Error, FrameError, SourceError};
pub use run::{RunSummary, run_frame_loop};
pub use source::{SampleSource, SliceSource, TableSource, UnderrunPolicy};
