//! Sample sources feeding the frame loop.
//!
//! A [`SampleSource`] yields one encodable input at a time until it reports
//! exhaustion through [`SampleSource::has_next`]. Three adapters are provided:
//!
//! | Source             | Input                           | Item             |
//! |--------------------|---------------------------------|------------------|
//! | [`SliceSource`]    | in-memory byte stream           | [`RawSample`]    |
//! | [`TableSource`]    | fixed table of pre-built frames | [`FrameLiteral`] |
//! | `ReaderSource`     | `std::io::BufRead` (feature `std`) | [`RawSample`] |
//!
//! Stream-backed sources cut the input into consecutive 16-byte records. What
//! happens to a trailing partial record is decided by [`UnderrunPolicy`].

use crate::consts::SAMPLE_LEN;
use crate::encoding::{FrameLiteral, IntoFrame, RawSample};
use crate::error::SourceError;

/// How a stream-backed source treats a trailing record shorter than 16 bytes.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum UnderrunPolicy {
    /// Fail with [`SourceError::Underrun`]. Frames before the partial record
    /// are still produced.
    #[default]
    Reject,
    /// Pad the partial record with zeros and encode it.
    ZeroFill,
}

impl UnderrunPolicy {
    /// Turns `available` bytes of a partial record into a sample, or an error.
    fn apply(self, partial: &[u8]) -> Result<RawSample, SourceError> {
        match self {
            UnderrunPolicy::Reject => Err(SourceError::Underrun {
                available: partial.len(),
            }),
            UnderrunPolicy::ZeroFill => {
                warn!("zero-filling partial sample of {} bytes", partial.len());
                let mut buf = [0u8; SAMPLE_LEN];
                buf[..partial.len()].copy_from_slice(partial);
                Ok(RawSample::new(buf))
            }
        }
    }
}

/// A sequential supplier of frame inputs.
pub trait SampleSource {
    /// The input unit this source yields.
    type Item: IntoFrame;

    /// Returns `true` while at least one more input remains.
    ///
    /// Must not consume input.
    fn has_next(&mut self) -> bool;

    /// Takes the next input.
    ///
    /// # Errors
    /// - [`SourceError::Exhausted`] if called after `has_next` returned `false`
    /// - [`SourceError::Underrun`] for a partial trailing record under [`UnderrunPolicy::Reject`]
    fn next_input(&mut self) -> Result<Self::Item, SourceError>;
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next_input(&mut self) -> Result<Self::Item, SourceError> {
        (**self).next_input()
    }
}

/// Stream-mode source over an in-memory byte buffer.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    rest: &'a [u8],
    policy: UnderrunPolicy,
}

impl<'a> SliceSource<'a> {
    /// Creates a source reading consecutive 16-byte samples from `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            rest: bytes,
            policy: UnderrunPolicy::default(),
        }
    }

    /// Sets the policy for a trailing partial sample.
    pub fn with_underrun_policy(mut self, policy: UnderrunPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        self.rest
    }
}

impl SampleSource for SliceSource<'_> {
    type Item = RawSample;

    fn has_next(&mut self) -> bool {
        !self.rest.is_empty()
    }

    fn next_input(&mut self) -> Result<RawSample, SourceError> {
        if self.rest.is_empty() {
            return Err(SourceError::Exhausted);
        }
        let take = self.rest.len().min(SAMPLE_LEN);
        let (record, rest) = self.rest.split_at(take);
        self.rest = rest;
        if record.len() < SAMPLE_LEN {
            return self.policy.apply(record);
        }
        RawSample::from_slice(record)
    }
}

/// Table-mode source over a fixed, ordered list of pre-built frames.
///
/// ```rust
/// use touchframe::encoding::PEN_TAP;
/// use touchframe::source::{SampleSource, TableSource};
///
/// let mut source = TableSource::new(&PEN_TAP);
/// let mut count = 0;
/// while source.has_next() {
///     let _ = source.next_input().unwrap();
///     count += 1;
/// }
/// assert_eq!(count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TableSource<'a> {
    table: &'a [FrameLiteral],
    index: usize,
}

impl<'a> TableSource<'a> {
    /// Creates a source yielding each entry of `table` once, in order.
    pub fn new(table: &'a [FrameLiteral]) -> Self {
        Self { table, index: 0 }
    }
}

impl SampleSource for TableSource<'_> {
    type Item = FrameLiteral;

    fn has_next(&mut self) -> bool {
        self.index < self.table.len()
    }

    fn next_input(&mut self) -> Result<FrameLiteral, SourceError> {
        let literal = *self.table.get(self.index).ok_or(SourceError::Exhausted)?;
        self.index += 1;
        Ok(literal)
    }
}

#[cfg(feature = "std")]
pub use reader::ReaderSource;

#[cfg(feature = "std")]
mod reader {
    use std::io::{BufRead, ErrorKind};

    use super::{SampleSource, UnderrunPolicy};
    use crate::consts::SAMPLE_LEN;
    use crate::encoding::RawSample;
    use crate::error::SourceError;

    /// Stream-mode source over any buffered reader, such as a `BufReader<File>`.
    ///
    /// `has_next` peeks at the reader's buffer without consuming it. A read
    /// error seen while peeking is reported by the following `next_input`.
    #[derive(Debug)]
    pub struct ReaderSource<R> {
        reader: R,
        policy: UnderrunPolicy,
    }

    impl<R: BufRead> ReaderSource<R> {
        /// Creates a source reading consecutive 16-byte samples from `reader`.
        pub fn new(reader: R) -> Self {
            Self {
                reader,
                policy: UnderrunPolicy::default(),
            }
        }

        /// Sets the policy for a trailing partial sample.
        pub fn with_underrun_policy(mut self, policy: UnderrunPolicy) -> Self {
            self.policy = policy;
            self
        }

        /// Returns the underlying reader.
        pub fn into_inner(self) -> R {
            self.reader
        }

        /// Reads until `buf` is full or the stream ends, returning the count read.
        fn fill(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let mut filled = 0;
            while filled < buf.len() {
                match self.reader.read(&mut buf[filled..]) {
                    Ok(0) => break,
                    Ok(n) => filled += n,
                    Err(e) if e.kind() == ErrorKind::Interrupted => {}
                    Err(e) => return Err(e),
                }
            }
            Ok(filled)
        }
    }

    impl<R: BufRead> SampleSource for ReaderSource<R> {
        type Item = RawSample;

        fn has_next(&mut self) -> bool {
            self.reader.fill_buf().map_or(true, |buf| !buf.is_empty())
        }

        fn next_input(&mut self) -> Result<RawSample, SourceError> {
            let mut buf = [0u8; SAMPLE_LEN];
            match self.fill(&mut buf)? {
                0 => Err(SourceError::Exhausted),
                SAMPLE_LEN => Ok(RawSample::new(buf)),
                n => self.policy.apply(&buf[..n]),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::consts::PEN_DOWN;
    use crate::encoding::PEN_TAP;

    fn stream(samples: &[RawSample]) -> Vec<u8> {
        samples.iter().flat_map(|s| *s.as_bytes()).collect()
    }

    /// Reader whose every read fails.
    #[cfg(feature = "std")]
    #[derive(Debug)]
    pub(crate) struct BrokenReader;

    #[cfg(feature = "std")]
    impl std::io::Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[cfg(feature = "std")]
    impl std::io::BufRead for BrokenReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn test_slice_source_yields_consecutive_samples() {
        let a = RawSample::point(PEN_DOWN, 1, 2);
        let b = RawSample::point(PEN_DOWN, 3, 4);
        let bytes = stream(&[a, b]);
        let mut source = SliceSource::new(&bytes);

        assert!(source.has_next());
        assert_eq!(source.next_input().unwrap(), a);
        assert!(source.has_next());
        assert_eq!(source.next_input().unwrap(), b);
        assert!(!source.has_next());
        assert!(matches!(source.next_input(), Err(SourceError::Exhausted)));
    }

    #[test]
    fn test_empty_slice_source() {
        let mut source = SliceSource::new(&[]);
        assert!(!source.has_next());
        assert!(matches!(source.next_input(), Err(SourceError::Exhausted)));
    }

    #[test]
    fn test_slice_source_rejects_partial_tail() {
        let mut bytes = stream(&[RawSample::point(PEN_DOWN, 1, 2)]);
        bytes.extend_from_slice(&[0u8; 5]);
        let mut source = SliceSource::new(&bytes);

        assert!(source.next_input().is_ok());
        assert!(source.has_next());
        assert!(matches!(
            source.next_input(),
            Err(SourceError::Underrun { available: 5 })
        ));
        assert!(!source.has_next());
    }

    #[test]
    fn test_slice_source_zero_fills_partial_tail() {
        let bytes = [0, 0, 0, 0, PEN_DOWN, 0, 0x34, 0x12];
        let mut source = SliceSource::new(&bytes).with_underrun_policy(UnderrunPolicy::ZeroFill);

        let sample = source.next_input().unwrap();
        assert_eq!(sample.direction(), PEN_DOWN);
        assert_eq!(sample.x(), 0x1234);
        assert_eq!(sample.y(), 0);
        assert!(source.remaining().is_empty());
    }

    #[test]
    fn test_table_source_in_order() {
        let mut source = TableSource::new(&PEN_TAP);
        assert_eq!(source.next_input().unwrap(), PEN_TAP[0]);
        assert_eq!(source.next_input().unwrap(), PEN_TAP[1]);
        assert!(!source.has_next());
        assert!(matches!(source.next_input(), Err(SourceError::Exhausted)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_reader_source_matches_slice_source() {
        let bytes = stream(&[
            RawSample::point(PEN_DOWN, 0x0fff, 0x0fff),
            RawSample::point(crate::consts::PEN_UP, 0x0fff, 0x0fff),
        ]);
        let mut from_reader = ReaderSource::new(std::io::Cursor::new(bytes.clone()));
        let mut from_slice = SliceSource::new(&bytes);

        while from_slice.has_next() {
            assert!(from_reader.has_next());
            assert_eq!(
                from_reader.next_input().unwrap(),
                from_slice.next_input().unwrap()
            );
        }
        assert!(!from_reader.has_next());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_reader_source_partial_tail() {
        let bytes = vec![PEN_DOWN; 20];
        let mut source = ReaderSource::new(std::io::Cursor::new(bytes.clone()));
        assert!(source.next_input().is_ok());
        assert!(matches!(
            source.next_input(),
            Err(SourceError::Underrun { available: 4 })
        ));

        let mut source = ReaderSource::new(std::io::Cursor::new(bytes))
            .with_underrun_policy(UnderrunPolicy::ZeroFill);
        assert!(source.next_input().is_ok());
        let tail = source.next_input().unwrap();
        assert_eq!(tail.as_bytes()[..4], [PEN_DOWN; 4]);
        assert_eq!(tail.as_bytes()[4..], [0; 12]);
        assert!(!source.has_next());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_reader_error_surfaces_on_next_input() {
        let mut source = ReaderSource::new(BrokenReader);

        assert!(source.has_next());
        match source.next_input() {
            Err(SourceError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
