//! Reading bits from encoded data.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use std::marker::PhantomData;
use bitvec::prelude::*;
use bitvec::field::BitField;
use bytes::Bytes;
use crate::mode::Mode;
use super::error::{DecodeError, DecodeErrorKind};


//------------ BitStreamReader -----------------------------------------------

/// A source of bits from a slice of encoded octets.
///
/// Bits are consumed most significant bit first, starting with the first
/// octet. The reader never advances past the end of the slice: any request
/// for more bits than are left fails with an
/// [`UnexpectedEndOfStream`][DecodeErrorKind::UnexpectedEndOfStream] error
/// and leaves the reader where it was.
///
/// The type parameter `M` selects the PER variant. It only affects
/// [`align`][Self::align] which is a no-op for the unaligned variant.
#[derive(Clone, Debug)]
pub struct BitStreamReader<'a, M> {
    /// The encoded data.
    data: &'a BitSlice<u8, Msb0>,

    /// The index of the next bit to read.
    pos: usize,

    /// A marker for the mode.
    marker: PhantomData<M>,
}

impl<'a, M> BitStreamReader<'a, M> {
    /// Creates a new reader starting at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        BitStreamReader {
            data: data.view_bits::<Msb0>(),
            pos: 0,
            marker: PhantomData,
        }
    }

    /// Returns the current position for use in error reports.
    pub fn pos(&self) -> Pos {
        self.pos.into()
    }

    /// Returns the number of bits left in the reader.
    ///
    /// After decoding a complete message, anything beyond the final
    /// padding to an octet boundary is trailing data.
    pub fn bits_left(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns whether the reader currently sits on an octet boundary.
    pub fn is_octet_aligned(&self) -> bool {
        self.pos % 8 == 0
    }

    /// Returns an error of the given kind at the current position.
    pub fn err(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(kind, self.pos())
    }

    /// Checks that at least `count` bits are left.
    fn check_available(&self, count: usize) -> Result<(), DecodeError> {
        if count > self.bits_left() {
            Err(self.err(DecodeErrorKind::UnexpectedEndOfStream {
                requested: count,
                available: self.bits_left(),
            }))
        }
        else {
            Ok(())
        }
    }

    /// Reads a single bit.
    pub fn read_bit(&mut self) -> Result<bool, DecodeError> {
        self.check_available(1)?;
        let res = self.data[self.pos];
        self.pos += 1;
        Ok(res)
    }

    /// Reads the next `count` bits as an unsigned integer.
    ///
    /// The first bit read becomes the most significant bit of the result.
    /// Reading zero bits returns zero without touching the reader.
    pub fn read_bits(&mut self, count: usize) -> Result<u64, DecodeError> {
        if count > 64 {
            return Err(self.err(DecodeErrorKind::TooManyBits(count)))
        }
        self.check_available(count)?;
        if count == 0 {
            return Ok(0)
        }
        let res = self.take(count).load_be::<u64>();
        Ok(res)
    }

    /// Reads `len` octets.
    ///
    /// The octets do not need to start on an octet boundary; use
    /// [`align`][Self::align] first where the encoding rules require it.
    pub fn read_octets(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        self.check_available(len.saturating_mul(8))?;
        Ok(
            self.take(len * 8).chunks(8).map(BitField::load_be::<u8>)
                .collect::<Vec<u8>>().into()
        )
    }

    /// Skips over `count` bits.
    pub fn skip_bits(&mut self, count: usize) -> Result<(), DecodeError> {
        self.check_available(count)?;
        self.pos += count;
        Ok(())
    }

    /// Consumes the next `count` bits which must be available.
    fn take(&mut self, count: usize) -> &'a BitSlice<u8, Msb0> {
        let res = &self.data[self.pos..self.pos + count];
        self.pos += count;
        res
    }
}

impl<'a, M: Mode> BitStreamReader<'a, M> {
    /// Skips to the next octet boundary in the aligned variant.
    ///
    /// The padding bits are not checked. If the reader is already on a
    /// boundary or the variant is unaligned, nothing happens. Since the
    /// padding never extends past the final octet of the data, this cannot
    /// fail.
    pub fn align(&mut self) {
        if M::ALIGNED {
            self.pos = (self.pos + 7) & !7;
        }
    }
}


//------------ Pos -----------------------------------------------------------

/// The logical bit position within a reader.
///
/// Values of this type can only be used for diagnostics. This is why we
/// use a newtype.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pos(usize);

impl Pos {
    /// Returns the position as a bit index.
    pub fn bits(self) -> usize {
        self.0
    }
}

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}


//============ Tests =========================================================
