//! The bit stream encoders write to.
//!
//! This is a private module. The relevant items are re-exported by the
//! parent.

use std::fmt;
use std::marker::PhantomData;
use bitvec::prelude::*;
use bytes::Bytes;
use crate::mode::Mode;
use super::error::EncodeError;


//------------ BitStream -----------------------------------------------------

/// An append-only sequence of bits.
///
/// Encoders append their bits to the end of the stream, most significant
/// bit first. Bits that have not been written yet in the last octet are
/// always zero, so the stream can be turned into octets at any time.
///
/// The type parameter `M` selects the PER variant. It only affects
/// [`align`][Self::align], which pads to the next octet boundary in the
/// aligned variant and does nothing in the unaligned one. Since alignment
/// is relative to the start of the complete encoding, fragments are only
/// ever appended to the stream of the enclosing value, never encoded
/// separately and concatenated, except for open types which are padded
/// anyway.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct BitStream<M> {
    /// The bits of the stream.
    bits: BitVec<u8, Msb0>,

    /// A marker for the mode.
    marker: PhantomData<M>,
}

impl<M> BitStream<M> {
    /// Creates a new, empty stream.
    pub fn new() -> Self {
        BitStream {
            bits: BitVec::new(),
            marker: PhantomData,
        }
    }

    /// Returns the number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Returns whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns whether the next bit starts a new octet.
    pub fn is_octet_aligned(&self) -> bool {
        self.bits.len() % 8 == 0
    }

    /// Appends a single bit.
    pub fn append_bit(&mut self, bit: bool) {
        self.bits.push(bit);
        self.clear_tail();
    }

    /// Appends the low `count` bits of `value`.
    ///
    /// The bits are appended starting with the most significant of them.
    /// Any higher bits of `value` are ignored. Appending zero bits does
    /// nothing.
    pub fn append_bits(
        &mut self, value: u64, count: usize
    ) -> Result<(), EncodeError> {
        if count > 64 {
            return Err(EncodeError::TooManyBits(count))
        }
        self.extend(&value.view_bits::<Msb0>()[64 - count..]);
        Ok(())
    }

    /// Appends all octets of `bytes`.
    ///
    /// The octets are appended at the current bit position which needn’t
    /// be on an octet boundary.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.extend(bytes.view_bits::<Msb0>());
    }

    /// Appends the bits of another stream.
    pub fn append_stream(&mut self, other: &BitStream<M>) {
        self.extend(other.bits.as_bitslice());
    }

    /// Pads the stream with zero bits to the next octet boundary.
    ///
    /// Unlike [`align`][Self::align] this happens for both variants. It is
    /// used for complete encodings and open types.
    pub fn pad_to_octet(&mut self) {
        let len = (self.bits.len() + 7) & !7;
        self.bits.resize(len, false);
    }

    /// Returns the octets of the stream.
    ///
    /// The slice is exactly `ceil(bit_len / 8)` octets long with any unused
    /// bits in the last octet set to zero.
    pub fn as_slice(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Returns the octets of the stream as a vec.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Converts the stream into its octets.
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.bits.into_vec())
    }

    fn extend<T: BitStore, O: BitOrder>(&mut self, bits: &BitSlice<T, O>) {
        self.bits.extend_from_bitslice(bits);
        self.clear_tail();
    }

    /// Zeroes the bits of the last octet that are not part of the stream.
    fn clear_tail(&mut self) {
        self.bits.set_uninitialized(false);
    }
}

impl<M: Mode> BitStream<M> {
    /// Pads to the next octet boundary in the aligned variant.
    ///
    /// Does nothing in the unaligned variant or if the stream is already
    /// on a boundary.
    pub fn align(&mut self) {
        if M::ALIGNED {
            self.pad_to_octet()
        }
    }
}


//--- AsRef

impl<M> AsRef<[u8]> for BitStream<M> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}


//--- Debug

impl<M> fmt::Debug for BitStream<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BitStream({} bits: ", self.bit_len())?;
        for octet in self.as_slice() {
            write!(f, "{:02x}", octet)?;
        }
        write!(f, ")")
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::{Aligned, Unaligned};
    use super::*;

    #[test]
    fn append_bits_msb_first() {
        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bits(0b101, 3).unwrap();
        stream.append_bits(0b0010100, 7).unwrap();
        stream.append_bits(0b111100, 6).unwrap();
        assert_eq!(stream.bit_len(), 16);
        assert_eq!(stream.as_slice(), &[0xA5, 0x3C]);
    }

    #[test]
    fn append_ignores_high_bits() {
        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bits(0xFF, 2).unwrap();
        assert_eq!(stream.as_slice(), &[0b1100_0000]);
        assert_eq!(stream.bit_len(), 2);
    }

    #[test]
    fn append_limits() {
        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bits(12, 0).unwrap();
        assert!(stream.is_empty());
        stream.append_bit(true);
        stream.append_bits(u64::MAX, 64).unwrap();
        assert_eq!(stream.bit_len(), 65);
        assert_eq!(stream.to_vec().len(), 9);
        assert_eq!(
            stream.append_bits(0, 65),
            Err(EncodeError::TooManyBits(65))
        );
    }

    #[test]
    fn byte_array_length() {
        let mut stream = BitStream::<Unaligned>::new();
        for bits in 1..=17 {
            stream.append_bit(bits % 2 == 0);
            assert_eq!(stream.to_vec().len(), (bits + 7) / 8);
        }
    }

    #[test]
    fn append_bytes_unaligned() {
        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bit(true);
        stream.append_bytes(&[0x01, 0x02]);
        assert_eq!(stream.as_slice(), &[0x80, 0x81, 0x00]);
        assert_eq!(stream.bit_len(), 17);
    }

    #[test]
    fn align_depends_on_mode() {
        let mut stream = BitStream::<Aligned>::new();
        stream.append_bit(true);
        stream.align();
        stream.append_bits(0x42, 8).unwrap();
        assert_eq!(stream.as_slice(), &[0x80, 0x42]);

        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bit(true);
        stream.align();
        stream.append_bits(0x42, 8).unwrap();
        assert_eq!(stream.as_slice(), &[0xA1, 0x00]);
        assert_eq!(stream.bit_len(), 9);
    }

    #[test]
    fn append_stream() {
        let mut inner = BitStream::<Unaligned>::new();
        inner.append_bits(0b1_0110_1101, 9).unwrap();
        let mut outer = BitStream::<Unaligned>::new();
        outer.append_bits(0b01, 2).unwrap();
        outer.append_stream(&inner);
        assert_eq!(outer.bit_len(), 11);
        assert_eq!(outer.as_slice(), &[0b0110_1101, 0b1010_0000]);
    }

    #[test]
    fn bytes_after_odd_bits() {
        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bits(0b101, 3).unwrap();
        stream.append_bytes(&[0xFF, 0x00, 0xC3]);
        assert_eq!(stream.bit_len(), 27);
        assert_eq!(stream.as_slice(), &[0xBF, 0xE0, 0x18, 0x60]);

        let mut inner = BitStream::<Unaligned>::new();
        inner.append_bits(0x7F, 7).unwrap();
        stream.append_stream(&inner);
        assert_eq!(stream.bit_len(), 34);
        assert_eq!(
            stream.into_bytes().as_ref(),
            &[0xBF, 0xE0, 0x18, 0x7F, 0xC0]
        );
    }

    #[test]
    fn padding_is_zero() {
        let mut stream = BitStream::<Aligned>::new();
        stream.append_bits(u64::MAX, 13).unwrap();
        stream.align();
        assert_eq!(stream.bit_len(), 16);
        stream.append_bit(true);
        assert_eq!(stream.as_slice(), &[0xFF, 0xF8, 0x80]);
        stream.pad_to_octet();
        stream.pad_to_octet();
        assert_eq!(stream.to_vec(), [0xFF, 0xF8, 0x80]);
    }
}
