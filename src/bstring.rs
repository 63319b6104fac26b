//! A PER-encoded BIT STRING.
//!
//! This is an internal module. It’s public types are re-exported by the
//! parent.

use std::fmt;
use bytes::Bytes;
use crate::constraint::SizeConstraint;
use crate::decode::{BitStreamReader, DecodeError};
use crate::encode::{BitStream, EncodeError};
use crate::length;
use crate::mode::Mode;
use crate::object::Asn1Object;
use crate::tag::Tag;


//------------ BitString -----------------------------------------------------

/// A `BIT STRING (SIZE (MIN..MAX))` value.
///
/// The bits are kept in octets, first bit in the most significant bit of
/// the first octet. Bits in the last octet beyond the length of the string
/// are always zero.
///
/// The encoding follows the same rules as that of an
/// [`OctetString`][crate::OctetString] with the thresholds counted in bits:
/// fixed size strings of up to 16 bits are just appended, longer fixed size
/// strings are octet-aligned in ALIGNED PER, and everything else is preceded
/// by a length determinant.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BitString<const MIN: usize, const MAX: usize> {
    /// The octets containing the bits.
    bits: Bytes,

    /// The number of bits.
    len: usize,
}

impl<const MIN: usize, const MAX: usize> BitString<MIN, MAX> {
    /// The size constraint of the type, in bits.
    pub const SIZE: SizeConstraint = SizeConstraint::bounded(MIN, MAX);

    /// Creates a new bit string from the first `len` bits of `octets`.
    ///
    /// Fails if `octets` is too short or if `len` violates the size
    /// constraint. Excess bits of the last octet are cleared.
    pub fn new(octets: &[u8], len: usize) -> Result<Self, EncodeError> {
        if !Self::SIZE.contains(len) || octets.len() * 8 < len {
            return Err(EncodeError::SizeConstraintViolated {
                count: len, min: MIN, max: MAX
            })
        }
        let mut bits = octets[..(len + 7) / 8].to_vec();
        if len % 8 != 0 {
            if let Some(last) = bits.last_mut() {
                *last &= 0xFFu8 << (8 - len % 8);
            }
        }
        Ok(BitString { bits: bits.into(), len })
    }

    /// Creates a new bit string from a sequence of bits.
    pub fn from_bits(bits: &[bool]) -> Result<Self, EncodeError> {
        let mut octets = vec![0u8; (bits.len() + 7) / 8];
        for (idx, &bit) in bits.iter().enumerate() {
            if bit {
                octets[idx / 8] |= 0x80 >> (idx % 8);
            }
        }
        Self::new(&octets, bits.len())
    }

    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the string has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bit with the given index.
    ///
    /// Bits beyond the end of the string are reported as clear.
    pub fn bit(&self, idx: usize) -> bool {
        if idx >= self.len {
            return false
        }
        self.bits[idx / 8] & (0x80 >> (idx % 8)) != 0
    }

    /// Returns an iterator over the bits.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |idx| self.bit(idx))
    }

    /// Returns the octets containing the bits.
    pub fn octets(&self) -> &[u8] {
        self.bits.as_ref()
    }

    /// Returns whether the fixed size short form is used.
    fn is_fixed() -> bool {
        MIN == MAX && MAX < 65536
    }

    /// Appends the bits without any length or padding.
    fn append_bits<M>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        let full = self.len / 8;
        target.append_bytes(&self.bits[..full]);
        let rest = self.len % 8;
        if rest > 0 {
            target.append_bits(u64::from(self.bits[full]) >> (8 - rest), rest)?;
        }
        Ok(())
    }

    /// Reads `len` bits into the value.
    fn read_bits<M>(
        &mut self, source: &mut BitStreamReader<M>, len: usize
    ) -> Result<(), DecodeError> {
        let mut bits = source.read_octets(len / 8)?.to_vec();
        let rest = len % 8;
        if rest > 0 {
            bits.push((source.read_bits(rest)? << (8 - rest)) as u8);
        }
        self.bits = bits.into();
        self.len = len;
        Ok(())
    }
}


//--- Default

/// The default value consists of `MIN` clear bits.
impl<const MIN: usize, const MAX: usize> Default for BitString<MIN, MAX> {
    fn default() -> Self {
        BitString {
            bits: Bytes::from(vec![0; (MIN + 7) / 8]),
            len: MIN,
        }
    }
}


//--- Asn1Object

impl<const MIN: usize, const MAX: usize> Asn1Object for BitString<MIN, MAX> {
    fn tag(&self) -> Option<Tag> {
        Some(Tag::BIT_STRING)
    }

    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        if !Self::SIZE.contains(self.len) {
            log::debug!(
                "bit string of {} bits violates {}", self.len, Self::SIZE
            );
            return Err(EncodeError::SizeConstraintViolated {
                count: self.len, min: MIN, max: MAX
            })
        }
        if MAX == 0 {
            return Ok(())
        }
        if Self::is_fixed() {
            if MAX > 16 {
                target.align();
            }
        }
        else {
            length::encode_length(target, self.len, Self::SIZE)?;
            if self.len > 0 {
                target.align();
            }
        }
        self.append_bits(target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        if MAX == 0 {
            *self = Self::default();
            return Ok(())
        }
        let len = if Self::is_fixed() {
            if MAX > 16 {
                source.align();
            }
            MAX
        }
        else {
            let len = length::decode_length(source, Self::SIZE)?;
            if len > 0 {
                source.align();
            }
            len
        };
        self.read_bits(source, len)
    }
}


//--- Debug

impl<const MIN: usize, const MAX: usize> fmt::Debug for BitString<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BitString(")?;
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        write!(f, ")")
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::{Aligned, Unaligned};
    use super::*;

    type Min = BitString<34, 34>;

    #[test]
    fn new_clears_excess_bits() {
        let bits = BitString::<0, 16>::new(&[0xFF, 0xFF], 10).unwrap();
        assert_eq!(bits.octets(), &[0xFF, 0xC0]);
        assert_eq!(bits.len(), 10);
        assert!(bits.bit(9));
        assert!(!bits.bit(10));
        assert!(BitString::<0, 16>::new(&[0xFF], 10).is_err());
        assert!(BitString::<0, 8>::new(&[0xFF, 0xFF], 10).is_err());
    }

    #[test]
    fn from_bits() {
        let bits = BitString::<1, 8>::from_bits(
            &[true, false, true, true]
        ).unwrap();
        assert_eq!(bits.octets(), &[0b1011_0000]);
        assert_eq!(
            bits.iter().collect::<Vec<_>>(), [true, false, true, true]
        );
        assert_eq!(format!("{:?}", bits), "BitString(1011)");
    }

    #[test]
    fn fixed_size() {
        let min = Min::new(&[0x12, 0x34, 0x56, 0x78, 0xC0], 34).unwrap();

        let mut stream = BitStream::<Aligned>::new();
        stream.append_bit(true);
        min.encode_per(&mut stream).unwrap();
        assert_eq!(stream.bit_len(), 8 + 34);
        assert_eq!(stream.as_slice(), &[0x80, 0x12, 0x34, 0x56, 0x78, 0xC0]);
        let mut reader = BitStreamReader::<Aligned>::new(stream.as_slice());
        reader.read_bit().unwrap();
        assert_eq!(Min::take_from(&mut reader).unwrap(), min);

        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bit(true);
        min.encode_per(&mut stream).unwrap();
        assert_eq!(stream.bit_len(), 35);
        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        reader.read_bit().unwrap();
        assert_eq!(Min::take_from(&mut reader).unwrap(), min);
    }

    #[test]
    fn short_fixed_size_is_not_aligned() {
        let bits = BitString::<3, 3>::from_bits(&[true, true, false]).unwrap();
        let mut stream = BitStream::<Aligned>::new();
        stream.append_bit(false);
        bits.encode_per(&mut stream).unwrap();
        assert_eq!(stream.bit_len(), 4);
        assert_eq!(stream.as_slice(), &[0b0110_0000]);
    }

    #[test]
    fn variable_size() {
        let bits = BitString::<0, 7>::from_bits(&[true, false]).unwrap();
        assert_eq!(bits.to_per_unaligned_vec().unwrap(), [0b0101_0000]);
        assert_eq!(
            BitString::<0, 7>::from_per_unaligned(&[0b0101_0000]).unwrap(),
            bits
        );
        assert_eq!(
            BitString::<0, 7>::from_per_aligned(
                &bits.to_per_aligned_vec().unwrap()
            ).unwrap(),
            bits
        );
    }
}
