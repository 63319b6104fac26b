//! A PER-encoded OCTET STRING.
//!
//! This is an internal module. It’s public types are re-exported by the
//! parent.

use std::{fmt, ops};
use bytes::Bytes;
use crate::constraint::SizeConstraint;
use crate::decode::{BitStreamReader, DecodeError};
use crate::encode::{BitStream, EncodeError};
use crate::length;
use crate::mode::Mode;
use crate::object::Asn1Object;
use crate::tag::Tag;


//------------ OctetString ---------------------------------------------------

/// An `OCTET STRING (SIZE (MIN..MAX))` value.
///
/// The octets are kept in a [`Bytes`] value so that decoded strings share
/// the allocation of the reader’s data where possible and cloning is
/// cheap.
///
/// How the string is encoded depends on the size constraint. An upper
/// bound of zero encodes nothing at all. If only a single size is
/// permitted, no length is encoded: strings of up to two octets are just
/// appended, longer strings below 64K are octet-aligned in ALIGNED PER.
/// In all other cases, a length determinant precedes the octets which are
/// octet-aligned in ALIGNED PER.
///
/// The size is checked when encoding, not when creating a value.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OctetString<const MIN: usize, const MAX: usize>(Bytes);

impl<const MIN: usize, const MAX: usize> OctetString<MIN, MAX> {
    /// The size constraint of the type.
    pub const SIZE: SizeConstraint = SizeConstraint::bounded(MIN, MAX);

    /// Creates a new octet string, checking its size.
    pub fn new(octets: Bytes) -> Result<Self, EncodeError> {
        if Self::SIZE.contains(octets.len()) {
            Ok(OctetString(octets))
        }
        else {
            Err(EncodeError::SizeConstraintViolated {
                count: octets.len(), min: MIN, max: MAX
            })
        }
    }

    /// Creates a new octet string by copying a slice.
    pub fn from_slice(octets: &[u8]) -> Result<Self, EncodeError> {
        Self::new(Bytes::copy_from_slice(octets))
    }

    /// Creates a new octet string without checking its size.
    pub fn new_unchecked(octets: Bytes) -> Self {
        OctetString(octets)
    }

    /// Returns the octets.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Converts the value into its octets.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Returns whether the fixed size short form is used.
    fn is_fixed() -> bool {
        MIN == MAX && MAX < 65536
    }
}


//--- Default

/// The default value consists of `MIN` zero octets.
impl<const MIN: usize, const MAX: usize> Default for OctetString<MIN, MAX> {
    fn default() -> Self {
        OctetString(Bytes::from(vec![0; MIN]))
    }
}


//--- Deref and AsRef

impl<const MIN: usize, const MAX: usize> ops::Deref for OctetString<MIN, MAX> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const MIN: usize, const MAX: usize> AsRef<[u8]> for OctetString<MIN, MAX> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}


//--- Asn1Object

impl<const MIN: usize, const MAX: usize> Asn1Object for OctetString<MIN, MAX> {
    fn tag(&self) -> Option<Tag> {
        Some(Tag::OCTET_STRING)
    }

    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        let len = self.0.len();
        if !Self::SIZE.contains(len) {
            log::debug!(
                "octet string of {} octets violates {}", len, Self::SIZE
            );
            return Err(EncodeError::SizeConstraintViolated {
                count: len, min: MIN, max: MAX
            })
        }
        if MAX == 0 {
            return Ok(())
        }
        if Self::is_fixed() {
            if MAX > 2 {
                target.align();
            }
        }
        else {
            length::encode_length(target, len, Self::SIZE)?;
            if len > 0 {
                target.align();
            }
        }
        target.append_bytes(self.as_slice());
        Ok(())
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        if MAX == 0 {
            self.0 = Bytes::new();
            return Ok(())
        }
        let len = if Self::is_fixed() {
            if MAX > 2 {
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
        self.0 = source.read_octets(len)?;
        Ok(())
    }
}


//--- Debug

impl<const MIN: usize, const MAX: usize> fmt::Debug for OctetString<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OctetString(")?;
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
    fn new_checks_size() {
        assert!(OctetString::<4, 4>::from_slice(b"1234").is_ok());
        assert_eq!(
            OctetString::<4, 4>::from_slice(b"123"),
            Err(EncodeError::SizeConstraintViolated {
                count: 3, min: 4, max: 4
            })
        );
        assert_eq!(OctetString::<8, 8>::default().len(), 8);
        assert!(OctetString::<0, 4>::default().is_empty());
    }

    #[test]
    fn fixed_size_is_aligned() {
        let ip = OctetString::<4, 4>::from_slice(&[192, 168, 0, 1]).unwrap();

        let mut stream = BitStream::<Aligned>::new();
        stream.append_bit(true);
        ip.encode_per(&mut stream).unwrap();
        assert_eq!(stream.as_slice(), &[0x80, 192, 168, 0, 1]);
        let mut reader = BitStreamReader::<Aligned>::new(stream.as_slice());
        reader.read_bit().unwrap();
        assert_eq!(OctetString::<4, 4>::take_from(&mut reader).unwrap(), ip);

        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bit(true);
        ip.encode_per(&mut stream).unwrap();
        assert_eq!(stream.bit_len(), 33);
        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        reader.read_bit().unwrap();
        assert_eq!(OctetString::<4, 4>::take_from(&mut reader).unwrap(), ip);
    }

    #[test]
    fn short_fixed_size_is_not_aligned() {
        let short = OctetString::<2, 2>::from_slice(&[0xAB, 0xCD]).unwrap();
        let mut stream = BitStream::<Aligned>::new();
        stream.append_bit(true);
        short.encode_per(&mut stream).unwrap();
        assert_eq!(stream.bit_len(), 17);
        assert_eq!(stream.as_slice(), &[0xD5, 0xE6, 0x80]);
    }

    #[test]
    fn variable_size() {
        let value = OctetString::<1, 8>::from_slice(b"ab").unwrap();
        // Length 2 as offset 1 in three bits, then the aligned octets.
        assert_eq!(
            value.to_per_aligned_vec().unwrap(),
            [0b0010_0000, b'a', b'b']
        );
        assert_eq!(
            value.to_per_unaligned_vec().unwrap(),
            [0b0010_1100, 0b0010_1100, 0b0100_0000]
        );
        assert_eq!(
            OctetString::<1, 8>::from_per_unaligned(
                &[0b0010_1100, 0b0010_1100, 0b0100_0000]
            ).unwrap(),
            value
        );

        let empty = OctetString::<0, 8>::default();
        assert_eq!(empty.encode_per_aligned().unwrap().bit_len(), 4);
        assert!(OctetString::<0, 0>::default()
            .encode_per_aligned().unwrap().is_empty()
        );
    }

    #[test]
    fn encode_checks_size() {
        let value = OctetString::<1, 8>::new_unchecked(Bytes::new());
        assert_eq!(
            value.encode_per_unaligned(),
            Err(EncodeError::SizeConstraintViolated {
                count: 0, min: 1, max: 8
            })
        );
    }

    #[test]
    fn truncated() {
        assert!(
            OctetString::<8, 8>::from_per_unaligned(&[1, 2, 3]).unwrap_err()
                .is_end_of_stream()
        );
    }
}
