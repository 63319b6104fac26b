//! Whole numbers and length determinants.
//!
//! Everything in PER that is a count or a bounded integer ends up as one of
//! the encodings in this module, defined in clause 10 of X.691:
//!
//! * a _constrained whole number_ for values with a known lower and upper
//!   bound (10.5),
//! * a _normally small non-negative whole number_ for CHOICE and ENUMERATED
//!   extension indexes (10.6),
//! * a _length determinant_, either constrained by a size constraint or
//!   unconstrained (10.9),
//! * and _open types_ which wrap a complete encoding with an unconstrained
//!   length so it can be skipped (10.2).
//!
//! Fragmented length determinants for 16K items or more are not supported.
//! Nothing in the SUPL schemas comes close to that size.

use bytes::Bytes;
use crate::constraint::SizeConstraint;
use crate::decode::{BitStreamReader, DecodeError, DecodeErrorKind};
use crate::encode::{BitStream, EncodeError};
use crate::mode::Mode;


//------------ Constants -----------------------------------------------------

/// 64K, the range where the aligned variant switches to a length prefix.
const K64: u128 = 65536;

/// 16K, the first length that needs fragmentation.
const K16: usize = 16384;


//------------ Widths --------------------------------------------------------

/// Returns the number of bits needed to express `value`.
fn bit_width(value: u128) -> usize {
    (128 - value.leading_zeros()) as usize
}

/// Returns the number of octets needed to express `value`, at least one.
fn octet_width(value: u128) -> usize {
    ((bit_width(value) + 7) / 8).max(1)
}

/// Returns the bit width of a constrained whole number in UNALIGNED PER.
///
/// This is `ceil(log2(range))`, where `range` is the number of permitted
/// values, i.e., `ub - lb + 1`. A range of one needs no bits at all.
pub fn constrained_bit_width(range: u128) -> usize {
    if range <= 1 {
        0
    }
    else {
        bit_width(range - 1)
    }
}

/// Returns the number of permitted values between `lb` and `ub`.
///
/// Returns zero if `ub` is smaller than `lb`.
fn value_range(lb: i64, ub: i64) -> u128 {
    if ub < lb {
        0
    }
    else {
        (i128::from(ub) - i128::from(lb) + 1) as u128
    }
}


//------------ Constrained Whole Numbers -------------------------------------

/// Writes an offset from the lower bound of a constrained whole number.
///
/// In the unaligned variant this is always the minimal bit-field. In the
/// aligned variant, ranges up to 255 also use the minimal bit-field, a
/// range of exactly 256 uses one octet-aligned octet, ranges up to 64K two
/// octet-aligned octets, and larger ranges the minimal number of octets
/// preceded by their count as a constrained whole number.
fn write_offset<M: Mode>(
    target: &mut BitStream<M>, offset: u64, range: u128
) -> Result<(), EncodeError> {
    if range <= 1 {
        return Ok(())
    }
    if !M::ALIGNED || range < 256 {
        return target.append_bits(offset, constrained_bit_width(range))
    }
    if range == 256 {
        target.align();
        return target.append_bits(offset, 8)
    }
    if range <= K64 {
        target.align();
        return target.append_bits(offset, 16)
    }
    let max_octets = octet_width(range - 1);
    let octets = octet_width(u128::from(offset));
    write_offset(target, (octets - 1) as u64, max_octets as u128)?;
    target.align();
    target.append_bits(offset, octets * 8)
}

/// Reads an offset written by `write_offset`.
///
/// The offset is not checked against the range.
fn read_offset<M: Mode>(
    source: &mut BitStreamReader<M>, range: u128
) -> Result<u64, DecodeError> {
    if range <= 1 {
        return Ok(0)
    }
    if !M::ALIGNED || range < 256 {
        return source.read_bits(constrained_bit_width(range))
    }
    if range == 256 {
        source.align();
        return source.read_bits(8)
    }
    if range <= K64 {
        source.align();
        return source.read_bits(16)
    }
    let max_octets = octet_width(range - 1);
    let octets = read_offset(source, max_octets as u128)? as usize + 1;
    source.align();
    source.read_bits(octets * 8)
}

/// Encodes `value` as a constrained whole number between `lb` and `ub`.
///
/// Returns a [`ValueOutOfRange`][EncodeError::ValueOutOfRange] error if
/// the value isn’t within the bounds.
pub fn encode_constrained_whole_number<M: Mode>(
    target: &mut BitStream<M>, value: i64, lb: i64, ub: i64
) -> Result<(), EncodeError> {
    if value < lb || value > ub {
        return Err(EncodeError::ValueOutOfRange { value, lb, ub })
    }
    let offset = (i128::from(value) - i128::from(lb)) as u64;
    write_offset(target, offset, value_range(lb, ub))
}

/// Decodes a constrained whole number between `lb` and `ub`.
///
/// If the range isn’t a power of two, the bit-field can express values
/// beyond the upper bound. These are rejected with a
/// [`ValueOutOfRange`][DecodeErrorKind::ValueOutOfRange] error.
pub fn decode_constrained_whole_number<M: Mode>(
    source: &mut BitStreamReader<M>, lb: i64, ub: i64
) -> Result<i64, DecodeError> {
    let pos = source.pos();
    let range = value_range(lb, ub);
    let offset = read_offset(source, range)?;
    let value = i128::from(lb) + i128::from(offset);
    if u128::from(offset) >= range {
        return Err(DecodeError::new(
            DecodeErrorKind::ValueOutOfRange { value, lb, ub }, pos
        ))
    }
    Ok(value as i64)
}


//------------ Length Determinants -------------------------------------------

/// Encodes the length determinant for `len` items under `size`.
///
/// If the upper bound is below 64K, the length is a constrained whole
/// number, which means that nothing at all is encoded for a fixed size.
/// Otherwise the unconstrained form is used, still honouring the bounds.
pub fn encode_length<M: Mode>(
    target: &mut BitStream<M>, len: usize, size: SizeConstraint
) -> Result<(), EncodeError> {
    if !size.contains(len) {
        log::debug!("refusing to encode {} items with {}", len, size);
        return Err(EncodeError::SizeConstraintViolated {
            count: len, min: size.min(), max: size.max()
        })
    }
    log::trace!("length determinant {} for {} ({})", len, size, M::NAME);
    if size.max() as u128 >= K64 {
        return encode_unconstrained_length(target, len)
    }
    write_offset(
        target, (len - size.min()) as u64,
        (size.max() - size.min()) as u128 + 1
    )
}

/// Decodes a length determinant under `size`.
///
/// Returns a [`SizeConstraintViolated`] error if the decoded length is
/// outside the bounds, including for bit patterns beyond the upper bound
/// of a range that isn’t a power of two.
///
/// [`SizeConstraintViolated`]: DecodeErrorKind::SizeConstraintViolated
pub fn decode_length<M: Mode>(
    source: &mut BitStreamReader<M>, size: SizeConstraint
) -> Result<usize, DecodeError> {
    let pos = source.pos();
    let len = if size.max() as u128 >= K64 {
        decode_unconstrained_length(source)? as u64
    }
    else {
        let offset = read_offset(
            source, (size.max() - size.min()) as u128 + 1
        )?;
        offset.saturating_add(size.min() as u64)
    };
    match usize::try_from(len) {
        Ok(len) if size.contains(len) => {
            log::trace!(
                "length determinant {} for {} ({})", len, size, M::NAME
            );
            Ok(len)
        }
        _ => {
            log::debug!("decoded length {} violates {}", len, size);
            Err(DecodeError::new(
                DecodeErrorKind::SizeConstraintViolated {
                    count: len, min: size.min(), max: size.max()
                },
                pos
            ))
        }
    }
}

/// Encodes an unconstrained length determinant.
///
/// The length is octet-aligned in the aligned variant. Lengths below 128
/// take one octet, lengths below 16K two. Anything longer would need
/// fragmentation and results in an error.
pub fn encode_unconstrained_length<M: Mode>(
    target: &mut BitStream<M>, len: usize
) -> Result<(), EncodeError> {
    target.align();
    if len < 128 {
        target.append_bits(len as u64, 8)
    }
    else if len < K16 {
        target.append_bits(0x8000 | len as u64, 16)
    }
    else {
        Err(EncodeError::UnsupportedLength(len))
    }
}

/// Decodes an unconstrained length determinant.
pub fn decode_unconstrained_length<M: Mode>(
    source: &mut BitStreamReader<M>
) -> Result<usize, DecodeError> {
    source.align();
    if !source.read_bit()? {
        return Ok(source.read_bits(7)? as usize)
    }
    if !source.read_bit()? {
        return Ok(source.read_bits(14)? as usize)
    }
    Err(source.err(DecodeErrorKind::UnsupportedLength))
}


//------------ Normally Small Numbers ----------------------------------------

/// Encodes a normally small non-negative whole number.
///
/// Values below 64 take seven bits. Larger values are encoded as a
/// semi-constrained whole number, i.e., as a length-prefixed sequence of
/// octets.
pub fn encode_normally_small<M: Mode>(
    target: &mut BitStream<M>, value: u64
) -> Result<(), EncodeError> {
    if value < 64 {
        target.append_bit(false);
        return target.append_bits(value, 6)
    }
    target.append_bit(true);
    let octets = octet_width(u128::from(value));
    encode_unconstrained_length(target, octets)?;
    target.align();
    target.append_bits(value, octets * 8)
}

/// Decodes a normally small non-negative whole number.
pub fn decode_normally_small<M: Mode>(
    source: &mut BitStreamReader<M>
) -> Result<u64, DecodeError> {
    if !source.read_bit()? {
        return source.read_bits(6)
    }
    let octets = decode_unconstrained_length(source)?;
    source.align();
    source.read_bits(octets.saturating_mul(8))
}

/// Encodes a normally small length, used for extension bitmaps.
///
/// The length must be at least one. Up to 64, it takes seven bits.
pub fn encode_normally_small_length<M: Mode>(
    target: &mut BitStream<M>, len: usize
) -> Result<(), EncodeError> {
    if len == 0 {
        return Err(EncodeError::SizeConstraintViolated {
            count: 0, min: 1, max: usize::MAX
        })
    }
    if len <= 64 {
        target.append_bit(false);
        return target.append_bits(len as u64 - 1, 6)
    }
    target.append_bit(true);
    encode_unconstrained_length(target, len)
}

/// Decodes a normally small length.
pub fn decode_normally_small_length<M: Mode>(
    source: &mut BitStreamReader<M>
) -> Result<usize, DecodeError> {
    if !source.read_bit()? {
        return Ok(source.read_bits(6)? as usize + 1)
    }
    decode_unconstrained_length(source)
}


//------------ Open Types ----------------------------------------------------

/// Encodes the value written by `op` as an open type.
///
/// The value is encoded into a stream of its own which is padded to a
/// whole number of octets, with an empty encoding becoming a single zero
/// octet. The result is appended with an unconstrained length prefix.
pub fn encode_open_type<M: Mode, F>(
    target: &mut BitStream<M>, op: F
) -> Result<(), EncodeError>
where F: FnOnce(&mut BitStream<M>) -> Result<(), EncodeError> {
    let mut inner = BitStream::new();
    op(&mut inner)?;
    if inner.is_empty() {
        inner.append_bits(0, 8)?;
    }
    inner.pad_to_octet();
    encode_unconstrained_length(target, inner.as_slice().len())?;
    target.align();
    target.append_bytes(inner.as_slice());
    Ok(())
}

/// Decodes an open type, returning the octets of the wrapped encoding.
pub fn decode_open_type<M: Mode>(
    source: &mut BitStreamReader<M>
) -> Result<Bytes, DecodeError> {
    let len = decode_unconstrained_length(source)?;
    source.align();
    source.read_octets(len)
}

/// Skips over an open type, returning the number of octets skipped.
pub fn skip_open_type<M: Mode>(
    source: &mut BitStreamReader<M>
) -> Result<usize, DecodeError> {
    let len = decode_unconstrained_length(source)?;
    source.align();
    source.skip_bits(len * 8)?;
    Ok(len)
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::{Aligned, Unaligned};
    use super::*;

    fn encode<M: Mode>(
        op: impl FnOnce(&mut BitStream<M>) -> Result<(), EncodeError>
    ) -> BitStream<M> {
        let mut stream = BitStream::new();
        op(&mut stream).unwrap();
        stream
    }

    #[test]
    fn bit_widths() {
        assert_eq!(constrained_bit_width(1), 0);
        assert_eq!(constrained_bit_width(2), 1);
        assert_eq!(constrained_bit_width(3), 2);
        assert_eq!(constrained_bit_width(4), 2);
        assert_eq!(constrained_bit_width(5), 3);
        assert_eq!(constrained_bit_width(64), 6);
        assert_eq!(constrained_bit_width(65), 7);
        assert_eq!(constrained_bit_width(1_000_000), 20);
        assert_eq!(constrained_bit_width(1 << 64), 64);
    }

    #[test]
    fn session_list_length_is_six_bits() {
        let size = SizeConstraint::bounded(1, 64);
        let stream = encode::<Unaligned>(|t| encode_length(t, 1, size));
        assert_eq!(stream.bit_len(), 6);
        assert_eq!(stream.as_slice(), &[0x00]);
        let stream = encode::<Unaligned>(|t| encode_length(t, 64, size));
        assert_eq!(stream.bit_len(), 6);
        assert_eq!(stream.as_slice(), &[0xFC]);
        let stream = encode::<Aligned>(|t| encode_length(t, 33, size));
        assert_eq!(stream.bit_len(), 6);
        assert_eq!(stream.as_slice(), &[0x80]);
    }

    #[test]
    fn fixed_length_is_empty() {
        let size = SizeConstraint::fixed(4);
        assert!(encode::<Unaligned>(|t| encode_length(t, 4, size)).is_empty());
        assert!(encode::<Aligned>(|t| encode_length(t, 4, size)).is_empty());
        let mut reader = BitStreamReader::<Unaligned>::new(&[]);
        assert_eq!(decode_length(&mut reader, size).unwrap(), 4);
    }

    #[test]
    fn length_out_of_bounds() {
        let size = SizeConstraint::bounded(3, 15);
        let mut stream = BitStream::<Unaligned>::new();
        assert_eq!(
            encode_length(&mut stream, 2, size),
            Err(EncodeError::SizeConstraintViolated {
                count: 2, min: 3, max: 15
            })
        );
        assert_eq!(
            encode_length(&mut stream, 16, size),
            Err(EncodeError::SizeConstraintViolated {
                count: 16, min: 3, max: 15
            })
        );
        assert!(stream.is_empty());

        // Range 13 takes four bits, so 0b1101 to 0b1111 are beyond the
        // upper bound.
        let mut reader = BitStreamReader::<Unaligned>::new(&[0b1101_0000]);
        let err = decode_length(&mut reader, size).unwrap_err();
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::SizeConstraintViolated {
                count: 16, min: 3, max: 15
            }
        );
        let mut reader = BitStreamReader::<Unaligned>::new(&[0b1100_0000]);
        assert_eq!(decode_length(&mut reader, size).unwrap(), 15);
    }

    #[test]
    fn aligned_octet_ranges() {
        // Range 256: one aligned octet.
        let stream = encode::<Aligned>(|t| {
            t.append_bit(true);
            encode_constrained_whole_number(t, 200, 0, 255)
        });
        assert_eq!(stream.as_slice(), &[0x80, 200]);
        let stream = encode::<Unaligned>(|t| {
            t.append_bit(true);
            encode_constrained_whole_number(t, 200, 0, 255)
        });
        assert_eq!(stream.as_slice(), &[0xE4, 0x00]);
        assert_eq!(stream.bit_len(), 9);

        // Range 64K: two aligned octets.
        let stream = encode::<Aligned>(|t| {
            t.append_bit(true);
            encode_constrained_whole_number(t, 0x1234, 0, 65535)
        });
        assert_eq!(stream.as_slice(), &[0x80, 0x12, 0x34]);

        // Range 255 stays a bit-field.
        let stream = encode::<Aligned>(|t| {
            t.append_bit(true);
            encode_constrained_whole_number(t, 1, 0, 254)
        });
        assert_eq!(stream.bit_len(), 9);
    }

    #[test]
    fn aligned_large_range() {
        // INTEGER (1..1000000): three octets at most, so the octet count
        // is a two bit field, followed by the aligned octets.
        let stream = encode::<Aligned>(|t| {
            encode_constrained_whole_number(t, 1000, 1, 1_000_000)
        });
        assert_eq!(stream.as_slice(), &[0x40, 0x03, 0xE7]);
        let mut reader = BitStreamReader::<Aligned>::new(stream.as_slice());
        assert_eq!(
            decode_constrained_whole_number(&mut reader, 1, 1_000_000),
            Ok(1000)
        );

        let stream = encode::<Unaligned>(|t| {
            encode_constrained_whole_number(t, 1000, 1, 1_000_000)
        });
        assert_eq!(stream.bit_len(), 20);
        assert_eq!(stream.as_slice(), &[0x00, 0x3E, 0x70]);
    }

    #[test]
    fn negative_bounds() {
        for &value in &[-8_388_608i64, -1, 0, 8_388_607] {
            let stream = encode::<Unaligned>(|t| {
                encode_constrained_whole_number(t, value, -8_388_608, 8_388_607)
            });
            assert_eq!(stream.bit_len(), 24);
            let mut reader = BitStreamReader::<Unaligned>::new(
                stream.as_slice()
            );
            assert_eq!(
                decode_constrained_whole_number(
                    &mut reader, -8_388_608, 8_388_607
                ),
                Ok(value)
            );
        }
    }

    #[test]
    fn whole_number_out_of_range() {
        let mut stream = BitStream::<Unaligned>::new();
        assert_eq!(
            encode_constrained_whole_number(&mut stream, 180, 0, 179),
            Err(EncodeError::ValueOutOfRange { value: 180, lb: 0, ub: 179 })
        );
        let mut reader = BitStreamReader::<Unaligned>::new(&[0xFF]);
        let err = decode_constrained_whole_number(
            &mut reader, 0, 179
        ).unwrap_err();
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::ValueOutOfRange { value: 255, lb: 0, ub: 179 }
        );
    }

    #[test]
    fn unconstrained_length() {
        let stream = encode::<Aligned>(|t| {
            t.append_bit(true);
            encode_unconstrained_length(t, 5)
        });
        assert_eq!(stream.as_slice(), &[0x80, 0x05]);
        let stream = encode::<Unaligned>(|t| {
            encode_unconstrained_length(t, 200)
        });
        assert_eq!(stream.as_slice(), &[0x80, 0xC8]);
        let mut reader = BitStreamReader::<Unaligned>::new(&[0x80, 0xC8]);
        assert_eq!(decode_unconstrained_length(&mut reader), Ok(200));

        let mut stream = BitStream::<Unaligned>::new();
        assert_eq!(
            encode_unconstrained_length(&mut stream, 20000),
            Err(EncodeError::UnsupportedLength(20000))
        );
        let mut reader = BitStreamReader::<Unaligned>::new(&[0xC1]);
        assert_eq!(
            decode_unconstrained_length(&mut reader).unwrap_err().kind(),
            &DecodeErrorKind::UnsupportedLength
        );
    }

    #[test]
    fn large_size_uses_unconstrained_length() {
        let size = SizeConstraint::bounded(1, 100_000);
        let stream = encode::<Unaligned>(|t| encode_length(t, 3, size));
        assert_eq!(stream.as_slice(), &[0x03]);
        let mut reader = BitStreamReader::<Unaligned>::new(&[0x00]);
        assert!(decode_length(&mut reader, size).unwrap_err()
            .is_size_violation()
        );
    }

    #[test]
    fn normally_small() {
        let stream = encode::<Unaligned>(|t| encode_normally_small(t, 5));
        assert_eq!(stream.bit_len(), 7);
        assert_eq!(stream.as_slice(), &[0b0000_1010]);

        let stream = encode::<Aligned>(|t| encode_normally_small(t, 100));
        assert_eq!(stream.as_slice(), &[0x80, 0x01, 100]);
        let mut reader = BitStreamReader::<Aligned>::new(stream.as_slice());
        assert_eq!(decode_normally_small(&mut reader), Ok(100));

        let stream = encode::<Unaligned>(|t| encode_normally_small(t, 300));
        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        assert_eq!(decode_normally_small(&mut reader), Ok(300));
    }

    #[test]
    fn normally_small_length() {
        let stream = encode::<Unaligned>(|t| {
            encode_normally_small_length(t, 1)
        });
        assert_eq!(stream.bit_len(), 7);
        assert_eq!(stream.as_slice(), &[0x00]);
        let stream = encode::<Unaligned>(|t| {
            encode_normally_small_length(t, 64)
        });
        assert_eq!(stream.as_slice(), &[0b0111_1110]);
        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        assert_eq!(decode_normally_small_length(&mut reader), Ok(64));

        let mut stream = BitStream::<Unaligned>::new();
        assert!(encode_normally_small_length(&mut stream, 0).is_err());
    }

    #[test]
    fn open_types() {
        let mut stream = BitStream::<Aligned>::new();
        stream.append_bit(true);
        encode_open_type(&mut stream, |t| t.append_bits(0b101, 3)).unwrap();
        encode_open_type(&mut stream, |_| Ok(())).unwrap();
        stream.append_bit(true);
        assert_eq!(
            stream.as_slice(), &[0x80, 0x01, 0xA0, 0x01, 0x00, 0x80]
        );

        let mut reader = BitStreamReader::<Aligned>::new(stream.as_slice());
        assert!(reader.read_bit().unwrap());
        assert_eq!(decode_open_type(&mut reader).unwrap().as_ref(), &[0xA0]);
        assert_eq!(skip_open_type(&mut reader), Ok(1));
        assert!(reader.read_bit().unwrap());
    }
}
