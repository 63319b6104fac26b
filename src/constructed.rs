//! SEQUENCE, CHOICE and ENUMERATED.
//!
//! Constructed types are implemented by the schema types themselves: their
//! [`Asn1Object`] impls encode the components in order.
//! This module provides the parts of the encoding that come before or
//! instead of the components: the extension bit and the bitmap of present
//! optional components of a SEQUENCE, the index of a CHOICE, and the index
//! of an ENUMERATED value.
//!
//! Extension additions are never produced. When decoding, unknown
//! additions to a SEQUENCE are skipped, since they are wrapped in open
//! types. An extension alternative of a CHOICE or an extension value of an
//! ENUMERATED can’t be represented and is an error.

use smallvec::SmallVec;
use crate::decode::{BitStreamReader, DecodeError, DecodeErrorKind};
use crate::encode::{BitStream, EncodeError};
use crate::length;
use crate::mode::Mode;
use crate::object::Asn1Object;


//------------ SequencePreamble ----------------------------------------------

/// The bits that precede the components of a SEQUENCE.
///
/// These are the extension bit for extensible types followed by one bit
/// for each OPTIONAL or DEFAULT component, telling whether it is present.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SequencePreamble {
    /// Whether extension additions are present.
    extended: bool,

    /// The presence bits of the optional components.
    optionals: SmallVec<[bool; 16]>,
}

impl SequencePreamble {
    /// Encodes a preamble.
    ///
    /// If `extensible` is set, a clear extension bit is written first.
    /// Then there is one bit per element of `optionals`.
    pub fn encode<M: Mode>(
        target: &mut BitStream<M>, extensible: bool, optionals: &[bool]
    ) -> Result<(), EncodeError> {
        if extensible {
            target.append_bit(false);
        }
        for &present in optionals {
            target.append_bit(present);
        }
        Ok(())
    }

    /// Takes a preamble from the beginning of `source`.
    ///
    /// The type has `optional_count` optional components. If `extensible`
    /// is not set, no extension bit is present.
    pub fn take_from<M: Mode>(
        source: &mut BitStreamReader<M>,
        extensible: bool,
        optional_count: usize,
    ) -> Result<Self, DecodeError> {
        let extended = if extensible {
            source.read_bit()?
        }
        else {
            false
        };
        let mut optionals = SmallVec::with_capacity(optional_count);
        for _ in 0..optional_count {
            optionals.push(source.read_bit()?);
        }
        Ok(SequencePreamble { extended, optionals })
    }

    /// Returns whether the optional component with the given index is
    /// present.
    ///
    /// The index counts optional components only. Unknown indexes are
    /// reported as absent.
    pub fn is_present(&self, index: usize) -> bool {
        self.optionals.get(index).copied().unwrap_or(false)
    }

    /// Takes the optional component with the given index if it is present.
    pub fn take_optional<T: Asn1Object + Default, M: Mode>(
        &self, index: usize, source: &mut BitStreamReader<M>
    ) -> Result<Option<T>, DecodeError> {
        if self.is_present(index) {
            T::take_from(source).map(Some)
        }
        else {
            Ok(None)
        }
    }

    /// Returns whether extension additions follow the root components.
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Skips over the extension additions if there are any.
    ///
    /// This needs to be called after all root components have been
    /// decoded. Returns the number of additions that were skipped.
    pub fn skip_extensions<M: Mode>(
        &self, source: &mut BitStreamReader<M>
    ) -> Result<usize, DecodeError> {
        if !self.extended {
            return Ok(0)
        }
        let count = length::decode_normally_small_length(source)?;
        let mut present = 0;
        for _ in 0..count {
            if source.read_bit()? {
                present += 1;
            }
        }
        for _ in 0..present {
            let len = length::skip_open_type(source)?;
            log::debug!("skipped extension addition of {} octets", len);
        }
        Ok(present)
    }
}


/// Encodes an optional component if it is present.
///
/// Its presence bit is part of the preamble.
pub fn encode_optional<T: Asn1Object, M: Mode>(
    value: Option<&T>, target: &mut BitStream<M>
) -> Result<(), EncodeError> {
    match value {
        Some(value) => value.encode_per(target),
        None => Ok(())
    }
}


//------------ CHOICE --------------------------------------------------------

/// The index of a CHOICE alternative.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChoiceIndex {
    /// An alternative of the extension root.
    Root(usize),

    /// An extension addition alternative.
    Extension(u64),
}

/// Encodes the index of a root alternative of a CHOICE.
///
/// The type has `alternatives` root alternatives. If it is extensible, a
/// clear extension bit comes first.
pub fn encode_choice_index<M: Mode>(
    target: &mut BitStream<M>,
    index: usize,
    alternatives: usize,
    extensible: bool,
) -> Result<(), EncodeError> {
    if extensible {
        target.append_bit(false);
    }
    length::encode_constrained_whole_number(
        target, index as i64, 0, alternatives as i64 - 1
    )
}

/// Decodes the index of a CHOICE alternative.
///
/// For an extension alternative, only the index is read. Its value is
/// left in the source as an open type.
pub fn decode_choice_index<M: Mode>(
    source: &mut BitStreamReader<M>,
    alternatives: usize,
    extensible: bool,
) -> Result<ChoiceIndex, DecodeError> {
    if extensible && source.read_bit()? {
        return Ok(ChoiceIndex::Extension(
            length::decode_normally_small(source)?
        ))
    }
    let pos = source.pos();
    match length::decode_constrained_whole_number(
        source, 0, alternatives as i64 - 1
    ) {
        Ok(index) => Ok(ChoiceIndex::Root(index as usize)),
        Err(err) => match *err.kind() {
            DecodeErrorKind::ValueOutOfRange { value, .. } => {
                Err(DecodeError::new(
                    DecodeErrorKind::InvalidChoiceIndex {
                        index: value as u64, alternatives
                    },
                    pos
                ))
            }
            _ => Err(err)
        }
    }
}

/// Decodes the index of a root alternative of a CHOICE.
///
/// An extension alternative results in an
/// [`UnknownExtension`][DecodeErrorKind::UnknownExtension] error.
pub fn decode_root_choice_index<M: Mode>(
    source: &mut BitStreamReader<M>,
    alternatives: usize,
    extensible: bool,
) -> Result<usize, DecodeError> {
    let pos = source.pos();
    match decode_choice_index(source, alternatives, extensible)? {
        ChoiceIndex::Root(index) => Ok(index),
        ChoiceIndex::Extension(index) => {
            log::debug!("unknown extension alternative {}", index);
            Err(DecodeError::new(
                DecodeErrorKind::UnknownExtension { index }, pos
            ))
        }
    }
}


//------------ ENUMERATED ----------------------------------------------------

/// Encodes the index of an ENUMERATED value.
///
/// The index is the position of the value in the root enumeration, in
/// ascending order of the values’ numbers. If the type is extensible, a
/// clear extension bit comes first.
pub fn encode_enumerated<M: Mode>(
    target: &mut BitStream<M>,
    index: usize,
    root_count: usize,
    extensible: bool,
) -> Result<(), EncodeError> {
    if extensible {
        target.append_bit(false);
    }
    length::encode_constrained_whole_number(
        target, index as i64, 0, root_count as i64 - 1
    )
}

/// Decodes the index of an ENUMERATED value of the root enumeration.
///
/// An extension value results in an
/// [`UnknownExtension`][DecodeErrorKind::UnknownExtension] error.
pub fn decode_enumerated<M: Mode>(
    source: &mut BitStreamReader<M>,
    root_count: usize,
    extensible: bool,
) -> Result<usize, DecodeError> {
    let pos = source.pos();
    if extensible && source.read_bit()? {
        let index = length::decode_normally_small(source)?;
        log::debug!("unknown extension enumeration value {}", index);
        return Err(DecodeError::new(
            DecodeErrorKind::UnknownExtension { index }, pos
        ))
    }
    let index = length::decode_constrained_whole_number(
        source, 0, root_count as i64 - 1
    )?;
    Ok(index as usize)
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::mode::{Aligned, Unaligned};
    use super::*;

    #[test]
    fn preamble_bits() {
        let mut stream = BitStream::<Unaligned>::new();
        SequencePreamble::encode(&mut stream, true, &[true, false, true])
            .unwrap();
        assert_eq!(stream.bit_len(), 4);
        assert_eq!(stream.as_slice(), &[0b0101_0000]);

        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        let preamble = SequencePreamble::take_from(
            &mut reader, true, 3
        ).unwrap();
        assert!(!preamble.is_extended());
        assert!(preamble.is_present(0));
        assert!(!preamble.is_present(1));
        assert!(preamble.is_present(2));
        assert!(!preamble.is_present(3));
        assert_eq!(preamble.skip_extensions(&mut reader), Ok(0));
        assert_eq!(reader.pos().bits(), 4);
    }

    #[test]
    fn preamble_without_extension_bit() {
        let mut stream = BitStream::<Unaligned>::new();
        SequencePreamble::encode(&mut stream, false, &[]).unwrap();
        assert!(stream.is_empty());
        let mut reader = BitStreamReader::<Unaligned>::new(&[]);
        let preamble = SequencePreamble::take_from(
            &mut reader, false, 0
        ).unwrap();
        assert!(!preamble.is_extended());
    }

    #[test]
    fn skip_extension_additions() {
        // An extended SEQUENCE with one optional root component, absent,
        // and three extension additions of which the first and the third
        // are present.
        let mut stream = BitStream::<Aligned>::new();
        stream.append_bit(true);
        stream.append_bit(false);
        length::encode_normally_small_length(&mut stream, 3).unwrap();
        stream.append_bits(0b101, 3).unwrap();
        length::encode_open_type(&mut stream, |t| {
            t.append_bits(0xABCD, 16)
        }).unwrap();
        length::encode_open_type(&mut stream, |t| {
            t.append_bit(true);
            Ok(())
        }).unwrap();
        stream.append_bits(0x5A, 8).unwrap();

        let mut reader = BitStreamReader::<Aligned>::new(stream.as_slice());
        let preamble = SequencePreamble::take_from(
            &mut reader, true, 1
        ).unwrap();
        assert!(preamble.is_extended());
        assert!(!preamble.is_present(0));
        assert_eq!(preamble.skip_extensions(&mut reader), Ok(2));
        assert_eq!(reader.read_bits(8), Ok(0x5A));
        assert_eq!(reader.bits_left(), 0);
    }

    #[test]
    fn truncated_extension_additions() {
        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bit(true);
        length::encode_normally_small_length(&mut stream, 1).unwrap();
        stream.append_bit(true);
        length::encode_unconstrained_length(&mut stream, 4).unwrap();
        stream.append_bits(0xFF, 8).unwrap();

        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        let preamble = SequencePreamble::take_from(
            &mut reader, true, 0
        ).unwrap();
        assert!(
            preamble.skip_extensions(&mut reader).unwrap_err()
                .is_end_of_stream()
        );
    }

    #[test]
    fn optional_components() {
        let mut stream = BitStream::<Unaligned>::new();
        let present = Some(true);
        SequencePreamble::encode(&mut stream, false, &[true, false]).unwrap();
        encode_optional(present.as_ref(), &mut stream).unwrap();
        encode_optional(None::<&bool>, &mut stream).unwrap();
        assert_eq!(stream.bit_len(), 3);

        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        let preamble = SequencePreamble::take_from(
            &mut reader, false, 2
        ).unwrap();
        assert_eq!(preamble.take_optional(0, &mut reader), Ok(Some(true)));
        assert_eq!(preamble.take_optional::<bool, _>(1, &mut reader), Ok(None));
        assert_eq!(reader.pos().bits(), 3);
    }

    #[test]
    fn choice_index() {
        let mut stream = BitStream::<Unaligned>::new();
        encode_choice_index(&mut stream, 2, 3, true).unwrap();
        assert_eq!(stream.bit_len(), 3);
        assert_eq!(stream.as_slice(), &[0b0100_0000]);
        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        assert_eq!(
            decode_choice_index(&mut reader, 3, true),
            Ok(ChoiceIndex::Root(2))
        );

        let mut stream = BitStream::<Unaligned>::new();
        assert!(encode_choice_index(&mut stream, 3, 3, false).is_err());

        // Two bits can express four alternatives.
        let mut reader = BitStreamReader::<Unaligned>::new(&[0b1100_0000]);
        assert_eq!(
            decode_choice_index(&mut reader, 3, false).unwrap_err().kind(),
            &DecodeErrorKind::InvalidChoiceIndex { index: 3, alternatives: 3 }
        );
    }

    #[test]
    fn single_alternative_takes_no_bits() {
        let mut stream = BitStream::<Aligned>::new();
        encode_choice_index(&mut stream, 0, 1, false).unwrap();
        assert!(stream.is_empty());
        let mut reader = BitStreamReader::<Aligned>::new(&[]);
        assert_eq!(decode_root_choice_index(&mut reader, 1, false), Ok(0));
    }

    #[test]
    fn extension_alternative() {
        let mut stream = BitStream::<Unaligned>::new();
        stream.append_bit(true);
        length::encode_normally_small(&mut stream, 4).unwrap();
        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        assert_eq!(
            decode_choice_index(&mut reader.clone(), 3, true),
            Ok(ChoiceIndex::Extension(4))
        );
        let err = decode_root_choice_index(&mut reader, 3, true).unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::UnknownExtension { index: 4 });
        assert_eq!(err.pos().bits(), 0);
    }

    #[test]
    fn enumerated() {
        let mut stream = BitStream::<Unaligned>::new();
        encode_enumerated(&mut stream, 1, 2, false).unwrap();
        encode_enumerated(&mut stream, 0, 2, true).unwrap();
        assert_eq!(stream.bit_len(), 3);
        assert_eq!(stream.as_slice(), &[0b1000_0000]);

        let mut reader = BitStreamReader::<Unaligned>::new(stream.as_slice());
        assert_eq!(decode_enumerated(&mut reader, 2, false), Ok(1));
        assert_eq!(decode_enumerated(&mut reader, 2, true), Ok(0));

        let mut reader = BitStreamReader::<Unaligned>::new(&[0b1000_0000]);
        assert_eq!(
            decode_enumerated(&mut reader, 2, true).unwrap_err().kind(),
            &DecodeErrorKind::UnknownExtension { index: 0 }
        );
    }
}
