//! PER-encoded Restricted Character String types.
//!
//! This is an internal module. It’s public items are re-exported by the
//! parent.

use std::{fmt, ops, str};
use std::marker::PhantomData;
use crate::constraint::SizeConstraint;
use crate::decode::{BitStreamReader, DecodeError};
use crate::encode::{BitStream, EncodeError};
use crate::length;
use crate::mode::Mode;
use crate::object::Asn1Object;
use crate::tag::Tag;
use super::alphabet::PermittedAlphabet;


//------------ CharSet -------------------------------------------------------

/// The character set of a restricted character string type.
///
/// The trait only has associated constants and can thus be implemented
/// for marker types. Schemas that restrict a string type to a subset of
/// its characters via a `FROM` constraint define a marker type of their
/// own with the subset as its alphabet.
///
/// The trait is primarily used to define the character set of the
/// [`RestrictedString`] type.
pub trait CharSet {
    /// The natural tag of the related restricted character string type.
    const TAG: Tag;

    /// The characters permitted in the string.
    const ALPHABET: PermittedAlphabet;
}


//------------ RestrictedString ----------------------------------------------

/// A restricted character string with a size constraint.
///
/// The string contains only characters of the alphabet of the character
/// set `L`, and between `MIN` and `MAX` of them. Both restrictions are
/// checked when creating a value from a string. When decoding, the
/// alphabet and the size constraint of the encoding guarantee them.
///
/// A string is encoded as a length determinant counting characters
/// followed by the characters, each in the number of bits determined by
/// the alphabet. If the size is fixed, the length determinant is left out.
/// In ALIGNED PER, the characters are octet-aligned unless the string
/// can’t be longer than 16 bits.
pub struct RestrictedString<L, const MIN: usize, const MAX: usize> {
    /// The string.
    ///
    /// This is always ASCII, so its length in octets is its length in
    /// characters.
    value: String,

    /// A marker for our character set.
    marker: PhantomData<L>,
}

impl<L: CharSet, const MIN: usize, const MAX: usize>
RestrictedString<L, MIN, MAX> {
    /// The size constraint of the type, in characters.
    pub const SIZE: SizeConstraint = SizeConstraint::bounded(MIN, MAX);

    /// Creates a new value from a string.
    ///
    /// Fails if the string contains a character not in the alphabet or
    /// if its length violates the size constraint.
    pub fn new(value: String) -> Result<Self, EncodeError> {
        if let Some(ch) = value.chars().find(|&ch| {
            !L::ALPHABET.contains(ch)
        }) {
            return Err(EncodeError::InvalidCharacter(ch))
        }
        if !Self::SIZE.contains(value.len()) {
            return Err(EncodeError::SizeConstraintViolated {
                count: value.len(), min: MIN, max: MAX
            })
        }
        Ok(RestrictedString { value, marker: PhantomData })
    }

    /// Returns a string slice of the value.
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Converts the value into a string.
    pub fn into_string(self) -> String {
        self.value
    }

    /// Returns whether the fixed size short form is used.
    fn is_fixed() -> bool {
        MIN == MAX && MAX < 65536
    }

    /// Returns whether the characters are octet-aligned.
    fn is_aligned<M: Mode>() -> bool {
        MAX.saturating_mul(L::ALPHABET.char_bits::<M>()) > 16
    }
}


//--- Default

/// The default value is empty.
///
/// If `MIN` is not zero, the default value cannot be encoded. It serves as
/// the initial value when decoding.
impl<L, const MIN: usize, const MAX: usize> Default
for RestrictedString<L, MIN, MAX> {
    fn default() -> Self {
        RestrictedString { value: String::new(), marker: PhantomData }
    }
}


//--- Clone

impl<L, const MIN: usize, const MAX: usize> Clone
for RestrictedString<L, MIN, MAX> {
    fn clone(&self) -> Self {
        RestrictedString { value: self.value.clone(), marker: PhantomData }
    }
}


//--- FromStr

impl<L: CharSet, const MIN: usize, const MAX: usize> str::FromStr
for RestrictedString<L, MIN, MAX> {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.into())
    }
}


//--- Deref and AsRef

impl<L, const MIN: usize, const MAX: usize> ops::Deref
for RestrictedString<L, MIN, MAX> {
    type Target = str;

    fn deref(&self) -> &str {
        self.value.as_str()
    }
}

impl<L, const MIN: usize, const MAX: usize> AsRef<str>
for RestrictedString<L, MIN, MAX> {
    fn as_ref(&self) -> &str {
        self.value.as_str()
    }
}


//--- PartialEq and Eq
//
// These need to be implemented manually since the derives would require
// `L` to implement them, too.

impl<L, const MIN: usize, const MAX: usize> PartialEq
for RestrictedString<L, MIN, MAX> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<L, const MIN: usize, const MAX: usize> PartialEq<str>
for RestrictedString<L, MIN, MAX> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<L, const MIN: usize, const MAX: usize> Eq
for RestrictedString<L, MIN, MAX> { }


//--- Asn1Object

impl<L: CharSet, const MIN: usize, const MAX: usize> Asn1Object
for RestrictedString<L, MIN, MAX> {
    fn tag(&self) -> Option<Tag> {
        Some(L::TAG)
    }

    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        let len = self.value.len();
        if !Self::SIZE.contains(len) {
            log::debug!(
                "string of {} characters violates {}", len, Self::SIZE
            );
            return Err(EncodeError::SizeConstraintViolated {
                count: len, min: MIN, max: MAX
            })
        }
        if MAX == 0 {
            return Ok(())
        }
        if !Self::is_fixed() {
            length::encode_length(target, len, Self::SIZE)?;
        }
        if len > 0 && Self::is_aligned::<M>() {
            target.align();
        }
        for ch in self.value.chars() {
            L::ALPHABET.encode_char(target, ch)?;
        }
        Ok(())
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        self.value.clear();
        if MAX == 0 {
            return Ok(())
        }
        let len = if Self::is_fixed() {
            MAX
        }
        else {
            length::decode_length(source, Self::SIZE)?
        };
        if len > 0 && Self::is_aligned::<M>() {
            source.align();
        }
        self.value.reserve(len);
        for _ in 0..len {
            self.value.push(L::ALPHABET.decode_char(source)?);
        }
        Ok(())
    }
}


//--- Display and Debug

impl<L, const MIN: usize, const MAX: usize> fmt::Display
for RestrictedString<L, MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<L, const MIN: usize, const MAX: usize> fmt::Debug
for RestrictedString<L, MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("RestrictedString").field(&self.value).finish()
    }
}


//------------ Ia5String -----------------------------------------------------

/// A restricted character string containing ASCII characters.
///
/// This character string allows all ASCII characters (i.e., octets with
/// values `0x00` to `0x7F`) and encodes them with their ASCII value.
///
/// The type’s name is derived from the name used in ASN.1. It is derived
/// from the name IA5 or International Alphabet No. 5 which is the ITU name
/// for ASCII and is specified in ITU.T recommendation T.50.
pub type Ia5String<const MIN: usize, const MAX: usize>
    = RestrictedString<Ia5CharSet, MIN, MAX>;

/// The character set for the IA5String ASN.1 type.
#[derive(Clone, Copy, Debug)]
pub struct Ia5CharSet;

impl CharSet for Ia5CharSet {
    const TAG: Tag = Tag::IA5_STRING;
    const ALPHABET: PermittedAlphabet = PermittedAlphabet::IA5;
}


//------------ VisibleString -------------------------------------------------

/// A restricted character string containing printable ASCII characters.
///
/// This includes the space character but none of the control characters.
pub type VisibleString<const MIN: usize, const MAX: usize>
    = RestrictedString<VisibleCharSet, MIN, MAX>;

/// The character set for the VisibleString ASN.1 type.
#[derive(Clone, Copy, Debug)]
pub struct VisibleCharSet;

impl CharSet for VisibleCharSet {
    const TAG: Tag = Tag::VISIBLE_STRING;
    const ALPHABET: PermittedAlphabet = PermittedAlphabet::VISIBLE;
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::decode::DecodeErrorKind;
    use super::*;

    type Nai = Ia5String<1, 1000>;

    #[test]
    fn new_checks_characters_and_size() {
        assert_eq!(
            Nai::new("user@example.com".into()).unwrap().as_str(),
            "user@example.com"
        );
        assert_eq!(
            Nai::new("usér".into()),
            Err(EncodeError::InvalidCharacter('é'))
        );
        assert_eq!(
            Nai::new(String::new()),
            Err(EncodeError::SizeConstraintViolated {
                count: 0, min: 1, max: 1000
            })
        );
        assert!("line\nbreak".parse::<VisibleString<0, 20>>().is_err());
        assert!("line\nbreak".parse::<Ia5String<0, 20>>().is_ok());
    }

    #[test]
    fn ia5_unaligned() {
        let nai: Nai = "abc".parse().unwrap();
        let stream = nai.encode_per_unaligned().unwrap();
        // Ten bits of length, then seven bits per character.
        assert_eq!(stream.bit_len(), 31);
        assert_eq!(stream.as_slice(), &[0x00, 0xB0, 0xE2, 0xC6]);
        assert_eq!(Nai::from_per_unaligned(stream.as_slice()).unwrap(), nai);
    }

    #[test]
    fn ia5_aligned() {
        let nai: Nai = "abc".parse().unwrap();
        // Two octets of length, then one octet per character.
        assert_eq!(
            nai.to_per_aligned_vec().unwrap(),
            [0x00, 0x02, b'a', b'b', b'c']
        );
        assert_eq!(
            Nai::from_per_aligned(&[0x00, 0x02, b'a', b'b', b'c']).unwrap(),
            nai
        );
    }

    #[test]
    fn short_fixed_size() {
        let code: Ia5String<2, 2> = "ab".parse().unwrap();
        let mut stream = BitStream::<crate::mode::Aligned>::new();
        stream.append_bit(true);
        code.encode_per(&mut stream).unwrap();
        assert_eq!(stream.bit_len(), 17);
        assert_eq!(stream.as_slice(), &[0xB0, 0xB1, 0x00]);
    }

    #[test]
    fn decode_rejects_characters() {
        // Length one, then DEL which isn’t visible.
        let err = VisibleString::<1, 4>::from_per_unaligned(
            &[0b0011_1111, 0b1100_0000]
        ).unwrap_err();
        assert_eq!(err.kind(), &DecodeErrorKind::InvalidCharacter(0x7F));
        assert_eq!(err.pos().bits(), 2);
    }
}
