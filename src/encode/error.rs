//! Errors while encoding.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.


//------------ EncodeError ---------------------------------------------------

/// An error happened while encoding a value.
///
/// Encoding only fails if the value doesn’t satisfy the constraints of its
/// ASN.1 type. Writing to a [`BitStream`][super::BitStream] itself only
/// fails when asked for more than 64 bits at once.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// The number of elements or octets is outside the permitted range.
    #[error("size {count} outside of permitted range {min}..={max}")]
    SizeConstraintViolated { count: usize, min: usize, max: usize },

    /// An integer value is outside its permitted range.
    #[error("value {value} outside of permitted range {lb}..={ub}")]
    ValueOutOfRange { value: i64, lb: i64, ub: i64 },

    /// More than 64 bits were to be appended at once.
    #[error("cannot append {0} bits at once")]
    TooManyBits(usize),

    /// A character is not part of the permitted alphabet.
    #[error("character {0:?} outside of permitted alphabet")]
    InvalidCharacter(char),

    /// A length would need a fragmented length determinant.
    #[error("length {0} requires fragmentation")]
    UnsupportedLength(usize),
}
