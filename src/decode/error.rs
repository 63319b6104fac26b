//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use super::reader::Pos;


//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding data.
///
/// The error contains the reason for failing as a [`DecodeErrorKind`] and
/// the bit position in the source where the problem was detected. The
/// position is only useful for diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind} at bit {pos}")]
pub struct DecodeError {
    /// What went wrong.
    kind: DecodeErrorKind,

    /// The bit position in the source.
    pos: Pos,
}

impl DecodeError {
    /// Creates a new decode error from its kind and position.
    pub fn new(kind: DecodeErrorKind, pos: Pos) -> Self {
        DecodeError { kind, pos }
    }

    /// Returns the reason for the error.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Returns the bit position where the error was detected.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Returns whether the source ran out of data.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::UnexpectedEndOfStream { .. })
    }

    /// Returns whether a size constraint was violated.
    pub fn is_size_violation(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::SizeConstraintViolated { .. })
    }
}


//------------ DecodeErrorKind -----------------------------------------------

/// The reason a decode failed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeErrorKind {
    /// The source had fewer bits left than the encoding requires.
    #[error(
        "unexpected end of stream: {requested} bits requested, \
         {available} available"
    )]
    UnexpectedEndOfStream { requested: usize, available: usize },

    /// A decoded count is outside the permitted size range.
    #[error("size {count} outside of permitted range {min}..={max}")]
    SizeConstraintViolated { count: u64, min: usize, max: usize },

    /// A decoded integer is outside its permitted value range.
    #[error("value {value} outside of permitted range {lb}..={ub}")]
    ValueOutOfRange { value: i128, lb: i64, ub: i64 },

    /// A CHOICE index does not refer to a root alternative.
    #[error("choice index {index} exceeds {alternatives} alternatives")]
    InvalidChoiceIndex { index: u64, alternatives: usize },

    /// An extension addition was encountered where it can't be skipped.
    #[error("unknown extension addition {index}")]
    UnknownExtension { index: u64 },

    /// A character is not part of the permitted alphabet.
    #[error("character index {0} outside of permitted alphabet")]
    InvalidCharacter(u64),

    /// The encoding uses a fragmented length determinant.
    #[error("fragmented length determinants are not supported")]
    UnsupportedLength,

    /// More than 64 bits were requested at once.
    #[error("cannot read {0} bits at once")]
    TooManyBits(usize),
}
