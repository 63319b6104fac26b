//! Integers, booleans and nulls.
//!
//! This is a private module. Its public items are re-exported by the parent.
//!
//! PER only has a compact encoding for integers with both a lower and an
//! upper bound. Since every integer in the SUPL schemas is bounded, this
//! module only provides [`ConstrainedInt`] which carries its bounds as
//! const generics. BOOLEAN and NULL are implemented for the Rust types
//! `bool` and `()`.

use std::fmt;
use crate::decode::{BitStreamReader, DecodeError};
use crate::encode::{BitStream, EncodeError};
use crate::length;
use crate::mode::Mode;
use crate::object::Asn1Object;
use crate::tag::Tag;


//------------ ConstrainedInt ------------------------------------------------

/// An ASN.1 `INTEGER (LB..UB)`.
///
/// The value is encoded as a constrained whole number. The bounds are
/// checked when encoding rather than when creating a value so that values
/// can be filled in freely before a message is sent. Use
/// [`is_valid`][Self::is_valid] to check early.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ConstrainedInt<const LB: i64, const UB: i64>(i64);

impl<const LB: i64, const UB: i64> ConstrainedInt<LB, UB> {
    /// The smallest permitted value.
    pub const MIN: i64 = LB;

    /// The largest permitted value.
    pub const MAX: i64 = UB;

    /// Creates a new value, checking that it is within the bounds.
    pub fn new(value: i64) -> Result<Self, EncodeError> {
        if (LB..=UB).contains(&value) {
            Ok(ConstrainedInt(value))
        }
        else {
            Err(EncodeError::ValueOutOfRange { value, lb: LB, ub: UB })
        }
    }

    /// Creates a new value without checking the bounds.
    ///
    /// Encoding the value will fail if it is out of bounds.
    pub const fn new_unchecked(value: i64) -> Self {
        ConstrainedInt(value)
    }

    /// Returns the value.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Replaces the value.
    pub fn set(&mut self, value: i64) {
        self.0 = value
    }

    /// Returns whether the value is within the bounds.
    pub fn is_valid(self) -> bool {
        (LB..=UB).contains(&self.0)
    }
}


//--- Default

/// The default value is the lower bound.
impl<const LB: i64, const UB: i64> Default for ConstrainedInt<LB, UB> {
    fn default() -> Self {
        ConstrainedInt(LB)
    }
}


//--- From

impl<const LB: i64, const UB: i64> From<ConstrainedInt<LB, UB>> for i64 {
    fn from(value: ConstrainedInt<LB, UB>) -> i64 {
        value.0
    }
}


//--- PartialEq

impl<const LB: i64, const UB: i64> PartialEq<i64> for ConstrainedInt<LB, UB> {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}


//--- Asn1Object

impl<const LB: i64, const UB: i64> Asn1Object for ConstrainedInt<LB, UB> {
    fn tag(&self) -> Option<Tag> {
        Some(Tag::INTEGER)
    }

    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        length::encode_constrained_whole_number(target, self.0, LB, UB)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        self.0 = length::decode_constrained_whole_number(source, LB, UB)?;
        Ok(())
    }
}


//--- Display and Debug

impl<const LB: i64, const UB: i64> fmt::Display for ConstrainedInt<LB, UB> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<const LB: i64, const UB: i64> fmt::Debug for ConstrainedInt<LB, UB> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConstrainedInt<{}..{}>({})", LB, UB, self.0)
    }
}


//------------ BOOLEAN -------------------------------------------------------

impl Asn1Object for bool {
    fn tag(&self) -> Option<Tag> {
        Some(Tag::BOOLEAN)
    }

    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        target.append_bit(*self);
        Ok(())
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        *self = source.read_bit()?;
        Ok(())
    }
}


//------------ NULL ----------------------------------------------------------

impl Asn1Object for () {
    fn tag(&self) -> Option<Tag> {
        Some(Tag::NULL)
    }

    fn encode_per<M: Mode>(
        &self, _target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        Ok(())
    }

    fn decode_per<M: Mode>(
        &mut self, _source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        Ok(())
    }
}


//============ Tests =========================================================
