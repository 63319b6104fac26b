//! SEQUENCE OF with a size constraint.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::{slice, vec};
use crate::constraint::{ConfigurationError, SizeConstraint};
use crate::decode::{BitStreamReader, DecodeError};
use crate::encode::{BitStream, EncodeError};
use crate::length;
use crate::mode::Mode;
use crate::object::Asn1Object;
use crate::tag::Tag;


//------------ SequenceOf ----------------------------------------------------

/// An ordered list of values of type `T` with a size constraint.
///
/// This is the ASN.1 type `SEQUENCE (SIZE (min..max)) OF T`. The list is
/// encoded as a length determinant for the number of elements followed by
/// the encodings of the elements in order. If the size constraint permits
/// only a single size, the length determinant is omitted.
///
/// The size constraint is checked when encoding and decoding, not when
/// elements are added. Schema list types with fixed bounds are best
/// defined through the [`sequence_of!`][crate::sequence_of!] macro.
///
/// Decoding replaces all elements. If it fails, the elements decoded so
/// far remain and the value should be discarded.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SequenceOf<T> {
    /// The permitted number of elements.
    size: SizeConstraint,

    /// The elements.
    values: Vec<T>,
}

impl<T> SequenceOf<T> {
    /// Creates a new, empty list with the given size constraint.
    pub fn new(size: SizeConstraint) -> Self {
        SequenceOf { size, values: Vec::new() }
    }

    /// Creates a new, empty list permitting `min` to `max` elements.
    pub fn with_bounds(
        min: usize, max: usize
    ) -> Result<Self, ConfigurationError> {
        SizeConstraint::new(min, max).map(Self::new)
    }

    /// Returns the size constraint.
    pub fn size(&self) -> SizeConstraint {
        self.size
    }

    /// Returns the smallest permitted number of elements.
    pub fn min_size(&self) -> usize {
        self.size.min()
    }

    /// Returns the largest permitted number of elements.
    pub fn max_size(&self) -> usize {
        self.size.max()
    }

    /// Changes the smallest permitted number of elements.
    ///
    /// Fails if `min` is greater than the current upper bound or if the
    /// list already has elements.
    pub fn set_min_size(
        &mut self, min: usize
    ) -> Result<(), ConfigurationError> {
        self.check_empty()?;
        self.size = self.size.with_min(min)?;
        Ok(())
    }

    /// Changes the largest permitted number of elements.
    ///
    /// Fails if `max` is smaller than the current lower bound or if the
    /// list already has elements.
    pub fn set_max_size(
        &mut self, max: usize
    ) -> Result<(), ConfigurationError> {
        self.check_empty()?;
        self.size = self.size.with_max(max)?;
        Ok(())
    }

    fn check_empty(&self) -> Result<(), ConfigurationError> {
        if self.values.is_empty() {
            Ok(())
        }
        else {
            Err(ConfigurationError::AlreadyPopulated)
        }
    }

    /// Appends a new default value and returns a reference to it.
    ///
    /// This is how decoding creates its elements. It can be used when
    /// building a value for encoding, too.
    pub fn create_and_add_value(&mut self) -> &mut T
    where T: Default {
        self.values.push(T::default());
        let idx = self.values.len() - 1;
        &mut self.values[idx]
    }

    /// Appends a value.
    pub fn push(&mut self, value: T) {
        self.values.push(value)
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.values.clear()
    }

    /// Returns the values in order.
    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }

    /// Returns the values for modification.
    pub fn values_mut(&mut self) -> &mut [T] {
        self.values.as_mut_slice()
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Converts the list into a vec of its values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}


//--- IntoIterator

impl<T> IntoIterator for SequenceOf<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SequenceOf<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}


//--- Asn1Object

impl<T: Asn1Object + Default> Asn1Object for SequenceOf<T> {
    fn tag(&self) -> Option<Tag> {
        Some(Tag::SEQUENCE)
    }

    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        length::encode_length(target, self.values.len(), self.size)?;
        log::trace!(
            "encoding {} elements into {} PER", self.values.len(), M::NAME
        );
        for value in &self.values {
            value.encode_per(target)?;
        }
        Ok(())
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        self.values.clear();
        let count = length::decode_length(source, self.size)?;
        log::trace!("decoding {} elements from {} PER", count, M::NAME);
        self.values.reserve(count);
        for _ in 0..count {
            self.create_and_add_value().decode_per(source)?;
        }
        Ok(())
    }
}


//------------ sequence_of! --------------------------------------------------

/// Defines a schema list type with fixed size bounds.
///
/// The macro takes the type definition in a notation close to ASN.1 and
/// creates a newtype around [`SequenceOf`] whose `Default` impl uses the
/// given bounds. Each bound must be a single token, i.e., a literal, a
/// constant, or an expression in braces. The bounds are available as the
/// associated constant `SIZE`, checked when it is first used.
/// The type dereferences to the [`SequenceOf`] and implements
/// [`Asn1Object`], so it can be decoded from octets directly via
/// [`Asn1Object::from_per_unaligned`] and friends.
///
/// Since PER ignores tags, the generated type reports no tag of its own.
///
/// ```
/// use supl_per::{Asn1Object, ConstrainedInt};
///
/// supl_per::sequence_of! {
///     /// A list of one to four small numbers.
///     #[derive(Clone, Debug, PartialEq)]
///     pub struct Numbers: SEQUENCE (SIZE (1..4)) OF ConstrainedInt<0, 7>;
/// }
///
/// let mut numbers = Numbers::default();
/// numbers.push(ConstrainedInt::new(5).unwrap());
/// let octets = numbers.to_per_unaligned_vec().unwrap();
/// assert_eq!(octets, [0b0010_1000]);
/// assert_eq!(Numbers::from_per_unaligned(&octets).unwrap(), numbers);
/// ```
#[macro_export]
macro_rules! sequence_of {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident:
            SEQUENCE (SIZE ($min:tt .. $max:tt)) OF $elem:ty;
    ) => {
        $(#[$attr])*
        $vis struct $name($crate::SequenceOf<$elem>);

        impl $name {
            /// The permitted number of elements.
            pub const SIZE: $crate::SizeConstraint
                = $crate::SizeConstraint::bounded($min, $max);

            /// Creates a new, empty list.
            pub fn new() -> Self {
                $name($crate::SequenceOf::new(Self::SIZE))
            }

            /// Converts the value into the underlying list.
            pub fn into_inner(self) -> $crate::SequenceOf<$elem> {
                self.0
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::SequenceOf<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl $crate::Asn1Object for $name {
            fn tag(&self) -> Option<$crate::Tag> {
                None
            }

            fn encode_per<M: $crate::Mode>(
                &self, target: &mut $crate::encode::BitStream<M>
            ) -> Result<(), $crate::encode::EncodeError> {
                $crate::Asn1Object::encode_per(&self.0, target)
            }

            fn decode_per<M: $crate::Mode>(
                &mut self, source: &mut $crate::decode::BitStreamReader<M>
            ) -> Result<(), $crate::decode::DecodeError> {
                $crate::Asn1Object::decode_per(&mut self.0, source)
            }
        }
    }
}


//============ Tests =========================================================
