//! The trait implemented by all encodable types.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::decode::{BitStreamReader, DecodeError};
use crate::encode::{BitStream, EncodeError};
use crate::mode::{Aligned, Mode, Unaligned};
use crate::tag::Tag;


//------------ Asn1Object ----------------------------------------------------

/// A type that can be encoded into and decoded from PER.
///
/// Implementations provide the two methods [`encode_per`] and
/// [`decode_per`] generic over the PER variant. Everything else is
/// provided.
///
/// Decoding happens in place: a value is created first, typically via
/// `Default`, and then overwritten with the decoded content. This is how
/// container types create their elements before decoding into them. If
/// decoding fails, the value may be partially overwritten and should be
/// discarded.
///
/// Since PER doesn’t encode tags, [`tag`] is purely informational. Most
/// types of the SUPL schemas are tagged by their context and return
/// `None`.
///
/// [`encode_per`]: Asn1Object::encode_per
/// [`decode_per`]: Asn1Object::decode_per
/// [`tag`]: Asn1Object::tag
pub trait Asn1Object {
    /// Returns the tag of the type if it has one of its own.
    fn tag(&self) -> Option<Tag> {
        None
    }

    /// Returns whether the tag replaces the tag of the underlying type.
    fn is_tag_implicit(&self) -> bool {
        true
    }

    /// Appends the encoding of the value to `target`.
    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError>;

    /// Decodes a value from `source`, replacing the current content.
    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError>;


    //--- Provided methods

    /// Encodes the value into a new stream using UNALIGNED PER.
    fn encode_per_unaligned(
        &self
    ) -> Result<BitStream<Unaligned>, EncodeError> {
        let mut target = BitStream::new();
        self.encode_per(&mut target)?;
        Ok(target)
    }

    /// Encodes the value into a new stream using ALIGNED PER.
    fn encode_per_aligned(&self) -> Result<BitStream<Aligned>, EncodeError> {
        let mut target = BitStream::new();
        self.encode_per(&mut target)?;
        Ok(target)
    }

    /// Encodes the value into the octets of a complete UNALIGNED message.
    fn to_per_unaligned_vec(&self) -> Result<Vec<u8>, EncodeError> {
        self.encode_per_unaligned().map(|stream| stream.to_vec())
    }

    /// Encodes the value into the octets of a complete ALIGNED message.
    fn to_per_aligned_vec(&self) -> Result<Vec<u8>, EncodeError> {
        self.encode_per_aligned().map(|stream| stream.to_vec())
    }

    /// Decodes the value from an UNALIGNED PER reader.
    fn decode_per_unaligned(
        &mut self, source: &mut BitStreamReader<Unaligned>
    ) -> Result<(), DecodeError> {
        self.decode_per(source)
    }

    /// Decodes the value from an ALIGNED PER reader.
    fn decode_per_aligned(
        &mut self, source: &mut BitStreamReader<Aligned>
    ) -> Result<(), DecodeError> {
        self.decode_per(source)
    }

    /// Takes a new value from the beginning of `source`.
    fn take_from<M: Mode>(
        source: &mut BitStreamReader<M>
    ) -> Result<Self, DecodeError>
    where Self: Default {
        let mut res = Self::default();
        res.decode_per(source)?;
        Ok(res)
    }

    /// Decodes a value from the start of UNALIGNED PER encoded data.
    ///
    /// Any data left after the value is ignored.
    fn from_per_unaligned(data: &[u8]) -> Result<Self, DecodeError>
    where Self: Default {
        Self::take_from(&mut BitStreamReader::<Unaligned>::new(data))
    }

    /// Decodes a value from the start of ALIGNED PER encoded data.
    ///
    /// Any data left after the value is ignored.
    fn from_per_aligned(data: &[u8]) -> Result<Self, DecodeError>
    where Self: Default {
        Self::take_from(&mut BitStreamReader::<Aligned>::new(data))
    }
}


//--- Blanket impls

impl<T: Asn1Object> Asn1Object for Box<T> {
    fn tag(&self) -> Option<Tag> {
        self.as_ref().tag()
    }

    fn is_tag_implicit(&self) -> bool {
        self.as_ref().is_tag_implicit()
    }

    fn encode_per<M: Mode>(
        &self, target: &mut BitStream<M>
    ) -> Result<(), EncodeError> {
        self.as_ref().encode_per(target)
    }

    fn decode_per<M: Mode>(
        &mut self, source: &mut BitStreamReader<M>
    ) -> Result<(), DecodeError> {
        self.as_mut().decode_per(source)
    }
}
