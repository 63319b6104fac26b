//! Decoding PER-encoded data.
//!
//! Since PER encodes neither tags nor, in most cases, lengths, a decoder
//! must know exactly which type it is reading. Decoding is therefore driven
//! by the types themselves: the `decode_per` method of the
//! [`Asn1Object`][crate::Asn1Object] trait reads the fields of a type from
//! a [`BitStreamReader`][crate::decode::BitStreamReader] in the same order
//! the encoder wrote them.
//!
//! Decoding happens in place. A value is created first, usually through
//! its `Default` implementation, and then overwritten with the decoded
//! content. The provided method `take_from` does both in one go.
//!
//! Continuing the example from the encoding guide, the decoders of the
//! two types look like this:
//!
//! ```
//! use supl_per::{Asn1Object, ConstrainedInt, Ia5String, Mode};
//! use supl_per::constructed::{
//!     decode_enumerated, encode_enumerated, encode_optional,
//!     SequencePreamble,
//! };
//! use supl_per::decode::{BitStreamReader, DecodeError};
//! use supl_per::encode::{BitStream, EncodeError};
//!
//! # #[derive(Clone, Debug, Default, Eq, PartialEq)]
//! # pub struct LocationReport {
//! #     pub cell_id: ConstrainedInt<0, 268_435_455>,
//! #     pub status: Status,
//! #     pub label: Option<Ia5String<1, 32>>,
//! # }
//! #
//! # #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
//! # pub enum Status {
//! #     #[default]
//! #     Stale,
//! #     Current,
//! #     Unknown,
//! # }
//! #
//! impl Asn1Object for Status {
//! #   fn encode_per<M: Mode>(
//! #       &self, target: &mut BitStream<M>
//! #   ) -> Result<(), EncodeError> {
//! #       let index = match *self {
//! #           Status::Stale => 0,
//! #           Status::Current => 1,
//! #           Status::Unknown => 2,
//! #       };
//! #       encode_enumerated(target, index, 3, true)
//! #   }
//! #
//!     fn decode_per<M: Mode>(
//!         &mut self, source: &mut BitStreamReader<M>
//!     ) -> Result<(), DecodeError> {
//!         *self = match decode_enumerated(source, 3, true)? {
//!             0 => Status::Stale,
//!             1 => Status::Current,
//!             _ => Status::Unknown,
//!         };
//!         Ok(())
//!     }
//! }
//!
//! impl Asn1Object for LocationReport {
//! #   fn encode_per<M: Mode>(
//! #       &self, target: &mut BitStream<M>
//! #   ) -> Result<(), EncodeError> {
//! #       SequencePreamble::encode(target, true, &[self.label.is_some()])?;
//! #       self.cell_id.encode_per(target)?;
//! #       self.status.encode_per(target)?;
//! #       encode_optional(self.label.as_ref(), target)
//! #   }
//! #
//!     fn decode_per<M: Mode>(
//!         &mut self, source: &mut BitStreamReader<M>
//!     ) -> Result<(), DecodeError> {
//!         let preamble = SequencePreamble::take_from(source, true, 1)?;
//!         self.cell_id.decode_per(source)?;
//!         self.status.decode_per(source)?;
//!         self.label = preamble.take_optional(0, source)?;
//!         preamble.skip_extensions(source)?;
//!         Ok(())
//!     }
//! }
//!
//! let report = LocationReport::from_per_unaligned(
//!     &[0x00, 0x00, 0x49, 0x9C, 0x80]
//! ).unwrap();
//! assert_eq!(report.cell_id.get(), 4711);
//! assert_eq!(report.status, Status::Current);
//! assert!(report.label.is_none());
//!
//! let report = LocationReport {
//!     label: Some("roof".parse().unwrap()),
//!     .. report
//! };
//! let octets = report.to_per_aligned_vec().unwrap();
//! assert_eq!(LocationReport::from_per_aligned(&octets).unwrap(), report);
//! ```
//!
//! The preamble remembers whether the encoder added extension additions,
//! i.e., components defined by a later version of the schema. Since these
//! are wrapped in open types with a length, `skip_extensions` can step
//! over them without knowing their types. It must be called after the
//! last root component.
//!
//! Decoding fails with a [`DecodeError`][crate::decode::DecodeError] if
//! the data runs out, a decoded value violates a constraint, or an
//! unknown alternative of a CHOICE is encountered. The error carries the
//! bit position where the offending field started. Since PER has no
//! redundancy, there is no way to continue after an error and the value
//! being decoded must be discarded.
