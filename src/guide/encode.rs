//! Encoding data in PER.
//!
//! All values of a message are appended to a single
//! [`BitStream`][crate::encode::BitStream]. Each type does so in the
//! `encode_per` method of its [`Asn1Object`][crate::Asn1Object]
//! implementation, which writes the fields of the type in the order the
//! schema defines them and calls `encode_per` on its components.
//!
//! Let’s say we have the following ASN.1 definitions:
//!
//! ```text
//! LocationReport ::= SEQUENCE {
//!     cellId  INTEGER (0..268435455),
//!     status  Status,
//!     label   IA5String (SIZE (1..32)) OPTIONAL,
//!     ...
//! }
//!
//! Status ::= ENUMERATED { stale, current, unknown, ... }
//! ```
//!
//! The built-in types of the crate carry their constraints as const
//! generics, so the definition maps into these Rust types:
//!
//! ```
//! use supl_per::{ConstrainedInt, Ia5String};
//!
//! #[derive(Clone, Debug, Default, Eq, PartialEq)]
//! pub struct LocationReport {
//!     pub cell_id: ConstrainedInt<0, 268_435_455>,
//!     pub status: Status,
//!     pub label: Option<Ia5String<1, 32>>,
//! }
//!
//! #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
//! pub enum Status {
//!     #[default]
//!     Stale,
//!     Current,
//!     Unknown,
//! }
//! ```
//!
//! The encoder of the enumerated type writes the index of the value. The
//! encoder of the sequence first writes the preamble with the extension bit
//! and the presence bit of the label, then the components:
//!
//! ```
//! use supl_per::{Asn1Object, ConstrainedInt, Ia5String, Mode};
//! use supl_per::constructed::{
//!     encode_enumerated, encode_optional, SequencePreamble,
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
//!     fn encode_per<M: Mode>(
//!         &self, target: &mut BitStream<M>
//!     ) -> Result<(), EncodeError> {
//!         let index = match *self {
//!             Status::Stale => 0,
//!             Status::Current => 1,
//!             Status::Unknown => 2,
//!         };
//!         encode_enumerated(target, index, 3, true)
//!     }
//! #
//! #   fn decode_per<M: Mode>(
//! #       &mut self, _source: &mut BitStreamReader<M>
//! #   ) -> Result<(), DecodeError> {
//! #       unimplemented!()
//! #   }
//! }
//!
//! impl Asn1Object for LocationReport {
//!     fn encode_per<M: Mode>(
//!         &self, target: &mut BitStream<M>
//!     ) -> Result<(), EncodeError> {
//!         SequencePreamble::encode(target, true, &[self.label.is_some()])?;
//!         self.cell_id.encode_per(target)?;
//!         self.status.encode_per(target)?;
//!         encode_optional(self.label.as_ref(), target)
//!     }
//! #
//! #   fn decode_per<M: Mode>(
//! #       &mut self, _source: &mut BitStreamReader<M>
//! #   ) -> Result<(), DecodeError> {
//! #       unimplemented!()
//! #   }
//! }
//!
//! let report = LocationReport {
//!     cell_id: ConstrainedInt::new(4711).unwrap(),
//!     status: Status::Current,
//!     label: None,
//! };
//!
//! // Two bits of preamble, 28 bits of cell ID, one extension bit and two
//! // bits of status.
//! let stream = report.encode_per_unaligned().unwrap();
//! assert_eq!(stream.bit_len(), 33);
//! assert_eq!(stream.as_slice(), &[0x00, 0x00, 0x49, 0x9C, 0x80]);
//! ```
//!
//! Values are checked against their constraints when they are encoded. An
//! integer outside its bounds or a list with too many elements results in
//! an [`EncodeError`][crate::encode::EncodeError]. Nothing at all is
//! written for absent OPTIONAL components, and lists of a fixed size have
//! no length determinant.
//!
//! Because the ALIGNED variant pads relative to the start of the complete
//! message, components must never be encoded into a stream of their own
//! and then copied. The only exception are open types, for instance
//! extension additions, which are always padded to full octets. See
//! [`length::encode_open_type`][crate::length::encode_open_type].
