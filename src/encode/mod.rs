//! Encoding data in PER.
//!
//! Encoding is done by appending to a [`BitStream`]. A type that can be
//! encoded implements [`Asn1Object`][crate::Asn1Object] and writes itself
//! to the stream via its `encode_per` method, which in turn calls the
//! `encode_per` methods of its components. Because the ALIGNED variant pads
//! relative to the start of the complete encoding, all components of a
//! message are written to the same stream.
//!
//! Once the outermost value is written, the stream can be turned into
//! octets via [`BitStream::to_vec`] or [`BitStream::into_bytes`]. The
//! [`Asn1Object`][crate::Asn1Object] trait provides shortcuts for this.

pub use self::error::EncodeError;
pub use self::stream::BitStream;

mod error;
mod stream;
