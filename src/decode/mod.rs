//! Decoding PER encoded data.
//!
//! This module provides the [`BitStreamReader`], the source all decoders in
//! this crate read from, and the error types produced when decoding fails.
//!
//! Types that can be decoded implement
//! [`Asn1Object`][crate::Asn1Object] and read themselves from a reader via
//! its `decode_per` method. Decoding never recovers from an error: PER has
//! no redundancy that would allow resynchronising, so any error makes the
//! whole message unusable.

pub use self::error::{DecodeError, DecodeErrorKind};
pub use self::reader::{BitStreamReader, Pos};

mod error;
mod reader;
