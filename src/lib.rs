//! Handling of data in the Packed Encoding Rules.
//!
//! This crate encodes and decodes values of ASN.1 types in both variants
//! of the Packed Encoding Rules (PER) defined in ITU-T recommendation
//! X.691, with a focus on the types used by the OMA Secure User Plane
//! Location (SUPL) protocols.
//!
//! All encodable types implement the [`Asn1Object`] trait. Values are
//! appended to a [`BitStream`][encode::BitStream] when encoding and read
//! from a [`BitStreamReader`][decode::BitStreamReader] when decoding. Which
//! of the two PER variants is used is determined by the type parameter of
//! stream and reader, either [`Aligned`] or [`Unaligned`].
//!
//! The crate provides types for the built-in ASN.1 types with the
//! constraints that PER cares about expressed as const generics. The
//! central one is [`SequenceOf`], a list of elements with a size
//! constraint. Schema-level list types are best defined via the
//! [`sequence_of!`] macro. The [`supl2`] module contains the types of the
//! SUPL 2.0 schemas built atop these.
//!
//! If you are new to PER or this crate, the [`guide`] module provides an
//! introduction.

//--- Re-exports

pub use self::bstring::BitString;
pub use self::constraint::{ConfigurationError, SizeConstraint};
pub use self::int::ConstrainedInt;
pub use self::mode::{Aligned, Mode, Unaligned};
pub use self::object::Asn1Object;
pub use self::ostring::OctetString;
pub use self::sequence_of::SequenceOf;
pub use self::string::{Ia5String, VisibleString};
pub use self::tag::{Class, Tag};


//--- Public modules

pub mod constructed;
pub mod decode;
pub mod encode;
pub mod length;
pub mod mode;
pub mod string;
pub mod supl2;


//--- Private modules

mod bstring;
mod constraint;
mod int;
mod object;
mod ostring;
mod sequence_of;
mod tag;


//--- Elaborate documentation
//
pub mod guide;
