//! PER encoding for restricted character string types.
//!
//! ASN.1 defines quite a few restricted character strings. PER encodes the
//! ones with a fixed number of bits per character, the so-called
//! known-multiplier character strings, compactly: each character takes
//! only as many bits as are needed to tell apart the characters of its
//! permitted alphabet. The crate currently implements the ones in use with
//! SUPL. Specifically:
//!
//! * [`Ia5String`] contains ASCII characters only (IA5 is an alternative
//!   name for ASCII),
//! * [`VisibleString`] contains the printable ASCII characters.
//!
//! Both are implemented atop a generic [`RestrictedString`] by
//! providing an implementation for the [`CharSet`] trait. Alphabets
//! restricted further by a schema are defined the same way through a
//! [`PermittedAlphabet`] of their own.

//--- Re-exports

pub use self::alphabet::PermittedAlphabet;
pub use self::restricted::{
    CharSet, RestrictedString,
    Ia5CharSet, Ia5String, VisibleCharSet, VisibleString,
};

//--- Private modules

mod alphabet;
mod restricted;
