//! The PER variants.
//!
//! X.691 defines two variants of the Packed Encoding Rules that differ only
//! in whether certain fields are padded to start at an octet boundary. Both
//! are represented by a zero-sized type implementing the [`Mode`] trait so
//! that encoders and decoders can be generic over the variant and the
//! distinction is resolved at compile time.


/// The ALIGNED variant of PER.
///
/// Fields that are wider than an octet, as well as octet strings and
/// certain length determinants, start at an octet boundary. Padding bits
/// are always zero.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Aligned;

/// The UNALIGNED variant of PER.
///
/// All fields are packed tightly without any padding except for the final
/// padding of a complete encoding to a whole number of octets.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Unaligned;

/// One of the PER variants.
pub trait Mode {
    /// Does this variant octet-align fields?
    const ALIGNED: bool;

    /// A human readable name for diagnostics.
    const NAME: &'static str;
}

impl Mode for Aligned {
    const ALIGNED: bool = true;
    const NAME: &'static str = "ALIGNED";
}

impl Mode for Unaligned {
    const ALIGNED: bool = false;
    const NAME: &'static str = "UNALIGNED";
}
