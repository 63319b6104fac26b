//! A short introduction to ASN.1 and PER.
//!
//! # ASN.1 and Encoding Rules
//!
//! The _Abstract Syntax Notation One_ (ASN.1) is a formal language that can
//! be used to describe the structure of data. Statements describe both data
//! types and how they are composed from other types. These rules do not,
//! however, describe how the values are to be represented in files or on
//! the network. This is done by accompanying standards known as _encoding
//! rules._
//!
//! The _Packed Encoding Rules_ (PER) are the encoding rules of choice when
//! space is scarce, which is why the SUPL protocols use them. Unlike the
//! Basic Encoding Rules, PER doesn’t encode tags and often not even
//! lengths. Instead, the encoding is derived from the constraints in the
//! type definition: an integer that can only be between 0 and 7 takes
//! exactly three bits, a list of at most 64 elements uses six bits for its
//! length. As a consequence, a PER encoding can only be decoded if the
//! exact definition of its type is known.
//!
//! PER comes in two variants. The _ALIGNED_ variant pads certain fields so
//! that they start at an octet boundary, the _UNALIGNED_ variant never
//! does. In this crate, the variant is a type parameter, either
//! [`Aligned`] or [`Unaligned`].
//!
//! ASN.1 is currently defined in ITU-T recommendation [X.680], PER in
//! [X.691]. Both these recommendations are freely available from the ITU.
//!
//! [X.680]: https://www.itu.int/rec/T-REC-X.680
//! [X.691]: https://www.itu.int/rec/T-REC-X.691
//! [`Aligned`]: crate::Aligned
//! [`Unaligned`]: crate::Unaligned
//!
//!
//! # ASN.1 Definitions
//!
//! ASN.1 collects definitions into documents called modules. All definitions
//! create named objects: data types if the names start with a capital letter
//! or values if they start with a small letter.
//!
//! As an example, here is how SUPL defines a list of sessions:
//!
//! ```text
//! SessionList ::= SEQUENCE SIZE (1..maxnumSessions) OF SessionInformation
//!
//! SessionInformation ::= SEQUENCE {
//!     sessionID  SessionID,
//!     ...
//! }
//! ```
//!
//! The first definition says that a session list contains between one and
//! `maxnumSessions` elements of type `SessionInformation`. The part in
//! parentheses is a _size constraint._ The second definition describes a
//! sequence with only one component. The ellipsis marks the type as
//! _extensible:_ later versions of the schema may add more components.
//!
//!
//! # Encoding ASN.1 Values
//!
//! PER writes a value as a sequence of bits, one field after another, with
//! nothing in between but the occasional padding in the ALIGNED variant.
//!
//! Integers with both bounds known are written as the offset from the lower
//! bound in as many bits as the range needs. A list is preceded by its
//! number of elements, called the _length determinant,_ written the same
//! way as an integer between the bounds of its size constraint. If the
//! size is fixed, the length isn’t written at all.
//!
//! A SEQUENCE starts with a _preamble:_ a bit telling whether extension
//! additions are present if the type is extensible, and one bit for each
//! OPTIONAL component telling whether it is present. A CHOICE writes the
//! index of its alternative, again as a constrained integer.
//!
//!
//! # Selected Types
//!
//! The crate provides the following types for the built-in ASN.1 types:
//!
//! | ASN.1                                | Rust                       |
//! |--------------------------------------|----------------------------|
//! | `BOOLEAN`                            | `bool`                     |
//! | `NULL`                               | `()`                       |
//! | `INTEGER (lb..ub)`                   | [`ConstrainedInt`]         |
//! | `OCTET STRING (SIZE (min..max))`     | [`OctetString`]            |
//! | `BIT STRING (SIZE (min..max))`       | [`BitString`]              |
//! | `IA5String (SIZE (min..max))`        | [`Ia5String`]              |
//! | `VisibleString (SIZE (min..max))`    | [`VisibleString`]          |
//! | `SEQUENCE (SIZE (min..max)) OF T`    | [`SequenceOf`]             |
//!
//! SEQUENCE, CHOICE and ENUMERATED types are defined by the schema. They
//! are implemented as Rust structs and enums with the help of the
//! functions in the [`constructed`] module.
//!
//! [`ConstrainedInt`]: crate::ConstrainedInt
//! [`OctetString`]: crate::OctetString
//! [`BitString`]: crate::BitString
//! [`Ia5String`]: crate::Ia5String
//! [`VisibleString`]: crate::VisibleString
//! [`SequenceOf`]: crate::SequenceOf
//! [`constructed`]: crate::constructed
