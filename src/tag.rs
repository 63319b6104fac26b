//! ASN.1 tags.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
    Universal,
    Application,
    Context,
    Private,
}

impl Class {
    /// Returns the class for its numeric value as used in schema tables.
    ///
    /// The values are 0 for universal, 1 for application, 2 for context
    /// specific, and 3 for private. Anything else returns `None`.
    pub fn from_int(value: i32) -> Option<Self> {
        match value {
            0 => Some(Class::Universal),
            1 => Some(Class::Application),
            2 => Some(Class::Context),
            3 => Some(Class::Private),
            _ => None
        }
    }

    /// Returns the numeric value of the class.
    pub fn to_int(self) -> i32 {
        match self {
            Class::Universal => 0,
            Class::Application => 1,
            Class::Context => 2,
            Class::Private => 3,
        }
    }
}


//------------ Tag -----------------------------------------------------------

/// The tag of an ASN.1 type.
///
/// A tag consists of a class and a number. PER doesn’t encode tags at all
/// but they still determine the canonical order of SET components and
/// CHOICE alternatives, so every type can report its tag via
/// [`Asn1Object::tag`][crate::Asn1Object::tag].
///
/// Types that are tagged implicitly by their context, which is the case for
/// nearly all types of the SUPL schemas, have no tag of their own. This is
/// expressed as `Option<Tag>::None` rather than through a magic tag value.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag {
    /// The class of the tag.
    class: Class,

    /// The tag number.
    number: u32,
}

/// # Constants for Often Used Tag Values
///
impl Tag {
    //--- Universal Tags
    //
    // See clause 8.4 of X.680.

    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Tag::universal(1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Tag::universal(2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Tag::universal(3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Tag::universal(4);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Tag::universal(5);

    /// The tag for the ENUMERATED type, UNIVERSAL 10.
    pub const ENUMERATED: Self = Tag::universal(10);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Tag::universal(16);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Tag::universal(17);

    /// The tag for the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Tag::universal(22);

    /// The tag for the VisibleString type, UNIVERSAL 26.
    pub const VISIBLE_STRING: Self = Tag::universal(26);
}

impl Tag {
    /// Creates a new tag from a class and number.
    pub const fn new(class: Class, number: u32) -> Self {
        Tag { class, number }
    }

    /// Creates a new tag in the universal class with the given tag number.
    pub const fn universal(number: u32) -> Self {
        Tag::new(Class::Universal, number)
    }

    /// Creates a new tag in the application class with the given tag number.
    pub const fn application(number: u32) -> Self {
        Tag::new(Class::Application, number)
    }

    /// Creates a new tag in the context specific class.
    pub const fn ctx(number: u32) -> Self {
        Tag::new(Class::Context, number)
    }

    /// Creates a new tag in the private class with the given tag number.
    pub const fn private(number: u32) -> Self {
        Tag::new(Class::Private, number)
    }

    /// Creates a tag from the numeric values used in schema tables.
    ///
    /// Schema tables mark types without a tag of their own with the pair
    /// `(-1, -1)`. This and any other pair that doesn’t name a valid class
    /// and a non-negative number returns `None`. The values come from
    /// generated schema code rather than from the wire, so there is no
    /// further validation.
    pub fn from_class_and_number(class: i32, number: i32) -> Option<Self> {
        let class = Class::from_int(class)?;
        let number = u32::try_from(number).ok()?;
        Some(Tag::new(class, number))
    }

    /// Returns the class of the tag.
    pub fn class(self) -> Class {
        self.class
    }

    /// Returns the number of the tag.
    pub fn number(self) -> u32 {
        self.number
    }

    /// Returns whether the tag is of the universal class.
    pub fn is_universal(self) -> bool {
        self.class == Class::Universal
    }

    /// Returns whether the tag is of the application class.
    pub fn is_application(self) -> bool {
        self.class == Class::Application
    }

    /// Returns whether the tag is of the context specific class.
    pub fn is_context_specific(self) -> bool {
        self.class == Class::Context
    }

    /// Returns whether the tag is of the private class.
    pub fn is_private(self) -> bool {
        self.class == Class::Private
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::BOOLEAN => write!(f, "BOOLEAN"),
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::NULL => write!(f, "NULL"),
            Tag::ENUMERATED => write!(f, "ENUMERATED"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            Tag::SET => write!(f, "SET"),
            Tag::IA5_STRING => write!(f, "IA5String"),
            Tag::VISIBLE_STRING => write!(f, "VisibleString"),
            tag => {
                match tag.class {
                    Class::Universal => write!(f, "[UNIVERSAL ")?,
                    Class::Application => write!(f, "[APPLICATION ")?,
                    Class::Context => write!(f, "[")?,
                    Class::Private => write!(f, "[PRIVATE ")?,
                }
                write!(f, "{}]", tag.number)
            }
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({})", self)
    }
}


//============ Tests =========================================================
