//! Size constraints.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;


//------------ SizeConstraint ------------------------------------------------

/// The permitted number of elements of a `SEQUENCE OF` or similar type.
///
/// Both bounds are inclusive. The lower bound is never greater than the
/// upper bound: [`new`][Self::new] checks this at run time and
/// [`bounded`][Self::bounded] panics, which for the constants of schema
/// types means the check happens at compile time.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct SizeConstraint {
    /// The smallest permitted size.
    min: usize,

    /// The largest permitted size.
    max: usize,
}

impl SizeConstraint {
    /// Creates a new size constraint or errors out if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigurationError> {
        if min > max {
            Err(ConfigurationError::InvalidBounds { min, max })
        }
        else {
            Ok(SizeConstraint { min, max })
        }
    }

    /// Creates a new size constraint for use in constants.
    ///
    /// # Panics
    ///
    /// The function panics if `min` is greater than `max`.
    pub const fn bounded(min: usize, max: usize) -> Self {
        assert!(min <= max, "size constraint with min > max");
        SizeConstraint { min, max }
    }

    /// Creates a constraint that permits exactly `size` elements.
    pub const fn fixed(size: usize) -> Self {
        SizeConstraint { min: size, max: size }
    }

    /// Returns the lower bound.
    pub fn min(self) -> usize {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(self) -> usize {
        self.max
    }

    /// Returns whether only a single size is permitted.
    ///
    /// No length determinant is encoded for such a constraint.
    pub fn is_fixed(self) -> bool {
        self.min == self.max
    }

    /// Returns whether `size` is within the bounds.
    pub fn contains(self, size: usize) -> bool {
        self.min <= size && size <= self.max
    }

    /// Returns a copy with a new lower bound.
    pub fn with_min(self, min: usize) -> Result<Self, ConfigurationError> {
        Self::new(min, self.max)
    }

    /// Returns a copy with a new upper bound.
    pub fn with_max(self, max: usize) -> Result<Self, ConfigurationError> {
        Self::new(self.min, max)
    }
}

impl fmt::Display for SizeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "SIZE ({})", self.min)
        }
        else {
            write!(f, "SIZE ({}..{})", self.min, self.max)
        }
    }
}

impl fmt::Debug for SizeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SizeConstraint({})", self)
    }
}


//------------ ConfigurationError --------------------------------------------

/// A container was configured incorrectly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// The lower bound exceeds the upper bound.
    #[error("invalid size bounds: minimum {min} exceeds maximum {max}")]
    InvalidBounds { min: usize, max: usize },

    /// The bounds were changed after elements were added.
    #[error("size bounds cannot change once elements are present")]
    AlreadyPopulated,
}


//============ Tests =========================================================
