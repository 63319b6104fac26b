//! Permitted alphabets of known-multiplier character strings.
//!
//! This is an internal module. It’s public items are re-exported by the
//! parent.

use crate::decode::{BitStreamReader, DecodeError, DecodeErrorKind};
use crate::encode::{BitStream, EncodeError};
use crate::length::constrained_bit_width;
use crate::mode::Mode;


//------------ PermittedAlphabet ---------------------------------------------

/// The set of characters a restricted character string may contain.
///
/// The alphabet is given as the ASCII values of its characters in
/// ascending order. Each character of a string is encoded in a fixed
/// number of bits which depends on the size of the alphabet: the minimal
/// number of bits in UNALIGNED PER, rounded up to the next power of two in
/// ALIGNED PER. If the largest character value fits into that many bits,
/// characters are encoded as their value. Otherwise they are encoded as
/// their index in the alphabet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PermittedAlphabet {
    /// The characters in ascending order.
    chars: &'static [u8],
}

impl PermittedAlphabet {
    /// The alphabet of IA5String: all of ASCII.
    pub const IA5: Self = PermittedAlphabet::new(&IA5_CHARS);

    /// The alphabet of VisibleString: the printable ASCII characters.
    pub const VISIBLE: Self = PermittedAlphabet::new(&VISIBLE_CHARS);

    /// Creates a new alphabet from its characters.
    ///
    /// # Panics
    ///
    /// The function panics if `chars` is empty, not in strictly ascending
    /// order, or contains non-ASCII values.
    pub const fn new(chars: &'static [u8]) -> Self {
        assert!(!chars.is_empty(), "empty alphabet");
        let mut idx = 0;
        while idx < chars.len() {
            assert!(chars[idx] < 0x80, "non-ASCII character in alphabet");
            assert!(
                idx == 0 || chars[idx - 1] < chars[idx],
                "alphabet not in ascending order"
            );
            idx += 1;
        }
        PermittedAlphabet { chars }
    }

    /// Returns the number of characters in the alphabet.
    pub fn len(self) -> usize {
        self.chars.len()
    }

    /// Returns whether the alphabet has no characters.
    ///
    /// Always returns `false` since alphabets can’t be empty.
    pub fn is_empty(self) -> bool {
        self.chars.is_empty()
    }

    /// Returns whether the alphabet contains `ch`.
    pub fn contains(self, ch: char) -> bool {
        self.index_of(ch).is_some()
    }

    /// Returns the index of `ch` in the alphabet.
    fn index_of(self, ch: char) -> Option<usize> {
        let ch = u8::try_from(ch).ok()?;
        self.chars.binary_search(&ch).ok()
    }

    /// Returns the number of bits per character for the PER variant.
    pub fn char_bits<M: Mode>(self) -> usize {
        let bits = constrained_bit_width(self.chars.len() as u128);
        if M::ALIGNED && bits > 0 {
            bits.next_power_of_two()
        }
        else {
            bits
        }
    }

    /// Returns whether characters are encoded as their index.
    fn uses_index<M: Mode>(self) -> bool {
        let largest = self.chars.last().copied().unwrap_or(0);
        u64::from(largest) >= 1u64 << self.char_bits::<M>()
    }

    /// Appends a character.
    pub fn encode_char<M: Mode>(
        self, target: &mut BitStream<M>, ch: char
    ) -> Result<(), EncodeError> {
        let idx = match self.index_of(ch) {
            Some(idx) => idx,
            None => return Err(EncodeError::InvalidCharacter(ch))
        };
        let value = if self.uses_index::<M>() {
            idx as u64
        }
        else {
            u64::from(self.chars[idx])
        };
        target.append_bits(value, self.char_bits::<M>())
    }

    /// Takes a character from the beginning of `source`.
    pub fn decode_char<M: Mode>(
        self, source: &mut BitStreamReader<M>
    ) -> Result<char, DecodeError> {
        let pos = source.pos();
        let value = source.read_bits(self.char_bits::<M>())?;
        let ch = if self.uses_index::<M>() {
            usize::try_from(value).ok().and_then(|idx| {
                self.chars.get(idx).copied()
            })
        }
        else {
            u8::try_from(value).ok().filter(|ch| {
                self.chars.binary_search(ch).is_ok()
            })
        };
        match ch {
            Some(ch) => Ok(char::from(ch)),
            None => Err(DecodeError::new(
                DecodeErrorKind::InvalidCharacter(value), pos
            ))
        }
    }
}


//------------ Character Tables ----------------------------------------------

/// Returns `N` consecutive character values starting at `first`.
const fn char_range<const N: usize>(first: u8) -> [u8; N] {
    let mut res = [0; N];
    let mut idx = 0;
    while idx < N {
        res[idx] = first + idx as u8;
        idx += 1;
    }
    res
}

const IA5_CHARS: [u8; 128] = char_range(0);
const VISIBLE_CHARS: [u8; 95] = char_range(b' ');


//============ Tests =========================================================
