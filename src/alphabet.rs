//! Symbol domains and pin conversion.
//!
//! Every permutation in the machine is defined over one [`Alphabet`]. Inside
//! the engine symbols travel as *pins*: zero-based indices into the alphabet.

use serde::{Deserialize, Serialize};

/// Number of symbols in the letters alphabet.
pub const LETTERS_SIZE: usize = 26;

/// Number of symbols in the byte alphabet.
pub const BYTES_SIZE: usize = 256;

/// Ordered, fixed-size symbol domain of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// The 26 uppercase letters `A`..`Z`.
    Letters,
    /// All 256 byte values.
    Bytes,
}

impl Alphabet {
    /// Returns the number of symbols in the alphabet.
    pub fn size(self) -> usize {
        match self {
            Alphabet::Letters => LETTERS_SIZE,
            Alphabet::Bytes => BYTES_SIZE,
        }
    }

    /// Converts a symbol byte to its pin.
    ///
    /// Letters only accept uppercase ASCII; case folding is a mode concern.
    ///
    /// # Returns
    /// The pin, or `None` if the symbol is not part of the alphabet.
    pub fn pin_of(self, symbol: u8) -> Option<usize> {
        match self {
            Alphabet::Letters if symbol.is_ascii_uppercase() => Some((symbol - b'A') as usize),
            Alphabet::Letters => None,
            Alphabet::Bytes => Some(symbol as usize),
        }
    }

    /// Converts a pin back to its symbol byte.
    ///
    /// # Returns
    /// The symbol, or `None` if `pin >= size()`.
    pub fn symbol_of(self, pin: usize) -> Option<u8> {
        if pin >= self.size() {
            return None;
        }
        match self {
            Alphabet::Letters => Some(b'A' + pin as u8),
            Alphabet::Bytes => Some(pin as u8),
        }
    }

    /// Converts a `char` from a textual spec (rotor setting, notch, plugboard
    /// pair) to a pin.
    ///
    /// Letters are case-insensitive. In the byte alphabet a character stands
    /// for the byte equal to its code point, so only `U+0000..=U+00FF` map.
    pub fn pin_of_char(self, c: char) -> Option<usize> {
        match self {
            Alphabet::Letters if c.is_ascii_alphabetic() => {
                Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
            }
            Alphabet::Letters => None,
            Alphabet::Bytes => u8::try_from(c as u32).ok().map(usize::from),
        }
    }

    /// Human-readable rendering of a pin, used in error messages.
    pub(crate) fn describe(self, pin: usize) -> String {
        match (self, self.symbol_of(pin)) {
            (Alphabet::Letters, Some(symbol)) => format!("'{}'", symbol as char),
            (Alphabet::Bytes, Some(symbol)) => format!("0x{:02X}", symbol),
            (_, None) => format!("pin {}", pin),
        }
    }
}
