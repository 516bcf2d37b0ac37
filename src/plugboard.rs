//! Plugboard: involutive pair-swap layer applied before and after the rotors.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::mode::Mode;

/// Self-inverse swap table over an alphabet.
///
/// Starts as the identity. Each connected pair swaps two pins; a pin may be
/// part of at most one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    alphabet: Alphabet,
    table: Vec<usize>,
}

impl Plugboard {
    /// Creates an unplugged (identity) board.
    pub fn new(alphabet: Alphabet) -> Self {
        Plugboard {
            alphabet,
            table: (0..alphabet.size()).collect(),
        }
    }

    /// Creates a board from pin pairs.
    ///
    /// # Errors
    /// See [`connect`](Self::connect).
    pub fn from_pairs(alphabet: Alphabet, pairs: &[(usize, usize)]) -> Result<Self, EnigmaError> {
        let mut board = Self::new(alphabet);
        for &(a, b) in pairs {
            board.connect(a, b)?;
        }
        Ok(board)
    }

    /// Creates a board from two-symbol pair strings such as `["AB", "CF"]`.
    ///
    /// Letters are case-insensitive. In byte mode each character stands for
    /// the byte of its code point.
    ///
    /// # Errors
    /// - [`EnigmaError::Configuration`] if a pair is not exactly two symbols
    ///   of the mode's alphabet.
    /// - [`EnigmaError::DuplicateMapping`] if a symbol is used twice.
    pub fn from_specs<S: AsRef<str>>(mode: Mode, pairs: &[S]) -> Result<Self, EnigmaError> {
        let alphabet = mode.alphabet();
        let mut board = Self::new(alphabet);
        for pair in pairs {
            let pair = pair.as_ref();
            let pins = pair
                .chars()
                .map(|c| alphabet.pin_of_char(c))
                .collect::<Option<Vec<_>>>();
            match pins.as_deref() {
                Some(&[a, b]) => board.connect(a, b)?,
                _ => {
                    return Err(EnigmaError::Configuration(format!(
                        "plugboard pair '{}' must be exactly two {} mode symbols",
                        pair, mode
                    )))
                }
            }
        }
        Ok(board)
    }

    /// Parses a whitespace-separated pair list such as `"AB CF HJ"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Mode, Plugboard};
    ///
    /// let board = Plugboard::parse(Mode::Classic, "AB cf").unwrap();
    /// assert_eq!(board.apply(0), 1);
    /// assert_eq!(board.apply(5), 2);
    /// assert_eq!(board.apply(7), 7);
    /// ```
    pub fn parse(mode: Mode, spec: &str) -> Result<Self, EnigmaError> {
        let pairs: Vec<&str> = spec.split_whitespace().collect();
        Self::from_specs(mode, &pairs)
    }

    /// Restores a board from its full table.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if the table has the wrong size,
    /// holds an out-of-range pin, or is not self-inverse.
    pub fn from_table(alphabet: Alphabet, table: Vec<usize>) -> Result<Self, EnigmaError> {
        if table.len() != alphabet.size() {
            return Err(EnigmaError::Configuration(format!(
                "plugboard table has {} entries, expected {}",
                table.len(),
                alphabet.size()
            )));
        }
        for (x, &y) in table.iter().enumerate() {
            if y >= table.len() || table[y] != x {
                return Err(EnigmaError::Configuration(format!(
                    "plugboard table is not self-inverse at {}",
                    alphabet.describe(x)
                )));
            }
        }
        Ok(Plugboard { alphabet, table })
    }

    /// Swaps two pins.
    ///
    /// # Errors
    /// - [`EnigmaError::PinOutOfRange`] if either pin is outside the alphabet.
    /// - [`EnigmaError::DuplicateMapping`] if `a == b` or either pin is
    ///   already paired.
    pub fn connect(&mut self, a: usize, b: usize) -> Result<(), EnigmaError> {
        let size = self.table.len();
        for pin in [a, b] {
            if pin >= size {
                return Err(EnigmaError::PinOutOfRange { pin, size });
            }
        }
        if a == b {
            return Err(EnigmaError::DuplicateMapping(self.alphabet.describe(a)));
        }
        for pin in [a, b] {
            if self.table[pin] != pin {
                return Err(EnigmaError::DuplicateMapping(self.alphabet.describe(pin)));
            }
        }
        self.table[a] = b;
        self.table[b] = a;
        Ok(())
    }

    /// Maps a pin through the board.
    ///
    /// # Panics
    /// Panics if `pin` is not below the alphabet size. The machine only feeds
    /// pins it obtained from the same alphabet.
    #[inline]
    pub fn apply(&self, pin: usize) -> usize {
        self.table[pin]
    }

    /// Returns the connected pairs, lower pin first, in ascending order.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.table
            .iter()
            .enumerate()
            .filter(|&(x, &y)| x < y)
            .map(|(x, &y)| (x, y))
            .collect()
    }

    /// Returns the full table.
    pub fn table(&self) -> &[usize] {
        &self.table
    }

    /// Returns the board's alphabet.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_by_default() {
        let board = Plugboard::new(Alphabet::Letters);
        assert!((0..26).all(|p| board.apply(p) == p));
        assert!(board.pairs().is_empty());
    }

    #[test]
    fn test_pairs_swap_both_ways() {
        let board = Plugboard::parse(Mode::Classic, "AB CF HJ").unwrap();
        assert_eq!(board.apply(0), 1);
        assert_eq!(board.apply(1), 0);
        assert_eq!(board.apply(2), 5);
        assert_eq!(board.apply(9), 7);
        assert_eq!(board.pairs(), vec![(0, 1), (2, 5), (7, 9)]);
    }

    #[test]
    fn test_involution() {
        let spec = "QW ER TY UI OP AS DF GH JK LZ XC VB NM";
        let board = Plugboard::parse(Mode::Classic, spec).unwrap();
        assert_eq!(board.pairs().len(), 13);
        for pin in 0..26 {
            assert_eq!(board.apply(board.apply(pin)), pin);
        }
    }

    #[test]
    fn test_duplicate_mapping() {
        assert!(matches!(
            Plugboard::parse(Mode::Classic, "AB BC"),
            Err(EnigmaError::DuplicateMapping(symbol)) if symbol == "'B'"
        ));
        assert!(matches!(
            Plugboard::parse(Mode::Classic, "AA"),
            Err(EnigmaError::DuplicateMapping(_))
        ));
    }

    #[test]
    fn test_malformed_pairs() {
        assert!(matches!(
            Plugboard::parse(Mode::Classic, "ABC"),
            Err(EnigmaError::Configuration(_))
        ));
        assert!(matches!(
            Plugboard::parse(Mode::Classic, "A1"),
            Err(EnigmaError::Configuration(_))
        ));
        assert!(matches!(
            Plugboard::from_specs(Mode::Classic, &["A"]),
            Err(EnigmaError::Configuration(_))
        ));
    }

    #[test]
    fn test_byte_pairs() {
        let board = Plugboard::from_specs(Mode::Byte, &["a!", "\u{0}ÿ"]).unwrap();
        assert_eq!(board.apply(b'a' as usize), b'!' as usize);
        assert_eq!(board.apply(0x00), 0xFF);
        assert_eq!(board.apply(0xFF), 0x00);
        assert_eq!(board.alphabet(), Alphabet::Bytes);
    }

    #[test]
    fn test_connect_out_of_range() {
        let mut board = Plugboard::new(Alphabet::Letters);
        assert!(matches!(
            board.connect(3, 30),
            Err(EnigmaError::PinOutOfRange { pin: 30, size: 26 })
        ));
    }

    #[test]
    fn test_from_table() {
        let board = Plugboard::parse(Mode::Classic, "AZ").unwrap();
        let restored = Plugboard::from_table(Alphabet::Letters, board.table().to_vec()).unwrap();
        assert_eq!(restored, board);

        let mut broken: Vec<usize> = (0..26).collect();
        broken[0] = 1;
        let asymmetric = Plugboard::from_table(Alphabet::Letters, broken);
        let short = Plugboard::from_table(Alphabet::Letters, vec![0; 3]);
        assert!(asymmetric.is_err());
        assert!(short.is_err());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_apply_panics_outside_alphabet() {
        let board = Plugboard::new(Alphabet::Letters);
        board.apply(26);
    }
}
