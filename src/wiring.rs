//! Permutation tables stored as position deltas.
//!
//! A [`Wiring`] keeps, for every contact, the signed distance to the contact
//! it is wired to rather than the absolute target. Adding a rotor's offset on
//! both sides of the lookup then models a rotated wheel without rebuilding
//! the table:
//!
//! ```text
//! forward[i]     = w(i) - i
//! reverse[w(i)]  = i - w(i)
//! out            = wrap(pin + delta[wrap(pin + offset)])
//! ```

use crate::alphabet::{Alphabet, BYTES_SIZE};
use crate::error::EnigmaError;

/// Reduces `value` into `[0, size)` circularly.
#[inline]
pub(crate) fn wrap(value: isize, size: usize) -> usize {
    value.rem_euclid(size as isize) as usize
}

/// Immutable bijective mapping over an alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: Vec<i16>,
    reverse: Vec<i16>,
}

impl Wiring {
    /// Builds a wiring from its definition in alphabet symbols.
    ///
    /// # Parameters
    /// - `alphabet`: The alphabet the wiring permutes.
    /// - `definition`: Symbol wired to each input position, in order. For
    ///   letters this is the classic 26-character wiring string; for bytes
    ///   it is the 256-entry table.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the definition has the wrong
    /// length, uses a symbol outside the alphabet, or repeats a symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Alphabet, Wiring};
    ///
    /// let wiring = Wiring::new(Alphabet::Letters, b"EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(wiring.forward(0, 0), 4); // A -> E
    /// assert_eq!(wiring.reverse(4, 0), 0);
    /// ```
    pub fn new(alphabet: Alphabet, definition: &[u8]) -> Result<Self, EnigmaError> {
        let pins = definition
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                alphabet.pin_of(symbol).ok_or_else(|| {
                    EnigmaError::InvalidWiring(format!(
                        "symbol 0x{:02X} at position {} is not in the alphabet",
                        symbol, position
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if pins.len() != alphabet.size() {
            return Err(EnigmaError::InvalidWiring(format!(
                "wiring has {} symbols, expected {}",
                pins.len(),
                alphabet.size()
            )));
        }
        Self::from_pins(&pins)
    }

    /// Builds a wiring from absolute target pins.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if `pins` is empty, longer than
    /// the byte alphabet, or is not a permutation of `0..pins.len()`.
    pub fn from_pins(pins: &[usize]) -> Result<Self, EnigmaError> {
        let size = pins.len();
        if size == 0 {
            return Err(EnigmaError::InvalidWiring("empty wiring".to_string()));
        }
        // deltas are stored as i16
        if size > BYTES_SIZE {
            return Err(EnigmaError::InvalidWiring(format!(
                "{} contacts exceed the largest alphabet of {}",
                size, BYTES_SIZE
            )));
        }

        let mut seen = vec![false; size];
        let mut forward = vec![0i16; size];
        let mut reverse = vec![0i16; size];
        for (x, &y) in pins.iter().enumerate() {
            if y >= size {
                return Err(EnigmaError::InvalidWiring(
                    format!("target {} at position {} exceeds size {}", y, x, size),
                ));
            }
            if seen[y] {
                return Err(EnigmaError::InvalidWiring(
                    format!("target {} is wired more than once", y),
                ));
            }
            seen[y] = true;
            forward[x] = y as i16 - x as i16;
            reverse[y] = x as i16 - y as i16;
        }

        Ok(Wiring { forward, reverse })
    }

    /// Returns the number of contacts.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// Translates `pin` entering a wheel rotated by `offset` contacts.
    #[inline]
    pub fn forward(&self, pin: usize, offset: usize) -> usize {
        let size = self.size();
        let delta = self.forward[(pin + offset) % size];
        wrap(pin as isize + delta as isize, size)
    }

    /// Inverse of [`forward`](Self::forward) at the same offset.
    #[inline]
    pub fn reverse(&self, pin: usize, offset: usize) -> usize {
        let size = self.size();
        let delta = self.reverse[(pin + offset) % size];
        wrap(pin as isize + delta as isize, size)
    }

    /// Reconstructs the absolute mapping at offset zero.
    pub fn pins(&self) -> Vec<usize> {
        (0..self.size()).map(|pin| self.forward(pin, 0)).collect()
    }

    /// Returns `true` if the wiring is its own inverse.
    pub fn is_involution(&self) -> bool {
        (0..self.size()).all(|pin| self.forward(self.forward(pin, 0), 0) == pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENIGMA_I: &[u8] = b"EKMFLGDQVZNTOWYHXUSPAIBRCJ";
    const REFLECTOR_B: &[u8] = b"YRUHQSLDPXNGOKMIEBFZCWVJAT";

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(-1, 26), 25);
        assert_eq!(wrap(26, 26), 0);
        assert_eq!(wrap(-27, 26), 25);
        assert_eq!(wrap(300, 256), 44);
    }

    #[test]
    fn test_delta_tables() {
        let wiring = Wiring::new(Alphabet::Letters, ENIGMA_I).unwrap();
        // A -> E is +4, and E comes back to A with -4
        assert_eq!(wiring.forward[0], 4);
        assert_eq!(wiring.reverse[4], -4);
    }

    #[test]
    fn test_offset_shifts_entry_contact() {
        let wiring = Wiring::new(Alphabet::Letters, ENIGMA_I).unwrap();
        // offset 1: pin A meets the B contact (B -> K, +9), so A exits at J
        assert_eq!(wiring.forward(0, 1), 9);
        assert_eq!(wiring.reverse(9, 1), 0);
    }

    #[test]
    fn test_pins_roundtrip() {
        let wiring = Wiring::new(Alphabet::Letters, ENIGMA_I).unwrap();
        let pins = wiring.pins();
        let expected: Vec<usize> = ENIGMA_I.iter().map(|&c| (c - b'A') as usize).collect();
        assert_eq!(pins, expected);
        assert_eq!(Wiring::from_pins(&pins).unwrap(), wiring);
    }

    #[test]
    fn test_reverse_inverts_forward_at_every_offset() {
        let wiring = Wiring::new(Alphabet::Letters, ENIGMA_I).unwrap();
        for offset in 0..26 {
            for pin in 0..26 {
                assert_eq!(wiring.reverse(wiring.forward(pin, offset), offset), pin);
            }
        }
    }

    #[test]
    fn test_involution_detection() {
        let reflector = Wiring::new(Alphabet::Letters, REFLECTOR_B).unwrap();
        let rotor = Wiring::new(Alphabet::Letters, ENIGMA_I).unwrap();
        assert!(reflector.is_involution());
        assert!(!rotor.is_involution());
    }

    #[test]
    fn test_rejects_wrong_length() {
        let result = Wiring::new(Alphabet::Letters, b"ABC");
        assert!(matches!(result, Err(EnigmaError::InvalidWiring(_))));
    }

    #[test]
    fn test_rejects_repeated_symbol() {
        let result = Wiring::new(Alphabet::Letters, b"AACDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(matches!(result, Err(EnigmaError::InvalidWiring(_))));
    }

    #[test]
    fn test_rejects_symbol_outside_alphabet() {
        let result = Wiring::new(Alphabet::Letters, b"aBCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(matches!(result, Err(EnigmaError::InvalidWiring(_))));
    }

    #[test]
    fn test_from_pins_rejects_out_of_range() {
        assert!(matches!(
            Wiring::from_pins(&[0, 1, 3]),
            Err(EnigmaError::InvalidWiring(_))
        ));
        let empty = Wiring::from_pins(&[]);
        assert!(matches!(empty, Err(EnigmaError::InvalidWiring(_))));
    }

    #[test]
    fn test_from_pins_rejects_oversized_table() {
        let mut pins: Vec<usize> = (0..40_000).collect();
        pins.swap(1, 32_768);
        let result = Wiring::from_pins(&pins);
        assert!(matches!(result, Err(EnigmaError::InvalidWiring(_))));

        let largest: Vec<usize> = (0..BYTES_SIZE).rev().collect();
        assert_eq!(Wiring::from_pins(&largest).unwrap().size(), BYTES_SIZE);
    }

    #[test]
    fn test_byte_wiring() {
        let table: Vec<u8> = (0..=255u8).rev().collect();
        let wiring = Wiring::new(Alphabet::Bytes, &table).unwrap();
        assert_eq!(wiring.size(), 256);
        assert_eq!(wiring.forward(0, 0), 255);
        assert!(wiring.is_involution());
    }
}
