//! Rotor: a wiring wheel with a rotating offset and notch positions.
//!
//! The rotor is the unit the machine steps. Its offset models how far the
//! wheel has turned; its notches decide when it carries into the next wheel.

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::mode::Mode;
use crate::registry::{self, ComponentDescriptor, ComponentKind};
use crate::wiring::Wiring;

/// A stepping wheel of the rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: Wiring,
    notches: Vec<usize>,
    offset: usize,
    fixed: bool,
}

impl Rotor {
    /// Creates a rotor from its parts.
    ///
    /// # Parameters
    /// - `name`: Short-name reported by [`name`](Self::name).
    /// - `wiring`: The wheel's permutation.
    /// - `offset`: Initial rotational position.
    /// - `notches`: Positions at which a step carries into the next rotor.
    /// - `fixed`: `true` for a wheel that never advances.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if the offset or a notch lies
    /// outside the wiring, or if a fixed rotor declares notches.
    pub fn new(
        name: impl Into<String>,
        wiring: Wiring,
        offset: usize,
        mut notches: Vec<usize>,
        fixed: bool,
    ) -> Result<Self, EnigmaError> {
        let name = name.into();
        let size = wiring.size();
        if offset >= size {
            return Err(EnigmaError::Configuration(format!(
                "rotor '{}' offset {} is outside a wheel of {} positions",
                name, offset, size
            )));
        }
        if let Some(&notch) = notches.iter().find(|&&n| n >= size) {
            return Err(EnigmaError::Configuration(format!(
                "rotor '{}' notch {} is outside a wheel of {} positions",
                name, notch, size
            )));
        }
        if fixed && !notches.is_empty() {
            return Err(EnigmaError::Configuration(
                format!("fixed rotor '{}' cannot carry notches", name),
            ));
        }
        notches.sort_unstable();
        notches.dedup();

        Ok(Rotor {
            name,
            wiring,
            notches,
            offset,
            fixed,
        })
    }

    /// Instantiates a catalogued rotor.
    ///
    /// # Parameters
    /// - `descriptor`: Registry entry; must be a rotor.
    /// - `offset`: Initial position.
    /// - `notches`: Notch override, or `None` for the descriptor's defaults.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ComponentKindMismatch`] for a reflector entry,
    /// plus the errors of [`Wiring::new`] and [`Rotor::new`].
    pub fn from_descriptor(
        descriptor: &ComponentDescriptor,
        offset: usize,
        notches: Option<Vec<usize>>,
    ) -> Result<Self, EnigmaError> {
        if descriptor.kind != ComponentKind::Rotor {
            return Err(EnigmaError::ComponentKindMismatch {
                name: descriptor.short.to_string(),
                expected: ComponentKind::Rotor,
            });
        }
        let wiring = Wiring::new(descriptor.alphabet, descriptor.wiring)?;
        let notches = match notches {
            Some(notches) => notches,
            None => descriptor
                .notches
                .iter()
                .filter_map(|&symbol| descriptor.alphabet.pin_of(symbol))
                .collect(),
        };
        Self::new(descriptor.short, wiring, offset, notches, descriptor.fixed)
    }

    /// Builds a rotor from a `SHORTNAME[:SETTING[:NOTCHES]]` spec string.
    ///
    /// SETTING is a single symbol giving the initial offset (empty means the
    /// first symbol). NOTCHES is one or more symbols replacing the default
    /// notch set (empty keeps the defaults). Letters are case-insensitive; in
    /// byte mode a character stands for the byte of its code point.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownComponent`] for an uncatalogued short-name.
    /// - [`EnigmaError::ComponentKindMismatch`] if the name is a reflector.
    /// - [`EnigmaError::ModeMismatch`] if the rotor's alphabet differs from
    ///   the mode's.
    /// - [`EnigmaError::Configuration`] for malformed settings or notches.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Mode, Rotor};
    ///
    /// let rotor = Rotor::from_spec("com1:C:QV", Mode::Classic).unwrap();
    /// assert_eq!(rotor.offset(), 2);
    /// assert_eq!(rotor.notches(), &[16, 21]);
    /// ```
    pub fn from_spec(spec: &str, mode: Mode) -> Result<Self, EnigmaError> {
        let mut fields = spec.split(':');
        let short = fields.next().unwrap_or_default();
        let setting = fields.next().unwrap_or_default();
        let notches = fields.next().unwrap_or_default();
        if fields.next().is_some() {
            return Err(EnigmaError::Configuration(
                format!("rotor spec '{}' has more than three fields", spec),
            ));
        }

        let descriptor = registry::lookup(short)
            .ok_or_else(|| EnigmaError::UnknownComponent(short.to_string()))?;
        if descriptor.kind != ComponentKind::Rotor {
            return Err(EnigmaError::ComponentKindMismatch {
                name: short.to_string(),
                expected: ComponentKind::Rotor,
            });
        }
        let alphabet = mode.alphabet();
        check_alphabet(descriptor, mode)?;

        let offset = match setting.chars().count() {
            0 => 0,
            1 => parse_symbol(alphabet, setting, spec)?,
            _ => {
                return Err(EnigmaError::Configuration(
                    format!("rotor spec '{}' setting must be a single symbol", spec),
                ))
            }
        };
        let notches = if notches.is_empty() {
            None
        } else {
            let pins = notches
                .chars()
                .map(|c| {
                    alphabet.pin_of_char(c).ok_or_else(|| {
                        EnigmaError::Configuration(format!(
                            "rotor spec '{}' notch '{}' is not a symbol of the alphabet",
                            spec, c
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Some(pins)
        };

        Self::from_descriptor(descriptor, offset, notches)
    }

    /// Translates a pin on the way towards the reflector.
    #[inline]
    pub fn translate_forward(&self, pin: usize) -> usize {
        self.wiring.forward(pin, self.offset)
    }

    /// Translates a pin on the way back from the reflector.
    #[inline]
    pub fn translate_reverse(&self, pin: usize) -> usize {
        self.wiring.reverse(pin, self.offset)
    }

    /// Advances the rotor by one position.
    ///
    /// # Returns
    /// `true` if the offset *before* the step was a notch, meaning the next
    /// rotor must be stepped too. A fixed rotor neither moves nor carries.
    pub fn step(&mut self) -> bool {
        if self.fixed {
            return false;
        }
        let carry = self.at_notch();
        self.advance();
        carry
    }

    /// Returns `true` if the current offset is one of the notches.
    pub fn at_notch(&self) -> bool {
        !self.fixed && self.notches.contains(&self.offset)
    }

    /// Moves one position without evaluating the notch.
    pub(crate) fn advance(&mut self) {
        if !self.fixed {
            self.offset = (self.offset + 1) % self.wiring.size();
        }
    }

    /// Returns the current rotational position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Turns the rotor to `offset`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::PinOutOfRange`] if `offset >= size()`.
    pub fn set_offset(&mut self, offset: usize) -> Result<(), EnigmaError> {
        if offset >= self.size() {
            return Err(EnigmaError::PinOutOfRange {
                pin: offset,
                size: self.size(),
            });
        }
        self.offset = offset;
        Ok(())
    }

    /// Returns the sorted notch positions.
    pub fn notches(&self) -> &[usize] {
        &self.notches
    }

    /// Returns `true` for a wheel that never advances.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Returns the rotor's short-name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rotor's wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Returns the number of positions on the wheel.
    pub fn size(&self) -> usize {
        self.wiring.size()
    }
}

/// Rejects a catalogued component whose alphabet differs from the mode's.
pub(crate) fn check_alphabet(
    descriptor: &ComponentDescriptor,
    mode: Mode,
) -> Result<(), EnigmaError> {
    if descriptor.alphabet == mode.alphabet() {
        return Ok(());
    }
    let reason = if descriptor.byte_compatible() {
        "may only be used in byte mode"
    } else {
        "cannot be used in byte mode"
    };
    Err(EnigmaError::ModeMismatch(format!(
        "{} '{}' {} (machine mode is {})",
        descriptor.kind, descriptor.short, reason, mode
    )))
}

fn parse_symbol(alphabet: Alphabet, setting: &str, spec: &str) -> Result<usize, EnigmaError> {
    setting
        .chars()
        .next()
        .and_then(|c| alphabet.pin_of_char(c))
        .ok_or_else(|| {
            EnigmaError::Configuration(format!(
                "rotor spec '{}' setting '{}' is not in the alphabet",
                spec, setting
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_spec_defaults() {
        let rotor = Rotor::from_spec("enig1", Mode::Classic).unwrap();
        assert_eq!(rotor.name(), "enig1");
        assert_eq!(rotor.offset(), 0);
        assert_eq!(rotor.notches(), &[16]); // Q
        assert!(!rotor.is_fixed());
        assert_eq!(rotor.size(), 26);
    }

    #[test]
    fn test_from_spec_setting_and_notches() {
        let rotor = Rotor::from_spec("com1:c:qv", Mode::Classic).unwrap();
        assert_eq!(rotor.offset(), 2);
        assert_eq!(rotor.notches(), &[16, 21]);
    }

    #[test]
    fn test_from_spec_empty_fields_keep_defaults() {
        let rotor = Rotor::from_spec("navy6::", Mode::Classic).unwrap();
        assert_eq!(rotor.offset(), 0);
        assert_eq!(rotor.notches(), &[12, 25]); // M, Z
    }

    #[test]
    fn test_from_spec_errors() {
        assert!(matches!(
            Rotor::from_spec("com9:A", Mode::Classic),
            Err(EnigmaError::UnknownComponent(name)) if name == "com9"
        ));
        let err = Rotor::from_spec("ref-b", Mode::Classic).unwrap_err();
        assert_eq!(err.to_string(), "'ref-b' is not a rotor");
        assert!(matches!(
            Rotor::from_spec("com1:AB", Mode::Classic),
            Err(EnigmaError::Configuration(_))
        ));
        assert!(matches!(
            Rotor::from_spec("com1:1", Mode::Classic),
            Err(EnigmaError::Configuration(_))
        ));
        assert!(matches!(
            Rotor::from_spec("com1:A:Q:X", Mode::Classic),
            Err(EnigmaError::Configuration(_))
        ));
        assert!(matches!(
            Rotor::from_spec("com1:A:Q7", Mode::Classic),
            Err(EnigmaError::Configuration(_))
        ));
    }

    #[test]
    fn test_mode_mismatch() {
        assert!(matches!(
            Rotor::from_spec("byte1", Mode::Classic),
            Err(EnigmaError::ModeMismatch(_))
        ));
        assert!(matches!(
            Rotor::from_spec("com1", Mode::Byte),
            Err(EnigmaError::ModeMismatch(_))
        ));
    }

    #[test]
    fn test_byte_spec_uses_code_points() {
        let rotor = Rotor::from_spec("byte1:A:ÿ", Mode::Byte).unwrap();
        assert_eq!(rotor.offset(), 0x41);
        assert_eq!(rotor.notches(), &[0xFF]);
        assert_eq!(rotor.size(), 256);
    }

    #[test]
    fn test_step_reports_pre_step_notch() {
        // enig1 notches at Q (16)
        let mut rotor = Rotor::from_spec("enig1:P", Mode::Classic).unwrap();
        assert!(!rotor.step());
        assert_eq!(rotor.offset(), 16);
        assert!(rotor.step());
        assert_eq!(rotor.offset(), 17);
        assert!(!rotor.step());
    }

    #[test]
    fn test_step_wraps() {
        let mut rotor = Rotor::from_spec("army5:Z", Mode::Classic).unwrap();
        assert!(rotor.step()); // notch at Z
        assert_eq!(rotor.offset(), 0);
    }

    #[test]
    fn test_fixed_rotor_never_moves() {
        let mut rotor = Rotor::from_spec("beta:C", Mode::Classic).unwrap();
        assert!(rotor.is_fixed());
        for _ in 0..30 {
            assert!(!rotor.step());
        }
        assert_eq!(rotor.offset(), 2);
        assert!(matches!(
            Rotor::from_spec("beta:A:Q", Mode::Classic),
            Err(EnigmaError::Configuration(_))
        ));
    }

    #[test]
    fn test_notchless_rotor_advances_silently() {
        let wiring = Wiring::new(Alphabet::Letters, b"EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        let mut rotor = Rotor::new("plain", wiring, 0, Vec::new(), false).unwrap();
        for expected in 1..=26 {
            assert!(!rotor.step());
            assert_eq!(rotor.offset(), expected % 26);
        }
    }

    #[test]
    fn test_new_validates_ranges() {
        let wiring = Wiring::from_pins(&[1, 2, 0]).unwrap();
        let bad_offset = Rotor::new("r", wiring.clone(), 3, vec![], false);
        let bad_notch = Rotor::new("r", wiring.clone(), 0, vec![5], false);
        assert!(bad_offset.is_err());
        assert!(bad_notch.is_err());
        let rotor = Rotor::new("r", wiring, 2, vec![2, 0, 2], false).unwrap();
        assert_eq!(rotor.notches(), &[0, 2]);
    }

    #[test]
    fn test_forward_reverse_inverse() {
        let mut rotor = Rotor::from_spec("navy8:K", Mode::Classic).unwrap();
        for _ in 0..26 {
            for pin in 0..26 {
                let out = rotor.translate_forward(pin);
                assert_eq!(rotor.translate_reverse(out), pin);
            }
            rotor.step();
        }
    }

    #[test]
    fn test_set_offset() {
        let mut rotor = Rotor::from_spec("com2", Mode::Classic).unwrap();
        rotor.set_offset(25).unwrap();
        assert_eq!(rotor.offset(), 25);
        assert!(matches!(
            rotor.set_offset(26),
            Err(EnigmaError::PinOutOfRange { pin: 26, size: 26 })
        ));
    }
}
