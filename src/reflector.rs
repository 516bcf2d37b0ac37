//! Reflector: the fixed, self-inverse turnaround wheel.
//!
//! The reflector sends the signal back through the rotor stack. Because its
//! wiring is an involution the whole machine is self-reciprocal. It has no
//! offset, no notches, no step and no reverse path.

use crate::error::EnigmaError;
use crate::mode::Mode;
use crate::registry::{self, ComponentDescriptor, ComponentKind};
use crate::rotor::check_alphabet;
use crate::wiring::Wiring;

/// The turnaround wheel at the end of the rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    wiring: Wiring,
}

impl Reflector {
    /// Creates a reflector from an involutive wiring.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if `wiring` is not its own
    /// inverse.
    pub fn new(name: impl Into<String>, wiring: Wiring) -> Result<Self, EnigmaError> {
        let name = name.into();
        if !wiring.is_involution() {
            return Err(EnigmaError::InvalidWiring(
                format!("reflector '{}' wiring is not an involution", name),
            ));
        }
        Ok(Reflector { name, wiring })
    }

    /// Instantiates a catalogued reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ComponentKindMismatch`] for a rotor entry.
    pub fn from_descriptor(descriptor: &ComponentDescriptor) -> Result<Self, EnigmaError> {
        if descriptor.kind != ComponentKind::Reflector {
            return Err(EnigmaError::ComponentKindMismatch {
                name: descriptor.short.to_string(),
                expected: ComponentKind::Reflector,
            });
        }
        let wiring = Wiring::new(descriptor.alphabet, descriptor.wiring)?;
        Self::new(descriptor.short, wiring)
    }

    /// Builds a reflector from its bare short-name.
    ///
    /// # Errors
    /// - [`EnigmaError::Configuration`] if the spec carries settings.
    /// - [`EnigmaError::UnknownComponent`] for an uncatalogued name.
    /// - [`EnigmaError::ComponentKindMismatch`] if the name is a rotor.
    /// - [`EnigmaError::ModeMismatch`] if the alphabet differs from the mode's.
    pub fn from_spec(spec: &str, mode: Mode) -> Result<Self, EnigmaError> {
        if spec.contains(':') {
            return Err(EnigmaError::Configuration(
                format!("reflector spec '{}' takes no settings", spec),
            ));
        }
        let descriptor = registry::lookup(spec)
            .ok_or_else(|| EnigmaError::UnknownComponent(spec.to_string()))?;
        if descriptor.kind != ComponentKind::Reflector {
            return Err(EnigmaError::ComponentKindMismatch {
                name: spec.to_string(),
                expected: ComponentKind::Reflector,
            });
        }
        check_alphabet(descriptor, mode)?;
        Self::from_descriptor(descriptor)
    }

    /// Reflects a pin.
    #[inline]
    pub fn translate_forward(&self, pin: usize) -> usize {
        self.wiring.forward(pin, 0)
    }

    /// Returns the reflector's short-name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the reflector's wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Returns the number of contacts.
    pub fn size(&self) -> usize {
        self.wiring.size()
    }
}
