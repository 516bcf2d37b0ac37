//! Tagged union over the catalogued component kinds.
//!
//! [`Component`] is what a generic lookup by short-name produces when the
//! caller does not know in advance whether the name is a rotor or a
//! reflector. Rotor-only operations on the `Reflector` variant fail with
//! [`EnigmaError::UnsupportedOperation`] instead of silently doing nothing.

use crate::error::EnigmaError;
use crate::mode::Mode;
use crate::reflector::Reflector;
use crate::registry::{self, ComponentKind};
use crate::rotor::Rotor;

/// A rotor or a reflector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// A stepping wheel.
    Rotor(Rotor),
    /// A turnaround wheel.
    Reflector(Reflector),
}

impl Component {
    /// Builds whichever component the spec's short-name names.
    ///
    /// Rotor specs accept the `:SETTING:NOTCHES` suffix; reflector specs are
    /// bare names.
    ///
    /// # Errors
    /// [`EnigmaError::UnknownComponent`] for an uncatalogued name, plus the
    /// errors of [`Rotor::from_spec`] and [`Reflector::from_spec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Component, Mode};
    ///
    /// let mut reflector = Component::from_spec("ref-b", Mode::Classic).unwrap();
    /// assert!(reflector.step().is_err());
    /// ```
    pub fn from_spec(spec: &str, mode: Mode) -> Result<Self, EnigmaError> {
        let short = spec.split(':').next().unwrap_or_default();
        let descriptor = registry::lookup(short)
            .ok_or_else(|| EnigmaError::UnknownComponent(short.to_string()))?;
        match descriptor.kind {
            ComponentKind::Rotor => Rotor::from_spec(spec, mode).map(Component::Rotor),
            ComponentKind::Reflector => Reflector::from_spec(spec, mode).map(Component::Reflector),
        }
    }

    /// Returns the kind of the wrapped component.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Rotor(_) => ComponentKind::Rotor,
            Component::Reflector(_) => ComponentKind::Reflector,
        }
    }

    /// Returns the component's short-name.
    pub fn name(&self) -> &str {
        match self {
            Component::Rotor(rotor) => rotor.name(),
            Component::Reflector(reflector) => reflector.name(),
        }
    }

    /// Translates a pin towards the reflector (or reflects it).
    pub fn translate_forward(&self, pin: usize) -> usize {
        match self {
            Component::Rotor(rotor) => rotor.translate_forward(pin),
            Component::Reflector(reflector) => reflector.translate_forward(pin),
        }
    }

    /// Translates a pin on the return path.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedOperation`] for a reflector.
    pub fn translate_reverse(&self, pin: usize) -> Result<usize, EnigmaError> {
        match self {
            Component::Rotor(rotor) => Ok(rotor.translate_reverse(pin)),
            Component::Reflector(_) => Err(EnigmaError::UnsupportedOperation("reverse-translate")),
        }
    }

    /// Steps the component.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedOperation`] for a reflector.
    pub fn step(&mut self) -> Result<bool, EnigmaError> {
        match self {
            Component::Rotor(rotor) => Ok(rotor.step()),
            Component::Reflector(_) => Err(EnigmaError::UnsupportedOperation("step")),
        }
    }

    /// Unwraps a rotor.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ComponentKindMismatch`] for a reflector.
    pub fn into_rotor(self) -> Result<Rotor, EnigmaError> {
        match self {
            Component::Rotor(rotor) => Ok(rotor),
            Component::Reflector(reflector) => Err(EnigmaError::ComponentKindMismatch {
                name: reflector.name().to_string(),
                expected: ComponentKind::Rotor,
            }),
        }
    }

    /// Unwraps a reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ComponentKindMismatch`] for a rotor.
    pub fn into_reflector(self) -> Result<Reflector, EnigmaError> {
        match self {
            Component::Reflector(reflector) => Ok(reflector),
            Component::Rotor(rotor) => Err(EnigmaError::ComponentKindMismatch {
                name: rotor.name().to_string(),
                expected: ComponentKind::Reflector,
            }),
        }
    }
}

impl From<Rotor> for Component {
    fn from(rotor: Rotor) -> Self {
        Component::Rotor(rotor)
    }
}

impl From<Reflector> for Component {
    fn from(reflector: Reflector) -> Self {
        Component::Reflector(reflector)
    }
}
