//! Error types for the enigma-machine library.

use thiserror::Error;

use crate::registry::ComponentKind;

/// Errors produced by the enigma-machine library.
///
/// Construction-time variants are fatal: a machine is either fully valid or
/// never built. [`EnigmaError::InvalidSymbol`] and
/// [`EnigmaError::PinOutOfRange`] are per-symbol conditions raised before any
/// rotor moves, so the machine stays usable after them.
#[derive(Debug, Error)]
pub enum EnigmaError {
    /// A wiring table is not a permutation of its alphabet, or a reflector
    /// wiring is not an involution.
    #[error("invalid wiring: {0}")]
    InvalidWiring(String),

    /// The machine description is incomplete or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No registry entry matches the given short-name.
    #[error("'{0}' is not a known rotor or reflector short-name")]
    UnknownComponent(String),

    /// A registry entry was used in the wrong slot (rotor as reflector, or
    /// the other way around).
    #[error("'{name}' is not a {expected}")]
    ComponentKindMismatch {
        /// Short-name of the offending component.
        name: String,
        /// The kind the slot requires.
        expected: ComponentKind,
    },

    /// A component or plugboard does not match the machine's alphabet.
    #[error("mode mismatch: {0}")]
    ModeMismatch(String),

    /// A plugboard symbol was paired more than once, or with itself.
    #[error("duplicate plugboard mapping for symbol {0}")]
    DuplicateMapping(String),

    /// Strict mode rejected a chunk containing a non-letter.
    #[error("invalid symbol 0x{symbol:02X} at position {position}")]
    InvalidSymbol {
        /// The rejected input byte.
        symbol: u8,
        /// Byte offset of the symbol inside the chunk.
        position: usize,
    },

    /// A pin index does not fit the machine's alphabet.
    #[error("pin {pin} is outside an alphabet of {size} symbols")]
    PinOutOfRange {
        /// The offending pin.
        pin: usize,
        /// Alphabet size of the machine.
        size: usize,
    },

    /// A rotor-only operation was requested from a reflector.
    #[error("cannot {0} a reflector")]
    UnsupportedOperation(&'static str),

    /// A serialized state blob is malformed or from another format version.
    #[error("state decode error: {0}")]
    StateDecode(String),

    /// The machine state could not be serialized.
    #[error("state encode error: {0}")]
    StateEncode(String),

    /// Reading or writing a stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_wiring() {
        let err = EnigmaError::InvalidWiring("symbol 'A' appears twice".to_string());
        assert_eq!(
            format!("{}", err),
            "invalid wiring: symbol 'A' appears twice"
        );
    }

    #[test]
    fn test_display_unknown_component() {
        let err = EnigmaError::UnknownComponent("com9".to_string());
        assert_eq!(
            format!("{}", err),
            "'com9' is not a known rotor or reflector short-name"
        );
    }

    #[test]
    fn test_display_kind_mismatch() {
        let err = EnigmaError::ComponentKindMismatch {
            name: "ref-b".to_string(),
            expected: ComponentKind::Rotor,
        };
        assert_eq!(format!("{}", err), "'ref-b' is not a rotor");
    }

    #[test]
    fn test_display_invalid_symbol() {
        let err = EnigmaError::InvalidSymbol {
            symbol: b'1',
            position: 3,
        };
        assert_eq!(format!("{}", err), "invalid symbol 0x31 at position 3");
    }

    #[test]
    fn test_display_unsupported_operation() {
        let err = EnigmaError::UnsupportedOperation("step");
        assert_eq!(format!("{}", err), "cannot step a reflector");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: EnigmaError = io.into();
        assert!(matches!(err, EnigmaError::Io(_)));
        assert_eq!(format!("{}", err), "I/O error: short read");
    }
}
