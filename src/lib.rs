//! Configurable rotor cipher machine in the style of the Enigma family.
//!
//! A machine is a plugboard, a stack of stepping rotors and a reflector.
//! Every key press runs the signal through the plugboard, forward through
//! the rotors, off the reflector, back through the rotors and the plugboard,
//! and then steps the rotors. The result is a self-reciprocal polyalphabetic
//! substitution: a machine in the same starting state deciphers what it
//! enciphered.
//!
//! Components come from a built-in catalogue of historical rotors and
//! reflectors (plus a byte-wide family for binary data) and are addressed by
//! short-name. Four processing modes decide how input outside the alphabet
//! is treated; see [`Mode`].
//!
//! # Architecture
//!
//! ```text
//! Wiring      (permutation table with offset-aware forward/reverse lookup)
//!     ↕ owned by
//! Rotor / Reflector   (catalogue entries, notches, rotational offset)
//!     ↕ stacked with a Plugboard, stepped by a SteppingPolicy
//! Machine     (signal path, modes, state blobs, break point)
//!     ↕ driven by
//! StreamTranslator    (chunked I/O, progress, output grouping)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher with an Enigma I setup:
//!
//! ```
//! use enigma_machine::{Machine, Mode};
//!
//! let rotors = ["enig3:B", "enig2:A", "enig1:A"];
//! let mut encoder = Machine::from_specs(Mode::Classic, &["AB", "CD"], &rotors, "ref-b").unwrap();
//! let mut decoder = Machine::from_specs(Mode::Classic, &["AB", "CD"], &rotors, "ref-b").unwrap();
//!
//! let ciphertext = encoder.translate_str("Hello, World").unwrap();
//! assert_eq!(ciphertext, "ILACBBMTBE");
//! assert_eq!(decoder.translate_str(&ciphertext).unwrap(), "HELLOWORLD");
//! ```
//!
//! Save a machine mid-message and resume elsewhere:
//!
//! ```
//! use enigma_machine::{Machine, Mode};
//!
//! let mut machine = Machine::from_specs(Mode::Modern, &["QZ"], &["com1:C", "com2", "com3"], "ref-c").unwrap();
//! machine.translate_str("first part").unwrap();
//! let blob = machine.state_get().unwrap();
//!
//! let mut resumed = Machine::from_state(&blob).unwrap();
//! assert_eq!(
//!     resumed.translate_str("second part").unwrap(),
//!     machine.translate_str("second part").unwrap()
//! );
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod registry;

mod alphabet;
mod component;
mod config;
mod machine;
mod mode;
mod plugboard;
pub(crate) mod random;
mod reflector;
mod rotor;
pub(crate) mod state;
mod stepping;
mod stream;
pub(crate) mod wiring;

pub use alphabet::Alphabet;
pub use component::Component;
pub use config::{MachineConfig, StreamConfig};
pub use error::EnigmaError;
pub use machine::Machine;
pub use mode::Mode;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use state::{STATE_MAGIC, STATE_VERSION};
pub use stepping::SteppingPolicy;
pub use stream::{StreamReport, StreamTranslator, DEFAULT_CHUNK_SIZE};
pub use wiring::Wiring;
