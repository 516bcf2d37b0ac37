//! TOML machine configuration.
//!
//! ```toml
//! mode = "classic"
//! stepping = "double-step"
//! rotors = ["enig3:B", "enig2:A", "enig1:A"]
//! reflector = "ref-b"
//! plugboard = ["AB", "CD"]
//!
//! [stream]
//! chunk_size = 128
//! group = 5
//! ```
//!
//! Every key is optional. A config with only a `seed` describes a random
//! machine drawn from that passphrase.

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::mode::Mode;
use crate::stepping::SteppingPolicy;
use crate::stream::DEFAULT_CHUNK_SIZE;

/// Declarative description of a machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Processing mode.
    pub mode: Mode,
    /// Rotor stepping protocol.
    pub stepping: SteppingPolicy,
    /// Plugboard swap pairs such as `"AB"`.
    pub plugboard: Vec<String>,
    /// Rotor specs, entry rotor first.
    pub rotors: Vec<String>,
    /// Reflector short-name.
    pub reflector: Option<String>,
    /// Passphrase for a generated machine.
    pub seed: Option<String>,
    /// Stream translation options.
    pub stream: StreamConfig,
}

/// Chunking and output grouping for stream translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamConfig {
    /// Bytes read per chunk.
    pub chunk_size: usize,
    /// Emit a space after every `group` letters.
    pub group: Option<usize>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            group: None,
        }
    }
}

impl MachineConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] for malformed TOML, unknown
    /// keys or invalid values.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{MachineConfig, Mode};
    ///
    /// let config = MachineConfig::from_toml_str(r#"
    ///     mode = "modern"
    ///     rotors = ["com1", "com2", "com3"]
    ///     reflector = "ref-b"
    /// "#).unwrap();
    /// assert_eq!(config.mode, Mode::Modern);
    ///
    /// let mut machine = config.build().unwrap();
    /// assert_eq!(machine.translate_str("AAAAA").unwrap(), "UPGDK");
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, EnigmaError> {
        toml::from_str(source).map_err(|e| EnigmaError::Configuration(e.to_string()))
    }

    /// Renders the config as TOML.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, EnigmaError> {
        toml::to_string(self).map_err(|e| EnigmaError::Configuration(e.to_string()))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    /// [`EnigmaError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, EnigmaError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Builds the described machine.
    ///
    /// # Errors
    /// See [`Machine::from_config`].
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        Machine::from_config(self)
    }
}
