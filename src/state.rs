//! Versioned binary encoding of a complete machine configuration.
//!
//! Layout:
//!
//! ```text
//! +--------+---------+------------------------------+
//! | "ENGM" | version | bincode(MachineState)        |
//! | 4 B    | 1 B     | rest                         |
//! +--------+---------+------------------------------+
//! ```
//!
//! Only this crate produces and consumes the payload. A blob from another
//! format version is rejected, never reinterpreted.

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::mode::Mode;
use crate::stepping::SteppingPolicy;

/// Leading bytes of every state blob.
pub const STATE_MAGIC: [u8; 4] = *b"ENGM";

/// Current payload format version.
pub const STATE_VERSION: u8 = 1;

const HEADER_LEN: usize = STATE_MAGIC.len() + 1;

/// Plain-data snapshot of one rotor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RotorState {
    pub(crate) name: String,
    pub(crate) wiring: Vec<u8>,
    pub(crate) offset: u8,
    pub(crate) notches: Vec<u8>,
    pub(crate) fixed: bool,
}

/// Plain-data snapshot of the reflector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ReflectorState {
    pub(crate) name: String,
    pub(crate) wiring: Vec<u8>,
}

/// Plain-data snapshot of a whole machine.
///
/// Pins are stored as `u8`: no alphabet exceeds 256 symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MachineState {
    pub(crate) mode: Mode,
    pub(crate) stepping: SteppingPolicy,
    pub(crate) plugboard: Vec<u8>,
    pub(crate) rotors: Vec<RotorState>,
    pub(crate) reflector: ReflectorState,
}

/// Serializes a snapshot into a tagged blob.
pub(crate) fn encode(state: &MachineState) -> Result<Vec<u8>, EnigmaError> {
    let payload = bincode::serialize(state).map_err(|e| EnigmaError::StateEncode(e.to_string()))?;
    let mut blob = Vec::with_capacity(HEADER_LEN + payload.len());
    blob.extend_from_slice(&STATE_MAGIC);
    blob.push(STATE_VERSION);
    blob.extend_from_slice(&payload);
    Ok(blob)
}

/// Checks the header and deserializes the payload.
///
/// Only the framing and the bincode layout are checked here; semantic
/// validation happens when the machine is rebuilt from the snapshot.
pub(crate) fn decode(blob: &[u8]) -> Result<MachineState, EnigmaError> {
    if blob.len() < HEADER_LEN {
        return Err(EnigmaError::StateDecode(format!(
            "state blob of {} bytes is shorter than its header",
            blob.len()
        )));
    }
    if blob[..STATE_MAGIC.len()] != STATE_MAGIC {
        return Err(EnigmaError::StateDecode(
            "blob lacks the state magic bytes".to_string(),
        ));
    }
    let version = blob[STATE_MAGIC.len()];
    if version != STATE_VERSION {
        return Err(EnigmaError::StateDecode(format!(
            "unsupported state version {} (expected {})",
            version, STATE_VERSION
        )));
    }
    bincode::deserialize(&blob[HEADER_LEN..]).map_err(|e| EnigmaError::StateDecode(e.to_string()))
}

/// Narrows a pin for storage.
pub(crate) fn pin_to_byte(pin: usize) -> Result<u8, EnigmaError> {
    u8::try_from(pin)
        .map_err(|_| EnigmaError::StateEncode(format!("pin {} does not fit a byte", pin)))
}

/// Narrows a pin table for storage.
pub(crate) fn pins_to_bytes(pins: &[usize]) -> Result<Vec<u8>, EnigmaError> {
    pins.iter().map(|&pin| pin_to_byte(pin)).collect()
}

/// Widens a stored pin table.
pub(crate) fn bytes_to_pins(bytes: &[u8]) -> Vec<usize> {
    bytes.iter().map(|&b| b as usize).collect()
}
