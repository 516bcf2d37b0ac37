//! Machine: plugboard, rotor stack and reflector wired into one signal path.
//!
//! Each key press sends a pin through
//!
//! ```text
//! plugboard -> rotor[0] -> ... -> rotor[n-1] -> reflector
//!           <- rotor[0] <- ... <- rotor[n-1] <-
//! plugboard
//! ```
//!
//! and only then steps the rotor stack, so a symbol is always enciphered at
//! the pre-step offsets. Because the reflector is an involution the path is
//! self-reciprocal: the same starting state deciphers what it enciphered.

use std::io::{Read, Seek, Write};

use rand::Rng;
use tracing::{debug, trace};

use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::mode::Mode;
use crate::plugboard::Plugboard;
use crate::random;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::state::{
    self, bytes_to_pins, pin_to_byte, pins_to_bytes, MachineState, ReflectorState, RotorState,
};
use crate::stepping::SteppingPolicy;
use crate::stream::{StreamReport, StreamTranslator};
use crate::wiring::Wiring;

/// Rotor cipher machine.
///
/// A `Machine` is stateful: every translated symbol advances its rotors.
/// Translation takes `&mut self`, so one instance serves one session; run
/// separate instances for parallel work.
///
/// # Examples
///
/// ```
/// use enigma_machine::{Machine, Mode};
///
/// let rotors = ["enig3:B", "enig2:A", "enig1:A"];
/// let mut encoder = Machine::from_specs(Mode::Classic, &["AB", "CD"], &rotors, "ref-b").unwrap();
/// let ciphertext = encoder.translate_str("HELLO WORLD").unwrap();
/// assert_eq!(ciphertext, "ILACBBMTBE");
///
/// let mut decoder = Machine::from_specs(Mode::Classic, &["AB", "CD"], &rotors, "ref-b").unwrap();
/// assert_eq!(decoder.translate_str(&ciphertext).unwrap(), "HELLOWORLD");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    mode: Mode,
    stepping: SteppingPolicy,
    plugboard: Plugboard,
    rotors: Vec<Rotor>,
    reflector: Reflector,
    break_state: Vec<u8>,
}

impl Machine {
    /// Assembles a machine from spec strings.
    ///
    /// # Parameters
    /// - `mode`: Processing mode; fixes the alphabet.
    /// - `plugboard`: Two-symbol swap pairs, e.g. `["AB", "CF"]`.
    /// - `rotors`: Rotor specs `SHORTNAME[:SETTING[:NOTCHES]]`, entry
    ///   (fast) rotor first.
    /// - `reflector`: Bare reflector short-name.
    ///
    /// # Errors
    /// - [`EnigmaError::Configuration`] if no rotor or no reflector is given.
    /// - Any error of [`Plugboard::from_specs`], [`Rotor::from_spec`] or
    ///   [`Reflector::from_spec`].
    pub fn from_specs<P: AsRef<str>, R: AsRef<str>>(
        mode: Mode,
        plugboard: &[P],
        rotors: &[R],
        reflector: &str,
    ) -> Result<Self, EnigmaError> {
        if rotors.is_empty() {
            return Err(EnigmaError::Configuration(
                "no rotors specified".to_string(),
            ));
        }
        if reflector.is_empty() {
            return Err(EnigmaError::Configuration(
                "no reflector specified".to_string(),
            ));
        }
        let plugboard = Plugboard::from_specs(mode, plugboard)?;
        let rotors = rotors
            .iter()
            .map(|spec| Rotor::from_spec(spec.as_ref(), mode))
            .collect::<Result<Vec<_>, _>>()?;
        let reflector = Reflector::from_spec(reflector, mode)?;
        let stepping = SteppingPolicy::default();
        Self::from_components(mode, stepping, plugboard, rotors, reflector)
    }

    /// Assembles a machine from already built components.
    ///
    /// # Errors
    /// - [`EnigmaError::Configuration`] if `rotors` is empty.
    /// - [`EnigmaError::ModeMismatch`] if any component's size differs from
    ///   the mode's alphabet.
    pub fn from_components(
        mode: Mode,
        stepping: SteppingPolicy,
        plugboard: Plugboard,
        rotors: Vec<Rotor>,
        reflector: Reflector,
    ) -> Result<Self, EnigmaError> {
        let mut machine = Self::assemble(mode, stepping, plugboard, rotors, reflector)?;
        machine.break_set()?;
        Ok(machine)
    }

    /// Restores a machine from a blob produced by [`state_get`](Self::state_get).
    ///
    /// The restored state also becomes the machine's break point.
    ///
    /// # Errors
    /// Returns [`EnigmaError::StateDecode`] for a malformed, foreign-version
    /// or inconsistent blob.
    pub fn from_state(blob: &[u8]) -> Result<Self, EnigmaError> {
        let mut machine = Self::restore(state::decode(blob)?)?;
        machine.break_state = blob.to_vec();
        Ok(machine)
    }

    /// Generates a random machine from a caller-owned generator.
    ///
    /// Draws a plugboard, three rotors with random offsets and notches, and
    /// a reflector. The same generator state always yields the same machine.
    ///
    /// # Errors
    /// Propagates component construction errors (none occur for catalogued
    /// components).
    pub fn from_rng<G: Rng + ?Sized>(
        mode: Mode,
        stepping: SteppingPolicy,
        rng: &mut G,
    ) -> Result<Self, EnigmaError> {
        let (plugboard, rotors, reflector) = random::random_components(mode, rng)?;
        Self::from_components(mode, stepping, plugboard, rotors, reflector)
    }

    /// Generates a random machine determined entirely by `phrase`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] for an empty phrase.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{Machine, Mode, SteppingPolicy};
    ///
    /// let a = Machine::from_seed_phrase(Mode::Classic, SteppingPolicy::Odometer, "kurier").unwrap();
    /// let b = Machine::from_seed_phrase(Mode::Classic, SteppingPolicy::Odometer, "kurier").unwrap();
    /// assert_eq!(a.state_get().unwrap(), b.state_get().unwrap());
    /// ```
    pub fn from_seed_phrase(
        mode: Mode,
        stepping: SteppingPolicy,
        phrase: &str,
    ) -> Result<Self, EnigmaError> {
        let mut rng = random::seeded_rng(phrase)?;
        Self::from_rng(mode, stepping, &mut rng)
    }

    /// Builds the machine a [`MachineConfig`] describes.
    ///
    /// Explicit rotors and reflector go through [`from_specs`](Self::from_specs);
    /// a config holding only a `seed` goes through
    /// [`from_seed_phrase`](Self::from_seed_phrase).
    ///
    /// # Errors
    /// - [`EnigmaError::Configuration`] if rotors or reflector are missing
    ///   and no seed is given, or if a seed is combined with explicit
    ///   components.
    /// - Any construction error of the chosen path.
    pub fn from_config(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let explicit =
            !config.rotors.is_empty() || config.reflector.is_some() || !config.plugboard.is_empty();
        if let Some(seed) = &config.seed {
            if explicit {
                return Err(EnigmaError::Configuration(
                    "a seed cannot be combined with explicit plugboard, rotors or reflector"
                        .to_string(),
                ));
            }
            return Self::from_seed_phrase(config.mode, config.stepping, seed);
        }

        let reflector = config
            .reflector
            .as_deref()
            .ok_or_else(|| EnigmaError::Configuration("no reflector specified".to_string()))?;
        let mut machine =
            Self::from_specs(config.mode, &config.plugboard, &config.rotors, reflector)?;
        machine.stepping = config.stepping;
        machine.break_set()?;
        Ok(machine)
    }

    fn assemble(
        mode: Mode,
        stepping: SteppingPolicy,
        plugboard: Plugboard,
        rotors: Vec<Rotor>,
        reflector: Reflector,
    ) -> Result<Self, EnigmaError> {
        if rotors.is_empty() {
            return Err(EnigmaError::Configuration(
                "no rotors specified".to_string(),
            ));
        }
        let alphabet = mode.alphabet();
        let size = alphabet.size();
        if plugboard.alphabet() != alphabet {
            return Err(EnigmaError::ModeMismatch(format!(
                "plugboard alphabet does not match {} mode",
                mode
            )));
        }
        if let Some(rotor) = rotors.iter().find(|r| r.size() != size) {
            return Err(EnigmaError::ModeMismatch(format!(
                "rotor '{}' has {} positions, {} mode needs {}",
                rotor.name(),
                rotor.size(),
                mode,
                size
            )));
        }
        if reflector.size() != size {
            return Err(EnigmaError::ModeMismatch(format!(
                "reflector '{}' has {} contacts, {} mode needs {}",
                reflector.name(),
                reflector.size(),
                mode,
                size
            )));
        }

        debug!(
            %mode,
            %stepping,
            rotors = rotors.len(),
            plugs = plugboard.pairs().len(),
            reflector = reflector.name(),
            "machine assembled"
        );
        Ok(Machine {
            mode,
            stepping,
            plugboard,
            rotors,
            reflector,
            break_state: Vec::new(),
        })
    }

    /// Sends one pin through the signal path, then steps the rotors.
    ///
    /// # Errors
    /// Returns [`EnigmaError::PinOutOfRange`] if `pin` is outside the
    /// alphabet. No rotor moves in that case.
    pub fn translate_pin(&mut self, pin: usize) -> Result<usize, EnigmaError> {
        let size = self.mode.alphabet().size();
        if pin >= size {
            return Err(EnigmaError::PinOutOfRange { pin, size });
        }
        Ok(self.encipher(pin))
    }

    fn encipher(&mut self, pin_in: usize) -> usize {
        let mut pin = self.plugboard.apply(pin_in);
        for rotor in &self.rotors {
            pin = rotor.translate_forward(pin);
        }
        pin = self.reflector.translate_forward(pin);
        for rotor in self.rotors.iter().rev() {
            pin = rotor.translate_reverse(pin);
        }
        pin = self.plugboard.apply(pin);

        trace!(pin_in, pin_out = pin, positions = ?self.positions(), "pin translated");
        self.step_rotors();
        pin
    }

    fn encipher_letter(&mut self, upper: u8) -> u8 {
        b'A' + self.encipher((upper - b'A') as usize) as u8
    }

    /// Advances the rotor stack by one key press under the active policy.
    pub fn step_rotors(&mut self) {
        self.stepping.step(&mut self.rotors);
    }

    /// Translates a chunk of input symbols according to the mode.
    ///
    /// Classic drops non-letters and uppercases; modern passes non-letters
    /// through and keeps case; strict rejects the whole chunk on the first
    /// non-letter; byte translates every byte. Symbols that are not
    /// translated never step the rotors.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] in strict mode. The machine is
    /// left exactly as it was before the call.
    pub fn translate_chunk(&mut self, chunk: &[u8]) -> Result<Vec<u8>, EnigmaError> {
        let mut output = Vec::with_capacity(chunk.len());
        match self.mode {
            Mode::Byte => {
                for &byte in chunk {
                    output.push(self.encipher(byte as usize) as u8);
                }
            }
            Mode::Classic => {
                for &byte in chunk.iter().filter(|b| b.is_ascii_alphabetic()) {
                    output.push(self.encipher_letter(byte.to_ascii_uppercase()));
                }
            }
            Mode::Strict => {
                if let Some(position) = chunk.iter().position(|b| !b.is_ascii_alphabetic()) {
                    return Err(EnigmaError::InvalidSymbol {
                        symbol: chunk[position],
                        position,
                    });
                }
                for &byte in chunk {
                    output.push(self.encipher_letter(byte.to_ascii_uppercase()));
                }
            }
            Mode::Modern => {
                for &byte in chunk {
                    let out = if byte.is_ascii_uppercase() {
                        self.encipher_letter(byte)
                    } else if byte.is_ascii_lowercase() {
                        self.encipher_letter(byte.to_ascii_uppercase())
                            .to_ascii_lowercase()
                    } else {
                        byte
                    };
                    output.push(out);
                }
            }
        }
        Ok(output)
    }

    /// Translates a string in one of the text modes.
    ///
    /// # Errors
    /// - [`EnigmaError::ModeMismatch`] in byte mode.
    /// - [`EnigmaError::InvalidSymbol`] in strict mode.
    pub fn translate_str(&mut self, text: &str) -> Result<String, EnigmaError> {
        if self.mode == Mode::Byte {
            return Err(EnigmaError::ModeMismatch(
                "byte mode output is not text; use translate_chunk".to_string(),
            ));
        }
        let output = self.translate_chunk(text.as_bytes())?;
        // text modes only rewrite ASCII letters, so UTF-8 sequences survive intact
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    /// Translates a seekable stream chunk by chunk.
    ///
    /// Shorthand for [`StreamTranslator`] with the given chunk size.
    ///
    /// # Errors
    /// See [`StreamTranslator::translate`].
    pub fn translate_stream<R: Read + Seek, W: Write>(
        &mut self,
        input: R,
        output: W,
        chunk_size: usize,
        progress: Option<&mut dyn FnMut(u64, u64)>,
    ) -> Result<StreamReport, EnigmaError> {
        StreamTranslator::new(self)
            .with_chunk_size(chunk_size)?
            .translate(input, output, progress)
    }

    /// Serializes the complete machine configuration.
    ///
    /// Feeding the blob to [`state_set`](Self::state_set) or
    /// [`from_state`](Self::from_state) reproduces bit-identical output for
    /// any future input.
    ///
    /// # Errors
    /// Returns [`EnigmaError::StateEncode`] if serialization fails.
    pub fn state_get(&self) -> Result<Vec<u8>, EnigmaError> {
        state::encode(&self.snapshot()?)
    }

    /// Replaces the machine configuration with a serialized one.
    ///
    /// The blob is decoded and validated completely before anything changes;
    /// on error the machine is untouched. The break point is kept.
    ///
    /// # Errors
    /// Returns [`EnigmaError::StateDecode`] for an unusable blob.
    pub fn state_set(&mut self, blob: &[u8]) -> Result<(), EnigmaError> {
        let restored = Self::restore(state::decode(blob)?)?;
        self.mode = restored.mode;
        self.stepping = restored.stepping;
        self.plugboard = restored.plugboard;
        self.rotors = restored.rotors;
        self.reflector = restored.reflector;
        debug!(positions = ?self.positions(), "state restored");
        Ok(())
    }

    /// Records the current state as the break point.
    ///
    /// # Errors
    /// Returns [`EnigmaError::StateEncode`] if serialization fails.
    pub fn break_set(&mut self) -> Result<(), EnigmaError> {
        self.break_state = self.state_get()?;
        Ok(())
    }

    /// Rewinds the machine to the last break point.
    ///
    /// Every constructor records a break point, so there is always one.
    ///
    /// # Errors
    /// Returns [`EnigmaError::StateDecode`] if the stored blob is unusable.
    pub fn break_go(&mut self) -> Result<(), EnigmaError> {
        let blob = std::mem::take(&mut self.break_state);
        let result = self.state_set(&blob);
        self.break_state = blob;
        debug!("rewound to break point");
        result
    }

    fn snapshot(&self) -> Result<MachineState, EnigmaError> {
        let rotors = self
            .rotors
            .iter()
            .map(|rotor| -> Result<RotorState, EnigmaError> {
                Ok(RotorState {
                    name: rotor.name().to_string(),
                    wiring: pins_to_bytes(&rotor.wiring().pins())?,
                    offset: pin_to_byte(rotor.offset())?,
                    notches: pins_to_bytes(rotor.notches())?,
                    fixed: rotor.is_fixed(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MachineState {
            mode: self.mode,
            stepping: self.stepping,
            plugboard: pins_to_bytes(self.plugboard.table())?,
            rotors,
            reflector: ReflectorState {
                name: self.reflector.name().to_string(),
                wiring: pins_to_bytes(&self.reflector.wiring().pins())?,
            },
        })
    }

    fn restore(state: MachineState) -> Result<Self, EnigmaError> {
        Self::rebuild(state).map_err(|e| match e {
            EnigmaError::StateDecode(message) => EnigmaError::StateDecode(message),
            other => EnigmaError::StateDecode(other.to_string()),
        })
    }

    fn rebuild(state: MachineState) -> Result<Self, EnigmaError> {
        let plugboard =
            Plugboard::from_table(state.mode.alphabet(), bytes_to_pins(&state.plugboard))?;
        let rotors = state
            .rotors
            .iter()
            .map(|r| -> Result<Rotor, EnigmaError> {
                let wiring = Wiring::from_pins(&bytes_to_pins(&r.wiring))?;
                let notches = bytes_to_pins(&r.notches);
                let offset = r.offset as usize;
                Rotor::new(r.name.as_str(), wiring, offset, notches, r.fixed)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let wiring = Wiring::from_pins(&bytes_to_pins(&state.reflector.wiring))?;
        let reflector = Reflector::new(state.reflector.name, wiring)?;
        Self::assemble(state.mode, state.stepping, plugboard, rotors, reflector)
    }

    /// Returns the rotor offsets, entry rotor first.
    pub fn positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::offset).collect()
    }

    /// Turns every rotor to the given offsets, entry rotor first.
    ///
    /// # Errors
    /// - [`EnigmaError::Configuration`] if the count differs from the stack.
    /// - [`EnigmaError::PinOutOfRange`] if an offset is outside the alphabet.
    ///
    /// Nothing changes on error.
    pub fn set_positions(&mut self, positions: &[usize]) -> Result<(), EnigmaError> {
        if positions.len() != self.rotors.len() {
            return Err(EnigmaError::Configuration(format!(
                "{} positions given for {} rotors",
                positions.len(),
                self.rotors.len()
            )));
        }
        let size = self.mode.alphabet().size();
        if let Some(&pin) = positions.iter().find(|&&p| p >= size) {
            return Err(EnigmaError::PinOutOfRange { pin, size });
        }
        for (rotor, &offset) in self.rotors.iter_mut().zip(positions) {
            rotor.set_offset(offset)?;
        }
        Ok(())
    }

    /// Returns the processing mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the active stepping policy.
    pub fn stepping_policy(&self) -> SteppingPolicy {
        self.stepping
    }

    /// Switches the stepping policy for future key presses.
    pub fn set_stepping_policy(&mut self, stepping: SteppingPolicy) {
        self.stepping = stepping;
    }

    /// Returns the rotor stack, entry rotor first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}
