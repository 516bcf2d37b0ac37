//! Catalogue of named rotors and reflectors.
//!
//! Each entry is a plain [`ComponentDescriptor`]; building a component is a
//! lookup by short-name followed by instantiation from the descriptor's data.
//! Wirings and notches are written in alphabet symbols (letters as ASCII,
//! byte components as raw byte values).
//!
//! The thin C reflector was once published as `ref-at` with the name
//! "Reflector - A Thin". It is catalogued as `ref-ct`; the old short-name
//! still resolves through [`lookup`] but is not listed.

mod byte_tables;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use byte_tables::{BYTE_REFLECTOR, BYTE_ROTOR_I, BYTE_ROTOR_II, BYTE_ROTOR_III, BYTE_ROTOR_IV};

/// Slot a catalogue entry can occupy in a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// A stepping (or fixed) wheel in the rotor stack.
    Rotor,
    /// The involutive turnaround wheel.
    Reflector,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Rotor => f.write_str("rotor"),
            ComponentKind::Reflector => f.write_str("reflector"),
        }
    }
}

/// Data-driven description of one catalogued component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Short-name used in spec strings, e.g. `com1` or `ref-b`.
    pub short: &'static str,
    /// Descriptive name.
    pub name: &'static str,
    /// Rotor or reflector.
    pub kind: ComponentKind,
    /// Alphabet the wiring is defined over.
    pub alphabet: Alphabet,
    /// Output symbol for each input position.
    pub wiring: &'static [u8],
    /// Default notch symbols. Empty for reflectors and fixed rotors.
    pub notches: &'static [u8],
    /// `true` for wheels that never advance (the thin Greek rotors).
    pub fixed: bool,
}

impl ComponentDescriptor {
    /// Returns `true` if the component may only be used in byte mode.
    pub fn byte_compatible(&self) -> bool {
        self.alphabet == Alphabet::Bytes
    }
}

const fn rotor(
    short: &'static str,
    name: &'static str,
    wiring: &'static [u8],
    notches: &'static [u8],
) -> ComponentDescriptor {
    ComponentDescriptor {
        short,
        name,
        kind: ComponentKind::Rotor,
        alphabet: Alphabet::Letters,
        wiring,
        notches,
        fixed: false,
    }
}

const fn greek(
    short: &'static str,
    name: &'static str,
    wiring: &'static [u8],
) -> ComponentDescriptor {
    ComponentDescriptor {
        short,
        name,
        kind: ComponentKind::Rotor,
        alphabet: Alphabet::Letters,
        wiring,
        notches: b"",
        fixed: true,
    }
}

const fn reflector(
    short: &'static str,
    name: &'static str,
    wiring: &'static [u8],
) -> ComponentDescriptor {
    ComponentDescriptor {
        short,
        name,
        kind: ComponentKind::Reflector,
        alphabet: Alphabet::Letters,
        wiring,
        notches: b"",
        fixed: false,
    }
}

const fn byte_rotor(
    short: &'static str,
    name: &'static str,
    wiring: &'static [u8],
    notches: &'static [u8],
) -> ComponentDescriptor {
    ComponentDescriptor {
        short,
        name,
        kind: ComponentKind::Rotor,
        alphabet: Alphabet::Bytes,
        wiring,
        notches,
        fixed: false,
    }
}

const fn byte_reflector(
    short: &'static str,
    name: &'static str,
    wiring: &'static [u8],
) -> ComponentDescriptor {
    ComponentDescriptor {
        short,
        name,
        kind: ComponentKind::Reflector,
        alphabet: Alphabet::Bytes,
        wiring,
        notches: b"",
        fixed: false,
    }
}

#[rustfmt::skip]
static CATALOG: [ComponentDescriptor; 31] = [
    // Rotors
    rotor("com1", "Commercial Enigma - Rotor I", b"DMTWSILRUYQNKFEJCAZBPGXOHV", b"Q"),
    rotor("com2", "Commercial Enigma - Rotor II", b"HQZGPJTMOBLNCIFDYAWVEUSRKX", b"E"),
    rotor("com3", "Commercial Enigma - Rotor III", b"UQNTLSZFMREHDPXKIBVYGJCWOA", b"V"),
    rotor("rail1", "Railway Enigma - Rotor I", b"JGDQOXUSCAMIFRVTPNEWKBLZYH", b"Q"),
    rotor("rail2", "Railway Enigma - Rotor II", b"NTZPSFBOKMWRCJDIVLAEYUXHGQ", b"E"),
    rotor("rail3", "Railway Enigma - Rotor III", b"JVIUBHTCDYAKEQZPOSGXNRMWFL", b"V"),
    rotor("swiss1", "Swiss K Enigma - Rotor I", b"PEZUOHXSCVFMTBGLRINQJWAYDK", b"Q"),
    rotor("swiss2", "Swiss K Enigma - Rotor II", b"ZOUESYDKFWPCIQXHMVBLGNJRAT", b"E"),
    rotor("swiss3", "Swiss K Enigma - Rotor III", b"EHRVXGAOBQUSIMZFLYNWKTPDJC", b"V"),
    rotor("enig1", "Enigma I - Rotor I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b"Q"),
    rotor("enig2", "Enigma I - Rotor II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b"E"),
    rotor("enig3", "Enigma I - Rotor III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", b"V"),
    rotor("army4", "M3 Army - Rotor IV", b"ESOVPZJAYQUIRHXLNFTGKDCMWB", b"J"),
    rotor("army5", "M3 Army - Rotor V", b"VZBRGITYUPSDNHLXAWMJQOFECK", b"Z"),
    rotor("navy6", "M3 & M4 Naval Enigma - Rotor VI", b"JPGVOUMFYQBENHZRDKASXLICTW", b"ZM"),
    rotor("navy7", "M3 & M4 Naval Enigma - Rotor VII", b"NZJHGRCXMYSWBOUFAIVLPEKQDT", b"ZM"),
    rotor("navy8", "M3 & M4 Naval Enigma - Rotor VIII", b"FKQHTLXOCBJSPDZRAMEWNIUYGV", b"ZM"),
    greek("beta", "M4 Naval Enigma - Greek Rotor Beta", b"LEYJVCNIXWPBQMDRTAKZGFUHOS"),
    greek("gamma", "M4 Naval Enigma - Greek Rotor Gamma", b"FSOKANUERHMBTIYCWLQPZXVGJD"),
    // Reflectors
    reflector("ref-a", "Reflector - A", b"EJMZALYXVBWFCRQUONTSPIKHGD"),
    reflector("ref-b", "Reflector - B", b"YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    reflector("ref-c", "Reflector - C", b"FVPJIAOYEDRZXWGCTKUQSBNMHL"),
    reflector("ref-bt", "Reflector - B Thin", b"ENKQAUYWJICOPBLMDXZVFTHRGS"),
    reflector("ref-ct", "Reflector - C Thin", b"RDOBJNTKVEHMLFCWZAXGYIPSUQ"),
    reflector("rail-ref", "Railway Enigma - Reflector", b"QYHOGNECVPUZTFDJAXWMKISRBL"),
    reflector("swiss-ref", "Swiss K Enigma - Reflector", b"IMETCGFRAYSQBZXWLHKDVUPOJN"),
    // Byte mode
    byte_rotor("byte1", "Byte Rotor I", &BYTE_ROTOR_I, &[0x51]),
    byte_rotor("byte2", "Byte Rotor II", &BYTE_ROTOR_II, &[0x45]),
    byte_rotor("byte3", "Byte Rotor III", &BYTE_ROTOR_III, &[0x56]),
    byte_rotor("byte4", "Byte Rotor IV", &BYTE_ROTOR_IV, &[0x4A, 0xCA]),
    byte_reflector("byte-ref", "Byte Reflector", &BYTE_REFLECTOR),
];

/// Retired short-names and the entries they resolve to.
const ALIASES: [(&str, &str); 1] = [("ref-at", "ref-ct")];

/// Iterates over every catalogued component.
pub fn catalog() -> impl Iterator<Item = &'static ComponentDescriptor> {
    CATALOG.iter()
}

/// Looks up a component by its short-name.
///
/// Retired short-names resolve to their current entry.
///
/// # Returns
/// The descriptor, or `None` if the name is not catalogued.
///
/// # Examples
///
/// ```
/// use enigma_machine::registry::{lookup, ComponentKind};
///
/// let descriptor = lookup("ref-b").unwrap();
/// assert_eq!(descriptor.kind, ComponentKind::Reflector);
/// assert!(lookup("ref-z").is_none());
/// ```
pub fn lookup(short: &str) -> Option<&'static ComponentDescriptor> {
    let short = ALIASES
        .iter()
        .find(|&&(alias, _)| alias == short)
        .map_or(short, |&(_, current)| current);
    catalog().find(|descriptor| descriptor.short == short)
}

/// Short-names of the rotors over `alphabet`, sorted.
///
/// # Parameters
/// - `alphabet`: Alphabet to filter on.
/// - `include_fixed`: Whether fixed (Greek) rotors are listed.
pub fn rotor_names(alphabet: Alphabet, include_fixed: bool) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = catalog()
        .filter(|d| d.kind == ComponentKind::Rotor && d.alphabet == alphabet)
        .filter(|d| include_fixed || !d.fixed)
        .map(|d| d.short)
        .collect();
    names.sort_unstable();
    names
}

/// Short-names of the reflectors over `alphabet`, sorted.
pub fn reflector_names(alphabet: Alphabet) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = catalog()
        .filter(|d| d.kind == ComponentKind::Reflector && d.alphabet == alphabet)
        .map(|d| d.short)
        .collect();
    names.sort_unstable();
    names
}
