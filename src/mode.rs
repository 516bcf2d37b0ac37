//! Processing modes.
//!
//! A mode fixes the alphabet of a machine and decides what happens to input
//! symbols that fall outside it:
//!
//! | mode      | valid input     | case        | invalid symbol            | steps on invalid |
//! |-----------|-----------------|-------------|---------------------------|------------------|
//! | `Classic` | `A-Z`, `a-z`    | uppercased  | dropped                   | no               |
//! | `Modern`  | `A-Z`, `a-z`    | preserved   | passed through unchanged  | no               |
//! | `Strict`  | `A-Z`, `a-z`    | uppercased  | chunk rejected            | no               |
//! | `Byte`    | any byte        | n/a         | n/a                       | every byte steps |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// Symbol handling policy of a machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Letters only; lowercase is folded, everything else is dropped.
    #[default]
    Classic,
    /// Letters keep their case; other symbols pass through untouched.
    Modern,
    /// Letters only; any other symbol fails the whole chunk.
    Strict,
    /// Every byte value is a symbol. Requires byte-compatible components.
    Byte,
}

impl Mode {
    /// Returns the alphabet this mode operates on.
    pub fn alphabet(self) -> Alphabet {
        match self {
            Mode::Byte => Alphabet::Bytes,
            Mode::Classic | Mode::Modern | Mode::Strict => Alphabet::Letters,
        }
    }

    /// Returns `true` if the mode only ever emits cipher letters.
    pub fn is_letters_only(self) -> bool {
        matches!(self, Mode::Classic | Mode::Strict)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Classic => "classic",
            Mode::Modern => "modern",
            Mode::Strict => "strict",
            Mode::Byte => "byte",
        };
        f.write_str(name)
    }
}
