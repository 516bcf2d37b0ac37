//! Rotor stack stepping protocols.
//!
//! Index 0 of a stack is the entry (fast) rotor. Two protocols exist:
//!
//! - [`SteppingPolicy::Odometer`]: strict carry chain. Rotor 0 always steps;
//!   each further rotor steps only when the rotor before it reports a notch.
//! - [`SteppingPolicy::DoubleStep`]: the pawl-and-ratchet behaviour of the
//!   real machines. A rotor sitting on its own notch is pushed along with the
//!   rotor to its left, so a middle rotor advances on two consecutive key
//!   presses (e.g. `ADU -> ADV -> AEW -> BFX` on Enigma I, read left to
//!   right).
//!
//! Both decide from the positions *before* the step.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rotor::Rotor;

/// How a key press propagates through the rotor stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SteppingPolicy {
    /// Carry only from a rotor that just passed its notch.
    #[default]
    Odometer,
    /// Historical pawl mechanics, including the double-step anomaly.
    DoubleStep,
}

impl SteppingPolicy {
    /// Advances `rotors` by one key press.
    pub fn step(self, rotors: &mut [Rotor]) {
        match self {
            SteppingPolicy::Odometer => {
                for rotor in rotors.iter_mut() {
                    if !rotor.step() {
                        break;
                    }
                }
            }
            SteppingPolicy::DoubleStep => {
                let moves = Self::pawl_moves(rotors);
                for (rotor, moves) in rotors.iter_mut().zip(moves) {
                    if moves {
                        rotor.advance();
                    }
                }
            }
        }
    }

    /// Decides which rotors move under the pawl mechanics.
    ///
    /// The pawl feeding rotor `i + 1` rests on rotor `i`'s notch ring; when it
    /// drops into a notch it pushes both wheels. A fixed wheel has no pawl.
    fn pawl_moves(rotors: &[Rotor]) -> Vec<bool> {
        let count = rotors.len();
        (0..count)
            .map(|i| {
                if rotors[i].is_fixed() {
                    return false;
                }
                if i == 0 {
                    return true;
                }
                let carried = rotors[i - 1].at_notch();
                let dragged = i + 1 < count && !rotors[i + 1].is_fixed() && rotors[i].at_notch();
                carried || dragged
            })
            .collect()
    }
}

impl fmt::Display for SteppingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SteppingPolicy::Odometer => f.write_str("odometer"),
            SteppingPolicy::DoubleStep => f.write_str("double-step"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;

    fn stack(specs: &[&str]) -> Vec<Rotor> {
        specs
            .iter()
            .map(|spec| Rotor::from_spec(spec, Mode::Classic).unwrap())
            .collect()
    }

    fn letters(rotors: &[Rotor]) -> String {
        rotors
            .iter()
            .map(|r| (b'A' + r.offset() as u8) as char)
            .collect()
    }

    #[test]
    fn test_odometer_carry_chain() {
        // rotor 0 one step before its notch (Q)
        let mut rotors = stack(&["com1:P", "com2:A", "com3:A"]);
        SteppingPolicy::Odometer.step(&mut rotors);
        assert_eq!(letters(&rotors), "QAA");
        SteppingPolicy::Odometer.step(&mut rotors);
        assert_eq!(letters(&rotors), "RBA");
    }

    #[test]
    fn test_odometer_full_carry() {
        // com1 notch Q, com2 notch E
        let mut rotors = stack(&["com1:Q", "com2:E", "com3:A"]);
        SteppingPolicy::Odometer.step(&mut rotors);
        assert_eq!(letters(&rotors), "RFB");
    }

    #[test]
    fn test_odometer_never_double_steps() {
        let mut rotors = stack(&["enig3:U", "enig2:D", "enig1:A"]);
        for expected in ["VDA", "WEA", "XEA", "YEA"] {
            SteppingPolicy::Odometer.step(&mut rotors);
            assert_eq!(letters(&rotors), expected);
        }
    }

    #[test]
    fn test_double_step_anomaly() {
        // Read left to right this is ADU -> ADV -> AEW -> BFX -> BFY
        let mut rotors = stack(&["enig3:U", "enig2:D", "enig1:A"]);
        for expected in ["VDA", "WEA", "XFB", "YFB"] {
            SteppingPolicy::DoubleStep.step(&mut rotors);
            assert_eq!(letters(&rotors), expected);
        }
    }

    #[test]
    fn test_double_step_last_rotor_is_not_dragged() {
        // the leftmost rotor sits on its notch but has no pawl beyond it
        let mut rotors = stack(&["enig3:A", "enig2:A", "enig1:Q"]);
        SteppingPolicy::DoubleStep.step(&mut rotors);
        assert_eq!(letters(&rotors), "BAQ");
    }

    #[test]
    fn test_fixed_rotor_blocks_both_policies() {
        // a Greek wheel on the far left never moves
        for policy in [SteppingPolicy::Odometer, SteppingPolicy::DoubleStep] {
            let mut rotors = stack(&["enig3:V", "enig2:E", "enig1:Q", "beta:A"]);
            policy.step(&mut rotors);
            assert_eq!(rotors[3].offset(), 0);
        }
    }

    #[test]
    fn test_double_step_beside_fixed_rotor() {
        // enig1 on its notch would be dragged if a stepping wheel sat left of it
        let mut rotors = stack(&["enig3:A", "enig2:A", "enig1:Q", "beta:A"]);
        SteppingPolicy::DoubleStep.step(&mut rotors);
        assert_eq!(letters(&rotors), "BAQA");
    }

    #[test]
    fn test_single_rotor_stack() {
        for policy in [SteppingPolicy::Odometer, SteppingPolicy::DoubleStep] {
            let mut rotors = stack(&["com1:Z"]);
            policy.step(&mut rotors);
            assert_eq!(letters(&rotors), "A");
        }
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(SteppingPolicy::default(), SteppingPolicy::Odometer);
        assert_eq!(SteppingPolicy::DoubleStep.to_string(), "double-step");
    }
}
