//! Random machine generation.
//!
//! Draws a plugboard, three rotors and a reflector from the catalogue using
//! a caller-supplied generator. Every draw goes through `gen_range` over
//! `u32` so a given generator state produces the same machine on 32-bit and
//! 64-bit targets.

mod seed;

pub(crate) use seed::seeded_rng;

use rand::Rng;
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::EnigmaError;
use crate::mode::Mode;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::registry;
use crate::rotor::Rotor;

/// Number of rotors in a generated machine.
pub(crate) const RANDOM_ROTOR_COUNT: usize = 3;

fn draw<G: Rng + ?Sized>(rng: &mut G, bound: usize) -> usize {
    rng.gen_range(0..bound as u32) as usize
}

fn pick<G: Rng + ?Sized>(rng: &mut G, names: &[&'static str]) -> Result<&'static str, EnigmaError> {
    if names.is_empty() {
        return Err(EnigmaError::Configuration(
            "catalogue holds no component to choose from".to_string(),
        ));
    }
    Ok(names[draw(rng, names.len())])
}

fn descriptor(short: &str) -> Result<&'static registry::ComponentDescriptor, EnigmaError> {
    registry::lookup(short).ok_or_else(|| EnigmaError::UnknownComponent(short.to_string()))
}

/// Draws up to half the alphabet's worth of disjoint swap pairs.
fn random_plugboard<G: Rng + ?Sized>(
    alphabet: Alphabet,
    rng: &mut G,
) -> Result<Plugboard, EnigmaError> {
    let size = alphabet.size();
    let count = rng.gen_range(0..=(size / 2) as u32) as usize;
    let mut free: Vec<usize> = (0..size).collect();
    let mut board = Plugboard::new(alphabet);
    for _ in 0..count {
        let a = free.remove(draw(rng, free.len()));
        let b = free.remove(draw(rng, free.len()));
        board.connect(a, b)?;
    }
    Ok(board)
}

/// Generates the components of a random machine for `mode`.
///
/// Rotors are drawn with replacement from the sorted non-fixed catalogue,
/// each with a random offset and a single random notch.
pub(crate) fn random_components<G: Rng + ?Sized>(
    mode: Mode,
    rng: &mut G,
) -> Result<(Plugboard, Vec<Rotor>, Reflector), EnigmaError> {
    let alphabet = mode.alphabet();
    let size = alphabet.size();

    let plugboard = random_plugboard(alphabet, rng)?;

    let rotor_names = registry::rotor_names(alphabet, false);
    let mut rotors = Vec::with_capacity(RANDOM_ROTOR_COUNT);
    for _ in 0..RANDOM_ROTOR_COUNT {
        let name = pick(rng, &rotor_names)?;
        let offset = draw(rng, size);
        let notch = draw(rng, size);
        let spec = descriptor(name)?;
        rotors.push(Rotor::from_descriptor(spec, offset, Some(vec![notch]))?);
    }

    let reflector_name = pick(rng, &registry::reflector_names(alphabet))?;
    let reflector = Reflector::from_descriptor(descriptor(reflector_name)?)?;

    debug!(
        %mode,
        plugs = plugboard.pairs().len(),
        rotors = ?rotors.iter().map(Rotor::name).collect::<Vec<_>>(),
        reflector = reflector.name(),
        "random machine drawn"
    );
    Ok((plugboard, rotors, reflector))
}
