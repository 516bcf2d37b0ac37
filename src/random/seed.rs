//! Passphrase-to-generator derivation.
//!
//! The phrase is hashed with SHA-256 and the digest seeds a ChaCha20
//! stream, so the same phrase reproduces the same machine on every platform.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

use crate::error::EnigmaError;

/// Derives the 32-byte generator seed for `phrase`.
pub(crate) fn seed_from_phrase(phrase: &str) -> [u8; 32] {
    Sha256::digest(phrase.as_bytes()).into()
}

/// Creates a deterministic generator from a passphrase.
///
/// # Errors
/// Returns [`EnigmaError::Configuration`] for an empty phrase.
pub(crate) fn seeded_rng(phrase: &str) -> Result<ChaCha20Rng, EnigmaError> {
    if phrase.is_empty() {
        return Err(EnigmaError::Configuration(
            "seed phrase must not be empty".to_string(),
        ));
    }
    Ok(ChaCha20Rng::from_seed(seed_from_phrase(phrase)))
}
