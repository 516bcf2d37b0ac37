//! Property tests over randomly generated machines.

use std::io::Cursor;

use enigma_machine::{Machine, Mode, SteppingPolicy};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn policy() -> impl Strategy<Value = SteppingPolicy> {
    prop_oneof![
        Just(SteppingPolicy::Odometer),
        Just(SteppingPolicy::DoubleStep)
    ]
}

fn machine(mode: Mode, policy: SteppingPolicy, seed: u64) -> Machine {
    Machine::from_rng(mode, policy, &mut ChaCha20Rng::seed_from_u64(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn letters_are_self_reciprocal(
        seed in any::<u64>(),
        policy in policy(),
        text in "[A-Z]{0,300}"
    ) {
        let mut encoder = machine(Mode::Classic, policy, seed);
        let mut decoder = encoder.clone();
        let ciphertext = encoder.translate_str(&text).unwrap();
        prop_assert_eq!(decoder.translate_str(&ciphertext).unwrap(), text);
    }

    #[test]
    fn bytes_are_self_reciprocal(
        seed in any::<u64>(),
        policy in policy(),
        data in prop::collection::vec(any::<u8>(), 0..600)
    ) {
        let mut encoder = machine(Mode::Byte, policy, seed);
        let mut decoder = encoder.clone();
        let ciphertext = encoder.translate_chunk(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(decoder.translate_chunk(&ciphertext).unwrap(), data);
    }

    #[test]
    fn no_letter_enciphers_to_itself(seed in any::<u64>(), text in "[A-Z]{1,200}") {
        let mut m = machine(Mode::Classic, SteppingPolicy::Odometer, seed);
        let ciphertext = m.translate_str(&text).unwrap();
        for (plain, cipher) in text.bytes().zip(ciphertext.bytes()) {
            prop_assert_ne!(plain, cipher);
        }
    }

    #[test]
    fn modern_mode_preserves_layout(seed in any::<u64>(), text in "[ -~]{0,200}") {
        let mut m = machine(Mode::Modern, SteppingPolicy::DoubleStep, seed);
        let ciphertext = m.translate_str(&text).unwrap();
        prop_assert_eq!(ciphertext.len(), text.len());
        for (plain, cipher) in text.bytes().zip(ciphertext.bytes()) {
            prop_assert_eq!(plain.is_ascii_uppercase(), cipher.is_ascii_uppercase());
            prop_assert_eq!(plain.is_ascii_lowercase(), cipher.is_ascii_lowercase());
            if !plain.is_ascii_alphabetic() {
                prop_assert_eq!(plain, cipher);
            }
        }
    }

    #[test]
    fn state_resume_matches_uninterrupted(
        seed in any::<u64>(),
        policy in policy(),
        text in "[A-Z]{0,200}",
        split in 0usize..200
    ) {
        let split = split.min(text.len());
        let mut whole = machine(Mode::Classic, policy, seed);
        let expected = whole.translate_str(&text).unwrap();

        let mut first = machine(Mode::Classic, policy, seed);
        let head = first.translate_str(&text[..split]).unwrap();
        let mut second = Machine::from_state(&first.state_get().unwrap()).unwrap();
        let tail = second.translate_str(&text[split..]).unwrap();

        prop_assert_eq!(head + &tail, expected);
    }

    #[test]
    fn chunk_size_does_not_change_output(
        seed in any::<u64>(),
        data in prop::collection::vec(any::<u8>(), 0..400),
        chunk in 1usize..64
    ) {
        let mut reference = machine(Mode::Byte, SteppingPolicy::Odometer, seed);
        let expected = reference.translate_chunk(&data).unwrap();

        let mut streamed = machine(Mode::Byte, SteppingPolicy::Odometer, seed);
        let mut output = Vec::new();
        streamed
            .translate_stream(Cursor::new(&data), &mut output, chunk, None)
            .unwrap();
        prop_assert_eq!(output, expected);
    }

    #[test]
    fn break_go_restores_positions(seed in any::<u64>(), text in "[A-Z]{0,100}") {
        let mut m = machine(Mode::Strict, SteppingPolicy::DoubleStep, seed);
        let start = m.positions();
        m.translate_str(&text).unwrap();
        m.break_go().unwrap();
        prop_assert_eq!(m.positions(), start);
    }
}
