//! Word scrambling
//!
//! Produces a random arrangement of a word's letters that never equals the word itself.

use super::word::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle the letters of `word` until the result differs from it
///
/// Retries without an upper bound. This always terminates because [`Word`]
/// rejects words made of a single repeated letter; for short words with many
/// repeats (e.g. `"aab"`) a few retries are expected.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_pcg::Pcg32;
/// use word_unscramble::core::{Word, scramble};
///
/// let word = Word::new("intend").unwrap();
/// let mut rng = Pcg32::seed_from_u64(7);
/// let scrambled = scramble(&word, &mut rng);
///
/// assert_ne!(scrambled, "intend");
/// assert!(word.is_permutation_of(&scrambled));
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.text().chars().collect();
    let mut attempts = 0_usize;

    loop {
        attempts += 1;
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word.text() {
            if attempts > 1 {
                log::trace!("scrambled '{word}' after {attempts} attempts");
            }
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn scramble_differs_for_every_embedded_word() {
        let mut rng = Pcg32::seed_from_u64(0x5eed);

        for &text in WORDS {
            let Ok(word) = Word::new(text) else {
                continue;
            };
            for _ in 0..1000 {
                let scrambled = scramble(&word, &mut rng);
                assert_ne!(scrambled, word.text());
                assert!(
                    word.is_permutation_of(&scrambled),
                    "'{scrambled}' is not a permutation of '{word}'"
                );
            }
        }
    }

    #[test]
    fn scramble_two_letter_word_swaps() {
        let word = Word::new("ox").unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(scramble(&word, &mut rng), "xo");
        }
    }

    #[test]
    fn scramble_heavy_repeats_terminates() {
        let word = Word::new("aaaaaaab").unwrap();
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..1000 {
            let scrambled = scramble(&word, &mut rng);
            assert_ne!(scrambled, "aaaaaaab");
            assert!(word.is_permutation_of(&scrambled));
        }
    }

    #[test]
    fn scramble_is_deterministic_for_seed() {
        let word = Word::new("kaleidoscope").unwrap();
        let first = scramble(&word, &mut Pcg32::seed_from_u64(42));
        let second = scramble(&word, &mut Pcg32::seed_from_u64(42));
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn scramble_is_a_different_permutation(text in "[a-z]{2,12}", seed in any::<u64>()) {
            let word = Word::new(text.as_str());
            prop_assume!(word.is_ok());
            let word = word.unwrap();

            let scrambled = scramble(&word, &mut Pcg32::seed_from_u64(seed));
            prop_assert_ne!(scrambled.as_str(), word.text());
            prop_assert!(word.is_permutation_of(&scrambled));
        }
    }
}
