//! Scramble command
//!
//! Shows sample scrambles of a single word.

use crate::core::{Word, scramble};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Result of scrambling one word several times
pub struct ScrambleResult {
    pub word: String,
    pub letters: usize,
    pub scrambles: Vec<String>,
    pub distinct_scrambles: usize,
    /// Arrangements other than the word itself; `None` if too large to count
    pub possible_scrambles: Option<u128>,
}

/// Scramble `word` `count` times
///
/// # Errors
///
/// Returns an error if the word cannot be scrambled (too short, non-letters,
/// or a single repeated letter).
pub fn scramble_word<R: Rng + ?Sized>(
    word: &str,
    count: usize,
    rng: &mut R,
) -> Result<ScrambleResult, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let scrambles: Vec<String> = (0..count).map(|_| scramble(&word, rng)).collect();
    let distinct_scrambles = scrambles.iter().collect::<FxHashSet<_>>().len();

    Ok(ScrambleResult {
        word: word.text().to_string(),
        letters: word.letter_count(),
        scrambles,
        distinct_scrambles,
        possible_scrambles: distinct_arrangements(&word).map(|n| n - 1),
    })
}

/// Number of distinct letter arrangements, n! / (k1! * k2! * ...)
#[must_use]
pub fn distinct_arrangements(word: &Word) -> Option<u128> {
    let mut total: u128 = 1;
    let mut placed: u128 = 0;

    // Build the multinomial incrementally to keep intermediates exact
    for &count in word.char_counts().values() {
        for k in 1..=count as u128 {
            placed += 1;
            total = total.checked_mul(placed)? / k;
        }
    }

    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn scramble_word_valid() {
        let mut rng = Pcg32::seed_from_u64(3);
        let result = scramble_word("Intend", 20, &mut rng).unwrap();

        assert_eq!(result.word, "intend");
        assert_eq!(result.letters, 6);
        assert_eq!(result.scrambles.len(), 20);
        assert!(result.scrambles.iter().all(|s| s != "intend"));
        assert!(result.distinct_scrambles >= 1);
        assert!(result.distinct_scrambles <= 20);
        // 6! / 2! (two 'n's) = 360, minus the word itself
        assert_eq!(result.possible_scrambles, Some(359));
    }

    #[test]
    fn scramble_word_invalid() {
        let mut rng = Pcg32::seed_from_u64(3);
        assert!(scramble_word("a", 5, &mut rng).is_err());
        assert!(scramble_word("zzz", 5, &mut rng).is_err());
        assert!(scramble_word("x-ray", 5, &mut rng).is_err());
    }

    #[test]
    fn two_letter_word_has_one_scramble() {
        let mut rng = Pcg32::seed_from_u64(3);
        let result = scramble_word("ox", 10, &mut rng).unwrap();
        assert_eq!(result.distinct_scrambles, 1);
        assert_eq!(result.possible_scrambles, Some(1));
    }

    #[test]
    fn arrangements_with_repeats() {
        let word = Word::new("balloon").unwrap();
        // 7! / (2! * 2!) = 1260
        assert_eq!(distinct_arrangements(&word), Some(1260));

        let word = Word::new("abc").unwrap();
        assert_eq!(distinct_arrangements(&word), Some(6));
    }

    #[test]
    fn arrangements_small_words_exhausted() {
        let mut rng = Pcg32::seed_from_u64(8);
        let result = scramble_word("cat", 500, &mut rng).unwrap();
        assert_eq!(result.possible_scrambles, Some(5));
        assert_eq!(result.distinct_scrambles, 5);
    }
}
