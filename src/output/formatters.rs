//! Formatting utilities for terminal output

/// Spell a word out in spaced capitals, e.g. `"tnedni"` -> `"T N E D N I"`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, ch) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.extend(ch.to_uppercase());
    }
    result
}

/// Round indicator shown above the scrambled word
#[must_use]
pub fn round_badge(current: u32, max: u32) -> String {
    format!("word count {current}/{max}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score as a bar relative to the best possible score
#[must_use]
pub fn score_bar(score: u32, max_score: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(max_score), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("tnedni"), "T N E D N I");
        assert_eq!(spaced_letters("ox"), "O X");
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn round_badge_format() {
        assert_eq!(round_badge(3, 10), "word count 3/10");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_overflow_clamped() {
        assert_eq!(score_bar(300, 200, 5), "█████");
        assert_eq!(score_bar(100, 200, 4), "██░░");
    }
}
