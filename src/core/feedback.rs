//! Per-letter guess feedback
//!
//! Feedback is a sequence of [`LetterStatus`] values, one per guessed letter:
//! - `Absent` (letter not in word, or every copy already accounted for)
//! - `Present` (letter in word, wrong position)
//! - `Correct` (letter in correct position)

use super::Word;

/// Status of a single letter, either for one guess slot or aggregated on the keyboard
///
/// Variants are ordered by strength so that `max` never downgrades a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    /// Not guessed yet
    #[default]
    None,
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square used in share summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::None => '⬜',
        }
    }
}

/// Feedback for one guess against the hidden word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Calculate the feedback when `guess` is guessed and `answer` is the target
    ///
    /// Implements the standard duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches correct and remove them from the available pool
    /// 2. Second pass: mark present-but-misplaced letters while copies remain in the pool
    ///
    /// A guess shorter or longer than the answer is scored over the overlapping slots;
    /// extra guess letters are absent.
    ///
    /// # Examples
    /// ```
    /// use letritas::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("gatas").unwrap();
    /// let answer = Word::new("gatos").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// // The second A has no unmatched A left in GATOS
    /// assert_eq!(feedback.status_at(3), LetterStatus::Absent);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = vec![LetterStatus::Absent; guess.len()];
        let mut answer_available = answer.letter_counts();

        for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                result[i] = LetterStatus::Correct;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess.letters().iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Status of the letter at `position`
    ///
    /// # Panics
    /// Panics if position is out of range
    #[must_use]
    pub fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// All statuses in guess order
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn feedback(guess: &str, answer: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn status_strength_ordering() {
        assert!(LetterStatus::None < Absent);
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Present.max(Correct), Correct);
        assert_eq!(Correct.max(Absent), Correct);
    }

    #[test]
    fn feedback_all_absent() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.statuses(), &[Absent; 5]);
    }

    #[test]
    fn feedback_all_correct() {
        let fb = feedback("perro", "perro");
        assert_eq!(fb.statuses(), &[Correct; 5]);
    }

    #[test]
    fn feedback_repeated_guess_letter_single_in_answer() {
        // GATOS has one A, already matched at position 1
        let fb = feedback("gatas", "gatos");
        assert_eq!(fb.statuses(), &[Correct, Correct, Correct, Absent, Correct]);
    }

    #[test]
    fn feedback_misplaced_then_absent_duplicate() {
        // PLAZA has two A's, neither at the guessed positions
        let fb = feedback("aaron", "plaza");
        assert_eq!(fb.statuses(), &[Present, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn feedback_green_takes_priority_over_yellow() {
        // ROCAS vs ZORRO: O at index 1 is correct, R is misplaced
        let fb = feedback("rocas", "zorro");
        assert_eq!(fb.statuses(), &[Present, Correct, Absent, Absent, Absent]);

        // Both R's of ZORRO are consumed by exact matches
        let fb = feedback("rrrrr", "zorro");
        assert_eq!(fb.statuses(), &[Absent, Absent, Correct, Correct, Absent]);
    }

    #[test]
    fn feedback_mismatched_length_extra_letters_absent() {
        let fb = feedback("solar", "sol");
        assert_eq!(fb.statuses(), &[Correct, Correct, Correct, Absent, Absent]);
    }

    #[test]
    fn feedback_emoji() {
        let fb = feedback("rocas", "zorro");
        assert_eq!(fb.to_emoji(), "🟨🟩⬜⬜⬜");
        assert_eq!(feedback("sol", "sol").to_emoji(), "🟩🟩🟩");
    }

    #[test]
    fn feedback_self_is_perfect() {
        for word in ["gatos", "zorro", "a", "besos", "murcielago"] {
            let w = Word::new(word).unwrap();
            let fb = Feedback::calculate(&w, &w);
            assert!(fb.statuses().iter().all(|&s| s == Correct));
        }
    }
}
