//! Positional character comparison between the target text and what was typed.

use super::types::CharacterError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharDiff {
    pub correct: usize,
    pub incorrect: usize,
    /// Mismatches inside the overlapping prefix only. Characters typed past
    /// the end of the target are counted in `incorrect` but never listed.
    pub errors: Vec<CharacterError>,
    pub target_len: usize,
    pub input_len: usize,
}

impl CharDiff {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }
}

pub fn compare(target: &str, input: &str) -> CharDiff {
    let target: Vec<char> = target.chars().collect();
    let input: Vec<char> = input.chars().collect();

    let mut diff = CharDiff {
        target_len: target.len(),
        input_len: input.len(),
        ..CharDiff::default()
    };

    for (position, (&expected, &typed)) in target.iter().zip(input.iter()).enumerate() {
        if expected == typed {
            diff.correct += 1;
        } else {
            diff.incorrect += 1;
            diff.errors.push(CharacterError {
                position,
                expected,
                typed,
            });
        }
    }

    diff.incorrect += input.len().saturating_sub(target.len());
    diff
}

/// Same tally as [`compare`] without building the error list. Real-time
/// updates only need the counts and run on every keystroke batch.
pub fn count_matches(target: &str, input: &str) -> (usize, usize) {
    let mut target_chars = target.chars();
    let mut correct = 0;
    let mut incorrect = 0;

    for typed in input.chars() {
        match target_chars.next() {
            Some(expected) if expected == typed => correct += 1,
            _ => incorrect += 1,
        }
    }

    (correct, incorrect)
}
