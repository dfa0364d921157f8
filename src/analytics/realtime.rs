//! Cheap per-keystroke metrics for a test that is still running.

use super::diff::count_matches;
use super::metrics::{accuracy, elapsed_seconds, percentage, round2, words_per_minute};
use super::types::{ProgressSnapshot, ProgressTrace};

pub fn snapshot(trace: &ProgressTrace) -> ProgressSnapshot {
    let target = trace.words.join(" ");
    let elapsed = elapsed_seconds(trace.current_time.saturating_sub(trace.start_time));
    let typed_words = trace.input_text.split_whitespace().count();

    let (correct, incorrect) = count_matches(&target, &trace.input_text);
    let input_len = trace.input_text.chars().count();
    let target_len = target.chars().count();

    ProgressSnapshot {
        wpm: round2(words_per_minute(typed_words as f64, elapsed)),
        accuracy: round2(accuracy(correct, correct + incorrect)),
        elapsed_time: round2(elapsed),
        completion_percentage: round2(percentage(input_len, target_len)),
        correct_chars: correct,
        incorrect_chars: incorrect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(words: &[&str], input: &str, start: i64, now: i64) -> ProgressTrace {
        ProgressTrace {
            words: words.iter().map(|w| w.to_string()).collect(),
            input_text: input.to_string(),
            start_time: start,
            current_time: now,
        }
    }

    #[test]
    fn test_snapshot_midway() {
        let snap = snapshot(&trace(&["apple", "banana"], "apple ba", 1_000, 31_000));
        assert_eq!(snap.elapsed_time, 30.0);
        assert_eq!(snap.wpm, 4.0);
        assert_eq!(snap.accuracy, 100.0);
        assert_eq!(snap.completion_percentage, round2(8.0 / 12.0 * 100.0));
    }

    #[test]
    fn test_snapshot_with_typo() {
        let snap = snapshot(&trace(&["cat"], "cot", 0, 6_000));
        assert_eq!(snap.correct_chars, 2);
        assert_eq!(snap.incorrect_chars, 1);
        assert_eq!(snap.accuracy, 66.67);
    }

    #[test]
    fn test_snapshot_before_any_time_passed() {
        let snap = snapshot(&trace(&["cat"], "c", 5_000, 5_000));
        assert_eq!(snap.wpm, 0.0);
        assert_eq!(snap.elapsed_time, 0.0);
    }

    #[test]
    fn test_snapshot_empty_target() {
        let snap = snapshot(&trace(&[], "abc", 0, 1_000));
        assert_eq!(snap.completion_percentage, 0.0);
        assert_eq!(snap.accuracy, 0.0);
        assert_eq!(snap.incorrect_chars, 3);
    }
}
