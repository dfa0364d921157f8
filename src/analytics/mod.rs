//! Typing analytics engine.
//!
//! Pure functions from a submitted [`TypingTrace`] to an [`AnalyticsResult`].
//! Nothing here touches I/O or shared state.

pub mod diff;
pub mod metrics;
pub mod realtime;
pub mod stats;
pub mod timeline;
pub mod types;

use thiserror::Error;

pub use types::{
    AccuracyPoint, AnalyticsResult, CharAnalysis, CharacterError, ProgressSnapshot,
    ProgressTrace, TimeSample, TypingTrace, WpmPoint,
};

use self::metrics::{percentage, round2};

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("metric `{metric}` is not a finite number ({value})")]
    NonFinite { metric: &'static str, value: f64 },
}

pub fn analyze(trace: &TypingTrace) -> Result<AnalyticsResult, AnalysisError> {
    let target = trace.target_text();
    let word_count = trace.word_count();

    let diff = diff::compare(&target, &trace.input_text);
    let speed = metrics::speed(word_count, diff.input_len, trace.elapsed_ms());
    let total_chars = diff.total();
    let accuracy = metrics::accuracy(diff.correct, total_chars);

    let consistency = stats::consistency(&trace.time_data);
    let burst = stats::burst(&trace.time_data, speed.wpm);

    let char_analysis = CharAnalysis {
        total_typed: diff.input_len,
        total_target: diff.target_len,
        error_rate: round2(percentage(diff.errors.len(), diff.input_len)),
        completion_percentage: round2(percentage(diff.input_len, diff.target_len)),
        errors: diff.errors,
    };

    let result = AnalyticsResult {
        wpm: round2(speed.wpm),
        raw_wpm: round2(speed.raw_wpm),
        accuracy: round2(accuracy),
        correct_chars: diff.correct,
        incorrect_chars: diff.incorrect,
        total_chars,
        time_taken: round2(speed.time_taken_secs),
        word_count,
        char_count: diff.input_len,
        errors: char_analysis.errors.len(),
        consistency: round2(consistency),
        burst: round2(burst),
        time_data: trace.time_data.clone(),
        wpm_data: timeline::wpm_timeline(&trace.time_data, word_count),
        accuracy_data: timeline::accuracy_timeline(&trace.time_data),
        char_analysis,
    };

    ensure_finite(&result)?;
    Ok(result)
}

fn ensure_finite(result: &AnalyticsResult) -> Result<(), AnalysisError> {
    let scalars = [
        ("wpm", result.wpm),
        ("raw_wpm", result.raw_wpm),
        ("accuracy", result.accuracy),
        ("time_taken", result.time_taken),
        ("consistency", result.consistency),
        ("burst", result.burst),
        ("error_rate", result.char_analysis.error_rate),
        (
            "completion_percentage",
            result.char_analysis.completion_percentage,
        ),
    ];

    let points = result.wpm_data.iter().map(|point| ("wpm_data", point.wpm));

    match scalars
        .into_iter()
        .chain(points)
        .find(|(_, value)| !value.is_finite())
    {
        Some((metric, value)) => Err(AnalysisError::NonFinite { metric, value }),
        None => Ok(()),
    }
}
