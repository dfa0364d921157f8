use super::metrics::{round2, words_per_minute};
use super::types::{AccuracyPoint, TimeSample, WpmPoint};

/// WPM over time, recomputed from the session word count at each sample.
/// The client-reported `wpm` of a sample is ignored here.
pub fn wpm_timeline(samples: &[TimeSample], word_count: usize) -> Vec<WpmPoint> {
    samples
        .iter()
        .filter(|sample| sample.time > 0.0)
        .map(|sample| WpmPoint {
            time: sample.time,
            wpm: round2(words_per_minute(word_count as f64, sample.time)),
        })
        .collect()
}

/// Client-reported accuracy per sample, passed through as-is.
pub fn accuracy_timeline(samples: &[TimeSample]) -> Vec<AccuracyPoint> {
    samples
        .iter()
        .map(|sample| AccuracyPoint {
            time: sample.time,
            accuracy: sample.accuracy.unwrap_or(0.0),
        })
        .collect()
}
