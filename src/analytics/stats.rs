//! Session-level statistics over the client-reported progress samples.
//!
//! Both statistics read the `wpm` value the client put in each sample. The
//! WPM timeline in [`super::timeline`] recomputes it instead; the two series
//! can therefore disagree for the same session.

use super::types::TimeSample;

pub const PERFECT_CONSISTENCY: f64 = 100.0;
pub const BURST_WINDOW_SECS: f64 = 10.0;

/// `100 - coefficient of variation` of the positive WPM readings, floored at 0.
///
/// Fewer than two positive readings also report 100, so "steady" and "not
/// enough data" are indistinguishable.
pub fn consistency(samples: &[TimeSample]) -> f64 {
    let readings: Vec<f64> = samples
        .iter()
        .filter_map(|sample| sample.wpm)
        .filter(|wpm| *wpm > 0.0)
        .collect();

    if readings.len() < 2 {
        return PERFECT_CONSISTENCY;
    }

    let count = readings.len() as f64;
    let mean = readings.iter().sum::<f64>() / count;
    if mean == 0.0 {
        return PERFECT_CONSISTENCY;
    }

    let variance = readings.iter().map(|wpm| (wpm - mean).powi(2)).sum::<f64>() / count;
    let std_dev = variance.sqrt();

    (PERFECT_CONSISTENCY - std_dev / mean * 100.0).max(0.0)
}

/// Highest average WPM over any window `[t, t + 10s]` anchored at a sample.
///
/// The window extends forward from its anchor. Quadratic in the number of
/// samples; a session produces at most a few hundred.
pub fn burst(samples: &[TimeSample], overall_wpm: f64) -> f64 {
    if samples.is_empty() {
        return overall_wpm;
    }

    samples
        .iter()
        .filter_map(|anchor| window_average(samples, anchor.time))
        .fold(f64::NEG_INFINITY, f64::max)
}

fn window_average(samples: &[TimeSample], start: f64) -> Option<f64> {
    let end = start + BURST_WINDOW_SECS;
    let (sum, count) = samples
        .iter()
        .filter(|sample| sample.time >= start && sample.time <= end)
        .fold((0.0, 0usize), |(sum, count), sample| {
            (sum + sample.reported_wpm(), count + 1)
        });

    (count > 0).then(|| sum / count as f64)
}
