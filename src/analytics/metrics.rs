pub const CHARS_PER_WORD: f64 = 5.0;

const MS_PER_SECOND: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedMetrics {
    pub time_taken_secs: f64,
    pub wpm: f64,
    pub raw_wpm: f64,
}

pub fn elapsed_seconds(elapsed_ms: i64) -> f64 {
    elapsed_ms as f64 / MS_PER_SECOND
}

/// Words over minutes. A non-positive duration yields 0.
pub fn words_per_minute(words: f64, elapsed_secs: f64) -> f64 {
    let minutes = elapsed_secs / SECONDS_PER_MINUTE;
    if minutes > 0.0 {
        words / minutes
    } else {
        0.0
    }
}

pub fn speed(word_count: usize, input_len: usize, elapsed_ms: i64) -> SpeedMetrics {
    let time_taken_secs = elapsed_seconds(elapsed_ms);

    SpeedMetrics {
        time_taken_secs,
        wpm: words_per_minute(word_count as f64, time_taken_secs),
        raw_wpm: words_per_minute(input_len as f64 / CHARS_PER_WORD, time_taken_secs),
    }
}

/// Share of `part` in `whole`, as a percentage; 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub fn accuracy(correct: usize, total: usize) -> f64 {
    percentage(correct, total)
}

/// Rounds to two decimals. Magnitudes too large to scale are returned as-is.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}
