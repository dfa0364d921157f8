use serde::{Deserialize, Serialize};

/// One progress sample reported by the client while the test was running.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSample {
    /// Seconds since the start of the test.
    pub time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl TimeSample {
    pub fn new(time: f64, wpm: Option<f64>, accuracy: Option<f64>) -> Self {
        Self {
            time,
            wpm,
            accuracy,
        }
    }

    pub(crate) fn reported_wpm(&self) -> f64 {
        self.wpm.unwrap_or(0.0)
    }
}

/// Raw record of a finished typing test as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypingTrace {
    pub words: Vec<String>,
    pub input_text: String,
    /// Milliseconds.
    pub start_time: i64,
    /// Milliseconds.
    pub end_time: i64,
    #[serde(default)]
    pub time_data: Vec<TimeSample>,
}

impl TypingTrace {
    pub fn target_text(&self) -> String {
        self.words.join(" ")
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.end_time.saturating_sub(self.start_time)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterError {
    pub position: usize,
    pub expected: char,
    pub typed: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WpmPoint {
    pub time: f64,
    pub wpm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyPoint {
    pub time: f64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharAnalysis {
    pub total_typed: usize,
    pub total_target: usize,
    pub errors: Vec<CharacterError>,
    /// Itemized `errors` over `total_typed`, as a percentage. Over-typed
    /// characters are never itemized, so this stays within 0..=100.
    pub error_rate: f64,
    pub completion_percentage: f64,
}

/// Everything derived from a [`TypingTrace`]. Float fields are rounded to two
/// decimals; the computation behind them is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    pub wpm: f64,
    pub raw_wpm: f64,
    pub accuracy: f64,
    pub correct_chars: usize,
    pub incorrect_chars: usize,
    pub total_chars: usize,
    pub time_taken: f64,
    pub word_count: usize,
    pub char_count: usize,
    pub errors: usize,
    pub consistency: f64,
    pub burst: f64,
    pub time_data: Vec<TimeSample>,
    pub wpm_data: Vec<WpmPoint>,
    pub accuracy_data: Vec<AccuracyPoint>,
    pub char_analysis: CharAnalysis,
}

/// An in-progress session polled by the client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressTrace {
    pub words: Vec<String>,
    pub input_text: String,
    pub start_time: i64,
    pub current_time: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub wpm: f64,
    pub accuracy: f64,
    pub elapsed_time: f64,
    pub completion_percentage: f64,
    pub correct_chars: usize,
    pub incorrect_chars: usize,
}
