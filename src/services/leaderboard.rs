use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub wpm: f64,
    pub accuracy: f64,
}

// Placeholder rows until scores are aggregated across users.
pub fn placeholder() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry {
            rank: 1,
            name: "SpeedTyper",
            wpm: 120.0,
            accuracy: 98.5,
        },
        LeaderboardEntry {
            rank: 2,
            name: "KeyboardNinja",
            wpm: 115.0,
            accuracy: 97.2,
        },
        LeaderboardEntry {
            rank: 3,
            name: "FastFingers",
            wpm: 110.0,
            accuracy: 96.8,
        },
    ]
}
