pub mod leaderboard;
pub mod session;
pub mod user_stats;
pub mod words;
