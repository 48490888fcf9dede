pub mod engine;
pub mod metric;

pub use engine::{LeaderboardEntry, leaderboard, rank};
pub use metric::MetricKey;
