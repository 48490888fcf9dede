pub mod import;
pub mod leaderboard;
pub mod records;
pub mod server;
pub mod stats;

pub use import::ImportService;
pub use leaderboard::{LeaderboardQuery, LeaderboardService};
pub use records::{GameService, PlayerService, RecordService, SchoolService, TeamService};
pub use server::ServerService;
pub use stats::StatsService;
