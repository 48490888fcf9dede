const DEFAULT_DATABASE_PATH: &str = "prep_broadcast.db";

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaderboardSettings {
    /// Applied when the caller sends no `limit`. `None` returns everything.
    pub default_limit: Option<usize>,
    pub max_limit: usize,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            default_limit: None,
            max_limit: 1000,
        }
    }
}

impl LeaderboardSettings {
    /// Row cap for a request, if any. Only an explicit limit is clamped to
    /// `[1, max_limit]`.
    pub fn effective_limit(&self, requested: Option<usize>) -> Option<usize> {
        requested
            .or(self.default_limit)
            .map(|limit| limit.clamp(1, self.max_limit.max(1)))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub leaderboard: LeaderboardSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server: ServerSettings::default(),
            leaderboard: LeaderboardSettings::default(),
        }
    }
}
