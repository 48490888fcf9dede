use anyhow::Result;

use super::connection::{get_connection, DbPool};
use super::models::StatsFilter;
use super::stats;
use crate::domain::StatRecord;

/// Source of the already-filtered records a leaderboard is built from.
pub trait StatsStore: Send + Sync {
    fn fetch_records(
        &self,
        sport: &str,
        division: &str,
        season: Option<&str>,
    ) -> Result<Vec<StatRecord>>;
}

impl StatsStore for DbPool {
    fn fetch_records(
        &self,
        sport: &str,
        division: &str,
        season: Option<&str>,
    ) -> Result<Vec<StatRecord>> {
        let conn = get_connection(self)?;
        stats::list(&conn, &StatsFilter::for_leaderboard(sport, division, season))
    }
}
