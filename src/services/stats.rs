use anyhow::Result;
use log::info;

use crate::database::{self, stats, DbPool, StatsFilter};
use crate::domain::{NewStats, StatRecord};

/// CRUD over stats rows. Reads only see active rows; deletes are soft
/// unless asked otherwise.
#[derive(Clone)]
pub struct StatsService {
    pool: DbPool,
}

impl StatsService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn list(&self, filter: &StatsFilter) -> Result<Vec<StatRecord>> {
        let conn = database::get_connection(&self.pool)?;
        stats::list(&conn, filter)
    }

    pub fn get(&self, id: i64) -> Result<Option<StatRecord>> {
        let conn = database::get_connection(&self.pool)?;
        stats::find_by_id(&conn, id)
    }

    pub fn get_by_player_sport_season(
        &self,
        player_name: &str,
        sport: &str,
        season: &str,
    ) -> Result<Option<StatRecord>> {
        let conn = database::get_connection(&self.pool)?;
        stats::find_by_player_sport_season(&conn, player_name, sport, season)
    }

    pub fn create(&self, payload: &NewStats) -> Result<StatRecord> {
        let conn = database::get_connection(&self.pool)?;
        let created = stats::insert(&conn, payload)?;
        info!("Created stats {} for {} ({})", created.id, created.player_name, created.sport);
        Ok(created)
    }

    pub fn update(&self, id: i64, payload: &NewStats) -> Result<Option<StatRecord>> {
        let conn = database::get_connection(&self.pool)?;
        stats::update(&conn, id, payload)
    }

    pub fn soft_delete(&self, id: i64) -> Result<bool> {
        let conn = database::get_connection(&self.pool)?;
        let deleted = stats::deactivate(&conn, id)?;
        if deleted {
            info!("Deactivated stats {}", id);
        }
        Ok(deleted)
    }

    pub fn hard_delete(&self, id: i64) -> Result<bool> {
        let conn = database::get_connection(&self.pool)?;
        let deleted = stats::delete_permanently(&conn, id)?;
        if deleted {
            info!("Permanently deleted stats {}", id);
        }
        Ok(deleted)
    }

    pub fn sports(&self) -> Result<Vec<String>> {
        let conn = database::get_connection(&self.pool)?;
        stats::distinct_sports(&conn)
    }

    pub fn seasons(&self) -> Result<Vec<String>> {
        let conn = database::get_connection(&self.pool)?;
        stats::distinct_seasons(&conn)
    }

    pub fn divisions(&self, sport: &str) -> Result<Vec<String>> {
        let conn = database::get_connection(&self.pool)?;
        stats::distinct_divisions(&conn, sport)
    }
}
