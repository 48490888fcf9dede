use anyhow::{Context, Result};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use super::crud::{self, Entity, EntityPayload, RecordFilter, Scope};
use super::models::StatsFilter;
use crate::domain::{NewStats, StatLine, StatRecord};

const IDENTITY_COLUMNS: [&str; 6] = [
    "player_name",
    "team_name",
    "school_name",
    "sport",
    "division",
    "season",
];

impl Entity for StatRecord {
    type Payload = NewStats;
    type Filter = StatsFilter;

    const TABLE: &'static str = "player_stats";
    const READ_SCOPE: Scope = Scope::Active;

    fn writable_columns() -> Vec<&'static str> {
        IDENTITY_COLUMNS
            .iter()
            .chain(StatLine::COLUMNS)
            .copied()
            .collect()
    }

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(StatRecord {
            id: row.get("id")?,
            player_name: row.get("player_name")?,
            team_name: row.get("team_name")?,
            school_name: row.get("school_name")?,
            sport: row.get("sport")?,
            division: row.get("division")?,
            season: row.get("season")?,
            line: StatLine::from_row(row)?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl EntityPayload for NewStats {
    fn sql_values(&self) -> Vec<Value> {
        let mut values: Vec<Value> = self.identity_values().into_iter().map(crud::text).collect();
        values.extend(self.line.to_sql_values());
        values
    }
}

pub fn insert(conn: &Connection, stats: &NewStats) -> Result<StatRecord> {
    crud::insert(conn, stats)
}

/// Replaces every field of an active row. `None` when no such row exists.
pub fn update(conn: &Connection, id: i64, stats: &NewStats) -> Result<Option<StatRecord>> {
    crud::update(conn, id, stats, Scope::Active)
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<StatRecord>> {
    crud::find_by_id(conn, id, Scope::Active)
}

pub fn find_by_player_sport_season(
    conn: &Connection,
    player_name: &str,
    sport: &str,
    season: &str,
) -> Result<Option<StatRecord>> {
    let filter = StatsFilter {
        player_name: Some(player_name.to_string()),
        sport: Some(sport.to_string()),
        season: Some(season.to_string()),
        ..Default::default()
    };

    // Lowest id wins when a player has duplicate rows.
    Ok(list(conn, &filter)?.into_iter().next())
}

/// Active rows matching every set filter, in insertion order.
pub fn list(conn: &Connection, filter: &StatsFilter) -> Result<Vec<StatRecord>> {
    crud::list(conn, &filter.conditions(), Scope::Active)
}

/// Clears the active flag. Returns whether the row exists.
pub fn deactivate(conn: &Connection, id: i64) -> Result<bool> {
    crud::deactivate::<StatRecord>(conn, id)
}

pub fn delete_permanently(conn: &Connection, id: i64) -> Result<bool> {
    crud::delete_permanently::<StatRecord>(conn, id)
}

pub fn distinct_sports(conn: &Connection) -> Result<Vec<String>> {
    query_strings(
        conn,
        "SELECT DISTINCT sport FROM player_stats WHERE is_active = 1 ORDER BY sport",
        &[],
    )
}

pub fn distinct_seasons(conn: &Connection) -> Result<Vec<String>> {
    query_strings(
        conn,
        "SELECT DISTINCT season FROM player_stats WHERE is_active = 1 ORDER BY season DESC",
        &[],
    )
}

pub fn distinct_divisions(conn: &Connection, sport: &str) -> Result<Vec<String>> {
    query_strings(
        conn,
        "SELECT DISTINCT division FROM player_stats WHERE sport = ?1 AND is_active = 1 ORDER BY division",
        &[sport],
    )
}

fn query_strings(conn: &Connection, sql: &str, args: &[&str]) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params_from_iter(args.iter()), |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()
        .context("Failed to query distinct values")?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::ensure_schema;

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    fn payload(player: &str, sport: &str, division: &str, season: &str) -> NewStats {
        NewStats {
            player_name: player.to_string(),
            team_name: "Wildcats".to_string(),
            school_name: "Valley View".to_string(),
            sport: sport.to_string(),
            division: division.to_string(),
            season: season.to_string(),
            line: StatLine::default(),
        }
    }

    #[test]
    fn test_insert_and_find() {
        let conn = open();
        let mut stats = payload("Jo Reyes", "football", "1A", "2024");
        stats.line.passing_yards = Some(2410);

        let created = insert(&conn, &stats).unwrap();
        let found = find_by_id(&conn, created.id).unwrap().unwrap();

        assert_eq!(found.player_name, "Jo Reyes");
        assert_eq!(found.line.passing_yards, Some(2410));
        assert_eq!(found.line.goals, None);
        assert!(found.created_at.is_some());
    }

    #[test]
    fn test_fractional_columns_round_trip() {
        let conn = open();
        let mut stats = payload("Kim Lee", "softball", "3A", "2023");
        stats.line.batting_average = Some(0.415);
        stats.line.earned_run_average = Some(1.75);

        let created = insert(&conn, &stats).unwrap();

        assert_eq!(created.line.batting_average, Some(0.415));
        assert_eq!(created.line.earned_run_average, Some(1.75));
    }

    #[test]
    fn test_update_replaces_fields() {
        let conn = open();
        let mut stats = payload("Jo Reyes", "football", "1A", "2024");
        stats.line.rushing_yards = Some(300);
        let created = insert(&conn, &stats).unwrap();

        stats.team_name = "Panthers".to_string();
        stats.line.rushing_yards = None;
        stats.line.tackles = Some(12);
        let updated = update(&conn, created.id, &stats).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.team_name, "Panthers");
        assert_eq!(updated.line.rushing_yards, None);
        assert_eq!(updated.line.tackles, Some(12));
    }

    #[test]
    fn test_update_missing_row() {
        let conn = open();
        let stats = payload("Nobody", "football", "1A", "2024");

        assert!(update(&conn, 42, &stats).unwrap().is_none());
    }

    #[test]
    fn test_soft_delete_hides_row() {
        let conn = open();
        let created = insert(&conn, &payload("Jo Reyes", "football", "1A", "2024")).unwrap();

        assert!(deactivate(&conn, created.id).unwrap());
        assert!(find_by_id(&conn, created.id).unwrap().is_none());
        assert!(list(&conn, &StatsFilter::default()).unwrap().is_empty());
        assert!(!deactivate(&conn, 999).unwrap());
    }

    #[test]
    fn test_hard_delete_removes_row() {
        let conn = open();
        let created = insert(&conn, &payload("Jo Reyes", "football", "1A", "2024")).unwrap();

        assert!(delete_permanently(&conn, created.id).unwrap());
        assert!(!delete_permanently(&conn, created.id).unwrap());
    }

    #[test]
    fn test_list_applies_filters() {
        let conn = open();
        insert(&conn, &payload("A", "football", "1A", "2024")).unwrap();
        insert(&conn, &payload("B", "football", "2A", "2024")).unwrap();
        insert(&conn, &payload("C", "football", "1A", "2023")).unwrap();
        insert(&conn, &payload("D", "basketball", "1A", "2024")).unwrap();

        let all_1a = list(&conn, &StatsFilter::for_leaderboard("football", "1A", None)).unwrap();
        let current_1a =
            list(&conn, &StatsFilter::for_leaderboard("football", "1A", Some("2024"))).unwrap();

        let names: Vec<_> = all_1a.iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(current_1a.len(), 1);
        assert_eq!(current_1a[0].player_name, "A");
    }

    #[test]
    fn test_find_by_player_sport_season() {
        let conn = open();
        insert(&conn, &payload("A", "football", "1A", "2024")).unwrap();

        assert!(find_by_player_sport_season(&conn, "A", "football", "2024").unwrap().is_some());
        assert!(find_by_player_sport_season(&conn, "A", "football", "2023").unwrap().is_none());
    }

    #[test]
    fn test_distinct_values() {
        let conn = open();
        insert(&conn, &payload("A", "football", "2A", "2023")).unwrap();
        insert(&conn, &payload("B", "football", "1A", "2024")).unwrap();
        insert(&conn, &payload("C", "basketball", "1A", "2024")).unwrap();
        let hidden = insert(&conn, &payload("D", "wrestling", "1A", "2022")).unwrap();
        deactivate(&conn, hidden.id).unwrap();

        assert_eq!(distinct_sports(&conn).unwrap(), vec!["basketball", "football"]);
        assert_eq!(distinct_seasons(&conn).unwrap(), vec!["2024", "2023"]);
        assert_eq!(distinct_divisions(&conn, "football").unwrap(), vec!["1A", "2A"]);
    }
}
