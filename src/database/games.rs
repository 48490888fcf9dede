use rusqlite::types::Value;

use super::crud::{self, Entity, EntityPayload, Scope};
use super::models::GameFilter;
use crate::domain::{Game, NewGame};

impl Entity for Game {
    type Payload = NewGame;
    type Filter = GameFilter;

    const TABLE: &'static str = "games";
    const READ_SCOPE: Scope = Scope::All;

    fn writable_columns() -> Vec<&'static str> {
        vec![
            "home_team",
            "away_team",
            "game_date",
            "game_time",
            "location",
            "sport",
            "notes",
            "is_active",
        ]
    }

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Game {
            id: row.get("id")?,
            home_team: row.get("home_team")?,
            away_team: row.get("away_team")?,
            date: row.get("game_date")?,
            time: row.get("game_time")?,
            location: row.get("location")?,
            sport: row.get("sport")?,
            notes: row.get("notes")?,
            is_active: row.get("is_active")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl EntityPayload for NewGame {
    fn sql_values(&self) -> Vec<Value> {
        vec![
            crud::text(&self.home_team),
            crud::text(&self.away_team),
            Value::Text(self.date.format("%Y-%m-%d").to_string()),
            Value::Text(self.time.format("%H:%M:%S").to_string()),
            crud::text(&self.location),
            crud::text(&self.sport),
            crud::optional_text(&self.notes),
            Value::from(self.is_active),
        ]
    }

    fn mark_active(&mut self) {
        self.is_active = true;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use rusqlite::Connection;

    use super::*;
    use crate::database::crud::RecordFilter;
    use crate::database::setup::ensure_schema;

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    fn fixture(home: &str, away: &str, sport: &str, day: u32) -> NewGame {
        NewGame {
            home_team: home.to_string(),
            away_team: away.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 9, day).unwrap(),
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            location: "Memorial Stadium".to_string(),
            sport: sport.to_string(),
            notes: None,
            is_active: true,
        }
    }

    #[test]
    fn test_date_and_time_round_trip() {
        let conn = open();
        let created: Game = crud::insert(&conn, &fixture("Valley View", "Scranton Prep", "football", 6)).unwrap();

        assert_eq!(created.date, NaiveDate::from_ymd_opt(2024, 9, 6).unwrap());
        assert_eq!(created.time, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert!(created.is_active);
    }

    #[test]
    fn test_filters_by_team_on_either_side() {
        let conn = open();
        crud::insert::<Game>(&conn, &fixture("Valley View", "Scranton Prep", "football", 6)).unwrap();
        crud::insert::<Game>(&conn, &fixture("Abington Heights", "Valley View", "football", 13)).unwrap();
        crud::insert::<Game>(&conn, &fixture("Delaware Valley", "Wallenpaupack", "football", 13)).unwrap();

        let by_team = GameFilter {
            team: Some("valley view".to_string()),
            ..Default::default()
        };
        let by_sport_and_date = GameFilter {
            sport: Some("football".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 9, 13),
            ..Default::default()
        };

        let games: Vec<Game> = crud::list(&conn, &by_team.conditions(), Scope::All).unwrap();
        assert_eq!(games.len(), 2);
        let games: Vec<Game> = crud::list(&conn, &by_sport_and_date.conditions(), Scope::All).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].home_team, "Abington Heights");
    }
}
