use chrono::NaiveDate;
use rusqlite::types::Value;

use super::crud::{Condition, RecordFilter};

/// Equality filters for listing active stats rows. `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct StatsFilter {
    pub sport: Option<String>,
    pub division: Option<String>,
    pub season: Option<String>,
    pub team_name: Option<String>,
    pub player_name: Option<String>,
}

impl StatsFilter {
    pub fn for_leaderboard(sport: &str, division: &str, season: Option<&str>) -> Self {
        Self {
            sport: Some(sport.to_string()),
            division: Some(division.to_string()),
            season: season.map(str::to_string),
            ..Default::default()
        }
    }
}

impl RecordFilter for StatsFilter {
    fn conditions(&self) -> Vec<Condition> {
        equalities([
            ("sport", &self.sport),
            ("division", &self.division),
            ("season", &self.season),
            ("team_name", &self.team_name),
            ("player_name", &self.player_name),
        ])
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    pub sport: Option<String>,
    pub date: Option<NaiveDate>,
    /// Matches either side of the fixture, case-insensitively.
    pub team: Option<String>,
}

impl RecordFilter for GameFilter {
    fn conditions(&self) -> Vec<Condition> {
        let mut conditions = equalities([("sport", &self.sport)]);
        if let Some(date) = self.date {
            conditions.push(Condition::Equals(
                "game_date",
                Value::Text(date.format("%Y-%m-%d").to_string()),
            ));
        }
        if let Some(team) = &self.team {
            conditions.push(Condition::Contains(&["home_team", "away_team"], team.clone()));
        }
        conditions
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub sport: Option<String>,
    pub position: Option<String>,
    pub grade: Option<String>,
    /// Case-insensitive substring of the player's name.
    pub name: Option<String>,
}

impl RecordFilter for PlayerFilter {
    fn conditions(&self) -> Vec<Condition> {
        let mut conditions = equalities([
            ("sport", &self.sport),
            ("position", &self.position),
            ("grade", &self.grade),
        ]);
        if let Some(name) = &self.name {
            conditions.push(Condition::Contains(&["name"], name.clone()));
        }
        conditions
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchoolFilter {
    /// Schools whose sport list includes this one exactly.
    pub sport: Option<String>,
    pub name: Option<String>,
}

impl RecordFilter for SchoolFilter {
    fn conditions(&self) -> Vec<Condition> {
        let mut conditions = Vec::new();
        if let Some(sport) = &self.sport {
            conditions.push(Condition::JsonArrayContains("sports", sport.clone()));
        }
        if let Some(name) = &self.name {
            conditions.push(Condition::Contains(&["name"], name.clone()));
        }
        conditions
    }
}

/// Teams are only ever listed whole.
#[derive(Debug, Clone, Default)]
pub struct TeamFilter;

impl RecordFilter for TeamFilter {
    fn conditions(&self) -> Vec<Condition> {
        Vec::new()
    }
}

fn equalities<const N: usize>(pairs: [(&'static str, &Option<String>); N]) -> Vec<Condition> {
    pairs
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| Condition::equals(column, v)))
        .collect()
}
