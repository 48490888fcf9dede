use chrono::NaiveDateTime;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// Declares the numeric stat columns once and derives the struct, its
/// column list and the SQL conversions from that single list.
macro_rules! stat_line {
    ($( $field:ident : $ty:ty ),* $(,)?) => {
        /// Every optional numeric column of a stats row.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct StatLine {
            $( pub $field: Option<$ty>, )*
        }

        impl StatLine {
            pub const COLUMNS: &'static [&'static str] = &[$( stringify!($field) ),*];

            pub fn to_sql_values(&self) -> Vec<Value> {
                vec![$( self.$field.map(Value::from).unwrap_or(Value::Null) ),*]
            }

            pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
                Ok(Self {
                    $( $field: row.get(stringify!($field))?, )*
                })
            }
        }
    };
}

stat_line! {
    // Football
    passing_yards: i32,
    passing_touchdowns: i32,
    rushing_yards: i32,
    rushing_touchdowns: i32,
    receiving_yards: i32,
    receiving_touchdowns: i32,
    tackles: i32,
    interceptions: i32,
    sacks: i32,
    // Basketball
    points: i32,
    rebounds: i32,
    assists: i32,
    steals: i32,
    blocks: i32,
    field_goals_made: i32,
    field_goals_attempted: i32,
    three_pointers_made: i32,
    three_pointers_attempted: i32,
    free_throws_made: i32,
    free_throws_attempted: i32,
    // Baseball / softball
    batting_average: f64,
    hits: i32,
    runs: i32,
    rbis: i32,
    home_runs: i32,
    stolen_bases: i32,
    innings_pitched: f64,
    earned_run_average: f64,
    strikeouts: i32,
    wins: i32,
    losses: i32,
    // Soccer
    goals: i32,
    assists_soccer: i32,
    saves: i32,
    shutouts: i32,
    // General
    games_played: i32,
    minutes_played: i32,
}

/// One player's stats for a single sport, division and season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRecord {
    pub id: i64,
    pub player_name: String,
    pub team_name: String,
    pub school_name: String,
    pub sport: String,
    pub division: String,
    pub season: String,
    #[serde(flatten)]
    pub line: StatLine,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Request body for creating or replacing a stats row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStats {
    pub player_name: String,
    pub team_name: String,
    pub school_name: String,
    pub sport: String,
    pub division: String,
    pub season: String,
    #[serde(flatten)]
    pub line: StatLine,
}

impl NewStats {
    pub fn identity_values(&self) -> [&str; 6] {
        [
            self.player_name.as_str(),
            self.team_name.as_str(),
            self.school_name.as_str(),
            self.sport.as_str(),
            self.division.as_str(),
            self.season.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_declaration_order() {
        assert_eq!(StatLine::COLUMNS.len(), 37);
        assert_eq!(StatLine::COLUMNS[0], "passing_yards");
        assert_eq!(StatLine::COLUMNS[36], "minutes_played");
    }

    #[test]
    fn test_sql_values_keep_nulls() {
        let line = StatLine {
            goals: Some(4),
            batting_average: Some(0.312),
            ..Default::default()
        };

        let values = line.to_sql_values();
        let goals_idx = StatLine::COLUMNS.iter().position(|c| *c == "goals").unwrap();
        let avg_idx = StatLine::COLUMNS.iter().position(|c| *c == "batting_average").unwrap();

        assert_eq!(values.len(), StatLine::COLUMNS.len());
        assert_eq!(values[goals_idx], Value::Integer(4));
        assert_eq!(values[avg_idx], Value::Real(0.312));
        assert_eq!(values[0], Value::Null);
    }

    #[test]
    fn test_payload_accepts_camel_case_and_missing_stats() {
        let json = r#"{
            "playerName": "Sam Ortiz",
            "teamName": "Wildcats",
            "schoolName": "Valley View",
            "sport": "boys-soccer",
            "division": "2A",
            "season": "2024",
            "goals": 11,
            "assistsSoccer": 6
        }"#;

        let payload: NewStats = serde_json::from_str(json).unwrap();

        assert_eq!(payload.line.goals, Some(11));
        assert_eq!(payload.line.assists_soccer, Some(6));
        assert_eq!(payload.line.passing_yards, None);
    }
}
