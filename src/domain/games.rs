use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::active_by_default;

/// A scheduled broadcast game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub sport: String,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub sport: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}
