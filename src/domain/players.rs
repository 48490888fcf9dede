use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::active_by_default;

/// A rostered player. Jersey number and grade are free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub number: String,
    pub position: String,
    pub grade: String,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub sport: String,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub number: String,
    pub position: String,
    pub grade: String,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    pub sport: String,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}
