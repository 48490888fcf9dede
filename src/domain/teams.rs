use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::active_by_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub team_name: String,
    pub school_name: String,
    pub mascot: Option<String>,
    pub division: Option<String>,
    pub conference: Option<String>,
    pub home_field: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Optional fields may be omitted from the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub team_name: String,
    pub school_name: String,
    #[serde(default)]
    pub mascot: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub home_field: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}
