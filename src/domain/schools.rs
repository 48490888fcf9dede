use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::active_by_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub sports: Vec<String>,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchool {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub sports: Vec<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}
