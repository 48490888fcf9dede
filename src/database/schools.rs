use rusqlite::types::{Type, Value};

use super::crud::{self, Entity, EntityPayload, Scope};
use super::models::SchoolFilter;
use crate::domain::{NewSchool, School};

// The sport list lives in one TEXT column as a JSON array.
impl Entity for School {
    type Payload = NewSchool;
    type Filter = SchoolFilter;

    const TABLE: &'static str = "schools";
    const READ_SCOPE: Scope = Scope::All;

    fn writable_columns() -> Vec<&'static str> {
        vec!["name", "location", "sports", "is_active"]
    }

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        let sports: String = row.get("sports")?;
        let sports = serde_json::from_str(&sports).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
        })?;

        Ok(School {
            id: row.get("id")?,
            name: row.get("name")?,
            location: row.get("location")?,
            sports,
            is_active: row.get("is_active")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl EntityPayload for NewSchool {
    fn sql_values(&self) -> Vec<Value> {
        // A list of strings always serializes.
        let sports = serde_json::to_string(&self.sports).unwrap_or_else(|_| "[]".to_string());
        vec![
            crud::text(&self.name),
            crud::text(&self.location),
            Value::Text(sports),
            Value::from(self.is_active),
        ]
    }

    fn mark_active(&mut self) {
        self.is_active = true;
    }
}
