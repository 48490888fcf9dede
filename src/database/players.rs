use rusqlite::types::Value;

use super::crud::{self, Entity, EntityPayload, Scope};
use super::models::PlayerFilter;
use crate::domain::{NewPlayer, Player};

impl Entity for Player {
    type Payload = NewPlayer;
    type Filter = PlayerFilter;

    const TABLE: &'static str = "players";
    const READ_SCOPE: Scope = Scope::All;

    fn writable_columns() -> Vec<&'static str> {
        vec![
            "name", "number", "position", "grade", "height", "weight", "sport", "is_active",
        ]
    }

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Player {
            id: row.get("id")?,
            name: row.get("name")?,
            number: row.get("number")?,
            position: row.get("position")?,
            grade: row.get("grade")?,
            height: row.get("height")?,
            weight: row.get("weight")?,
            sport: row.get("sport")?,
            is_active: row.get("is_active")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl EntityPayload for NewPlayer {
    fn sql_values(&self) -> Vec<Value> {
        vec![
            crud::text(&self.name),
            crud::text(&self.number),
            crud::text(&self.position),
            crud::text(&self.grade),
            crud::optional_text(&self.height),
            crud::optional_text(&self.weight),
            crud::text(&self.sport),
            Value::from(self.is_active),
        ]
    }

    fn mark_active(&mut self) {
        self.is_active = true;
    }
}
