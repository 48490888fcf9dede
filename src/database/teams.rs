use rusqlite::types::Value;

use super::crud::{self, Entity, EntityPayload, Scope};
use super::models::TeamFilter;
use crate::domain::{NewTeam, Team};

impl Entity for Team {
    type Payload = NewTeam;
    type Filter = TeamFilter;

    const TABLE: &'static str = "teams";
    const READ_SCOPE: Scope = Scope::All;

    fn writable_columns() -> Vec<&'static str> {
        vec![
            "team_name",
            "school_name",
            "mascot",
            "division",
            "conference",
            "home_field",
            "city",
            "state",
            "is_active",
        ]
    }

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Team {
            id: row.get("id")?,
            team_name: row.get("team_name")?,
            school_name: row.get("school_name")?,
            mascot: row.get("mascot")?,
            division: row.get("division")?,
            conference: row.get("conference")?,
            home_field: row.get("home_field")?,
            city: row.get("city")?,
            state: row.get("state")?,
            is_active: row.get("is_active")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl EntityPayload for NewTeam {
    fn sql_values(&self) -> Vec<Value> {
        vec![
            crud::text(&self.team_name),
            crud::text(&self.school_name),
            crud::optional_text(&self.mascot),
            crud::optional_text(&self.division),
            crud::optional_text(&self.conference),
            crud::optional_text(&self.home_field),
            crud::optional_text(&self.city),
            crud::optional_text(&self.state),
            Value::from(self.is_active),
        ]
    }

    fn mark_active(&mut self) {
        self.is_active = true;
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;
    use crate::database::setup::ensure_schema;

    #[test]
    fn test_update_can_clear_optional_fields() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        let mut team = NewTeam {
            team_name: "Cougars".to_string(),
            school_name: "Valley View".to_string(),
            mascot: Some("Cougar".to_string()),
            division: Some("3A".to_string()),
            conference: None,
            home_field: None,
            city: Some("Archbald".to_string()),
            state: Some("PA".to_string()),
            is_active: true,
        };
        let created: Team = crud::insert(&conn, &team).unwrap();

        team.mascot = None;
        team.is_active = false;
        let updated: Team = crud::update(&conn, created.id, &team, Scope::All).unwrap().unwrap();

        assert_eq!(updated.mascot, None);
        assert_eq!(updated.city.as_deref(), Some("Archbald"));
        assert!(!updated.is_active);
    }
}
