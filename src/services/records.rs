use std::marker::PhantomData;

use anyhow::Result;
use log::info;

use crate::database::crud::{self, Entity, EntityPayload, RecordFilter, Scope};
use crate::database::{self, DbPool};
use crate::domain::{Game, Player, School, Team};

pub type GameService = RecordService<Game>;
pub type PlayerService = RecordService<Player>;
pub type SchoolService = RecordService<School>;
pub type TeamService = RecordService<Team>;

/// CRUD over one table. Reads and updates see rows in `E::READ_SCOPE`;
/// `active` always narrows to active rows.
pub struct RecordService<E> {
    pool: DbPool,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for RecordService<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<E> RecordService<E> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            entity: PhantomData,
        }
    }
}

impl<E: Entity> RecordService<E> {
    pub fn list(&self, filter: &E::Filter) -> Result<Vec<E>> {
        let conn = database::get_connection(&self.pool)?;
        crud::list(&conn, &filter.conditions(), E::READ_SCOPE)
    }

    pub fn active(&self) -> Result<Vec<E>> {
        let conn = database::get_connection(&self.pool)?;
        crud::list(&conn, &[], Scope::Active)
    }

    pub fn get(&self, id: i64) -> Result<Option<E>> {
        let conn = database::get_connection(&self.pool)?;
        crud::find_by_id(&conn, id, E::READ_SCOPE)
    }

    /// New rows always start active, whatever the payload says.
    pub fn create(&self, mut payload: E::Payload) -> Result<E> {
        payload.mark_active();
        let conn = database::get_connection(&self.pool)?;
        let created = crud::insert(&conn, &payload)?;
        info!("Created row in {}", E::TABLE);
        Ok(created)
    }

    pub fn update(&self, id: i64, payload: &E::Payload) -> Result<Option<E>> {
        let conn = database::get_connection(&self.pool)?;
        crud::update(&conn, id, payload, E::READ_SCOPE)
    }

    pub fn soft_delete(&self, id: i64) -> Result<bool> {
        let conn = database::get_connection(&self.pool)?;
        let deleted = crud::deactivate::<E>(&conn, id)?;
        if deleted {
            info!("Deactivated {} {}", E::TABLE, id);
        }
        Ok(deleted)
    }

    pub fn hard_delete(&self, id: i64) -> Result<bool> {
        let conn = database::get_connection(&self.pool)?;
        let deleted = crud::delete_permanently::<E>(&conn, id)?;
        if deleted {
            info!("Permanently deleted {} {}", E::TABLE, id);
        }
        Ok(deleted)
    }
}
