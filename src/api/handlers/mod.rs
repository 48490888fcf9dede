use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::database::{DbPool, Entity, StatsFilter};
use crate::services::{RecordService, StatsService};

pub mod games;
pub mod leaderboard;
pub mod players;
pub mod records;
pub mod schools;
pub mod stats;

pub struct AppState {
    pub pool: DbPool,
    pub stats: StatsService,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig) -> Self {
        Self {
            stats: StatsService::new(pool.clone()),
            pool,
            config,
        }
    }

    pub fn records<E: Entity>(&self) -> RecordService<E> {
        RecordService::new(self.pool.clone())
    }
}

#[derive(Deserialize)]
pub struct StatsParams {
    pub sport: Option<String>,
    pub division: Option<String>,
    pub season: Option<String>,
    pub team: Option<String>,
    pub player: Option<String>,
}

impl From<StatsParams> for StatsFilter {
    fn from(params: StatsParams) -> Self {
        StatsFilter {
            sport: params.sport,
            division: params.division,
            season: params.season,
            team_name: params.team,
            player_name: params.player,
        }
    }
}

#[derive(Deserialize)]
pub struct LeaderboardParams {
    pub sport: String,
    pub division: String,
    pub metric: String,
    pub season: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct LimitParams {
    pub season: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: String,
}

pub(crate) fn list_response<T: Serialize>(result: anyhow::Result<Vec<T>>) -> Response {
    match result {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => query_error(e),
    }
}

pub(crate) fn found_response<T: Serialize>(result: anyhow::Result<Option<T>>) -> Response {
    match result {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}

pub(crate) fn deletion_response(result: anyhow::Result<bool>) -> Response {
    match result {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}

pub(crate) fn query_error(e: anyhow::Error) -> Response {
    log::error!("Query failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
}
