use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{deletion_response, query_error, AppState, StatsParams};
use crate::domain::NewStats;

pub async fn list_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> impl IntoResponse {
    match state.stats.list(&params.into()) {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.stats.get(id) {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn get_player_season_stats(
    State(state): State<Arc<AppState>>,
    Path((player, sport, season)): Path<(String, String, String)>,
) -> impl IntoResponse {
    match state.stats.get_by_player_sport_season(&player, &sport, &season) {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn create_stats(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewStats>,
) -> impl IntoResponse {
    match state.stats.create(&payload) {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn update_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<NewStats>,
) -> impl IntoResponse {
    match state.stats.update(id, &payload) {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn delete_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    deletion_response(state.stats.soft_delete(id))
}

pub async fn delete_stats_permanently(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    deletion_response(state.stats.hard_delete(id))
}

pub async fn list_sports(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.stats.sports() {
        Ok(sports) => Json(sports).into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn list_seasons(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.stats.seasons() {
        Ok(seasons) => Json(seasons).into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn list_divisions(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> impl IntoResponse {
    match state.stats.divisions(&sport) {
        Ok(divisions) => Json(divisions).into_response(),
        Err(e) => query_error(e),
    }
}
