use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use std::sync::Arc;

use super::{list_response, AppState, SearchParams};
use crate::database::PlayerFilter;
use crate::domain::Player;

fn filtered(state: &AppState, filter: PlayerFilter) -> Response {
    list_response(state.records::<Player>().list(&filter))
}

pub async fn players_by_sport(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> Response {
    filtered(&state, PlayerFilter { sport: Some(sport), ..Default::default() })
}

pub async fn players_by_position(
    State(state): State<Arc<AppState>>,
    Path(position): Path<String>,
) -> Response {
    filtered(&state, PlayerFilter { position: Some(position), ..Default::default() })
}

pub async fn players_by_sport_and_position(
    State(state): State<Arc<AppState>>,
    Path((sport, position)): Path<(String, String)>,
) -> Response {
    filtered(
        &state,
        PlayerFilter {
            sport: Some(sport),
            position: Some(position),
            ..Default::default()
        },
    )
}

pub async fn players_by_grade(
    State(state): State<Arc<AppState>>,
    Path(grade): Path<String>,
) -> Response {
    filtered(&state, PlayerFilter { grade: Some(grade), ..Default::default() })
}

pub async fn search_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    filtered(&state, PlayerFilter { name: Some(params.name), ..Default::default() })
}
