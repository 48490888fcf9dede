use axum::{
    extract::{Path, State},
    response::Response,
};
use chrono::NaiveDate;
use std::sync::Arc;

use super::{list_response, AppState};
use crate::database::GameFilter;
use crate::domain::Game;

fn filtered(state: &AppState, filter: GameFilter) -> Response {
    list_response(state.records::<Game>().list(&filter))
}

pub async fn games_by_sport(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> Response {
    filtered(&state, GameFilter { sport: Some(sport), ..Default::default() })
}

/// `date` is `YYYY-MM-DD`; anything else is rejected with 400.
pub async fn games_by_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<NaiveDate>,
) -> Response {
    filtered(&state, GameFilter { date: Some(date), ..Default::default() })
}

pub async fn games_by_sport_and_date(
    State(state): State<Arc<AppState>>,
    Path((sport, date)): Path<(String, NaiveDate)>,
) -> Response {
    filtered(
        &state,
        GameFilter {
            sport: Some(sport),
            date: Some(date),
            ..Default::default()
        },
    )
}

pub async fn games_by_team(
    State(state): State<Arc<AppState>>,
    Path(team): Path<String>,
) -> Response {
    filtered(&state, GameFilter { team: Some(team), ..Default::default() })
}
