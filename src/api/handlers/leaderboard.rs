use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{query_error, AppState, LeaderboardParams, LimitParams};
use crate::api::models::MetricCatalogue;
use crate::ranking::MetricKey;
use crate::services::{LeaderboardQuery, LeaderboardService};

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardParams>,
) -> impl IntoResponse {
    let query = LeaderboardQuery {
        sport: params.sport,
        division: params.division,
        season: params.season,
        metric: params.metric,
        limit: params.limit,
    };
    respond(&state, &query)
}

/// Path-style variant: `/api/stats/leaderboard/sport/:sport/division/:division/stat/:stat`.
pub async fn get_stat_leaderboard(
    State(state): State<Arc<AppState>>,
    Path((sport, division, stat)): Path<(String, String, String)>,
    Query(params): Query<LimitParams>,
) -> impl IntoResponse {
    let query = LeaderboardQuery {
        sport,
        division,
        season: params.season,
        metric: stat,
        limit: params.limit,
    };
    respond(&state, &query)
}

fn respond(state: &AppState, query: &LeaderboardQuery) -> axum::response::Response {
    let service = LeaderboardService::new(&state.pool, &state.config.leaderboard);
    match service.build(query) {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn list_metrics() -> impl IntoResponse {
    Json(MetricCatalogue {
        metrics: MetricKey::catalogue().collect(),
    })
}

pub async fn health() -> &'static str {
    "ok"
}
