use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use std::sync::Arc;

use super::{list_response, AppState, SearchParams};
use crate::database::SchoolFilter;
use crate::domain::School;

pub async fn schools_by_sport(
    State(state): State<Arc<AppState>>,
    Path(sport): Path<String>,
) -> Response {
    let filter = SchoolFilter { sport: Some(sport), ..Default::default() };
    list_response(state.records::<School>().list(&filter))
}

pub async fn search_schools(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let filter = SchoolFilter { name: Some(params.name), ..Default::default() };
    list_response(state.records::<School>().list(&filter))
}
