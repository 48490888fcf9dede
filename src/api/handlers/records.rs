//! Handlers shared by every table served through `RecordService`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use super::{deletion_response, found_response, list_response, query_error, AppState};
use crate::database::Entity;

pub async fn list_records<E>(State(state): State<Arc<AppState>>) -> Response
where
    E: Entity + Serialize + Send + 'static,
{
    list_response(state.records::<E>().list(&E::Filter::default()))
}

pub async fn list_active_records<E>(State(state): State<Arc<AppState>>) -> Response
where
    E: Entity + Serialize + Send + 'static,
{
    list_response(state.records::<E>().active())
}

pub async fn get_record<E>(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response
where
    E: Entity + Serialize + Send + 'static,
{
    found_response(state.records::<E>().get(id))
}

pub async fn create_record<E>(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<E::Payload>,
) -> Response
where
    E: Entity + Serialize + Send + 'static,
    E::Payload: DeserializeOwned + Send,
{
    match state.records::<E>().create(payload) {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e) => query_error(e),
    }
}

pub async fn update_record<E>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<E::Payload>,
) -> Response
where
    E: Entity + Serialize + Send + 'static,
    E::Payload: DeserializeOwned + Send,
{
    found_response(state.records::<E>().update(id, &payload))
}

pub async fn soft_delete_record<E>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Response
where
    E: Entity + Send + 'static,
{
    deletion_response(state.records::<E>().soft_delete(id))
}

pub async fn hard_delete_record<E>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Response
where
    E: Entity + Send + 'static,
{
    deletion_response(state.records::<E>().hard_delete(id))
}
