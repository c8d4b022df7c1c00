// Match handlers - thin HTTP shims that decode the request, call the match
// domain service, and map the outcome to a status code.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::PgPool;
use tracing::info;

use crate::api::error::ApiResult;
use crate::domain;
use crate::models::api::{MatchPayload, MatchResponse};

#[tracing::instrument(skip(pool, payload))]
pub async fn create_match_handler(
    State(pool): State<PgPool>,
    Json(payload): Json<MatchPayload>,
) -> ApiResult<(StatusCode, Json<MatchResponse>)> {
    info!("Processing create match request");

    let created = domain::matches::create_match(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_matches_handler(
    State(pool): State<PgPool>,
) -> ApiResult<Json<Vec<MatchResponse>>> {
    let matches = domain::matches::list_matches(&pool).await?;
    Ok(Json(matches))
}

pub async fn get_match_handler(
    Path(id): Path<i64>,
    State(pool): State<PgPool>,
) -> ApiResult<Json<MatchResponse>> {
    let found = domain::matches::get_match(&pool, id).await?;
    Ok(Json(found))
}

#[tracing::instrument(skip(pool, payload))]
pub async fn update_match_handler(
    Path(id): Path<i64>,
    State(pool): State<PgPool>,
    Json(payload): Json<MatchPayload>,
) -> ApiResult<Json<MatchResponse>> {
    let updated = domain::matches::update_match(&pool, id, payload).await?;
    Ok(Json(updated))
}

pub async fn delete_match_handler(
    Path(id): Path<i64>,
    State(pool): State<PgPool>,
) -> ApiResult<StatusCode> {
    domain::matches::delete_match(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
