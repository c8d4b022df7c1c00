// Odds handlers - thin HTTP shims over the odds domain service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::PgPool;
use tracing::info;

use crate::api::error::ApiResult;
use crate::domain;
use crate::models::api::{OddsPayload, OddsResponse};

#[tracing::instrument(skip(pool, payload))]
pub async fn create_odds_handler(
    State(pool): State<PgPool>,
    Json(payload): Json<OddsPayload>,
) -> ApiResult<(StatusCode, Json<OddsResponse>)> {
    info!("Processing create odds request");

    let created = domain::odds::create_odds(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_odds_handler(
    Path(id): Path<i64>,
    State(pool): State<PgPool>,
) -> ApiResult<Json<OddsResponse>> {
    let found = domain::odds::get_odds(&pool, id).await?;
    Ok(Json(found))
}

pub async fn list_odds_by_match_handler(
    Path(match_id): Path<i64>,
    State(pool): State<PgPool>,
) -> ApiResult<Json<Vec<OddsResponse>>> {
    let odds = domain::odds::list_odds_by_match(&pool, match_id).await?;
    Ok(Json(odds))
}

#[tracing::instrument(skip(pool, payload))]
pub async fn update_odds_handler(
    Path(id): Path<i64>,
    State(pool): State<PgPool>,
    Json(payload): Json<OddsPayload>,
) -> ApiResult<Json<OddsResponse>> {
    let updated = domain::odds::update_odds(&pool, id, payload).await?;
    Ok(Json(updated))
}

pub async fn delete_odds_handler(
    Path(id): Path<i64>,
    State(pool): State<PgPool>,
) -> ApiResult<StatusCode> {
    domain::odds::delete_odds(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
