//! Match lifecycle: CRUD plus the cascade that keeps odds from outliving
//! their match. Writes run in one transaction per call; reads go straight
//! to the pool.

use sqlx::PgPool;
use tracing::info;

use crate::db::{read_ops, write_ops};
use crate::models::api::{MatchPayload, MatchResponse};
use crate::models::translation;

use super::{validation, DomainError};

/// Create a new match. The odds collection starts empty; odds are attached
/// through the odds operations.
#[tracing::instrument(skip(pool, payload))]
pub async fn create_match(
    pool: &PgPool,
    payload: MatchPayload,
) -> Result<MatchResponse, DomainError> {
    let input = validation::validate_match_payload(&payload)?;

    let mut tx = pool.begin().await?;
    let row = write_ops::insert_match(&mut tx, &input).await?;
    tx.commit().await?;

    info!(match_id = row.id, "Created match");
    Ok(translation::match_to_response(row, Vec::new()))
}

/// Fetch one match with its odds collection eagerly attached.
#[tracing::instrument(skip(pool))]
pub async fn get_match(pool: &PgPool, id: i64) -> Result<MatchResponse, DomainError> {
    let row = read_ops::find_match_by_id(pool, id)
        .await?
        .ok_or(DomainError::NotFound { entity: "Match", id })?;
    let odds = read_ops::find_odds_by_match_id(pool, id).await?;

    Ok(translation::match_to_response(row, odds))
}

/// All matches, each with its odds collection attached.
#[tracing::instrument(skip(pool))]
pub async fn list_matches(pool: &PgPool) -> Result<Vec<MatchResponse>, DomainError> {
    let rows = read_ops::find_all_matches(pool).await?;
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut odds_by_match = read_ops::find_odds_for_matches(pool, &ids).await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let odds = odds_by_match.remove(&row.id).unwrap_or_default();
            translation::match_to_response(row, odds)
        })
        .collect())
}

/// Full-field replace of an existing match; the odds collection is untouched.
#[tracing::instrument(skip(pool, payload))]
pub async fn update_match(
    pool: &PgPool,
    id: i64,
    payload: MatchPayload,
) -> Result<MatchResponse, DomainError> {
    let input = validation::validate_match_payload(&payload)?;

    let mut tx = pool.begin().await?;
    let row = write_ops::update_match(&mut tx, id, &input)
        .await?
        .ok_or(DomainError::NotFound { entity: "Match", id })?;
    tx.commit().await?;

    let odds = read_ops::find_odds_by_match_id(pool, id).await?;
    Ok(translation::match_to_response(row, odds))
}

/// Delete a match together with every odds record it owns, atomically.
#[tracing::instrument(skip(pool))]
pub async fn delete_match(pool: &PgPool, id: i64) -> Result<(), DomainError> {
    let mut tx = pool.begin().await?;
    if !read_ops::match_exists(&mut tx, id).await? {
        return Err(DomainError::NotFound { entity: "Match", id });
    }
    let removed_odds = write_ops::delete_match_cascade(&mut tx, id).await?;
    tx.commit().await?;

    info!(match_id = id, removed_odds, "Deleted match and its odds");
    Ok(())
}
