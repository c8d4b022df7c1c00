//! Odds lifecycle independent of the owning match: create against an
//! existing match, read, list by match, replace, delete.

use sqlx::PgPool;
use tracing::info;

use crate::db::{read_ops, write_ops};
use crate::models::api::{OddsPayload, OddsResponse};
use crate::models::translation;

use super::{validation, DomainError};

/// Create an odds record. The referenced match must exist; the check runs
/// in the same transaction as the insert.
#[tracing::instrument(skip(pool, payload))]
pub async fn create_odds(pool: &PgPool, payload: OddsPayload) -> Result<OddsResponse, DomainError> {
    let input = validation::validate_odds_create(&payload)?;

    let mut tx = pool.begin().await?;
    if !read_ops::match_exists(&mut tx, input.match_id).await? {
        return Err(DomainError::NotFound {
            entity: "Match",
            id: input.match_id,
        });
    }
    let row = write_ops::insert_odds(&mut tx, &input).await?;
    tx.commit().await?;

    info!(odds_id = row.id, match_id = row.match_id, "Created odds");
    Ok(translation::odds_to_response(row))
}

#[tracing::instrument(skip(pool))]
pub async fn get_odds(pool: &PgPool, id: i64) -> Result<OddsResponse, DomainError> {
    let row = read_ops::find_odds_by_id(pool, id)
        .await?
        .ok_or(DomainError::NotFound {
            entity: "MatchOdds",
            id,
        })?;

    Ok(translation::odds_to_response(row))
}

/// All odds for a match, empty when none exist. The match itself is not
/// looked up, so an unknown match id also yields an empty list.
#[tracing::instrument(skip(pool))]
pub async fn list_odds_by_match(
    pool: &PgPool,
    match_id: i64,
) -> Result<Vec<OddsResponse>, DomainError> {
    let rows = read_ops::find_odds_by_match_id(pool, match_id).await?;

    Ok(rows
        .into_iter()
        .map(translation::odds_to_response)
        .collect())
}

/// Replace specifier and odd on an existing record. The match linkage is
/// never altered.
#[tracing::instrument(skip(pool, payload))]
pub async fn update_odds(
    pool: &PgPool,
    id: i64,
    payload: OddsPayload,
) -> Result<OddsResponse, DomainError> {
    let input = validation::validate_odds_update(&payload)?;

    let mut tx = pool.begin().await?;
    let row = write_ops::update_odds(&mut tx, id, &input)
        .await?
        .ok_or(DomainError::NotFound {
            entity: "MatchOdds",
            id,
        })?;
    tx.commit().await?;

    Ok(translation::odds_to_response(row))
}

#[tracing::instrument(skip(pool))]
pub async fn delete_odds(pool: &PgPool, id: i64) -> Result<(), DomainError> {
    let mut tx = pool.begin().await?;
    if !write_ops::delete_odds(&mut tx, id).await? {
        return Err(DomainError::NotFound {
            entity: "MatchOdds",
            id,
        });
    }
    tx.commit().await?;

    info!(odds_id = id, "Deleted odds");
    Ok(())
}
