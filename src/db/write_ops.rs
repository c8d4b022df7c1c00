use sqlx::{Postgres, Transaction};
use tracing::{debug, info};

use crate::db::errors::Result;
use crate::models::entities::{MatchRow, NewMatch, NewOdds, OddsRow, OddsUpdate};

/// Insert a match, returning the stored row with its assigned id.
pub async fn insert_match(
    tx: &mut Transaction<'_, Postgres>,
    input: &NewMatch,
) -> Result<MatchRow> {
    debug!("Inserting match '{}'", input.description);

    let row = sqlx::query_as::<_, MatchRow>(
        r#"
        INSERT INTO matches (description, match_date, match_time, team_a, team_b, sport)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, description, match_date, match_time, team_a, team_b, sport
        "#,
    )
    .bind(&input.description)
    .bind(input.match_date)
    .bind(input.match_time)
    .bind(&input.team_a)
    .bind(&input.team_b)
    .bind(input.sport)
    .fetch_one(&mut **tx)
    .await?;

    info!("Inserted match with ID: {}", row.id);
    Ok(row)
}

/// Full-field replace of a match. Returns None when the id is unknown.
/// The odds collection is untouched.
pub async fn update_match(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
    input: &NewMatch,
) -> Result<Option<MatchRow>> {
    let row = sqlx::query_as::<_, MatchRow>(
        r#"
        UPDATE matches
        SET description = $2,
            match_date = $3,
            match_time = $4,
            team_a = $5,
            team_b = $6,
            sport = $7
        WHERE id = $1
        RETURNING id, description, match_date, match_time, team_a, team_b, sport
        "#,
    )
    .bind(id)
    .bind(&input.description)
    .bind(input.match_date)
    .bind(input.match_time)
    .bind(&input.team_a)
    .bind(&input.team_b)
    .bind(input.sport)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row)
}

/// Remove a match and every odds record it owns as one unit. The odds are
/// deleted explicitly so the removal count is visible to the caller; the
/// FK's ON DELETE CASCADE remains as a schema-level backstop. Returns the
/// number of odds rows removed.
pub async fn delete_match_cascade(tx: &mut Transaction<'_, Postgres>, id: i64) -> Result<u64> {
    let odds_result = sqlx::query("DELETE FROM match_odds WHERE match_id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    let removed = odds_result.rows_affected();
    debug!("Deleted match {} and {} owned odds", id, removed);
    Ok(removed)
}

/// Insert an odds record linked to an existing match.
pub async fn insert_odds(tx: &mut Transaction<'_, Postgres>, input: &NewOdds) -> Result<OddsRow> {
    let row = sqlx::query_as::<_, OddsRow>(
        r#"
        INSERT INTO match_odds (match_id, specifier, odd)
        VALUES ($1, $2, $3)
        RETURNING id, match_id, specifier, odd
        "#,
    )
    .bind(input.match_id)
    .bind(&input.specifier)
    .bind(input.odd)
    .fetch_one(&mut **tx)
    .await?;

    info!("Inserted odds with ID: {} for match {}", row.id, row.match_id);
    Ok(row)
}

/// Replace specifier and odd on an existing record; the match linkage never
/// changes. Returns None when the id is unknown.
pub async fn update_odds(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
    input: &OddsUpdate,
) -> Result<Option<OddsRow>> {
    let row = sqlx::query_as::<_, OddsRow>(
        r#"
        UPDATE match_odds
        SET specifier = $2, odd = $3
        WHERE id = $1
        RETURNING id, match_id, specifier, odd
        "#,
    )
    .bind(id)
    .bind(&input.specifier)
    .bind(input.odd)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row)
}

/// Returns false when no odds row had the given id.
pub async fn delete_odds(tx: &mut Transaction<'_, Postgres>, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM match_odds WHERE id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    Ok(result.rows_affected() > 0)
}
