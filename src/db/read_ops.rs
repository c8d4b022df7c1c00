use sqlx::{PgPool, Postgres, Row, Transaction};
use std::collections::HashMap;
use tracing::debug;

use crate::db::errors::Result;
use crate::models::entities::{MatchRow, OddsRow};

/// Look up a single match. Returns None when the id is unknown.
pub async fn find_match_by_id(pool: &PgPool, id: i64) -> Result<Option<MatchRow>> {
    debug!("Loading match {}", id);

    let row = sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT id, description, match_date, match_time, team_a, team_b, sport
        FROM matches
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// All matches, id ascending (store-default ordering).
pub async fn find_all_matches(pool: &PgPool) -> Result<Vec<MatchRow>> {
    let rows = sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT id, description, match_date, match_time, team_a, team_b, sport
        FROM matches
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    debug!("Loaded {} matches", rows.len());
    Ok(rows)
}

pub async fn find_odds_by_id(pool: &PgPool, id: i64) -> Result<Option<OddsRow>> {
    let row = sqlx::query_as::<_, OddsRow>(
        "SELECT id, match_id, specifier, odd FROM match_odds WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// All odds owned by one match. Empty when the match has none (or does not
/// exist; the match itself is not looked up here).
pub async fn find_odds_by_match_id(pool: &PgPool, match_id: i64) -> Result<Vec<OddsRow>> {
    let rows = sqlx::query_as::<_, OddsRow>(
        "SELECT id, match_id, specifier, odd FROM match_odds WHERE match_id = $1 ORDER BY id",
    )
    .bind(match_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Odds for a set of matches in one round trip, grouped by owning match id.
pub async fn find_odds_for_matches(
    pool: &PgPool,
    match_ids: &[i64],
) -> Result<HashMap<i64, Vec<OddsRow>>> {
    if match_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, OddsRow>(
        "SELECT id, match_id, specifier, odd FROM match_odds WHERE match_id = ANY($1) ORDER BY id",
    )
    .bind(match_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i64, Vec<OddsRow>> = HashMap::new();
    for row in rows {
        grouped.entry(row.match_id).or_default().push(row);
    }

    Ok(grouped)
}

/// Existence check used inside write transactions, so the check and the
/// write it guards see the same snapshot.
pub async fn match_exists(tx: &mut Transaction<'_, Postgres>, id: i64) -> Result<bool> {
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM matches WHERE id = $1)")
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;

    Ok(row.get::<bool, _>(0))
}
