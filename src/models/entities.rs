use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

/// Sport a match is played in, stored as the `sport` enum type in Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sport", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Sport {
    Football,
    Basketball,
}

impl Sport {
    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Basketball => "Basketball",
        }
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOOTBALL" => Ok(Sport::Football),
            "BASKETBALL" => Ok(Sport::Basketball),
            other => Err(format!("unknown sport: {}", other)),
        }
    }
}

/// matches table
#[derive(Debug, Clone, FromRow)]
pub struct MatchRow {
    pub id: i64,
    pub description: String,
    pub match_date: NaiveDate,
    pub match_time: NaiveTime,
    pub team_a: String,
    pub team_b: String,
    pub sport: Sport,
}

/// match_odds table
#[derive(Debug, Clone, FromRow)]
pub struct OddsRow {
    pub id: i64,
    pub match_id: i64,
    pub specifier: String,
    pub odd: f64,
}

/// Validated input for creating or fully replacing a match.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub description: String,
    pub match_date: NaiveDate,
    pub match_time: NaiveTime,
    pub team_a: String,
    pub team_b: String,
    pub sport: Sport,
}

/// Validated input for creating an odds record against an existing match.
#[derive(Debug, Clone)]
pub struct NewOdds {
    pub match_id: i64,
    pub specifier: String,
    pub odd: f64,
}

/// Validated input for replacing the mutable fields of an odds record.
/// The match linkage is immutable after creation and never part of an update.
#[derive(Debug, Clone)]
pub struct OddsUpdate {
    pub specifier: String,
    pub odd: f64,
}
