use serde::{Deserialize, Serialize};

use crate::models::entities::Sport;

/// Incoming match payload. Every field is optional at the wire level so that
/// missing and malformed values surface as validation errors (HTTP 400)
/// rather than deserialization rejections. A client-supplied `id` or odds
/// collection is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPayload {
    pub description: Option<String>,
    pub match_date: Option<String>,
    pub match_time: Option<String>,
    pub team_a: Option<String>,
    pub team_b: Option<String>,
    pub sport: Option<String>,
}

/// Match representation returned to clients, odds collection attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub id: i64,
    pub description: String,
    pub match_date: String,
    pub match_time: String,
    pub team_a: String,
    pub team_b: String,
    pub sport: Sport,
    pub match_odds: Vec<OddsResponse>,
}

/// Incoming odds payload, shared by create and update. `match_id` is only
/// meaningful on create; updates never re-parent an odds record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsPayload {
    pub match_id: Option<i64>,
    pub specifier: Option<String>,
    pub odd: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsResponse {
    pub id: i64,
    pub match_id: i64,
    pub specifier: String,
    pub odd: f64,
}
