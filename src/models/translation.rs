use chrono::{NaiveTime, Timelike};

use crate::models::api::{MatchResponse, OddsResponse};
use crate::models::entities::{MatchRow, OddsRow};

/// Convert a match row and its odds rows into the wire representation.
pub fn match_to_response(row: MatchRow, odds: Vec<OddsRow>) -> MatchResponse {
    MatchResponse {
        id: row.id,
        description: row.description,
        match_date: row.match_date.format("%Y-%m-%d").to_string(),
        match_time: format_match_time(row.match_time),
        team_a: row.team_a,
        team_b: row.team_b,
        sport: row.sport,
        match_odds: odds.into_iter().map(odds_to_response).collect(),
    }
}

pub fn odds_to_response(row: OddsRow) -> OddsResponse {
    OddsResponse {
        id: row.id,
        match_id: row.match_id,
        specifier: row.specifier,
        odd: row.odd,
    }
}

/// ISO local-time rendering: seconds are omitted when zero ("12:00",
/// "18:30:15").
pub fn format_match_time(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}
