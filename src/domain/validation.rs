//! Explicit validation of incoming payloads. Every violated constraint is
//! collected before reporting, mirroring the field-error list the wire
//! contract promises. Successful validation yields the typed input the
//! storage gateway works with.

use chrono::{NaiveDate, NaiveTime};

use crate::models::api::{MatchPayload, OddsPayload};
use crate::models::entities::{NewMatch, NewOdds, OddsUpdate, Sport};

use super::DomainError;

pub fn validate_match_payload(payload: &MatchPayload) -> Result<NewMatch, DomainError> {
    let mut violations = Vec::new();

    let description = require_text(&payload.description, "Description is required", &mut violations);
    let match_date = parse_date(&payload.match_date, &mut violations);
    let match_time = parse_time(&payload.match_time, &mut violations);
    let team_a = require_text(&payload.team_a, "Team A is required", &mut violations);
    let team_b = require_text(&payload.team_b, "Team B is required", &mut violations);
    let sport = parse_sport(&payload.sport, &mut violations);

    match (description, match_date, match_time, team_a, team_b, sport) {
        (Some(description), Some(match_date), Some(match_time), Some(team_a), Some(team_b), Some(sport)) => {
            Ok(NewMatch {
                description,
                match_date,
                match_time,
                team_a,
                team_b,
                sport,
            })
        }
        _ => Err(DomainError::Validation(violations.join(", "))),
    }
}

pub fn validate_odds_create(payload: &OddsPayload) -> Result<NewOdds, DomainError> {
    let mut violations = Vec::new();

    let match_id = match payload.match_id {
        Some(id) => Some(id),
        None => {
            violations.push("Match ID is required".to_string());
            None
        }
    };
    let specifier = require_text(&payload.specifier, "Specifier is required", &mut violations);
    let odd = require_positive(payload.odd, &mut violations);

    match (match_id, specifier, odd) {
        (Some(match_id), Some(specifier), Some(odd)) => Ok(NewOdds {
            match_id,
            specifier,
            odd,
        }),
        _ => Err(DomainError::Validation(violations.join(", "))),
    }
}

/// Update variant: the match linkage is immutable, so any `matchId` in the
/// payload is ignored rather than validated.
pub fn validate_odds_update(payload: &OddsPayload) -> Result<OddsUpdate, DomainError> {
    let mut violations = Vec::new();

    let specifier = require_text(&payload.specifier, "Specifier is required", &mut violations);
    let odd = require_positive(payload.odd, &mut violations);

    match (specifier, odd) {
        (Some(specifier), Some(odd)) => Ok(OddsUpdate { specifier, odd }),
        _ => Err(DomainError::Validation(violations.join(", "))),
    }
}

fn require_text(
    value: &Option<String>,
    message: &str,
    violations: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.clone()),
        _ => {
            violations.push(message.to_string());
            None
        }
    }
}

fn require_positive(value: Option<f64>, violations: &mut Vec<String>) -> Option<f64> {
    match value {
        Some(v) if v > 0.0 => Some(v),
        Some(_) => {
            violations.push("Odd must be positive".to_string());
            None
        }
        None => {
            violations.push("Odd is required".to_string());
            None
        }
    }
}

fn parse_date(value: &Option<String>, violations: &mut Vec<String>) -> Option<NaiveDate> {
    match value.as_deref() {
        None => {
            violations.push("Match date is required".to_string());
            None
        }
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(format!("Match date '{}' is not a valid date (YYYY-MM-DD)", raw));
                None
            }
        },
    }
}

fn parse_time(value: &Option<String>, violations: &mut Vec<String>) -> Option<NaiveTime> {
    match value.as_deref() {
        None => {
            violations.push("Match time is required".to_string());
            None
        }
        Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .map_err(|_| {
                violations.push(format!("Match time '{}' is not a valid time (HH:MM)", raw));
            })
            .ok(),
    }
}

fn parse_sport(value: &Option<String>, violations: &mut Vec<String>) -> Option<Sport> {
    match value.as_deref() {
        None => {
            violations.push("Sport is required".to_string());
            None
        }
        Some(raw) => match raw.parse::<Sport>() {
            Ok(sport) => Some(sport),
            Err(_) => {
                violations.push("Sport must be one of FOOTBALL, BASKETBALL".to_string());
                None
            }
        },
    }
}
