pub mod api;
pub mod entities;
pub mod translation;


pub use api::{MatchPayload, MatchResponse, OddsPayload, OddsResponse};
pub use entities::{MatchRow, NewMatch, NewOdds, OddsRow, OddsUpdate, Sport};
