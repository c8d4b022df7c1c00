pub mod api;
pub mod db;
pub mod domain;
pub mod models;

// Re-export commonly used types
pub use db::{create_pool, health_check, DatabaseError};
pub use domain::DomainError;
pub use models::{MatchPayload, MatchResponse, OddsPayload, OddsResponse, Sport};
