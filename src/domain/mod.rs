// Domain layer - business logic with no HTTP concerns.
// Each operation receives the storage gateway (the connection pool) as an
// argument and runs inside at most one transaction.

pub mod matches;
pub mod odds;
pub mod validation;


use crate::db::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<DatabaseError> for DomainError {
    fn from(e: DatabaseError) -> Self {
        DomainError::Database(e.to_string())
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(e: sqlx::Error) -> Self {
        DomainError::Database(e.to_string())
    }
}
