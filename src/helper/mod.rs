use thiserror::Error;

pub mod admin_helpers;
pub mod form_helpers;
pub mod public_helpers;
pub mod validation_helpers;

/// Failure of any data-access call: either the pool could not hand out a
/// connection or the statement itself failed. Callers log it and surface a
/// generic notification; nothing is retried.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}
