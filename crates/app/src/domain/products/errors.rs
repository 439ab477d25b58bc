//! Products service errors.

use std::num::TryFromIntError;

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("product name and price are required")]
    MissingRequiredData,

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Any driver failure. Validation happens before a statement is sent, so
    /// the driver never reports a client mistake.
    #[error("storage error: {0}")]
    Sql(#[from] Error),

    #[error("assigned product id is out of range")]
    IdOutOfRange(#[from] TryFromIntError),
}
