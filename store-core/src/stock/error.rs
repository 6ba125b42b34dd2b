use crate::db::repository::RepoError;
use thiserror::Error;

/// Stock reconciliation errors
#[derive(Debug, Error)]
pub enum StockError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Concurrent stock update on {0}, retries exhausted")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Repo(#[from] RepoError),
}

impl From<StockError> for crate::utils::AppError {
    fn from(err: StockError) -> Self {
        use crate::utils::AppError;
        match err {
            StockError::ProductNotFound(id) => AppError::NotFound(format!("Product {}", id)),
            StockError::InvalidQuantity(q) => {
                AppError::Validation(format!("Invalid quantity: {}", q))
            }
            StockError::Conflict(id) => {
                AppError::Conflict(format!("Concurrent stock update on {}", id))
            }
            StockError::Repo(e) => AppError::Database(e.to_string()),
        }
    }
}
