use thiserror::Error;

/// Cart consolidation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Item not found in cart: {0}")]
    ItemNotFound(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}

impl From<CartError> for crate::utils::AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::ItemNotFound(msg) => crate::utils::AppError::NotFound(msg),
            CartError::InvalidQuantity(msg) => crate::utils::AppError::Validation(msg),
        }
    }
}
