use crate::domain::coffee::CoffeeId;
use crate::domain::customer::CustomerId;
use crate::domain::error_kind::ErrorKind;

// ============================================================================
// Order Validation Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("customer must be a Customer registered in this shop, got {0}")]
    UnknownCustomer(CustomerId),

    #[error("coffee must be a Coffee registered in this shop, got {0}")]
    UnknownCoffee(CoffeeId),

    #[error("Price must be a number, got {0}")]
    PriceNotNumeric(String),

    #[error("Price should fall between {min} and {max}, got {price}")]
    PriceOutOfRange { price: f64, min: f64, max: f64 },
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::UnknownCustomer(_)
            | OrderError::UnknownCoffee(_)
            | OrderError::PriceNotNumeric(_) => ErrorKind::TypeMismatch,
            OrderError::PriceOutOfRange { .. } => ErrorKind::ValueConstraint,
        }
    }
}
