use crate::domain::error_kind::ErrorKind;

// ============================================================================
// Coffee Validation Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoffeeError {
    #[error("Name of coffee must be a string, got {0}")]
    NameNotString(&'static str),

    #[error("Name of coffee should be at least {min} characters long, got {len}")]
    NameTooShort { len: usize, min: usize },
}

impl CoffeeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoffeeError::NameNotString(_) => ErrorKind::TypeMismatch,
            CoffeeError::NameTooShort { .. } => ErrorKind::ValueConstraint,
        }
    }
}
