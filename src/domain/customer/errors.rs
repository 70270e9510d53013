use crate::domain::error_kind::ErrorKind;

// ============================================================================
// Customer Validation Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerError {
    #[error("Name of the customer must be a string, got {0}")]
    NameNotString(&'static str),

    #[error("Name of the customer should be between {min} and {max} characters long, got {len}")]
    NameLength { len: usize, min: usize, max: usize },
}

impl CustomerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CustomerError::NameNotString(_) => ErrorKind::TypeMismatch,
            CustomerError::NameLength { .. } => ErrorKind::ValueConstraint,
        }
    }
}
