use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::config::LedgerConfig;
use crate::domain::error_kind::json_type_name;
use crate::registry::core::{EntityId, RowKey};
use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Handle to a customer registered in a shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(RowKey);

impl EntityId for CustomerId {
    fn from_key(key: RowKey) -> Self {
        Self(key)
    }

    fn key(&self) -> RowKey {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer#{}", self.0.index)
    }
}

/// Validated customer name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Length is counted in characters, not bytes
    pub fn new(name: impl Into<String>, config: &LedgerConfig) -> Result<Self, CustomerError> {
        let name = name.into();
        let len = name.chars().count();
        if !config.customer_name_len.contains(&len) {
            return Err(CustomerError::NameLength {
                len,
                min: *config.customer_name_len.start(),
                max: *config.customer_name_len.end(),
            });
        }
        Ok(Self(name))
    }

    pub fn from_value(value: &Value, config: &LedgerConfig) -> Result<Self, CustomerError> {
        match value {
            Value::String(name) => Self::new(name.as_str(), config),
            other => Err(CustomerError::NameNotString(json_type_name(other))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error_kind::ErrorKind;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_valid_name() {
        let name = CustomerName::new("Jane", &LedgerConfig::default()).unwrap();
        assert_eq!(name.as_str(), "Jane");
        assert_eq!(name.to_string(), "Jane");
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let config = LedgerConfig::default();
        assert!(CustomerName::new("J", &config).is_ok());
        assert!(CustomerName::new("A".repeat(15), &config).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let result = CustomerName::new("", &LedgerConfig::default());
        assert!(matches!(result, Err(CustomerError::NameLength { len: 0, min: 1, max: 15 })));
    }

    #[test]
    fn test_too_long_name_fails() {
        let err = CustomerName::new("Maximilian Alexander", &LedgerConfig::default()).unwrap_err();
        assert!(matches!(err, CustomerError::NameLength { len: 20, .. }));
        assert_eq!(err.kind(), ErrorKind::ValueConstraint);
    }

    #[test]
    fn test_length_counts_characters() {
        // 15 characters, 17 bytes
        let name = "Zoë Brontë-Lowe";
        assert_eq!(name.chars().count(), 15);
        assert!(CustomerName::new(name, &LedgerConfig::default()).is_ok());
    }

    #[test]
    fn test_non_string_value_is_type_error() {
        let config = LedgerConfig::default();
        for value in [json!(42), json!(null), json!(["Jane"]), json!({"name": "Jane"})] {
            let err = CustomerName::from_value(&value, &config).unwrap_err();
            assert!(matches!(err, CustomerError::NameNotString(_)));
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn test_string_value_is_validated() {
        let config = LedgerConfig::default();
        assert_eq!(
            CustomerName::from_value(&json!("Elli"), &config).unwrap().as_str(),
            "Elli"
        );
        assert!(matches!(
            CustomerName::from_value(&json!(""), &config),
            Err(CustomerError::NameLength { .. })
        ));
    }

    #[test]
    fn test_customer_id_display() {
        let id = CustomerId::from_key(RowKey { registry: uuid::Uuid::nil(), index: 3 });
        assert_eq!(id.to_string(), "customer#3");
    }

    proptest! {
        #[test]
        fn prop_valid_names_round_trip(name in "[A-Za-z ]{1,15}") {
            let parsed = CustomerName::new(name.clone(), &LedgerConfig::default()).unwrap();
            prop_assert_eq!(parsed.as_str(), name.as_str());
        }

        #[test]
        fn prop_long_names_are_value_errors(name in "[A-Za-z]{16,40}") {
            let err = CustomerName::new(name, &LedgerConfig::default()).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::ValueConstraint);
        }
    }
}
