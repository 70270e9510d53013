use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::config::LedgerConfig;
use crate::domain::error_kind::json_type_name;
use crate::registry::core::{EntityId, RowKey};
use super::errors::CoffeeError;

// ============================================================================
// Coffee Value Objects
// ============================================================================

/// Handle to a coffee registered in a shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoffeeId(RowKey);

impl EntityId for CoffeeId {
    fn from_key(key: RowKey) -> Self {
        Self(key)
    }

    fn key(&self) -> RowKey {
        self.0
    }
}

impl fmt::Display for CoffeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coffee#{}", self.0.index)
    }
}

/// Validated coffee name; only a lower length bound applies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CoffeeName(String);

impl CoffeeName {
    pub fn new(name: impl Into<String>, config: &LedgerConfig) -> Result<Self, CoffeeError> {
        let name = name.into();
        let len = name.chars().count();
        if len < config.coffee_name_min_len {
            return Err(CoffeeError::NameTooShort {
                len,
                min: config.coffee_name_min_len,
            });
        }
        Ok(Self(name))
    }

    pub fn from_value(value: &Value, config: &LedgerConfig) -> Result<Self, CoffeeError> {
        match value {
            Value::String(name) => Self::new(name.as_str(), config),
            other => Err(CoffeeError::NameNotString(json_type_name(other))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CoffeeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoffeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error_kind::ErrorKind;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_valid_names() {
        let config = LedgerConfig::default();
        assert_eq!(CoffeeName::new("Tea", &config).unwrap().as_str(), "Tea");
        let long = "Double Ristretto Caramel Oat Milk Macchiato With Extra Foam";
        assert_eq!(CoffeeName::new(long, &config).unwrap().as_str(), long);
    }

    #[test]
    fn test_short_name_fails() {
        let err = CoffeeName::new("Mo", &LedgerConfig::default()).unwrap_err();
        assert_eq!(err, CoffeeError::NameTooShort { len: 2, min: 3 });
        assert_eq!(err.kind(), ErrorKind::ValueConstraint);
    }

    #[test]
    fn test_non_string_value_is_type_error() {
        let err = CoffeeName::from_value(&json!(3.5), &LedgerConfig::default()).unwrap_err();
        assert_eq!(err, CoffeeError::NameNotString("number"));
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_configured_minimum() {
        let config = LedgerConfig::default().with_coffee_name_min_len(5);
        assert!(CoffeeName::new("Mocha", &config).is_ok());
        assert!(CoffeeName::new("Chai", &config).is_err());
    }

    proptest! {
        #[test]
        fn prop_names_of_three_or_more_chars_are_accepted(name in "[A-Za-z]{3,64}") {
            let parsed = CoffeeName::new(name.clone(), &LedgerConfig::default()).unwrap();
            prop_assert_eq!(parsed.as_str(), name.as_str());
        }

        #[test]
        fn prop_short_names_are_value_errors(name in "[A-Za-z]{0,2}") {
            let err = CoffeeName::new(name, &LedgerConfig::default()).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::ValueConstraint);
        }
    }
}
