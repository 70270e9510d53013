use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::config::LedgerConfig;
use crate::domain::error_kind::json_type_name;
use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order price, always held as `f64` whatever numeric type it came from
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: impl Into<f64>, config: &LedgerConfig) -> Result<Self, OrderError> {
        let value = value.into();
        if !value.is_finite() {
            return Err(OrderError::PriceNotNumeric(value.to_string()));
        }
        if !config.price_range.contains(&value) {
            return Err(OrderError::PriceOutOfRange {
                price: value,
                min: *config.price_range.start(),
                max: *config.price_range.end(),
            });
        }
        Ok(Self(value))
    }

    /// Validate a loosely typed price; only JSON numbers are accepted
    pub fn from_value(value: &Value, config: &LedgerConfig) -> Result<Self, OrderError> {
        match value.as_f64() {
            Some(number) => Self::new(number, config),
            None => Err(OrderError::PriceNotNumeric(json_type_name(value).to_string())),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
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
    fn test_price_bounds_are_inclusive() {
        let config = LedgerConfig::default();
        assert_eq!(Price::new(1.0, &config).unwrap().value(), 1.0);
        assert_eq!(Price::new(10.0, &config).unwrap().value(), 10.0);
    }

    #[test]
    fn test_integer_price_is_stored_as_float() {
        let config = LedgerConfig::default();
        let price = Price::new(4, &config).unwrap();
        assert_eq!(price.value(), 4.0);

        let from_json = Price::from_value(&json!(7), &config).unwrap();
        assert_eq!(from_json.value(), 7.0);
    }

    #[test]
    fn test_out_of_range_price_is_value_error() {
        let config = LedgerConfig::default();
        let result = Price::new(10.5, &config);
        assert!(matches!(result, Err(OrderError::PriceOutOfRange { price, .. }) if price == 10.5));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ValueConstraint);

        let result = Price::new(0.99, &config);
        assert!(matches!(result, Err(OrderError::PriceOutOfRange { .. })));
    }

    #[test]
    fn test_non_finite_price_is_type_error() {
        let config = LedgerConfig::default();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Price::new(value, &config).unwrap_err();
            assert!(matches!(err, OrderError::PriceNotNumeric(_)));
            assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn test_non_numeric_json_price_is_type_error() {
        let config = LedgerConfig::default();
        for value in [json!("4.5"), json!(null), json!(true), json!([4.5])] {
            let err = Price::from_value(&value, &config).unwrap_err();
            assert!(matches!(err, OrderError::PriceNotNumeric(_)));
        }

        let err = Price::from_value(&json!("4.5"), &config).unwrap_err();
        assert_eq!(err, OrderError::PriceNotNumeric("string".to_string()));
    }

    #[test]
    fn test_price_respects_configured_range() {
        let config = LedgerConfig::default().with_price_range(0.5..=20.0);
        assert!(Price::new(15.0, &config).is_ok());
        assert!(Price::new(0.25, &config).is_err());
    }

    #[test]
    fn test_order_ids_are_unique() {
        assert_ne!(OrderId::new(), OrderId::new());
    }

    proptest! {
        #[test]
        fn prop_prices_in_range_are_accepted(value in 1.0f64..=10.0) {
            let price = Price::new(value, &LedgerConfig::default()).unwrap();
            prop_assert_eq!(price.value(), value);
        }

        #[test]
        fn prop_prices_out_of_range_are_value_errors(
            value in prop_oneof![-1000.0f64..0.999, 10.001f64..1000.0]
        ) {
            let err = Price::new(value, &LedgerConfig::default()).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::ValueConstraint);
        }
    }
}
