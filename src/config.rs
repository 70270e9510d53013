use std::ops::RangeInclusive;

// ============================================================================
// Ledger Configuration
// ============================================================================
//
// Validation bounds applied when customers, coffees and orders are created
// or renamed. The defaults are the house rules; a shop may be built with
// different bounds through `Shop::with_config`.
//
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct LedgerConfig {
    /// Allowed customer name length, in characters (inclusive)
    pub customer_name_len: RangeInclusive<usize>,
    /// Minimum coffee name length, in characters
    pub coffee_name_min_len: usize,
    /// Allowed order price (inclusive)
    pub price_range: RangeInclusive<f64>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            customer_name_len: 1..=15,
            coffee_name_min_len: 3,
            price_range: 1.0..=10.0,
        }
    }
}

impl LedgerConfig {
    pub fn with_customer_name_len(mut self, len: RangeInclusive<usize>) -> Self {
        self.customer_name_len = len;
        self
    }

    pub fn with_coffee_name_min_len(mut self, min: usize) -> Self {
        self.coffee_name_min_len = min;
        self
    }

    pub fn with_price_range(mut self, range: RangeInclusive<f64>) -> Self {
        self.price_range = range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = LedgerConfig::default();
        assert_eq!(config.customer_name_len, 1..=15);
        assert_eq!(config.coffee_name_min_len, 3);
        assert_eq!(*config.price_range.start(), 1.0);
        assert_eq!(*config.price_range.end(), 10.0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = LedgerConfig::default()
            .with_customer_name_len(2..=30)
            .with_coffee_name_min_len(1)
            .with_price_range(0.5..=20.0);

        assert_eq!(config.customer_name_len, 2..=30);
        assert_eq!(config.coffee_name_min_len, 1);
        assert_eq!(config.price_range, 0.5..=20.0);
    }
}
