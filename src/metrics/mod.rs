use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};
use std::fmt;

// ============================================================================
// Metrics Module - Prometheus metrics for the shop
// ============================================================================
//
// Provides metrics for:
// - Orders appended to the ledger (by coffee)
// - Order prices
// - Rejected constructions (by entity and error kind)
//
// Rendered on demand in the Prometheus text format.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub orders_placed: IntCounterVec,
    pub order_price: Histogram,
    pub validation_failures: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_placed = IntCounterVec::new(
            Opts::new("coffee_orders_placed_total", "Total orders appended to the ledger"),
            &["coffee"],
        )?;
        registry.register(Box::new(orders_placed.clone()))?;

        let order_price = Histogram::with_opts(
            HistogramOpts::new("coffee_order_price", "Price of appended orders")
                .buckets(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]),
        )?;
        registry.register(Box::new(order_price.clone()))?;

        let validation_failures = IntCounterVec::new(
            Opts::new(
                "coffee_validation_failures_total",
                "Total rejected customer, coffee and order constructions",
            ),
            &["entity", "kind"],
        )?;
        registry.register(Box::new(validation_failures.clone()))?;

        Ok(Self {
            registry,
            orders_placed,
            order_price,
            validation_failures,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order_placed(&self, coffee: &str, price: f64) {
        self.orders_placed.with_label_values(&[coffee]).inc();
        self.order_price.observe(price);
    }

    pub fn record_validation_failure(&self, entity: &str, kind: &str) {
        self.validation_failures.with_label_values(&[entity, kind]).inc();
    }

    /// Prometheus text exposition of every registered metric
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_placed("Latte", 4.5);
        assert!(!metrics.registry().gather().is_empty());
    }

    #[test]
    fn test_record_order_placed() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_placed("Latte", 4.5);
        metrics.record_order_placed("Latte", 5.0);
        metrics.record_order_placed("Espresso", 3.0);

        assert_eq!(metrics.orders_placed.with_label_values(&["Latte"]).get(), 2);
        assert_eq!(metrics.orders_placed.with_label_values(&["Espresso"]).get(), 1);
        assert_eq!(metrics.order_price.get_sample_count(), 3);
        assert_eq!(metrics.order_price.get_sample_sum(), 12.5);
    }

    #[test]
    fn test_record_validation_failure() {
        let metrics = Metrics::new().unwrap();
        metrics.record_validation_failure("order", "value_constraint");
        metrics.record_validation_failure("order", "value_constraint");
        metrics.record_validation_failure("customer", "type_mismatch");

        assert_eq!(
            metrics
                .validation_failures
                .with_label_values(&["order", "value_constraint"])
                .get(),
            2
        );
    }

    #[test]
    fn test_render_text_format() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_placed("Latte", 4.5);

        let text = metrics.render().unwrap();
        assert!(text.contains("coffee_orders_placed_total{coffee=\"Latte\"} 1"));
        assert!(text.contains("coffee_order_price_count 1"));
    }
}
