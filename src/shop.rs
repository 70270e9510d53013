use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::LedgerConfig;
use crate::domain::coffee::{Coffee, CoffeeEntry, CoffeeError, CoffeeId, CoffeeName, CoffeeView};
use crate::domain::customer::{
    Customer, CustomerEntry, CustomerError, CustomerId, CustomerName, CustomerView,
};
use crate::domain::error_kind::ErrorKind;
use crate::domain::order::{Order, OrderError, Price};
use crate::metrics::Metrics;
use crate::models::{CoffeeSummary, CustomerSummary, OrderLine, ShopSnapshot};
use crate::registry::core::{Entity, EntityTable};
use crate::registry::store::OrderLedger;

// ============================================================================
// Shop - repository owning customers, coffees and the order ledger
// ============================================================================
//
// Orchestrates: Input → Validation → Table/Ledger append → Logs/Metrics
//
// There is no hidden global state: every shop has its own tables and ledger,
// and handles issued by one shop never resolve in another.
//
// ============================================================================

#[derive(Debug)]
pub struct Shop {
    id: Uuid,
    config: LedgerConfig,
    customers: EntityTable<Customer>,
    coffees: EntityTable<Coffee>,
    ledger: OrderLedger,
    metrics: Option<Arc<Metrics>>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

impl Shop {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(shop_id = %id, ?config, "Shop created");
        Self {
            id,
            config,
            customers: EntityTable::new(id),
            coffees: EntityTable::new(id),
            ledger: OrderLedger::new(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    pub fn add_customer(&mut self, name: &str) -> Result<CustomerId, CustomerError> {
        let validated = CustomerName::new(name, &self.config);
        self.register_customer(validated)
    }

    pub fn add_customer_value(&mut self, name: &Value) -> Result<CustomerId, CustomerError> {
        let validated = CustomerName::from_value(name, &self.config);
        self.register_customer(validated)
    }

    pub fn add_coffee(&mut self, name: &str) -> Result<CoffeeId, CoffeeError> {
        let validated = CoffeeName::new(name, &self.config);
        self.register_coffee(validated)
    }

    pub fn add_coffee_value(&mut self, name: &Value) -> Result<CoffeeId, CoffeeError> {
        let validated = CoffeeName::from_value(name, &self.config);
        self.register_coffee(validated)
    }

    /// Construct an order and append it to the ledger.
    ///
    /// Customer, coffee and price are checked in that order; on the first
    /// failure nothing is appended.
    pub fn place_order(
        &mut self,
        customer: CustomerId,
        coffee: CoffeeId,
        price: impl Into<f64>,
    ) -> Result<&Order, OrderError> {
        let price = price.into();
        let validated = self
            .check_references(customer, coffee)
            .and_then(|()| Price::new(price, &self.config));
        self.append_order(customer, coffee, validated)
    }

    pub fn place_order_value(
        &mut self,
        customer: CustomerId,
        coffee: CoffeeId,
        price: &Value,
    ) -> Result<&Order, OrderError> {
        let validated = self
            .check_references(customer, coffee)
            .and_then(|()| Price::from_value(price, &self.config));
        self.append_order(customer, coffee, validated)
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    pub fn customer(&self, id: CustomerId) -> Option<CustomerView<'_>> {
        self.customers
            .get(id)
            .map(|customer| CustomerView::new(self, customer))
    }

    pub fn customer_mut(&mut self, id: CustomerId) -> Option<CustomerEntry<'_>> {
        if !self.customers.contains(id) {
            return None;
        }
        Some(CustomerEntry::new(self, id))
    }

    pub fn coffee(&self, id: CoffeeId) -> Option<CoffeeView<'_>> {
        self.coffees.get(id).map(|coffee| CoffeeView::new(self, coffee))
    }

    pub fn coffee_mut(&mut self, id: CoffeeId) -> Option<CoffeeEntry<'_>> {
        if !self.coffees.contains(id) {
            return None;
        }
        Some(CoffeeEntry::new(self, id))
    }

    /// Customers in registration order
    pub fn customers(&self) -> impl Iterator<Item = CustomerView<'_>> + '_ {
        self.customers
            .iter()
            .map(move |customer| CustomerView::new(self, customer))
    }

    /// Coffees in registration order
    pub fn coffees(&self) -> impl Iterator<Item = CoffeeView<'_>> + '_ {
        self.coffees
            .iter()
            .map(move |coffee| CoffeeView::new(self, coffee))
    }

    /// Every order ever placed in this shop
    pub fn orders(&self) -> &OrderLedger {
        &self.ledger
    }

    // ------------------------------------------------------------------------
    // Aggregate queries
    // ------------------------------------------------------------------------

    /// Customer with the strictly greatest total spend on `coffee`.
    ///
    /// Candidates are visited in the order `CoffeeView::customers` yields
    /// them, and a later customer only wins with a strictly larger total, so
    /// ties go to whoever ordered the coffee first. `None` when nobody has
    /// ordered it.
    pub fn most_aficionado(&self, coffee: CoffeeId) -> Option<CustomerView<'_>> {
        let coffee = self.coffee(coffee)?;

        let mut current_max_spent = 0.0;
        let mut highest_spender = None;

        for customer in coffee.customers() {
            let total_spent = customer.total_spent_on(coffee.id());
            if total_spent > current_max_spent {
                current_max_spent = total_spent;
                highest_spender = Some(customer);
            }
        }

        highest_spender
    }

    pub fn snapshot(&self) -> ShopSnapshot {
        let customers = self
            .customers()
            .map(|customer| CustomerSummary {
                name: customer.name().to_string(),
                num_orders: customer.orders().len(),
                total_spent: customer.total_spent(),
                coffees: customer
                    .coffees()
                    .iter()
                    .map(|coffee| coffee.name().to_string())
                    .collect(),
            })
            .collect();

        let coffees = self
            .coffees()
            .map(|coffee| CoffeeSummary {
                name: coffee.name().to_string(),
                num_orders: coffee.num_orders(),
                average_price: coffee.average_price(),
                customers: coffee
                    .customers()
                    .iter()
                    .map(|customer| customer.name().to_string())
                    .collect(),
                aficionado: self
                    .most_aficionado(coffee.id())
                    .map(|customer| customer.name().to_string()),
            })
            .collect();

        let orders = self
            .ledger
            .iter()
            .map(|order| OrderLine {
                id: order.id(),
                sequence: order.sequence(),
                customer: self.customer_name(order.customer()),
                coffee: self.coffee_name(order.coffee()),
                price: order.price().value(),
                placed_at: order.placed_at(),
            })
            .collect();

        ShopSnapshot {
            shop_id: self.id,
            taken_at: Utc::now(),
            customers,
            coffees,
            orders,
        }
    }

    // ------------------------------------------------------------------------
    // Renaming (used by CustomerEntry / CoffeeEntry)
    // ------------------------------------------------------------------------

    pub(crate) fn rename_customer(&mut self, id: CustomerId, name: &str) -> Result<(), CustomerError> {
        let validated = CustomerName::new(name, &self.config);
        self.apply_customer_name(id, validated)
    }

    pub(crate) fn rename_customer_value(&mut self, id: CustomerId, name: &Value) -> Result<(), CustomerError> {
        let validated = CustomerName::from_value(name, &self.config);
        self.apply_customer_name(id, validated)
    }

    pub(crate) fn rename_coffee(&mut self, id: CoffeeId, name: &str) -> Result<(), CoffeeError> {
        let validated = CoffeeName::new(name, &self.config);
        self.apply_coffee_name(id, validated)
    }

    pub(crate) fn rename_coffee_value(&mut self, id: CoffeeId, name: &Value) -> Result<(), CoffeeError> {
        let validated = CoffeeName::from_value(name, &self.config);
        self.apply_coffee_name(id, validated)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn register_customer(
        &mut self,
        validated: Result<CustomerName, CustomerError>,
    ) -> Result<CustomerId, CustomerError> {
        let name = validated.inspect_err(|e| self.record_rejection(Customer::kind(), e.kind(), e))?;
        let id = self.customers.insert_with(|id| Customer::new(id, name));
        tracing::debug!(customer = %id, "Customer registered");
        Ok(id)
    }

    fn register_coffee(
        &mut self,
        validated: Result<CoffeeName, CoffeeError>,
    ) -> Result<CoffeeId, CoffeeError> {
        let name = validated.inspect_err(|e| self.record_rejection(Coffee::kind(), e.kind(), e))?;
        let id = self.coffees.insert_with(|id| Coffee::new(id, name));
        tracing::debug!(coffee = %id, "Coffee registered");
        Ok(id)
    }

    fn apply_customer_name(
        &mut self,
        id: CustomerId,
        validated: Result<CustomerName, CustomerError>,
    ) -> Result<(), CustomerError> {
        let name = validated.inspect_err(|e| self.record_rejection(Customer::kind(), e.kind(), e))?;
        if let Some(customer) = self.customers.get_mut(id) {
            tracing::debug!(customer = %id, old = %customer.name(), new = %name, "Customer renamed");
            customer.set_name(name);
        }
        Ok(())
    }

    fn apply_coffee_name(
        &mut self,
        id: CoffeeId,
        validated: Result<CoffeeName, CoffeeError>,
    ) -> Result<(), CoffeeError> {
        let name = validated.inspect_err(|e| self.record_rejection(Coffee::kind(), e.kind(), e))?;
        if let Some(coffee) = self.coffees.get_mut(id) {
            tracing::debug!(coffee = %id, old = %coffee.name(), new = %name, "Coffee renamed");
            coffee.set_name(name);
        }
        Ok(())
    }

    fn check_references(&self, customer: CustomerId, coffee: CoffeeId) -> Result<(), OrderError> {
        if !self.customers.contains(customer) {
            return Err(OrderError::UnknownCustomer(customer));
        }
        if !self.coffees.contains(coffee) {
            return Err(OrderError::UnknownCoffee(coffee));
        }
        Ok(())
    }

    fn append_order(
        &mut self,
        customer: CustomerId,
        coffee: CoffeeId,
        validated: Result<Price, OrderError>,
    ) -> Result<&Order, OrderError> {
        let price = validated.inspect_err(|e| self.record_rejection("order", e.kind(), e))?;

        let coffee_name = self
            .coffees
            .get(coffee)
            .map(|c| c.name().as_str())
            .unwrap_or_default();
        if let Some(metrics) = &self.metrics {
            metrics.record_order_placed(coffee_name, price.value());
        }

        let order = self.ledger.append(customer, coffee, price);
        tracing::debug!(
            order_id = %order.id(),
            sequence = order.sequence(),
            customer = %customer,
            coffee = coffee_name,
            price = price.value(),
            "Order appended to ledger"
        );
        Ok(order)
    }

    fn record_rejection(&self, entity: &str, kind: ErrorKind, error: &dyn std::error::Error) {
        tracing::warn!(entity, kind = %kind, error = %error, "Rejected {} input", entity);
        if let Some(metrics) = &self.metrics {
            metrics.record_validation_failure(entity, kind.as_str());
        }
    }

    fn customer_name(&self, id: CustomerId) -> String {
        self.customers
            .get(id)
            .map(|customer| customer.name().to_string())
            .unwrap_or_default()
    }

    fn coffee_name(&self, id: CoffeeId) -> String {
        self.coffees
            .get(id)
            .map(|coffee| coffee.name().to_string())
            .unwrap_or_default()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
