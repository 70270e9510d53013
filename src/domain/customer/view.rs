use serde_json::Value;

use crate::domain::coffee::{CoffeeId, CoffeeView};
use crate::domain::order::{Order, OrderError};
use crate::shop::Shop;
use super::entity::Customer;
use super::errors::CustomerError;
use super::value_objects::{CustomerId, CustomerName};

// ============================================================================
// Customer Queries
// ============================================================================
//
// Customers hold no order list of their own. Every query below re-scans the
// shop's ledger.
//
// ============================================================================

/// Read-only view of a registered customer
#[derive(Debug, Clone, Copy)]
pub struct CustomerView<'a> {
    shop: &'a Shop,
    customer: &'a Customer,
}

impl<'a> CustomerView<'a> {
    pub(crate) fn new(shop: &'a Shop, customer: &'a Customer) -> Self {
        Self { shop, customer }
    }

    pub fn id(&self) -> CustomerId {
        self.customer.id()
    }

    pub fn name(&self) -> &'a CustomerName {
        self.customer.name()
    }

    /// Orders placed by this customer, in ledger order
    pub fn orders(&self) -> Vec<&'a Order> {
        self.shop.orders().for_customer(self.id()).collect()
    }

    /// Distinct coffees this customer ordered, in order of first appearance
    pub fn coffees(&self) -> Vec<CoffeeView<'a>> {
        let shop = self.shop;
        shop.orders()
            .coffees_of(self.id())
            .into_iter()
            .filter_map(|coffee| shop.coffee(coffee))
            .collect()
    }

    pub fn total_spent(&self) -> f64 {
        self.shop
            .orders()
            .for_customer(self.id())
            .map(|order| order.price().value())
            .sum()
    }

    pub fn total_spent_on(&self, coffee: CoffeeId) -> f64 {
        self.shop
            .orders()
            .for_customer(self.id())
            .filter(|order| order.coffee() == coffee)
            .map(|order| order.price().value())
            .sum()
    }
}

impl PartialEq for CustomerView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Mutable access to a registered customer
#[derive(Debug)]
pub struct CustomerEntry<'a> {
    shop: &'a mut Shop,
    id: CustomerId,
}

impl<'a> CustomerEntry<'a> {
    pub(crate) fn new(shop: &'a mut Shop, id: CustomerId) -> Self {
        Self { shop, id }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Place an order with this customer; validation is the same as `Shop::place_order`
    pub fn create_order(&mut self, coffee: CoffeeId, price: impl Into<f64>) -> Result<&Order, OrderError> {
        self.shop.place_order(self.id, coffee, price)
    }

    pub fn create_order_value(&mut self, coffee: CoffeeId, price: &Value) -> Result<&Order, OrderError> {
        self.shop.place_order_value(self.id, coffee, price)
    }

    /// Replace the name, re-validating it; the old name is kept on failure
    pub fn rename(&mut self, name: &str) -> Result<(), CustomerError> {
        self.shop.rename_customer(self.id, name)
    }

    pub fn rename_value(&mut self, name: &Value) -> Result<(), CustomerError> {
        self.shop.rename_customer_value(self.id, name)
    }
}
