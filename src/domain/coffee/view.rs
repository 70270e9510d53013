use serde_json::Value;

use crate::domain::customer::CustomerView;
use crate::domain::order::Order;
use crate::shop::Shop;
use super::entity::Coffee;
use super::errors::CoffeeError;
use super::value_objects::{CoffeeId, CoffeeName};

// ============================================================================
// Coffee Queries
// ============================================================================

/// Read-only view of a registered coffee
#[derive(Debug, Clone, Copy)]
pub struct CoffeeView<'a> {
    shop: &'a Shop,
    coffee: &'a Coffee,
}

impl<'a> CoffeeView<'a> {
    pub(crate) fn new(shop: &'a Shop, coffee: &'a Coffee) -> Self {
        Self { shop, coffee }
    }

    pub fn id(&self) -> CoffeeId {
        self.coffee.id()
    }

    pub fn name(&self) -> &'a CoffeeName {
        self.coffee.name()
    }

    /// Orders for this coffee, in ledger order
    pub fn orders(&self) -> Vec<&'a Order> {
        self.shop.orders().for_coffee(self.id()).collect()
    }

    /// Distinct customers who ordered this coffee, in order of first appearance
    pub fn customers(&self) -> Vec<CustomerView<'a>> {
        let shop = self.shop;
        shop.orders()
            .customers_of(self.id())
            .into_iter()
            .filter_map(|customer| shop.customer(customer))
            .collect()
    }

    pub fn num_orders(&self) -> usize {
        self.shop.orders().for_coffee(self.id()).count()
    }

    /// Mean order price, or `None` when nobody has ordered this coffee yet
    pub fn average_price(&self) -> Option<f64> {
        let (count, total) = self
            .shop
            .orders()
            .for_coffee(self.id())
            .fold((0usize, 0.0), |(count, total), order| {
                (count + 1, total + order.price().value())
            });

        if count == 0 {
            return None;
        }
        Some(total / count as f64)
    }
}

impl PartialEq for CoffeeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Mutable access to a registered coffee
#[derive(Debug)]
pub struct CoffeeEntry<'a> {
    shop: &'a mut Shop,
    id: CoffeeId,
}

impl<'a> CoffeeEntry<'a> {
    pub(crate) fn new(shop: &'a mut Shop, id: CoffeeId) -> Self {
        Self { shop, id }
    }

    pub fn id(&self) -> CoffeeId {
        self.id
    }

    /// Replace the name, re-validating it; the old name is kept on failure
    pub fn rename(&mut self, name: &str) -> Result<(), CoffeeError> {
        self.shop.rename_coffee(self.id, name)
    }

    pub fn rename_value(&mut self, name: &Value) -> Result<(), CoffeeError> {
        self.shop.rename_coffee_value(self.id, name)
    }
}
