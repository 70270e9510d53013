use std::collections::HashSet;

use crate::domain::coffee::CoffeeId;
use crate::domain::customer::CustomerId;
use crate::domain::order::{Order, Price};

// ============================================================================
// Order Ledger - append-only record of every order in a shop
// ============================================================================
//
// Responsibilities:
// 1. Append orders (never remove, never deduplicate)
// 2. Assign 1-based sequence numbers in append order
// 3. Answer relationship questions by scanning in sequence order
//
// Every query is a linear scan over the whole ledger.
//
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    entries: Vec<Order>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already validated order, returning the stored entry
    pub(crate) fn append(&mut self, customer: CustomerId, coffee: CoffeeId, price: Price) -> &Order {
        let sequence = self.entries.len() as u64 + 1;
        self.entries.push(Order::new(sequence, customer, coffee, price));
        &self.entries[self.entries.len() - 1]
    }

    /// Look up an entry by its sequence number
    pub fn get(&self, sequence: u64) -> Option<&Order> {
        let index = usize::try_from(sequence.checked_sub(1)?).ok()?;
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Order] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_customer(&self, customer: CustomerId) -> impl Iterator<Item = &Order> + '_ {
        self.entries.iter().filter(move |order| order.customer() == customer)
    }

    pub fn for_coffee(&self, coffee: CoffeeId) -> impl Iterator<Item = &Order> + '_ {
        self.entries.iter().filter(move |order| order.coffee() == coffee)
    }

    /// Distinct coffees ordered by `customer`, in order of first appearance
    pub fn coffees_of(&self, customer: CustomerId) -> Vec<CoffeeId> {
        first_appearances(self.for_customer(customer).map(Order::coffee))
    }

    /// Distinct customers who ordered `coffee`, in order of first appearance
    pub fn customers_of(&self, coffee: CoffeeId) -> Vec<CustomerId> {
        first_appearances(self.for_coffee(coffee).map(Order::customer))
    }
}

impl<'a> IntoIterator for &'a OrderLedger {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn first_appearances<K>(keys: impl Iterator<Item = K>) -> Vec<K>
where
    K: Copy + Eq + std::hash::Hash,
{
    let mut seen = HashSet::new();
    keys.filter(|key| seen.insert(*key)).collect()
}
