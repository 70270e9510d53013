use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::coffee::CoffeeId;
use crate::domain::customer::CustomerId;
use super::value_objects::{OrderId, Price};

// ============================================================================
// Order - join entity between a customer and a coffee
// ============================================================================
//
// Orders are only built by the ledger after the customer, coffee and price
// have been validated, and are immutable afterwards.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    sequence: u64,
    customer: CustomerId,
    coffee: CoffeeId,
    price: Price,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(sequence: u64, customer: CustomerId, coffee: CoffeeId, price: Price) -> Self {
        Self {
            id: OrderId::new(),
            sequence,
            customer,
            coffee,
            price,
            placed_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// 1-based position in the ledger
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    pub fn coffee(&self) -> CoffeeId {
        self.coffee
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}
