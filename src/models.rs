use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::order::OrderId;

// ============================================================================
// Read Models
// ============================================================================
//
// Flattened, serializable picture of a shop at one point in time, with
// handles resolved to names and derived figures precomputed.
//
// ============================================================================

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShopSnapshot {
    pub shop_id: Uuid,
    pub taken_at: DateTime<Utc>,
    pub customers: Vec<CustomerSummary>,
    pub coffees: Vec<CoffeeSummary>,
    pub orders: Vec<OrderLine>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CustomerSummary {
    pub name: String,
    pub num_orders: usize,
    pub total_spent: f64,
    pub coffees: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CoffeeSummary {
    pub name: String,
    pub num_orders: usize,
    pub average_price: Option<f64>,
    pub customers: Vec<String>,
    pub aficionado: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OrderLine {
    pub id: OrderId,
    pub sequence: u64,
    pub customer: String,
    pub coffee: String,
    pub price: f64,
    pub placed_at: DateTime<Utc>,
}

impl ShopSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
