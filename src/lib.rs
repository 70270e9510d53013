// ============================================================================
// coffee_ledger
// ============================================================================
//
// Customers order coffees; every order lands in an append-only ledger owned
// by a `Shop`, and all relationship queries (a customer's coffees, a coffee's
// customers, counts, average price, top spender) re-scan that ledger.
//
// ============================================================================

pub mod config;
pub mod domain;
pub mod metrics;
pub mod models;
pub mod registry;
pub mod shop;

pub use config::LedgerConfig;
pub use domain::coffee::{Coffee, CoffeeEntry, CoffeeError, CoffeeId, CoffeeName, CoffeeView};
pub use domain::customer::{Customer, CustomerEntry, CustomerError, CustomerId, CustomerName, CustomerView};
pub use domain::order::{Order, OrderError, OrderId, Price};
pub use domain::ErrorKind;
pub use metrics::Metrics;
pub use models::ShopSnapshot;
pub use registry::OrderLedger;
pub use shop::Shop;
