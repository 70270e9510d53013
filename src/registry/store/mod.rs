// ============================================================================
// Registry Store - the order ledger
// ============================================================================

pub mod order_ledger;

pub use order_ledger::OrderLedger;
