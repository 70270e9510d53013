// ============================================================================
// Registry Infrastructure
// ============================================================================
//
// Entity tables and the order ledger owned by a `Shop`.
// Domain-specific code is in src/domain/
//
// ============================================================================

pub mod core;
pub mod store;

pub use self::core::*;
pub use self::store::*;
