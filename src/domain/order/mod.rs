// ============================================================================
// Order Domain
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderId, Price)
// - Errors (OrderError enum)
// - Entity (Order, built only by the ledger)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod entity;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use entity::*;
