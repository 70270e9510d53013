// ============================================================================
// Domain Layer
// ============================================================================
//
// Customers, coffees and the orders joining them. Each entity has its own
// subdirectory with:
// - Value objects
// - Errors
// - Entity
// - Views (customer and coffee only)
//
// Storage lives in src/registry/, orchestration in src/shop.rs.
//
// ============================================================================

pub mod error_kind;
pub mod customer;
pub mod coffee;
pub mod order;

pub use error_kind::ErrorKind;
