// ============================================================================
// Customer Domain
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (CustomerId, CustomerName)
// - Errors (CustomerError enum)
// - Entity (Customer row stored in the shop's customer table)
// - Views (CustomerView for queries, CustomerEntry for ordering/renaming)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod entity;
pub mod view;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use entity::*;
pub use view::*;
