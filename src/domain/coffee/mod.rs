// ============================================================================
// Coffee Domain
// ============================================================================
//
// This module contains ALL Coffee-specific code:
// - Value objects (CoffeeId, CoffeeName)
// - Errors (CoffeeError enum)
// - Entity (Coffee row stored in the shop's coffee table)
// - Views (CoffeeView for queries, CoffeeEntry for renaming)
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
