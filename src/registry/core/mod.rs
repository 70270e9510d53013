// ============================================================================
// Registry Core - Generic Entity Abstractions
// ============================================================================
//
// GENERIC building blocks shared by every entity table.
// No domain-specific code lives here (no Customer, Coffee, Order).
//
// ============================================================================

pub mod entity;
pub mod table;

pub use entity::{Entity, EntityId, RowKey};
pub use table::EntityTable;
