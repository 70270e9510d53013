use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use uuid::Uuid;

// ============================================================================
// Entity Pattern - Registry Core
// ============================================================================
//
// Key Principles:
// 1. Entities are owned by exactly one table inside one registry
// 2. Everything else refers to them by handle, never by owning pointer
// 3. A handle carries the registry it was issued by, so handles from a
//    different registry never resolve
// 4. Rows are never removed, so a handle that resolved once keeps resolving
//
// This is the GENERIC entity trait that works for ANY registered entity.
//
// ============================================================================

/// Position of an entity inside the table of a specific registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowKey {
    pub registry: Uuid,
    pub index: usize,
}

/// Typed handle to a registered entity
pub trait EntityId: Copy + Eq + Hash + fmt::Debug {
    fn from_key(key: RowKey) -> Self;

    fn key(&self) -> RowKey;
}

/// Generic Entity trait - everything stored in an `EntityTable` implements this
pub trait Entity {
    type Id: EntityId;

    /// Handle this entity was registered under
    fn id(&self) -> Self::Id;

    /// Entity name used in logs and metric labels
    fn kind() -> &'static str
    where
        Self: Sized;
}
