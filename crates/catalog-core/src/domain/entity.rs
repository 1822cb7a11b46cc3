//! Domain Layer - Core Entity Trait
//!
//! Every record fetched from the backend carries a stable identifier.
//! Views join independent lists through it instead of sharing objects.

use std::collections::HashMap;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Index a slice of entities by identifier.
///
/// Later entries win when the same id appears twice.
pub fn index_by_id<T: Entity>(entities: &[T]) -> HashMap<T::Id, &T> {
    entities.iter().map(|e| (e.id(), e)).collect()
}
