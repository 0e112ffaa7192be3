//! Common types and traits for all aggregates

pub mod entity;
pub mod entity_id;

// Re-exports
pub use entity::Entity;
pub use entity_id::EntityId;
