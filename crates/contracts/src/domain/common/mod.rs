//! Common types shared by all remote entities

pub mod entity_metadata;
pub mod serde_helpers;

pub use entity_metadata::EntityMetadata;
