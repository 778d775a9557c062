//! Vocabulary types shared across entities and aggregates.

mod ability;
mod resource_type;

pub use ability::Ability;
pub use resource_type::ResourceType;
