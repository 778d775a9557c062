//! Charsmith Shared - schemas that cross a boundary
//!
//! - [`api`]: DTOs exactly as the SRD reference API returns them (snake_case JSON)
//! - [`records`]: homebrew records exactly as they sit in local storage (camelCase JSON)
//!
//! # Design Principles
//!
//! 1. **No business logic** - pure data types and serialization
//! 2. **Closed unions** - tagged enums for every discriminated shape
//! 3. **No domain IDs** - raw `uuid::Uuid` in records

pub mod api;
pub mod records;
