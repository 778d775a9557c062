//! Schema translation into and out of the domain model.
//!
//! Three families, one per schema pair:
//! - [`api`]: reference API DTOs -> domain
//! - [`record`]: homebrew storage records -> domain
//! - [`to_record`]: domain -> homebrew storage records
//!
//! Mappers are pure. A mapper that converts a nested field holds the mapper
//! for that field's type; `Default` wires the standard graph.

pub mod api;
pub mod record;
pub mod to_record;

/// Single-method translation from `S` to `T`.
pub trait Mapper<S, T> {
    fn map(&self, source: &S) -> T;

    fn map_all(&self, sources: &[S]) -> Vec<T>
    where
        S: Sized,
    {
        sources.iter().map(|s| self.map(s)).collect()
    }

    /// Absent sources stay absent.
    fn map_option(&self, source: Option<&S>) -> Option<T> {
        source.map(|s| self.map(s))
    }
}
