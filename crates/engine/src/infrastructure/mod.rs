//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies and the
//! storage/API services layered on top of them.

pub mod api;
pub mod cache;
pub mod clock;
pub mod http;
pub mod local_store;
pub mod ports;
pub mod settings;
pub mod srd_api;
pub mod storage;
