//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Local storage (could swap memory -> file -> browser storage)
//! - HTTP (could swap reqwest -> a test double)
//! - Clock (for testing)

mod error;
mod external;
mod storage;
mod testing;

pub use error::{ApiError, BankError, RepoError, StorageError, UpgradeError};
pub use external::{HttpPort, HttpResponse};
pub use storage::KeyValueStore;
pub use testing::ClockPort;

#[cfg(test)]
pub use external::MockHttpPort;
#[cfg(test)]
pub use storage::MockKeyValueStore;
#[cfg(test)]
pub use testing::MockClockPort;
