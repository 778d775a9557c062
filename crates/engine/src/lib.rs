//! Charsmith Engine library.
//!
//! Everything in Charsmith that performs I/O lives here.
//!
//! ## Structure
//!
//! - `infrastructure/` - ports, storage, cache, HTTP and the SRD API client
//! - `mappers/` - API DTOs and homebrew records into the domain model (and back)
//! - `repositories/` - SRD and homebrew resources merged per resource type
//! - `banks/` - player characters and the homebrew index, persisted whole
//! - `upgrade` - version-gated migrations of stored JSON
//! - `app` - Application composition

pub mod app;
pub mod banks;
pub mod infrastructure;
pub mod mappers;
pub mod repositories;
pub mod upgrade;

pub use app::{App, StartupError};
pub use infrastructure::settings::AppConfig;
