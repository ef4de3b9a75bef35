//! AMY workshop administration backend
//!
//! Records workshops (events), the sites hosting them, the people teaching
//! and attending them, and the badges they earn. This library provides the
//! form validation layer, persistence, startup data fixes and the HTTP
//! interface over them.

pub mod config;
pub mod data_fixes;
pub mod database;
pub mod forms;
pub mod handlers;
pub mod lookups;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AmyError, Result};

// Re-export main components for easy access
pub use data_fixes::DataFixRunner;
pub use database::DatabaseService;
pub use handlers::{create_router, AppState};
pub use lookups::{Lookups, MemoryLookups};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
