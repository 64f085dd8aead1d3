// Market Directory - Core Library
// Exposes all modules for use in the API server binary and tests

pub mod api;
pub mod bootstrap;
pub mod domain;
pub mod store;

// Re-export commonly used types
pub use api::{router, ApiError, AppState};
pub use domain::{Category, CategoryPatch, Vendor, VendorPatch};
pub use store::{DocumentStore, Entity, MemoryStore, StoreError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
