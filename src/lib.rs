pub mod config;
pub mod contrib;
pub mod error;
pub mod models;
pub mod render;

// Re-export error types for convenience
pub use error::ListmarksError;
