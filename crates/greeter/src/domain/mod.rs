//! Domain Layer
//!
//! Greeting construction and its error types.

pub mod errors;
pub mod greeting;

// Re-exports for convenience
pub use errors::*;
pub use greeting::*;
