//! Greeter Library
//!
//! Pure greeting logic, safe to use from any crate.
//!
//! Nothing in this crate writes to the process's standard output. The
//! executable action lives in the `greeter-cli` crate.
//!
//! # Usage
//!
//! ```rust
//! use greeter::greet;
//!
//! assert_eq!(greet("World"), "Hello, World!");
//! ```

pub mod domain;

// Re-export commonly used items
pub use domain::{
    greet, write_greeting, GreeterError, DEFAULT_NAME, GREETING_PREFIX, GREETING_SUFFIX,
};
