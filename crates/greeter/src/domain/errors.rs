//! Domain Errors

use thiserror::Error;

/// Greeter errors
#[derive(Debug, Error)]
pub enum GreeterError {
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
