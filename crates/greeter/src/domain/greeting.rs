//! Greeting - Name to greeting text
//!
//! Pure domain logic. The only side effect in this module is writing to a
//! caller-supplied sink in [`write_greeting`].

use std::io::Write;

use super::errors::GreeterError;

pub const GREETING_PREFIX: &str = "Hello, ";
pub const GREETING_SUFFIX: &str = "!";

/// Name greeted by the `greeter` binary
pub const DEFAULT_NAME: &str = "World";

/// Build the greeting for `name`.
///
/// Any text is accepted as-is, including the empty string.
pub fn greet(name: &str) -> String {
    format!("{}{}{}", GREETING_PREFIX, name, GREETING_SUFFIX)
}

/// Write the greeting for `name` to `out` as a single line, then flush.
///
/// Only `out` is written to; stdout is never touched.
///
/// ```rust
/// use greeter::write_greeting;
///
/// let mut out = Vec::new();
/// write_greeting(&mut out, "Ferris").unwrap();
/// assert_eq!(out, b"Hello, Ferris!\n");
/// ```
pub fn write_greeting<W: Write>(out: &mut W, name: &str) -> Result<(), GreeterError> {
    let message = greet(name);
    tracing::trace!(%message, "writing greeting");

    writeln!(out, "{}", message)?;
    out.flush()?;

    Ok(())
}
