//! Error types.
use std::fmt::Display;

#[derive(Debug)]
/// Errors which may be generated when configuring the normaliser
pub enum Error {
    /// The configuration could not be deserialised
    Configuration(serde_json::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(e) => f.write_fmt(format_args!("Invalid configuration: {e}")),
        }
    }
}

impl std::error::Error for Error {}
