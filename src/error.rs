//! Crate-level error types.

use std::fmt;

/// Errors produced by the plasmacyte crate.
#[derive(Debug)]
pub enum PlasmacyteError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Embedded organelle catalog failed to parse.
    Catalog(String),
}

impl fmt::Display for PlasmacyteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Catalog(msg) => write!(f, "catalog error: {msg}"),
        }
    }
}

impl std::error::Error for PlasmacyteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlasmacyteError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
