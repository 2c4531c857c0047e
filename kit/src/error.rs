use std::io;
use std::path::PathBuf;

use jsonic_core::ParseError;
use thiserror::Error;

/// Failure of a driver that opens its own input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// The syntax error, if parsing started.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Open { .. } => None,
        }
    }
}
