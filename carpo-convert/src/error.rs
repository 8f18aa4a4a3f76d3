//! Error type for episode conversion

use carpo_parser::ParseError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error that can occur during conversion
///
/// Any parse failure aborts the whole run before the output file is
/// created; there is no partial output.
#[derive(Debug)]
pub enum ConvertError {
    /// Episode extraction failed
    Parse(ParseError),
    /// Reading the input or writing the output failed
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Parse(e) => write!(f, "episode extraction failed: {e}"),
            ConvertError::Io { path, source } => {
                write!(f, "I/O error on '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Parse(e) => Some(e),
            ConvertError::Io { source, .. } => Some(source),
        }
    }
}

impl From<ParseError> for ConvertError {
    fn from(e: ParseError) -> Self {
        ConvertError::Parse(e)
    }
}
