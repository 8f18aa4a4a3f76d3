//! Error type for episode extraction

use std::fmt;

/// Error that can occur while extracting episode structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No `---` delimited front-matter block was found
    MissingFrontMatter,
    /// The front-matter block has no `title:` line
    MissingTitle,
    /// A required bulleted section is absent from the front-matter
    MissingSection(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingFrontMatter => {
                write!(f, "no front-matter block delimited by '---' lines")
            }
            ParseError::MissingTitle => write!(f, "front-matter has no 'title:' line"),
            ParseError::MissingSection(name) => {
                write!(f, "front-matter section '{name}:' not found")
            }
        }
    }
}

impl std::error::Error for ParseError {}
