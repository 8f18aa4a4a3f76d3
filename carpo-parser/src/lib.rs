//! Extraction library for the Carpentries episode format
//!
//! An episode file opens with a front-matter block delimited by `---` lines
//! (a `title:` line plus bulleted sections such as `questions:` and
//! `objectives:`) followed by a Markdown-ish body whose code blocks use the
//! kramdown convention:
//!
//!     ~~~
//!     code
//!     ~~~
//!     {: .language-python}
//!
//! This crate locates and extracts those structures without interpreting the
//! rest of the document. It is a pure library: extraction returns byte spans
//! into the caller's buffer and never mutates or writes anything. The
//! rewriting of extracted structures into the target dialect lives in
//! `carpo-convert`.

pub mod blocks;
pub mod error;
pub mod front_matter;

pub use blocks::{scan_code_blocks, CodeBlock};
pub use error::ParseError;
pub use front_matter::{FrontMatter, Section};
