//! Episode-to-MyST conversion for the carpo toolchain
//!
//!     This crate turns an extracted Carpentries episode into the MyST
//!     dialect consumed by the Sphinx-based lesson build: a `# <title>`
//!     heading, an Overview admonition built from the `questions` and
//!     `objectives` bullets, every `~~~`/`{: .class}` block rewritten as a
//!     `{tab-set-code}` fenced block with a canonical language tag, and a
//!     trailing Key Points admonition.
//!
//!     This is a pure lib, that is, it powers carpo-cli but is shell
//!     agnostic; nothing in here prints or reads env vars. File I/O is
//!     confined to [`pipeline::convert_file`].
//!
//!     The file structure:
//!     .
//!     ├── error.rs        # ConvertError
//!     ├── language.rs     # annotation -> language tag derivation + aliases
//!     ├── resolver.rs     # LexerTagResolver extension point
//!     ├── templates.rs    # byte-exact MyST block renderers
//!     ├── pipeline.rs     # the conversion stages and the file driver
//!     └── lib.rs
//!
//! Rewriting strategy
//!
//!     Replacement is offset-based: the extractor hands back byte spans and
//!     the pipeline splices rendered blocks in a single left-to-right pass.
//!     Two textually identical source blocks therefore still get identical
//!     replacements, but prose that happens to repeat a block's text is
//!     never touched.
//!
//! Round-tripping
//!
//!     Conversion is one-way. The output uses a different fence dialect
//!     than the one the scanner recognizes, so running the converter on its
//!     own output is not supported.

pub mod error;
pub mod language;
pub mod pipeline;
pub mod resolver;
pub mod templates;

pub use error::ConvertError;
pub use pipeline::{convert_episode, convert_file, Options};
pub use resolver::{DottedTagResolver, LexerTagResolver, VerbatimTagResolver};
