//! The conversion pipeline and file driver
//!
//! Stages, in order: extract the front-matter, splice a `# <title>` heading
//! and the Overview admonition over its span, rewrite every annotated
//! fenced block, append the Key Points admonition. Each stage works on one
//! in-memory buffer; a parse failure at any point aborts the run with no
//! output written.

use crate::error::ConvertError;
use crate::language;
use crate::resolver::{DottedTagResolver, LexerTagResolver};
use crate::templates;
use carpo_parser::{scan_code_blocks, FrontMatter};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Knobs for one conversion run
pub struct Options {
    /// Canonicalization table applied to derived tags (default: bash -> shell)
    pub language_aliases: HashMap<String, String>,
    /// Remove `$` prompt characters from `shell` blocks (default: off)
    pub strip_shell_prompts: bool,
    /// Tag normalization applied after derivation and aliasing
    pub resolver: Box<dyn LexerTagResolver>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            language_aliases: language::default_aliases(),
            strip_shell_prompts: false,
            resolver: Box::new(DottedTagResolver),
        }
    }
}

/// Convert one episode source buffer to the MyST dialect.
///
/// The `questions`, `objectives`, and `keypoints` sections are required;
/// their bullet text is embedded verbatim. Code inside rewritten blocks is
/// byte-identical to the source unless prompt stripping is enabled for
/// `shell` blocks.
pub fn convert_episode(source: &str, options: &Options) -> Result<String, ConvertError> {
    let (front_matter, span) = FrontMatter::extract(source)?;

    let overview = templates::render_overview(
        front_matter.require("questions")?,
        front_matter.require("objectives")?,
    );
    let key_points = templates::render_key_points(front_matter.require("keypoints")?);

    // Heading first, then the front-matter span replaced by the Overview
    // block. Splicing by span means the replacement happens exactly once,
    // where the extractor found the block.
    let mut text = String::with_capacity(source.len() + overview.len() + key_points.len());
    text.push_str("# ");
    text.push_str(&front_matter.title);
    text.push_str("\n\n");
    text.push_str(&source[..span.start]);
    text.push_str(&overview);
    text.push_str(&source[span.end..]);

    let mut text = rewrite_code_blocks(&text, options);
    text.push_str(&key_points);
    Ok(text)
}

/// Rewrite every annotated fenced block in a single left-to-right pass.
fn rewrite_code_blocks(source: &str, options: &Options) -> String {
    let blocks = scan_code_blocks(source);
    if blocks.is_empty() {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for block in blocks {
        let tag = language::derive_tag(&block.annotation, &options.language_aliases);
        let tag = options.resolver.resolve(&tag);
        let code = if options.strip_shell_prompts && tag == "shell" {
            language::strip_prompts(&block.code)
        } else {
            block.code
        };

        out.push_str(&source[cursor..block.span.start]);
        out.push_str(&templates::render_code_block(&tag, &code));
        cursor = block.span.end;
    }
    out.push_str(&source[cursor..]);
    out
}

/// Convert an episode file and write the result.
///
/// The output file is created or truncated only after conversion succeeds;
/// I/O failures report the offending path and the underlying cause.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<(), ConvertError> {
    let source = fs::read_to_string(input).map_err(|e| ConvertError::Io {
        path: input.to_path_buf(),
        source: e,
    })?;
    let converted = convert_episode(&source, options)?;
    fs::write(output, converted).map_err(|e| ConvertError::Io {
        path: output.to_path_buf(),
        source: e,
    })
}
