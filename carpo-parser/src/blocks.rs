//! Fenced code-block scanning
//!
//! Episode bodies mark code with `~~~` fences followed by a kramdown class
//! annotation line:
//!
//!     ~~~
//!     print("hi")
//!     ~~~
//!     {: .language-python}
//!
//! The scanner returns every such block in document order, with the inner
//! code kept byte-identical and the annotation (`language-python` above)
//! captured verbatim. Fences without a closing line or without an annotation
//! line are not blocks in this dialect; they are simply not matched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

/// Lazy-compiled regex for an annotated fenced block: opening `~~~` line,
/// inner code (lazy, multi-line), closing `~~~` line, then the
/// `{: .<annotation>}` class line. The newline after the class line is
/// matched but not captured, so it survives replacement as a separator.
static CODE_BLOCK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?sm)^(~~~\n(.+?)\n^~~~\n\{: \.(.+?)\})\n").unwrap());

/// One annotated fenced block found in an episode body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Byte span of the whole block through the closing `}` of the
    /// annotation line; the newline after it is outside the span
    pub span: Range<usize>,
    /// Inner code, byte-identical to the source
    pub code: String,
    /// The class annotation, e.g. `language-python` or `output`
    pub annotation: String,
}

/// Scan a buffer for annotated fenced blocks, in document order.
///
/// Spans never overlap; the scan is a single left-to-right pass.
pub fn scan_code_blocks(source: &str) -> Vec<CodeBlock> {
    CODE_BLOCK_REGEX
        .captures_iter(source)
        .map(|caps| {
            let whole = caps.get(1).unwrap();
            CodeBlock {
                span: whole.range(),
                code: caps[2].to_string(),
                annotation: caps[3].to_string(),
            }
        })
        .collect()
}
