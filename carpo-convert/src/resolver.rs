//! Lexer-tag resolution extension point
//!
//! Syntax highlighters are picked by language tag, and some hosts hand over
//! compound tags like `highlight.python`. Rather than patching the host's
//! highlighting pipeline wholesale, the tag-normalization step is an
//! explicit strategy: the converter carries a boxed [`LexerTagResolver`] in
//! its [`Options`](crate::Options) and applies it to every derived tag, and
//! hosts embedding this crate can plug their own.

/// Strategy for normalizing a language tag before lexer lookup
///
/// Resolvers are stateless and infallible; anything the downstream lexer
/// lookup raises stays the host's concern.
pub trait LexerTagResolver: Send + Sync {
    /// The name of this resolver (e.g., "dotted", "verbatim")
    fn name(&self) -> &str;

    /// Normalize a language tag
    fn resolve(&self, tag: &str) -> String;
}

/// Resolves compound dotted tags to their second segment
///
/// `highlight.python` -> `python`; a tag without a dot passes through
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DottedTagResolver;

impl LexerTagResolver for DottedTagResolver {
    fn name(&self) -> &str {
        "dotted"
    }

    fn resolve(&self, tag: &str) -> String {
        match tag.split('.').nth(1) {
            Some(second) => second.to_string(),
            None => tag.to_string(),
        }
    }
}

/// Identity resolver for hosts that want the raw tag
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimTagResolver;

impl LexerTagResolver for VerbatimTagResolver {
    fn name(&self) -> &str {
        "verbatim"
    }

    fn resolve(&self, tag: &str) -> String {
        tag.to_string()
    }
}
