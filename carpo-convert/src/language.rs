//! Language-tag derivation from kramdown class annotations
//!
//! Annotations come in two shapes: `language-<tag>` (the common case) and a
//! bare word used directly as the tag (`output`, `error`, ...). Derived tags
//! then pass through an alias table; the default table maps `bash` to
//! `shell`, the name the downstream lesson theme expects.

use std::collections::HashMap;

/// Derive the language tag from a class annotation.
///
/// If the annotation mentions `language`, the tag is its second
/// `-`-separated segment (`language-python` -> `python`); otherwise the
/// annotation itself is the tag. The result is then canonicalized through
/// `aliases`.
pub fn derive_tag(annotation: &str, aliases: &HashMap<String, String>) -> String {
    let tag = if annotation.contains("language") {
        annotation.split('-').nth(1).unwrap_or(annotation)
    } else {
        annotation
    };
    match aliases.get(tag) {
        Some(canonical) => canonical.clone(),
        None => tag.to_string(),
    }
}

/// The built-in alias table: `bash` -> `shell`.
pub fn default_aliases() -> HashMap<String, String> {
    let mut aliases = HashMap::new();
    aliases.insert("bash".to_string(), "shell".to_string());
    aliases
}

/// Remove `$` prompt characters from shell code.
///
/// Off by default; enabled through
/// [`Options::strip_shell_prompts`](crate::Options).
pub fn strip_prompts(code: &str) -> String {
    code.replace('$', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("language-python", "python")]
    #[case("language-r", "r")]
    #[case("language-bash", "shell")]
    #[case("bash", "shell")]
    #[case("output", "output")]
    #[case("error", "error")]
    fn derives_expected_tag(#[case] annotation: &str, #[case] expected: &str) {
        assert_eq!(derive_tag(annotation, &default_aliases()), expected);
    }

    #[test]
    fn alias_table_is_configurable() {
        let mut aliases = default_aliases();
        aliases.insert("output".to_string(), "text".to_string());
        assert_eq!(derive_tag("output", &aliases), "text");
    }

    #[test]
    fn strips_dollar_prompts() {
        assert_eq!(strip_prompts("$ ls -l\n$ pwd"), " ls -l\n pwd");
    }
}
