//! Front-matter extraction
//!
//! The front-matter is the first region bounded by a line consisting solely
//! of `---` and the nearest following such line. Inside it we read one
//! `title:` line and any number of bulleted sections:
//!
//!     questions:
//!     - What is a variable?
//!     - How do I print?
//!
//! Section values are kept raw, `- ` markers included; rendering decides
//! what to do with them. Double quotes are stripped from the whole interior
//! before any field is read, matching how episode titles are usually quoted.

use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

/// Lazy-compiled regex for the delimited front-matter region. Lazy `.+?`
/// keeps the match bounded by the first closing delimiter. The block group
/// stops at the closing `---`; the newline after it is matched but not
/// captured, so it survives replacement as a separator.
static FRONT_MATTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?sm)^(---\n(.+?)\n^---)\n").unwrap());

/// Lazy-compiled regex for the title line inside the front-matter.
static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^title: (.+)").unwrap());

/// Lazy-compiled regex for a bulleted section: a bare `key:` line, the
/// remainder of the following line, and every immediately subsequent `- `
/// line.
static SECTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([A-Za-z]+):\n(.*(?:\n- .*)*)").unwrap());

/// One bulleted front-matter section, value kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    /// Raw bullet lines, `- ` markers included
    pub bullets: String,
}

/// Parsed episode front-matter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    pub title: String,
    /// Sections in order of appearance
    pub sections: Vec<Section>,
}

impl FrontMatter {
    /// Extract the front-matter from an episode source buffer.
    ///
    /// Returns the parsed front-matter together with the byte span of the
    /// delimited block, both `---` lines included. The newline after the
    /// closing delimiter is outside the span, so callers splicing a
    /// replacement in keep the blank separation that follows the block.
    pub fn extract(source: &str) -> Result<(FrontMatter, Range<usize>), ParseError> {
        let caps = FRONT_MATTER_REGEX
            .captures(source)
            .ok_or(ParseError::MissingFrontMatter)?;
        let whole = caps.get(1).ok_or(ParseError::MissingFrontMatter)?;
        let interior = caps
            .get(2)
            .ok_or(ParseError::MissingFrontMatter)?
            .as_str()
            .replace('"', "");

        let title = TITLE_REGEX
            .captures(&interior)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or(ParseError::MissingTitle)?;

        let sections = SECTION_REGEX
            .captures_iter(&interior)
            .map(|c| Section {
                name: c[1].to_string(),
                bullets: c[2].to_string(),
            })
            .collect();

        Ok((FrontMatter { title, sections }, whole.range()))
    }

    /// Look up a section by name. Duplicate names overwrite, so the last
    /// occurrence wins.
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .find(|s| s.name == name)
            .map(|s| s.bullets.as_str())
    }

    /// Like [`section`](Self::section), but a missing section is an error.
    pub fn require(&self, name: &str) -> Result<&str, ParseError> {
        self.section(name)
            .ok_or_else(|| ParseError::MissingSection(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPISODE: &str = "---\n\
title: \"Intro\"\n\
teaching: 10\n\
questions:\n\
- What is X?\n\
- Why X?\n\
objectives:\n\
- Learn X\n\
keypoints:\n\
- X is useful\n\
---\n\
\n\
Body text.\n";

    #[test]
    fn extracts_title_and_sections() {
        let (fm, span) = FrontMatter::extract(EPISODE).unwrap();
        assert_eq!(fm.title, "Intro");
        assert_eq!(fm.section("questions"), Some("- What is X?\n- Why X?"));
        assert_eq!(fm.section("objectives"), Some("- Learn X"));
        assert_eq!(fm.section("keypoints"), Some("- X is useful"));
        assert_eq!(span.start, 0);
        assert!(EPISODE[span.clone()].starts_with("---\ntitle:"));
        assert!(EPISODE[span.clone()].ends_with("\n---"));
        // The newline after the closing delimiter stays outside the span
        assert_eq!(&EPISODE[span.end..span.end + 1], "\n");
    }

    #[test]
    fn strips_quotes_from_interior() {
        let src = "---\ntitle: \"Quoted \"Title\"\"\nquestions:\n- q\n---\n";
        let (fm, _) = FrontMatter::extract(src).unwrap();
        assert_eq!(fm.title, "Quoted Title");
    }

    #[test]
    fn section_order_is_preserved() {
        let (fm, _) = FrontMatter::extract(EPISODE).unwrap();
        let names: Vec<_> = fm.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["questions", "objectives", "keypoints"]);
    }

    #[test]
    fn duplicate_section_last_wins() {
        let src = "---\ntitle: t\nquestions:\n- first\nquestions:\n- second\n---\n";
        let (fm, _) = FrontMatter::extract(src).unwrap();
        assert_eq!(fm.section("questions"), Some("- second"));
    }

    #[test]
    fn stops_at_first_closing_delimiter() {
        let src = "---\ntitle: t\nquestions:\n- q\n---\n\nprose\n\n---\n";
        let (_, span) = FrontMatter::extract(src).unwrap();
        assert_eq!(&src[span], "---\ntitle: t\nquestions:\n- q\n---");
    }

    #[rstest]
    #[case::no_delimiters("no delimiters here\n", ParseError::MissingFrontMatter)]
    #[case::unclosed("---\ntitle: t\nquestions:\n- q\n", ParseError::MissingFrontMatter)]
    #[case::no_title("---\nquestions:\n- q\n---\n", ParseError::MissingTitle)]
    fn extraction_errors(#[case] source: &str, #[case] expected: ParseError) {
        assert_eq!(FrontMatter::extract(source).unwrap_err(), expected);
    }

    #[test]
    fn require_reports_section_name() {
        let (fm, _) = FrontMatter::extract(EPISODE).unwrap();
        assert_eq!(
            fm.require("challenges").unwrap_err(),
            ParseError::MissingSection("challenges".to_string())
        );
    }
}
