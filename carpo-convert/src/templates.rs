//! Byte-exact renderers for the target MyST blocks
//!
//! The downstream lesson build is picky about these shapes (including the
//! trailing space after `{tab-set-code}`), so each renderer produces its
//! block byte-for-byte and embeds the bullet or code text verbatim.

/// Render the Overview admonition from the raw `questions` and `objectives`
/// bullet text.
pub fn render_overview(questions: &str, objectives: &str) -> String {
    format!(
        "````{{admonition}} Overview\n\
         :class: overview\n\
         \n\
         Questions:\n\
         {questions}\n\
         \n\
         Objectives:\n\
         {objectives}\n\
         ````\n"
    )
}

/// Render the Key Points admonition from the raw `keypoints` bullet text.
pub fn render_key_points(key_points: &str) -> String {
    format!(
        "````{{admonition}} Key Points\n\
         :class: key\n\
         \n\
         {key_points}\n\
         ````\n"
    )
}

/// Render one `{tab-set-code}` block with the resolved language tag and the
/// original code verbatim.
pub fn render_code_block(language: &str, code: &str) -> String {
    format!(
        "````{{tab-set-code}} \n\
         \n\
         ```{{code-block}} {language}\n\
         {code}\n\
         ```\n\
         ````\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_shape() {
        let rendered = render_overview("- What is X?", "- Learn X");
        assert_eq!(
            rendered,
            "````{admonition} Overview\n:class: overview\n\nQuestions:\n- What is X?\n\nObjectives:\n- Learn X\n````\n"
        );
    }

    #[test]
    fn key_points_shape() {
        let rendered = render_key_points("- X is useful");
        assert_eq!(
            rendered,
            "````{admonition} Key Points\n:class: key\n\n- X is useful\n````\n"
        );
    }

    #[test]
    fn code_block_shape_keeps_trailing_space() {
        let rendered = render_code_block("python", "print(\"hi\")");
        assert_eq!(
            rendered,
            "````{tab-set-code} \n\n```{code-block} python\nprint(\"hi\")\n```\n````\n"
        );
    }

    #[test]
    fn code_is_embedded_verbatim() {
        let code = "  indented\n\ttabbed\n\nblank inside";
        assert!(render_code_block("r", code).contains(code));
    }
}
