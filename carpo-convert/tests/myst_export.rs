//! End-to-end conversion of a small but complete episode

use carpo_convert::{convert_episode, Options};

const EPISODE: &str = concat!(
    "---\n",
    "title: \"Intro\"\n",
    "questions:\n",
    "- What is X?\n",
    "objectives:\n",
    "- Learn X\n",
    "keypoints:\n",
    "- X is useful\n",
    "---\n",
    "~~~\n",
    "print(\"hi\")\n",
    "~~~\n",
    "{: .language-python}\n",
);

const EXPECTED: &str = concat!(
    "# Intro\n",
    "\n",
    "````{admonition} Overview\n",
    ":class: overview\n",
    "\n",
    "Questions:\n",
    "- What is X?\n",
    "\n",
    "Objectives:\n",
    "- Learn X\n",
    "````\n",
    "\n",
    "````{tab-set-code} \n",
    "\n",
    "```{code-block} python\n",
    "print(\"hi\")\n",
    "```\n",
    "````\n",
    "\n",
    "````{admonition} Key Points\n",
    ":class: key\n",
    "\n",
    "- X is useful\n",
    "````\n",
);

#[test]
fn converts_reference_episode_byte_for_byte() {
    let out = convert_episode(EPISODE, &Options::default()).unwrap();
    assert_eq!(out, EXPECTED);
}

#[test]
fn multi_language_episode() {
    let episode = concat!(
        "---\n",
        "title: Shell and R\n",
        "questions:\n",
        "- How?\n",
        "objectives:\n",
        "- Do it\n",
        "keypoints:\n",
        "- Done\n",
        "---\n",
        "\n",
        "Run this:\n",
        "\n",
        "~~~\n",
        "$ ls\n",
        "~~~\n",
        "{: .language-bash}\n",
        "\n",
        "Which prints:\n",
        "\n",
        "~~~\n",
        "out.txt\n",
        "~~~\n",
        "{: .output}\n",
    );

    let out = convert_episode(episode, &Options::default()).unwrap();
    assert!(out.starts_with("# Shell and R\n\n"));
    assert!(out.contains("```{code-block} shell\n$ ls\n```"));
    assert!(out.contains("```{code-block} output\nout.txt\n```"));
    assert!(out.contains("Run this:\n"));
    assert!(out.contains("Which prints:\n"));
    assert!(!out.contains("~~~"));
}
