//! Prompt sent to the model

use std::fmt::Write;

/// Inputs to the release-notes prompt
#[derive(Debug, Clone, Default)]
pub struct PromptContext<'a> {
    pub target_tag: &'a str,
    /// None when the target is the first usable release
    pub previous_tag: Option<&'a str>,
    /// Commit digest for the range
    pub commit_details: &'a str,
    /// Extra user instructions; blank means none
    pub instructions: Option<&'a str>,
}

const GUIDELINES: &str = "\
## Writing Guidelines

- Start directly with the content. Do not add a title heading and do not open
  with a sentence such as \"Here are the release notes:\".
- Group changes under `##` sections such as Breaking Changes, Features,
  Bug Fixes, Performance, Documentation and Internal. Omit empty sections.
- Lead with breaking changes and explain how to migrate.
- Describe the user-visible effect of each change, not the implementation.
- Merge related commits into a single entry; skip pure noise such as typo
  fixes in comments or version bumps.
- Reference commits by short hash when it helps the reader.
- Output only Markdown.
";

/// Render the release-notes prompt.
pub fn render(ctx: &PromptContext<'_>) -> String {
    let mut out = String::new();
    let target = ctx.target_tag;

    let _ = writeln!(
        out,
        "Write GitHub release notes for version {} of this repository.\n",
        target
    );

    out.push_str("## Release Range\n\n");
    match ctx.previous_tag {
        Some(prev) => {
            let _ = writeln!(out, "- Previous release: {}", prev);
            let _ = writeln!(out, "- This release: {}", target);
            out.push_str("- The commits below are everything between the two releases.\n\n");
        }
        None => {
            let _ = writeln!(out, "- This release: {}", target);
            out.push_str(
                "- There is no earlier release; the commits below are the full history.\n\n",
            );
        }
    }

    out.push_str("## Useful Commands\n\n");
    out.push_str("You may run these in the repository to inspect changes in depth.\n\n");
    out.push_str("| Purpose | Command |\n|---|---|\n");
    out.push_str("| Show a commit with its diff | `git show <hash>` |\n");
    if let Some(prev) = ctx.previous_tag {
        let _ = writeln!(
            out,
            "| Show diff for file between releases | `git diff {}..{} -- <file>` |",
            prev, target
        );
    }
    let _ = writeln!(
        out,
        "| Show a file as of this release | `git show {}:<file>` |\n",
        target
    );

    out.push_str("## Commits\n\n");
    out.push_str(ctx.commit_details.trim_end());
    out.push_str("\n\n");

    out.push_str(GUIDELINES);

    if let Some(instructions) = ctx.instructions.map(str::trim).filter(|s| !s.is_empty()) {
        out.push_str("\n## Custom Instructions\n\n");
        out.push_str(instructions);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(prev: Option<&'a str>, instructions: Option<&'a str>) -> PromptContext<'a> {
        PromptContext {
            target_tag: "v2.0",
            previous_tag: prev,
            commit_details: "commit details here",
            instructions,
        }
    }

    #[test]
    fn test_with_previous_tag() {
        let got = render(&ctx(Some("v1.0"), None));
        assert!(got.contains("version v2.0"));
        assert!(got.contains("Previous release: v1.0"));
        assert!(got.contains("git diff v1.0..v2.0 -- <file>"));
        assert!(got.contains("commit details here"));
    }

    #[test]
    fn test_without_previous_tag() {
        let got = render(&ctx(None, None));
        assert!(got.contains("version v2.0"));
        assert!(got.contains("full history"));
        assert!(!got.contains("Show diff for file between releases"));
        assert!(got.contains("commit details here"));
    }

    #[test]
    fn test_with_instructions() {
        let got = render(&ctx(None, Some("Very detailed api section")));
        assert!(got.contains("## Custom Instructions"));
        assert!(got.trim_end().ends_with("Very detailed api section"));
    }

    #[test]
    fn test_blank_instructions_omitted() {
        assert!(!render(&ctx(None, None)).contains("Custom Instructions"));
        assert!(!render(&ctx(None, Some("  \n"))).contains("Custom Instructions"));
    }

    #[test]
    fn test_tells_model_not_to_add_preamble() {
        let got = render(&ctx(None, None));
        assert!(got.contains("Do not add a title heading"));
    }
}
