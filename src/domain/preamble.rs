//! Cleanup of generated release notes.
//!
//! The model is told to start directly with content, but it sometimes opens
//! with a `# Release Notes for vX` title or a lead-in such as
//! "Here are the release notes:". Only those two shapes are removed; prose
//! that introduces a `##` section is left alone.

/// Remove a leading H1 title or conversational lead-in from `output`.
pub fn strip_preamble(output: &str) -> String {
    let lines: Vec<&str> = output.split('\n').collect();

    let start = skip_blanks(&lines, 0);
    if start >= lines.len() {
        return output.to_string();
    }

    let first = lines[start];

    if heading_level(first) == 1 {
        return join_from(&lines, skip_blanks(&lines, start + 1));
    }

    if is_conversational_preamble(first) {
        let mut next = skip_blanks(&lines, start + 1);
        if next < lines.len() && is_thematic_break(lines[next]) {
            next = skip_blanks(&lines, next + 1);
        }
        return join_from(&lines, next);
    }

    output.to_string()
}

/// Markdown heading level (1-6) of `line`, or 0 if it is not a heading.
///
/// `#123` (an issue reference) and lines of seven or more `#` are not headings.
pub fn heading_level(line: &str) -> usize {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && line.as_bytes().get(hashes) == Some(&b' ') {
        hashes
    } else {
        0
    }
}

/// A non-heading line ending in `:`, e.g. "Here are the release notes:"
pub fn is_conversational_preamble(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.ends_with(':') && heading_level(line) == 0
}

/// `---`, `***` or `___` on a line of its own
pub fn is_thematic_break(line: &str) -> bool {
    matches!(line.trim(), "---" | "***" | "___")
}

fn skip_blanks(lines: &[&str], mut from: usize) -> usize {
    while from < lines.len() && lines[from].trim().is_empty() {
        from += 1;
    }
    from
}

fn join_from(lines: &[&str], from: usize) -> String {
    lines.get(from..).map(|rest| rest.join("\n")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_heading_unchanged() {
        let input = "## Features\n\n- Added X";
        assert_eq!(strip_preamble(input), input);
    }

    #[test]
    fn test_h1_with_blank_lines() {
        assert_eq!(strip_preamble("# Title\n\n\nBody"), "Body");
    }

    #[test]
    fn test_h1_after_leading_blank_lines() {
        assert_eq!(
            strip_preamble("\n\n# Release Notes for v1.2.0\n\n## Features\n- x\n"),
            "## Features\n- x\n"
        );
    }

    #[test]
    fn test_h1_only() {
        assert_eq!(strip_preamble("# Release Notes\n\n"), "");
    }

    #[test]
    fn test_text_before_h1_unchanged() {
        let input = "Some text\n# Title\nBody";
        assert_eq!(strip_preamble(input), input);
    }

    #[test]
    fn test_conversational_with_thematic_break() {
        assert_eq!(
            strip_preamble("Here are the notes:\n\n---\n\nContent."),
            "Content."
        );
    }

    #[test]
    fn test_conversational_without_break() {
        assert_eq!(
            strip_preamble("Here are the release notes for v2.0:\n## Features\n- y"),
            "## Features\n- y"
        );
    }

    #[test]
    fn test_conversational_alternate_breaks() {
        assert_eq!(strip_preamble("Notes:\n***\nA"), "A");
        assert_eq!(strip_preamble("Notes:\n  ___  \n\nB"), "B");
    }

    #[test]
    fn test_conversational_only() {
        assert_eq!(strip_preamble("Here you go:\n\n---\n"), "");
    }

    #[test]
    fn test_only_first_break_removed() {
        assert_eq!(strip_preamble("Notes:\n---\n---\nX"), "---\nX");
    }

    #[test]
    fn test_h2_start_unchanged() {
        let input = "## Section\nBody";
        assert_eq!(strip_preamble(input), input);
    }

    #[test]
    fn test_heading_ending_in_colon_unchanged() {
        let input = "## Highlights:\n- a";
        assert_eq!(strip_preamble(input), input);
    }

    #[test]
    fn test_plain_text_unchanged() {
        let input = "Just some notes.\nMore.";
        assert_eq!(strip_preamble(input), input);
    }

    #[test]
    fn test_empty() {
        assert_eq!(strip_preamble(""), "");
        assert_eq!(strip_preamble("\n\n  \n"), "\n\n  \n");
    }

    #[test]
    fn test_issue_ref_not_heading() {
        let input = "#123 is a bug\n## Changes\nBody";
        assert_eq!(strip_preamble(input), input);
    }

    #[test]
    fn test_intro_before_h2() {
        let input = "Intro text.\n\n## Features\n- item";
        assert_eq!(strip_preamble(input), input);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level("# Title"), 1);
        assert_eq!(heading_level("### Sub"), 3);
        assert_eq!(heading_level("###### Six"), 6);
        assert_eq!(heading_level("####### Seven"), 0);
        assert_eq!(heading_level("#123"), 0);
        assert_eq!(heading_level("#NoSpace"), 0);
        assert_eq!(heading_level(""), 0);
        assert_eq!(heading_level("#"), 0);
        assert_eq!(heading_level(" # indented"), 0);
    }

    #[test]
    fn test_thematic_break() {
        assert!(is_thematic_break("---"));
        assert!(is_thematic_break(" *** "));
        assert!(!is_thematic_break("----"));
        assert!(!is_thematic_break("- - -"));
    }
}
