use std::fmt;

/// Non-fatal conditions met while assembling release notes.
/// These are reported to the user and the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No earlier release with an existing tag; the full history is used
    NoPreviousRelease { tag: String },
    /// Releases whose git tag no longer exists were passed over
    SkippedDeletedTags { tags: Vec<String> },
    /// The range contains no commits
    NoCommits { range: String },
    /// Log blocks without a header or hash were dropped from the digest
    MalformedCommitBlocks { count: usize },
    /// The target release is still a draft
    DraftRelease { tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPreviousRelease { tag } => {
                write!(
                    f,
                    "No previous release found for '{}'; using full history",
                    tag
                )
            }
            BoundaryWarning::SkippedDeletedTags { tags } => {
                write!(
                    f,
                    "Skipped release(s) whose tag no longer exists: {}",
                    tags.join(", ")
                )
            }
            BoundaryWarning::NoCommits { range } => {
                write!(f, "No commits found in range '{}'", range)
            }
            BoundaryWarning::MalformedCommitBlocks { count } => {
                write!(f, "Ignored {} malformed commit block(s) in git log output", count)
            }
            BoundaryWarning::DraftRelease { tag } => {
                write!(f, "Release '{}' is a draft", tag)
            }
        }
    }
}
