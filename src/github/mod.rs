//! Release hosting operations (GitHub, through the `gh` CLI)

pub mod gh;

pub use gh::GhCli;

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::Release;
use crate::error::Result;

/// Repository metadata from `gh repo view`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoInfo {
    pub name: String,
    /// `owner/name`
    pub name_with_owner: String,
}

/// Where releases are listed and their notes published
pub trait ReleaseHost {
    /// Every release of the current repository, drafts included
    fn list_releases(&self) -> Result<Vec<Release>>;

    /// A single release by tag; fails if it does not exist
    fn release(&self, tag: &str) -> Result<Release>;

    fn repo_info(&self) -> Result<RepoInfo>;

    /// Replace the notes of the release `tag` with the contents of `notes_file`
    fn update_release_notes(&self, tag: &str, notes_file: &Path) -> Result<()>;
}

/// Returns true if `stderr` from gh reports API rate limiting.
pub fn is_rate_limited(stderr: &str) -> bool {
    Regex::new(r"(?i)\b429\b|rate limit")
        .map(|re| re.is_match(stderr))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_rate_limited() {
        let cases = vec![
            ("non-200 OK status code: 429 Too Many Requests body: ...", true),
            ("429", true),
            ("HTTP 403: API rate limit exceeded for user ID 1", true),
            ("not found", false),
            ("release v1.4290 not found", false),
            ("", false),
        ];

        for (stderr, want) in cases {
            assert_eq!(is_rate_limited(stderr), want, "is_rate_limited({:?})", stderr);
        }
    }

    #[test]
    fn test_repo_info_from_json() {
        let info: RepoInfo =
            serde_json::from_str(r#"{"name":"herald","nameWithOwner":"octo/herald"}"#).unwrap();
        assert_eq!(info.name, "herald");
        assert_eq!(info.name_with_owner, "octo/herald");
    }
}
