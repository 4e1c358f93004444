//! Git operations abstraction layer
//!
//! The [Repository] trait covers what the release-notes pipeline needs from
//! version control: a tag existence check, tag fetching and the raw commit
//! log dump for a range. Implementations:
//!
//! - [repository::Git2Repository]: `git2` for discovery and tag lookups, the
//!   `git` CLI for `fetch` and `log --stat`
//! - [mock::MockRepository]: in-memory double for tests
//!
//! ```rust
//! # use herald::git::{CommitRange, Repository};
//! # fn example<R: Repository>(repo: &R) -> herald::Result<()> {
//! let range = CommitRange::between("v1.0.0", "v1.1.0");
//! let raw = repo.commit_log(&range)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::fmt;

use crate::error::Result;

/// Sentinel between commits in the log dump. Must never occur in real
/// commit content.
pub const COMMIT_DELIMITER: &str = "---HERALD-COMMIT---";

/// `git log --format` value producing the layout the digester parses.
pub fn log_format() -> String {
    format!(
        "{d}%n%H%n%B%n{d}{stat}",
        d = COMMIT_DELIMITER,
        stat = crate::domain::digest::STAT_SUFFIX
    )
}

/// Commits to include in the notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRange {
    /// Commits reachable from `to` but not from `from`
    Between { from: String, to: String },
    /// Every commit reachable from `to` (first release)
    UpTo(String),
}

impl CommitRange {
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        CommitRange::Between {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn up_to(to: impl Into<String>) -> Self {
        CommitRange::UpTo(to.into())
    }

    /// Revision argument understood by `git log`
    pub fn revspec(&self) -> String {
        match self {
            CommitRange::Between { from, to } => format!("{}..{}", from, to),
            CommitRange::UpTo(to) => to.clone(),
        }
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.revspec())
    }
}

/// Version-control operations used by the release-notes pipeline
pub trait Repository {
    /// Returns true if `tag` names an existing tag.
    ///
    /// Lookup failures other than "not found" are reported as missing; a
    /// release whose tag cannot be resolved is unusable as a range bound.
    fn tag_exists(&self, tag: &str) -> bool;

    /// Fetch tags from the default remote so CI-created tags exist locally.
    fn fetch_tags(&self) -> Result<()>;

    /// Raw `git log --stat` output for `range` in the [log_format] layout.
    fn commit_log(&self, range: &CommitRange) -> Result<String>;
}
