use std::path::{Path, PathBuf};

use git2::Repository as Git2Repo;

use crate::error::{HeraldError, Result};
use crate::git::{log_format, CommitRange};
use crate::process::Tool;

/// Repository backed by `git2`, with the `git` CLI for fetch and log
pub struct Git2Repository {
    repo: Git2Repo,
    root: PathBuf,
}

impl Git2Repository {
    /// Discover the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                HeraldError::environment("not a git repository (or any parent)")
            } else {
                HeraldError::Git(e)
            }
        })?;

        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        let root = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();
        Git2Repository { repo, root }
    }

    /// Working tree root (the `.git` directory for bare repositories)
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn git(&self) -> Tool {
        Tool::new("git").in_dir(&self.root)
    }
}

impl super::Repository for Git2Repository {
    fn tag_exists(&self, tag: &str) -> bool {
        let reference_name = format!("refs/tags/{}", tag);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => reference.peel(git2::ObjectType::Any).is_ok(),
            Err(e) => {
                if e.code() != git2::ErrorCode::NotFound {
                    log::debug!("cannot look up tag '{}': {}", tag, e);
                }
                false
            }
        }
    }

    fn fetch_tags(&self) -> Result<()> {
        self.git()
            .run(&["fetch", "--tags", "--force", "--quiet"])
            .map_err(|e| HeraldError::tool("failed to fetch tags", e))?;
        Ok(())
    }

    fn commit_log(&self, range: &CommitRange) -> Result<String> {
        let format = format!("--format={}", log_format());
        let revspec = range.revspec();

        self.git()
            .run(&["log", "--stat", &format, &revspec])
            .map_err(|e| HeraldError::tool("failed to get commit details", e))
    }
}
