use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use crate::error::{HeraldError, Result};
use crate::git::{CommitRange, Repository};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: HashSet<String>,
    logs: HashMap<String, String>,
    fetch_count: Cell<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: HashSet::new(),
            logs: HashMap::new(),
            fetch_count: Cell::new(0),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    /// Set the raw log dump returned for `range`
    pub fn set_log(&mut self, range: &CommitRange, raw: impl Into<String>) {
        self.logs.insert(range.revspec(), raw.into());
    }

    /// Number of times [Repository::fetch_tags] was called
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.get()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn tag_exists(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    fn fetch_tags(&self) -> Result<()> {
        self.fetch_count.set(self.fetch_count.get() + 1);
        Ok(())
    }

    fn commit_log(&self, range: &CommitRange) -> Result<String> {
        self.logs.get(&range.revspec()).cloned().ok_or_else(|| {
            HeraldError::runtime(format!("failed to get commit details for {}", range))
        })
    }
}
