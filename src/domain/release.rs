use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{HeraldError, Result};

/// Symbolic tag values that resolve to the most recently published release.
pub const LATEST_ALIASES: &[&str] = &["latest", "last"];

/// A published release as reported by the hosting platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub tag_name: String,

    /// Drafts report no publication time; they sort as the oldest entries.
    #[serde(default = "unpublished", deserialize_with = "nullable_timestamp")]
    pub published_at: DateTime<Utc>,

    #[serde(default)]
    pub is_draft: bool,

    #[serde(default)]
    pub is_prerelease: bool,
}

impl Release {
    pub fn new(tag_name: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Release {
            tag_name: tag_name.into(),
            published_at,
            is_draft: false,
            is_prerelease: false,
        }
    }
}

fn unpublished() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

fn nullable_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(unpublished))
}

/// Returns true if `tag` asks for the latest release rather than naming one.
pub fn is_latest_alias(tag: &str) -> bool {
    LATEST_ALIASES.contains(&tag)
}

/// Read-only view of a release list ordered newest first.
///
/// The caller's slice is never reordered; the index holds references sorted
/// by publication time. The sort is stable, so releases published at the same
/// instant keep their input order.
#[derive(Debug, Clone)]
pub struct ReleaseHistory<'a> {
    newest_first: Vec<&'a Release>,
}

impl<'a> ReleaseHistory<'a> {
    pub fn new(releases: &'a [Release]) -> Self {
        let mut newest_first: Vec<&Release> = releases.iter().collect();
        newest_first.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        ReleaseHistory { newest_first }
    }

    pub fn len(&self) -> usize {
        self.newest_first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.newest_first.is_empty()
    }

    /// Releases from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &'a Release> + '_ {
        self.newest_first.iter().copied()
    }

    /// The most recently published release.
    pub fn latest(&self) -> Result<&'a Release> {
        self.newest_first
            .first()
            .copied()
            .ok_or_else(|| HeraldError::not_found("no releases found"))
    }

    /// The release published immediately before `tag`, with no tag filtering.
    pub fn previous(&self, tag: &str) -> Result<Option<&'a Release>> {
        self.previous_valid(tag, |_| true)
    }

    /// The nearest release older than `tag` whose tag satisfies `is_valid`.
    ///
    /// Fails only when `tag` is not in the history. `Ok(None)` means there is
    /// no usable predecessor: `tag` is the oldest release, or every older
    /// release was rejected (typically because its git tag was deleted).
    /// With duplicate tags, the newest matching entry is the target.
    pub fn previous_valid<F>(&self, tag: &str, mut is_valid: F) -> Result<Option<&'a Release>>
    where
        F: FnMut(&str) -> bool,
    {
        let target = self
            .newest_first
            .iter()
            .position(|r| r.tag_name == tag)
            .ok_or_else(|| HeraldError::not_found(format!("release {} not found", tag)))?;

        Ok(self.newest_first[target + 1..]
            .iter()
            .copied()
            .find(|r| is_valid(&r.tag_name)))
    }
}

/// Most recently published release in `releases`.
pub fn resolve_latest(releases: &[Release]) -> Result<&Release> {
    ReleaseHistory::new(releases).latest()
}

/// Nearest predecessor of `tag` whose tag passes `is_valid`.
pub fn find_previous_valid<'a, F>(
    releases: &'a [Release],
    tag: &str,
    is_valid: F,
) -> Result<Option<&'a Release>>
where
    F: FnMut(&str) -> bool,
{
    ReleaseHistory::new(releases).previous_valid(tag, is_valid)
}
