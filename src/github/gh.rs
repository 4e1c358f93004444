use std::path::Path;
use std::thread;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::Release;
use crate::error::{HeraldError, Result};
use crate::github::{is_rate_limited, RepoInfo, ReleaseHost};
use crate::process::{ensure_installed, Tool, ToolFailure};

const RELEASE_FIELDS: &str = "tagName,publishedAt,isDraft,isPrerelease";
const RELEASE_LIST_LIMIT: &str = "999";

/// [ReleaseHost] implemented by shelling out to the GitHub CLI
#[derive(Debug, Clone)]
pub struct GhCli {
    tool: Tool,
    attempts: u32,
    base_delay: Duration,
}

impl GhCli {
    /// `attempts` bounds how often a rate-limited call is tried (minimum 1).
    pub fn new(attempts: u32) -> Self {
        GhCli {
            tool: Tool::new("gh"),
            attempts: attempts.max(1),
            base_delay: Duration::from_secs(1),
        }
    }

    /// Use a different program in place of `gh`
    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tool = tool;
        self
    }

    /// First backoff delay; doubles on every retry
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Verify gh is installed and authenticated.
    pub fn check_available(&self) -> Result<()> {
        ensure_installed(self.tool.program())?;
        self.tool.run(&["auth", "status"]).map_err(|e| {
            HeraldError::environment(format!("gh CLI not available or not authenticated: {}", e))
        })?;
        Ok(())
    }

    fn run(&self, args: &[&str]) -> std::result::Result<String, ToolFailure> {
        let mut attempt = 1;
        loop {
            match self.tool.run(args) {
                Err(e) if attempt < self.attempts && is_rate_limited(e.stderr()) => {
                    let delay = self.base_delay * 2u32.pow(attempt - 1);
                    log::warn!(
                        "gh rate limited (attempt {}/{}), retrying in {:?}",
                        attempt,
                        self.attempts,
                        delay
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    fn query<T: DeserializeOwned>(&self, args: &[&str], context: &str, what: &str) -> Result<T> {
        let stdout = self
            .run(args)
            .map_err(|e| HeraldError::tool(context.to_string(), e))?;
        serde_json::from_str(&stdout).map_err(|e| HeraldError::json(what, e))
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ReleaseHost for GhCli {
    fn list_releases(&self) -> Result<Vec<Release>> {
        self.query(
            &[
                "release",
                "list",
                "--json",
                RELEASE_FIELDS,
                "--limit",
                RELEASE_LIST_LIMIT,
            ],
            "failed to list releases",
            "releases",
        )
    }

    fn release(&self, tag: &str) -> Result<Release> {
        self.query(
            &["release", "view", tag, "--json", RELEASE_FIELDS],
            &format!("failed to get release {}", tag),
            "release",
        )
    }

    fn repo_info(&self) -> Result<RepoInfo> {
        self.query(
            &["repo", "view", "--json", "name,nameWithOwner"],
            "failed to get repository info",
            "repository info",
        )
    }

    fn update_release_notes(&self, tag: &str, notes_file: &Path) -> Result<()> {
        let notes_file = notes_file.to_string_lossy();
        self.run(&["release", "edit", tag, "--notes-file", &notes_file])
            .map_err(|e| HeraldError::tool(format!("failed to update release {}", tag), e))?;
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    /// Write an executable shell script standing in for gh
    fn fake_gh(dir: &Path, body: &str) -> Tool {
        let path = dir.join("gh");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Tool::new(path.to_string_lossy().into_owned())
    }

    #[test]
    fn test_list_releases_parses_json() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_gh(
            dir.path(),
            r#"echo '[{"tagName":"v1.0","publishedAt":"2025-01-01T00:00:00Z","isDraft":false,"isPrerelease":false}]'"#,
        );
        let gh = GhCli::new(1).with_tool(tool);

        let releases = gh.list_releases().unwrap();
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].tag_name, "v1.0");
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let gh = GhCli::new(1).with_tool(fake_gh(dir.path(), "echo nope"));

        let err = gh.repo_info().unwrap_err();
        assert!(matches!(err, HeraldError::Json { .. }));
    }

    #[test]
    fn test_failure_reports_context() {
        let dir = tempfile::tempdir().unwrap();
        let gh = GhCli::new(1).with_tool(fake_gh(
            dir.path(),
            "echo 'release not found' >&2; exit 1",
        ));

        let err = gh.release("v9.0").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("failed to get release v9.0"));
        assert!(msg.contains("release not found"));
    }

    #[test]
    fn test_rate_limited_call_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let counter = dir.path().join("calls");
        let script = format!(
            "echo x >> '{c}'\nif [ $(wc -l < '{c}') -lt 3 ]; then echo 'HTTP 429: Too Many Requests' >&2; exit 1; fi\necho '{{\"name\":\"herald\",\"nameWithOwner\":\"octo/herald\"}}'",
            c = counter.display()
        );
        let gh = GhCli::new(3)
            .with_tool(fake_gh(dir.path(), &script))
            .with_base_delay(Duration::from_millis(1));

        let info = gh.repo_info().unwrap();
        assert_eq!(info.name_with_owner, "octo/herald");
        assert_eq!(fs::read_to_string(&counter).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_retries_are_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let counter = dir.path().join("calls");
        let script = format!(
            "echo x >> '{}'\necho 'HTTP 429' >&2\nexit 1",
            counter.display()
        );
        let gh = GhCli::new(2)
            .with_tool(fake_gh(dir.path(), &script))
            .with_base_delay(Duration::from_millis(1));

        assert!(gh.list_releases().is_err());
        assert_eq!(fs::read_to_string(&counter).unwrap().lines().count(), 2);
    }
}
