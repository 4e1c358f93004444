//! Main workflow orchestration logic
//!
//! Runs the release-notes pipeline one step at a time: resolve the target
//! and previous release, digest the commit range, prompt the model, write the
//! notes and publish them. Collaborators come in as traits so the whole
//! pipeline runs against in-memory doubles in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::config::{default_output_dir, Config};
use crate::domain::{is_latest_alias, strip_preamble, CommitDigest, ReleaseHistory};
use crate::error::{HeraldError, Result};
use crate::git::{CommitRange, Repository, COMMIT_DELIMITER};
use crate::github::ReleaseHost;
use crate::model::NotesModel;
use crate::prompt::{self, PromptContext};
use crate::ui::{self, Palette};

/// Linked from the attribution footer
pub const PROJECT_URL: &str = "https://github.com/AndreyAkinshin/herald";

/// Arguments for the release-notes workflow
///
/// Mirrors the CLI arguments merged with configuration, in a form that does
/// not depend on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Release tag, or `latest` / `last`
    pub tag: String,

    /// Extra instructions appended to the prompt
    pub instructions: Option<String>,

    /// Explicit notes file; defaults to `<output_dir>/<repo>-<tag>.md`
    pub output: Option<PathBuf>,

    pub output_dir: PathBuf,

    /// herald version shown in the footer
    pub version: String,

    /// Ask before updating the release
    pub confirm: bool,

    pub footer: bool,

    pub changelog_link: bool,

    pub fetch_tags: bool,

    /// Generate notes without updating the release
    pub dry_run: bool,

    /// Echo the prompt before generation
    pub verbose: bool,
}

impl WorkflowArgs {
    /// Arguments for `tag` with every option at its default.
    pub fn new(tag: impl Into<String>, version: impl Into<String>) -> Self {
        WorkflowArgs {
            tag: tag.into(),
            instructions: None,
            output: None,
            output_dir: default_output_dir(),
            version: version.into(),
            confirm: true,
            footer: true,
            changelog_link: true,
            fetch_tags: true,
            dry_run: false,
            verbose: false,
        }
    }

    /// Apply file configuration underneath the command-line values.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.output_dir = config.output.directory.clone();
        self.confirm &= config.behavior.confirm;
        self.footer &= config.output.footer;
        self.changelog_link &= config.output.changelog_link;
        self.fetch_tags &= config.behavior.fetch_tags;
        self
    }
}

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The resolved target tag
    pub tag: String,

    /// Start of the commit range, if any
    pub previous_tag: Option<String>,

    pub notes_path: PathBuf,

    pub prompt_path: PathBuf,

    pub commit_count: usize,

    /// Whether the release notes were updated on the host
    pub published: bool,
}

/// Main release-notes workflow
///
/// 1. Fetch tags and list releases
/// 2. Resolve `latest` and look up the target release
/// 3. Find the previous release whose tag still exists
/// 4. Digest the commit range and render the prompt
/// 5. Generate notes, strip preamble, append changelog link and footer
/// 6. Write and preview the notes, then publish unless dry-run or declined
///
/// `confirm` is asked before publishing when `args.confirm` is set; a `false`
/// answer ends the run with [HeraldError::UserAbort].
pub fn run_workflow<R, H, M, C>(
    args: WorkflowArgs,
    repo: &R,
    host: &H,
    model: &M,
    palette: &Palette,
    mut confirm: C,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    H: ReleaseHost + ?Sized,
    M: NotesModel + ?Sized,
    C: FnMut(&str) -> Result<bool>,
{
    if args.fetch_tags {
        log::info!("Fetching tags...");
        repo.fetch_tags()?;
    }

    log::info!("Fetching releases...");
    let releases = host.list_releases()?;
    let history = ReleaseHistory::new(&releases);

    let tag = if is_latest_alias(&args.tag) {
        log::info!("Resolving latest release...");
        let latest = history.latest()?.tag_name.clone();
        println!("Latest release: {}", palette.cyan(&latest));
        latest
    } else {
        args.tag.clone()
    };

    log::info!("Fetching repository info...");
    let repo_info = host.repo_info()?;

    let notes_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.output_dir, &repo_info.name, &tag));
    let prompt_path = prompt_path_for(&notes_path);

    log::info!("Fetching release {}...", tag);
    let release = host.release(&tag)?;
    if release.is_draft {
        ui::display_boundary_warning(palette, &BoundaryWarning::DraftRelease { tag: tag.clone() });
    }

    log::info!("Finding previous release...");
    let mut skipped = Vec::new();
    let previous = history.previous_valid(&tag, |candidate| {
        let exists = repo.tag_exists(candidate);
        if !exists {
            log::debug!("Skipping release {}: tag not found", candidate);
            skipped.push(candidate.to_string());
        }
        exists
    })?;
    let previous_tag = previous.map(|r| r.tag_name.clone());

    if !skipped.is_empty() {
        ui::display_boundary_warning(
            palette,
            &BoundaryWarning::SkippedDeletedTags { tags: skipped },
        );
    }

    let range = match previous_tag {
        Some(ref prev) => {
            log::info!("Previous release: {}", prev);
            CommitRange::between(prev.as_str(), tag.as_str())
        }
        None => {
            ui::display_boundary_warning(
                palette,
                &BoundaryWarning::NoPreviousRelease { tag: tag.clone() },
            );
            CommitRange::up_to(tag.as_str())
        }
    };
    ui::display_release_range(palette, previous_tag.as_deref(), &tag);

    log::info!("Getting commit details for {}...", range);
    let digest = CommitDigest::parse(&repo.commit_log(&range)?, COMMIT_DELIMITER);
    if digest.skipped_blocks > 0 {
        ui::display_boundary_warning(
            palette,
            &BoundaryWarning::MalformedCommitBlocks {
                count: digest.skipped_blocks,
            },
        );
    }
    if digest.is_empty() {
        ui::display_boundary_warning(
            palette,
            &BoundaryWarning::NoCommits {
                range: range.to_string(),
            },
        );
    }

    let prompt_text = prompt::render(&PromptContext {
        target_tag: &tag,
        previous_tag: previous_tag.as_deref(),
        commit_details: &digest.text,
        instructions: args.instructions.as_deref(),
    });

    if let Some(dir) = prompt_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(&prompt_path, &prompt_text)?;
    ui::display_saved(palette, "Prompt", &prompt_path);

    if args.verbose {
        ui::display_section(palette, "Prompt", &prompt_text);
    }

    remove_stale(&notes_path)?;

    ui::display_status(palette, "Generating release notes with Claude...");
    let mut notes = strip_preamble(&model.generate(&prompt_text)?);

    if let (Some(prev), true) = (previous_tag.as_deref(), args.changelog_link) {
        notes = append_full_changelog(&notes, &repo_info.name_with_owner, prev, &tag);
    }
    if args.footer {
        notes = append_footer(&notes, &args.version);
    }

    fs::write(&notes_path, &notes)?;
    ui::display_saved(palette, "Release notes", &notes_path);
    ui::display_section(palette, "Preview", &notes);

    let mut result = WorkflowResult {
        tag: tag.clone(),
        previous_tag,
        notes_path,
        prompt_path,
        commit_count: digest.commit_count,
        published: false,
    };

    if args.dry_run {
        println!("{}", palette.yellow("\nDry run: release not updated"));
        return Ok(result);
    }

    if args.confirm && !confirm(&format!("Update release {} with these notes?", tag))? {
        return Err(HeraldError::UserAbort);
    }

    ui::display_status(palette, "Updating release...");
    host.update_release_notes(&tag, &result.notes_path)?;
    ui::display_success(palette, &format!("Release {} updated successfully", tag));

    result.published = true;
    Ok(result)
}

/// `<dir>/<repo>-<tag>.md`, with path separators in the tag replaced.
pub fn default_output_path(dir: &Path, repo_name: &str, tag: &str) -> PathBuf {
    let tag = tag.replace(['/', '\\'], "-");
    dir.join(format!("{}-{}.md", repo_name, tag))
}

/// Prompt file written next to the notes: `notes.md` → `notes-prompt.md`.
pub fn prompt_path_for(notes_path: &Path) -> PathBuf {
    let notes = notes_path.to_string_lossy();
    let base = notes.strip_suffix(".md").unwrap_or(&notes);
    PathBuf::from(format!("{}-prompt.md", base))
}

/// Append the herald attribution footer.
pub fn append_footer(notes: &str, version: &str) -> String {
    format!(
        "{}\n\n*Release notes generated by [herald v{}]({})*\n",
        notes.trim_end_matches('\n'),
        version,
        PROJECT_URL
    )
}

/// Append a "Full Changelog" compare link.
pub fn append_full_changelog(notes: &str, name_with_owner: &str, prev: &str, tag: &str) -> String {
    format!(
        "{}\n\n**Full Changelog**: https://github.com/{}/compare/{}...{}\n",
        notes.trim_end_matches('\n'),
        name_with_owner,
        prev,
        tag
    )
}

/// Delete a previous notes file so stale output is never mistaken for new.
fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}
