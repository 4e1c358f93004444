//! Commit range digest for the model prompt.
//!
//! Input is the output of `git log --stat` with a sentinel-delimited format:
//!
//! ```text
//! <delim>
//! <full hash>
//! <message, possibly multi-line>
//!
//! <delim>-STAT
//!  <file stats>
//! ```
//!
//! Output is one block per commit (`Commit:`, message, `Changed files:`)
//! separated by [`COMMIT_SEPARATOR`], or [`NO_COMMITS`] for an empty range.

/// Digest of an empty range.
pub const NO_COMMITS: &str = "(no commits)";

/// Appended to the delimiter to mark the start of a commit's file stats.
pub const STAT_SUFFIX: &str = "-STAT";

/// Placed between consecutive commit blocks.
pub const COMMIT_SEPARATOR: &str = "\n---\n\n";

/// One commit borrowed from the raw log text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord<'a> {
    pub hash: &'a str,
    pub message: &'a str,
    pub stat: &'a str,
}

impl CommitRecord<'_> {
    fn write_to(&self, out: &mut String) {
        out.push_str("Commit: ");
        out.push_str(self.hash);
        out.push_str("\n\n");
        out.push_str(self.message);
        out.push_str("\n\nChanged files:\n");
        if !self.stat.is_empty() {
            out.push_str(self.stat);
            out.push('\n');
        }
    }
}

/// Rendered digest plus what the parse kept and dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDigest {
    pub text: String,
    pub commit_count: usize,
    /// Blocks dropped because their header or hash was empty
    pub skipped_blocks: usize,
}

impl CommitDigest {
    pub fn parse(raw: &str, delimiter: &str) -> Self {
        let raw = raw.trim();
        let mut digest = CommitDigest {
            text: String::new(),
            commit_count: 0,
            skipped_blocks: 0,
        };

        if !raw.is_empty() {
            let stat_marker = format!("{}{}", delimiter, STAT_SUFFIX);
            for block in split_blocks(raw, delimiter, &stat_marker) {
                let block = block.trim();
                if block.is_empty() || block == STAT_SUFFIX {
                    continue;
                }

                match parse_block(block, &stat_marker) {
                    Some(record) => {
                        if digest.commit_count > 0 {
                            digest.text.push_str(COMMIT_SEPARATOR);
                        }
                        record.write_to(&mut digest.text);
                        digest.commit_count += 1;
                    }
                    None => digest.skipped_blocks += 1,
                }
            }
        }

        if digest.commit_count == 0 {
            digest.text = NO_COMMITS.to_string();
        }

        digest
    }

    pub fn is_empty(&self) -> bool {
        self.commit_count == 0
    }
}

/// Render the digest of a raw commit log.
pub fn parse_commit_log(raw: &str, delimiter: &str) -> String {
    CommitDigest::parse(raw, delimiter).text
}

/// Split `text` at each `delimiter` that does not start a stat marker.
fn split_blocks<'a>(text: &'a str, delimiter: &str, stat_marker: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![text];
    }

    let mut blocks = Vec::new();
    let mut start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(delimiter) {
        let at = cursor + offset;
        if text[at..].starts_with(stat_marker) {
            cursor = at + stat_marker.len();
            continue;
        }
        blocks.push(&text[start..at]);
        start = at + delimiter.len();
        cursor = start;
    }

    blocks.push(&text[start..]);
    blocks
}

fn parse_block<'a>(block: &'a str, stat_marker: &str) -> Option<CommitRecord<'a>> {
    let (header, stat) = match block.split_once(stat_marker) {
        Some((header, stat)) => (header.trim(), stat.trim()),
        None => (block.trim(), ""),
    };

    if header.is_empty() {
        return None;
    }

    let (hash, message) = match header.split_once('\n') {
        Some((hash, message)) => (hash.trim(), message.trim()),
        None => (header.trim(), ""),
    };

    if hash.is_empty() {
        return None;
    }

    Some(CommitRecord {
        hash,
        message,
        stat,
    })
}
