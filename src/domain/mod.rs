//! Domain logic - pure functions independent of git, gh and claude

pub mod digest;
pub mod preamble;
pub mod release;

pub use digest::{parse_commit_log, CommitDigest, NO_COMMITS};
pub use preamble::strip_preamble;
pub use release::{find_previous_valid, is_latest_alias, resolve_latest, Release, ReleaseHistory};
