use herald::boundary::BoundaryWarning;
use herald::ui::{self, Palette};

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_no_previous_release_display() {
    let warning = BoundaryWarning::NoPreviousRelease {
        tag: "v1.0.0".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "No previous release found for 'v1.0.0'; using full history"
    );
}

#[test]
fn test_boundary_warning_skipped_deleted_tags_display() {
    let warning = BoundaryWarning::SkippedDeletedTags {
        tags: vec!["v1.1.0".to_string(), "v1.0.1".to_string()],
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.ends_with("v1.1.0, v1.0.1"),
        "Message should list skipped tags in order, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_commits_display() {
    let warning = BoundaryWarning::NoCommits {
        range: "v1.0.0..v1.0.1".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("v1.0.0..v1.0.1"),
        "Message should contain the range, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_malformed_blocks_display() {
    let warning = BoundaryWarning::MalformedCommitBlocks { count: 2 };
    assert_eq!(
        warning.to_string(),
        "Ignored 2 malformed commit block(s) in git log output"
    );
}

#[test]
fn test_boundary_warning_draft_display() {
    let warning = BoundaryWarning::DraftRelease {
        tag: "v2.0.0-rc.1".to_string(),
    };
    assert_eq!(warning.to_string(), "Release 'v2.0.0-rc.1' is a draft");
}

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::NoPreviousRelease {
        tag: "v1.0.0".to_string(),
    };
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(
        a,
        BoundaryWarning::NoPreviousRelease {
            tag: "v2.0.0".to_string()
        }
    );
}

// ============================================================================
// Display Integration
// ============================================================================

#[test]
fn test_display_boundary_warning_does_not_panic() {
    let warnings = vec![
        BoundaryWarning::NoPreviousRelease {
            tag: "v1.0.0".to_string(),
        },
        BoundaryWarning::SkippedDeletedTags { tags: vec![] },
        BoundaryWarning::NoCommits {
            range: "v1.0.0".to_string(),
        },
        BoundaryWarning::MalformedCommitBlocks { count: 1 },
        BoundaryWarning::DraftRelease {
            tag: "v1.0.0".to_string(),
        },
    ];

    for palette in [Palette::plain(), Palette::new(true)] {
        for warning in &warnings {
            ui::display_boundary_warning(&palette, warning);
        }
    }
}
