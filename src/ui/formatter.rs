//! Pure formatting functions for UI output.
//!
//! Everything here takes the [Palette] explicitly; nothing reads terminal
//! state on its own.

use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::ui::Palette;

/// Format and print an error message in bold red.
pub fn display_error(palette: &Palette, message: &str) {
    eprintln!("{} {}", palette.bold_red("Error:"), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(palette: &Palette, message: &str) {
    println!("{} {}", palette.green("✓"), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(palette: &Palette, message: &str) {
    println!("{} {}", palette.yellow("→"), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(palette: &Palette, warning: &BoundaryWarning) {
    eprintln!("{} {}", palette.bold_yellow("⚠ WARNING:"), warning);
}

/// Announce a file written to disk, e.g. "Prompt saved to /tmp/herald/x.md".
pub fn display_saved(palette: &Palette, what: &str, path: &Path) {
    println!("{} saved to {}", what, palette.cyan(&path.display().to_string()));
}

/// Print `body` between dimmed `--- title ---` rulers.
pub fn display_section(palette: &Palette, title: &str, body: &str) {
    println!("{}", format_section(palette, title, body));
}

pub fn format_section(palette: &Palette, title: &str, body: &str) -> String {
    format!(
        "{}\n{}\n{}",
        palette.dim(&format!("\n--- {} ---", title)),
        body.trim_end_matches('\n'),
        palette.dim(&format!("--- End {} ---", title))
    )
}

/// Display the resolved release range.
pub fn display_release_range(palette: &Palette, previous: Option<&str>, target: &str) {
    match previous {
        Some(prev) => println!(
            "Release range: {} → {}",
            palette.cyan(prev),
            palette.cyan(target)
        ),
        None => println!("Release range: {} {}", palette.cyan(target), palette.dim("(full history)")),
    }
}
