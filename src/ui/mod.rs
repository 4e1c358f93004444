//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `palette` - Color capability passed through the call chain
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;
pub mod palette;

pub use formatter::{
    display_boundary_warning, display_error, display_release_range, display_saved,
    display_section, display_status, display_success,
};
pub use palette::Palette;

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Displays the given prompt and accepts "y" or "yes" (case-insensitive) as confirmation.
/// Default is "no" if user presses Enter or stdin is closed.
///
/// # Arguments
/// * `palette` - Color capability for the prompt text
/// * `prompt` - The prompt message to display (without the "[y/N]:" suffix)
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise
/// * `Err` - If input error occurs
pub fn confirm_action(palette: &Palette, prompt: &str) -> Result<bool> {
    print!("\n{} {} ", palette.bold(prompt), palette.dim("[y/N]:"));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(is_affirmative(&input))
}

/// Returns true for "y" or "yes", ignoring case and surrounding whitespace.
pub fn is_affirmative(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}
