//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::path::Path;

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print the final status line for a created project (green checkmark, bold path)
pub fn created(root: &Path) {
    println!(
        "{} Project structure created at: {}",
        "✓".green(),
        root.display().to_string().bold()
    );
}

/// Print a numbered list under a cyan header, preceded by a blank line
pub fn numbered(header: &str, items: &[String]) {
    println!();
    println!("{}", header.cyan().bold());
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
}
