//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use colored::Colorize;
use newfile_transfer_manifest::NewFiles;
use newfile_transfer_operations::{ByteProgress, PlannedTransfer};

/// Print a header message.
pub fn print_header(message: &str) {
    println!("\n{} {}\n", "📦", message.bold());
}

/// Print where settings come from and where files are read from and copied to.
pub fn print_locations(config_path: Option<&Path>, manifest: &Path, destination: &Path) {
    match config_path {
        Some(path) => println!("Config:      {}", path.display().to_string().cyan()),
        None => println!("Config:      {}", "built-in defaults".dimmed()),
    }
    println!("Manifest:    {}", manifest.display().to_string().cyan());
    println!("Destination: {}", destination.display().to_string().cyan());
    println!();
}

/// Print the new files grouped by folder.
pub fn print_new_files(new_files: &NewFiles) {
    let count = new_files.file_count();
    println!(
        "Files to transfer ({count} file{}):",
        if count == 1 { "" } else { "s" }
    );
    for group in new_files.groups() {
        println!("  {}:", group.folder.display().to_string().yellow());
        for file in &group.files {
            println!("    {} {}", "•".dimmed(), file);
        }
    }
    println!();
}

/// Print the line announcing a copy.
pub fn print_copying(op: &PlannedTransfer) {
    let kind = if op.is_directory { "directory" } else { "file" };
    println!(
        "Copying {kind}: \"{}\" {}",
        op.name.bold(),
        format!(
            "({} file{}, {:.1} MB)",
            op.file_count,
            if op.file_count == 1 { "" } else { "s" },
            ByteProgress::new(op.bytes_total, 0, 0).total_megabytes()
        )
        .dimmed()
    );
}

/// Print a message when there is nothing to transfer.
pub fn print_nothing_new() {
    println!("No new files!");
}

/// Print a message when the user declined the copy.
pub fn print_declined() {
    println!("No files copied.");
}

/// Print success message.
pub fn print_success() {
    println!("{} Done!", "✅");
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
