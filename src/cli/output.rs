//! Console output for clap
//!
//! Progress and results go to stdout, errors to stderr. `console` drops the
//! styling when the stream is not a terminal, so piped output stays plain.

use std::io;
use std::path::Path;

use console::style;

use crate::combine::{FileRecord, Progress};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print the progress line for an included file
    pub fn file_line(&self, path: &Path, size: u64) {
        if !self.quiet {
            println!(
                "{} {}",
                path.display(),
                style(format!("({size} bytes)")).dim()
            );
        }
    }
}

impl Progress for Output {
    fn included(&mut self, record: &FileRecord) {
        self.file_line(&record.path, record.size);
    }

    fn skipped(&mut self, path: &Path, error: &io::Error) {
        self.warning(&format!("Error reading file {}: {}", path.display(), error));
    }
}
