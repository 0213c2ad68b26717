//! # clap - slap all your files into one
//!
//! Concatenates the files under a directory tree into a single output file.
//! Every included file becomes a block headed by its path:
//!
//! ```text
//! === src/main.go ===
//! <raw file bytes>
//!
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything under src/ into src/clap.file
//! clap src
//!
//! # Only Go and Markdown files, into src/context.txt
//! clap -o context.txt src go .md
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use clap_slap::{Combiner, ExtensionFilter, FileRecord, Progress};
//! use std::path::Path;
//!
//! struct Quiet;
//!
//! impl Progress for Quiet {
//!     fn included(&mut self, _record: &FileRecord) {}
//!     fn skipped(&mut self, _path: &Path, _error: &std::io::Error) {}
//! }
//!
//! let filter = ExtensionFilter::new(["rs", "toml"]);
//! let report = Combiner::default().combine(
//!     Path::new("."),
//!     &filter,
//!     Path::new("bundle.txt"),
//!     &mut Quiet,
//! )?;
//! println!("{} bytes from {} files", report.bytes_written, report.files_included);
//! # Ok::<(), clap_slap::CombineError>(())
//! ```

pub mod cli;
pub mod combine;
pub mod config;

pub use cli::{Cli, Output};
pub use combine::{
    CombineError, CombineOptions, CombineReport, Combiner, ExtensionFilter, FileRecord, Progress,
};
pub use config::ClapConfig;

/// Result type alias for clap operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
