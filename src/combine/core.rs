use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::buffer::OutputBuffer;
use super::error::CombineError;
use super::filter::ExtensionFilter;
use super::record::FileRecord;
use super::walker::TreeWalker;

/// Observer for per-file events of a combine run
pub trait Progress {
    /// A matching file was read and appended
    fn included(&mut self, record: &FileRecord);

    /// A matching file could not be read and was left out
    fn skipped(&mut self, path: &Path, error: &io::Error);
}

/// Walk behaviour for a [`Combiner`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CombineOptions {
    pub follow_links: bool,
    pub use_gitignore: bool,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineReport {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub files_included: usize,
    pub files_skipped: usize,
}

/// Concatenates matching files under a root path into a single file
#[derive(Debug, Clone, Default)]
pub struct Combiner {
    options: CombineOptions,
}

impl Combiner {
    pub fn new(options: CombineOptions) -> Self {
        Self { options }
    }

    /// Walk `root`, combine every file accepted by `filter`, and write the
    /// result to `output_name`.
    ///
    /// The output file is created only after the walk has finished, so it is
    /// never read back within the same run. A later run over the same tree
    /// will pick it up if the filter accepts its extension.
    pub fn combine(
        &self,
        root: &Path,
        filter: &ExtensionFilter,
        output_name: &Path,
        progress: &mut impl Progress,
    ) -> Result<CombineReport, CombineError> {
        let walker = TreeWalker::new(root)
            .follow_links(self.options.follow_links)
            .use_gitignore(self.options.use_gitignore);

        tracing::debug!("Combining {} with filter [{}]", root.display(), filter);

        let mut buffer = OutputBuffer::new();
        let mut files_skipped = 0;

        for candidate in walker.candidates()? {
            let path = candidate?;
            if !filter.matches(&path) {
                tracing::trace!("Filtered out {}", path.display());
                continue;
            }

            match FileRecord::read(&path) {
                Ok(record) => {
                    progress.included(&record);
                    buffer.append(&record);
                }
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", path.display(), e);
                    progress.skipped(&path, &e);
                    files_skipped += 1;
                }
            }
        }

        let output_path = Self::resolve_output_path(root, output_name);
        write_output(&output_path, buffer.as_bytes()).map_err(|source| {
            CombineError::Output {
                path: output_path.clone(),
                source,
            }
        })?;

        tracing::info!(
            "Wrote {} bytes from {} files to {}",
            buffer.len(),
            buffer.block_count(),
            output_path.display()
        );

        Ok(CombineReport {
            output_path,
            bytes_written: buffer.len(),
            files_included: buffer.block_count(),
            files_skipped,
        })
    }

    /// Where the output lands for a given root
    ///
    /// Absolute names are used as given. Relative names are joined to the
    /// root directory, or to the parent directory when the root is a file.
    pub fn resolve_output_path(root: &Path, output_name: &Path) -> PathBuf {
        if output_name.is_absolute() {
            return output_name.to_path_buf();
        }
        let base = if root.is_file() {
            root.parent().unwrap_or_else(|| Path::new(""))
        } else {
            root
        };
        base.join(output_name)
    }
}

/// Create or truncate `path` (mode 0644 on Unix) and write `bytes` to it
fn write_output(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = open_output(path)?;
    file.write_all(bytes)?;
    file.flush()
}

#[cfg(unix)]
fn open_output(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn open_output(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
