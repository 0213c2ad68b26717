use std::fs;
use std::path::PathBuf;

use ignore::{Walk, WalkBuilder};

use super::error::CombineError;

/// Deterministic, sequential walk over a root path
///
/// Entries are sorted by file name at every directory level so two runs over
/// an unchanged tree visit files in the same order. Hidden files are always
/// visited; ignore files are only honoured when `use_gitignore` is set.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: PathBuf,
    follow_links: bool,
    use_gitignore: bool,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_links: false,
            use_gitignore: false,
        }
    }

    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    pub fn use_gitignore(mut self, yes: bool) -> Self {
        self.use_gitignore = yes;
        self
    }

    /// Start the walk, failing if the root cannot be inspected
    pub fn candidates(&self) -> Result<Candidates, CombineError> {
        fs::metadata(&self.root).map_err(|source| CombineError::Root {
            path: self.root.clone(),
            source,
        })?;

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(self.use_gitignore)
            .hidden(false)
            .parents(false)
            .follow_links(self.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        if self.use_gitignore {
            builder.require_git(false);
        }

        tracing::debug!(
            "Walking {} (follow_links={}, use_gitignore={})",
            self.root.display(),
            self.follow_links,
            self.use_gitignore
        );

        Ok(Candidates {
            root: self.root.clone(),
            walk: builder.build(),
        })
    }
}

/// Iterator over file candidates in walk order
///
/// Yields regular files plus symlinks that were not followed; the reader
/// decides whether a link is readable. Directories and special files are
/// skipped. A walk error ends the run.
pub struct Candidates {
    root: PathBuf,
    walk: Walk,
}

impl Iterator for Candidates {
    type Item = Result<PathBuf, CombineError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(CombineError::Walk {
                        root: self.root.clone(),
                        source,
                    }));
                }
            };

            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_file() || file_type.is_symlink() {
                return Some(Ok(entry.into_path()));
            }
            if !file_type.is_dir() {
                tracing::debug!("Skipping special file {}", entry.path().display());
            }
        }
    }
}
