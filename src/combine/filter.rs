use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Normalize a raw extension token: ensure a leading dot, then lowercase.
///
/// `go`, `.go`, `.Go` and `GO` all become `.go`.
pub fn normalize_extension(token: &str) -> String {
    let dotted = if token.starts_with('.') {
        token.to_string()
    } else {
        format!(".{token}")
    };
    dotted.to_lowercase()
}

/// Extension of the final path element, from its last dot, lowercased.
///
/// Returns an empty string when the name has no dot. A leading-dot name such
/// as `.bashrc` is its own extension.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(idx) => name[idx..].to_lowercase(),
        None => String::new(),
    }
}

/// Set of normalized extensions controlling which files are combined.
///
/// An empty filter accepts every file. Built once from the command line and
/// never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = tokens
            .into_iter()
            .map(|token| normalize_extension(token.as_ref()))
            .collect();
        Self { extensions }
    }

    /// Filter that includes every file
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    /// Whether the file at `path` should be included
    pub fn matches(&self, path: &Path) -> bool {
        self.is_empty() || self.extensions.contains(&extension_of(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("*");
        }
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(", "))
    }
}
