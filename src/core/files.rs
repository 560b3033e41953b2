use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use walkdir::{DirEntry, WalkDir};

pub const DEFAULT_IGNORES: &[&str] = &["**/node_modules", "**/node_modules/**"];

/// Normalize a user-supplied extension list: trim, strip a leading `.`,
/// drop blanks.
pub fn normalize_extensions<S: AsRef<str>>(extensions: &[S]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.as_ref().trim().trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .map(String::from)
        .collect()
}

/// Glob for the source files below the project root.
///
/// `**/*.{js,ts}` for several extensions, `**/*.js` for one, `**/*` when
/// none are given.
pub fn source_glob<S: AsRef<str>>(extensions: &[S]) -> String {
    let extensions = normalize_extensions(extensions);
    match extensions.as_slice() {
        [] => "**/*".to_string(),
        [single] => format!("**/*.{}", single),
        many => format!("**/*.{{{}}}", many.join(",")),
    }
}

/// Which files under a project root are scanned for key usages.
#[derive(Debug, Clone)]
pub struct SourcePattern {
    root: PathBuf,
    glob: String,
    matcher: GlobMatcher,
    ignores: GlobSet,
}

impl SourcePattern {
    pub fn new<S: AsRef<str>>(root: &Path, extensions: &[S], ignores: &[String]) -> Result<Self> {
        let glob = source_glob(extensions);
        let matcher = GlobBuilder::new(&glob)
            .literal_separator(true)
            .build()
            .with_context(|| format!("Invalid file pattern: \"{}\"", glob))?
            .compile_matcher();

        let mut builder = GlobSetBuilder::new();
        for pattern in ignores {
            let ignore = Glob::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
            builder.add(ignore);
        }
        let ignores = builder
            .build()
            .context("Failed to build ignore patterns")?;

        Ok(Self {
            root: root.to_path_buf(),
            glob,
            matcher,
            ignores,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a path relative to the root is a scanned source file.
    pub fn matches(&self, relative: &Path) -> bool {
        self.matcher.is_match(relative) && !self.ignores.is_match(relative)
    }

    fn is_ignored_dir(&self, relative: &Path) -> bool {
        self.ignores.is_match(relative)
    }

    /// Lazily walk the project tree, yielding matching files in file-name
    /// order. Walk errors are yielded so the caller can count them.
    pub fn files(&self) -> impl Iterator<Item = walkdir::Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| self.keep_entry(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    let relative = entry.path().strip_prefix(&self.root).ok()?;
                    self.matches(relative)
                        .then(|| Ok(entry.path().to_path_buf()))
                }
                Err(e) => Some(Err(e)),
            })
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        if is_hidden(entry) {
            return false;
        }
        if entry.file_type().is_dir()
            && let Ok(relative) = entry.path().strip_prefix(&self.root)
        {
            return !self.is_ignored_dir(relative);
        }
        true
    }
}

impl std::fmt::Display for SourcePattern {
    /// Renders as `{root}/{glob}`, e.g. `./src/**/*.{js,ts}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let root = self.root.to_string_lossy();
        if root.ends_with('/') || root.ends_with(std::path::MAIN_SEPARATOR) {
            write!(f, "{}{}", root, self.glob)
        } else {
            write!(f, "{}/{}", root, self.glob)
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
