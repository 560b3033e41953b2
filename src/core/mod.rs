//! Core analysis engine.
//!
//! The pipeline runs in three steps:
//!
//! 1. **Flatten**: the translation file becomes an ordered list of
//!    dot-joined leaf keys (`flatten`).
//! 2. **Scan**: source files selected by a brace-expanding glob (`files`)
//!    are searched for word-bounded occurrences of each key (`scanner`).
//! 3. **Prune**: unused keys are removed from a freshly read document and
//!    emptied containers are collapsed (`prune`, `document`).
//!
//! Everything here is driven by an explicit [`ScanSettings`] value, so it
//! can be used without the CLI.

pub mod document;
pub mod files;
pub mod flatten;
pub mod prune;
pub mod scanner;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

pub use document::TranslationFile;
pub use files::SourcePattern;
pub use flatten::{FlatKeys, flatten};
pub use scanner::{KeyMatcher, KeyUsage, SkippedFile, scan};

use crate::issues::{MessageLocation, UnusedKeyIssue};

/// Everything an analysis run needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub translation_file: PathBuf,
    pub project_path: PathBuf,
    /// File extensions to scan. Empty means every file.
    pub extensions: Vec<String>,
    /// Glob patterns (relative to the project path) excluded from scanning.
    pub ignores: Vec<String>,
}

impl ScanSettings {
    /// Check that the translation file and project path exist.
    pub fn validate(&self) -> Result<()> {
        if !self.translation_file.is_file() {
            bail!(
                "Translation file not found: {}",
                self.translation_file.display()
            );
        }
        if !self.project_path.exists() {
            bail!("Project path not found: {}", self.project_path.display());
        }
        Ok(())
    }

    pub fn source_pattern(&self) -> Result<SourcePattern> {
        SourcePattern::new(&self.project_path, &self.extensions, &self.ignores)
    }
}

/// Scan results for a translation file that defines at least one key.
#[derive(Debug)]
pub struct ScanReport {
    /// Rendered glob, e.g. `./**/*.{js,ts}`.
    pub pattern: String,
    pub usage: KeyUsage,
    /// Unused keys in translation file order.
    pub unused: Vec<UnusedKeyIssue>,
}

/// Outcome of analysing one translation file against a project.
#[derive(Debug)]
pub struct Analysis {
    pub translation_file: PathBuf,
    pub key_count: usize,
    /// `None` when the translation file has no keys and nothing was scanned.
    pub scan: Option<ScanReport>,
}

impl Analysis {
    pub fn unused(&self) -> &[UnusedKeyIssue] {
        self.scan
            .as_ref()
            .map(|scan| scan.unused.as_slice())
            .unwrap_or_default()
    }

    pub fn unused_keys(&self) -> Vec<&str> {
        self.unused().iter().map(|issue| issue.key.as_str()).collect()
    }
}

/// Flatten the translation file, scan the project and split used from
/// unused keys.
pub fn analyze(settings: &ScanSettings) -> Result<Analysis> {
    settings.validate()?;

    let file = TranslationFile::open(&settings.translation_file)?;
    let keys = file.flatten();
    tracing::debug!(count = keys.len(), file = %file.path().display(), "translation keys loaded");

    if keys.is_empty() {
        return Ok(Analysis {
            translation_file: settings.translation_file.clone(),
            key_count: 0,
            scan: None,
        });
    }

    let pattern = settings.source_pattern()?;
    tracing::debug!(%pattern, "scanning source files");
    let usage = scan(pattern.files(), keys.keys())?;

    let unused = unused_issues(&file, &keys, &usage);

    Ok(Analysis {
        translation_file: settings.translation_file.clone(),
        key_count: keys.len(),
        scan: Some(ScanReport {
            pattern: pattern.to_string(),
            usage,
            unused,
        }),
    })
}

fn unused_issues(file: &TranslationFile, keys: &FlatKeys, usage: &KeyUsage) -> Vec<UnusedKeyIssue> {
    let file_path = file.path().to_string_lossy().to_string();
    keys.iter()
        .filter(|(key, _)| !usage.is_used(key))
        .map(|(key, value)| UnusedKeyIssue {
            location: MessageLocation::new(file_path.clone(), file.line_of(key)),
            key: key.to_string(),
            value: value.clone(),
        })
        .collect()
}

/// Remove keys from the translation file on disk.
///
/// The file is read fresh rather than reusing an earlier parse, pruned,
/// collapsed and written back atomically. Returns the number of keys
/// removed.
pub fn remove_unused_keys<S: AsRef<str>>(translation_file: &Path, keys: &[S]) -> Result<usize> {
    let mut file = TranslationFile::open(translation_file)?;
    let removed = file.remove_keys(keys);
    if removed > 0 {
        file.save()?;
    }
    Ok(removed)
}
