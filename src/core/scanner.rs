use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use regex::Regex;

use crate::issues::Rule;

/// ASCII word characters never count as a boundary.
const NON_WORD: &str = "[^0-9A-Za-z_]";

/// Matches one translation key as a whole word in source text.
///
/// The key is matched literally (regex metacharacters are escaped) and must
/// be preceded and followed by a non-word character or the start/end of the
/// text, so `a.b` is found in `t('a.b')` but not in `xa.by`.
#[derive(Debug, Clone)]
pub struct KeyMatcher {
    key: String,
    regex: Regex,
}

impl KeyMatcher {
    pub fn new(key: &str) -> Result<Self> {
        let pattern = format!(
            "(?:^|{nw}){key}(?:{nw}|$)",
            nw = NON_WORD,
            key = regex::escape(key)
        );
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Failed to build matcher for key \"{}\"", key))?;
        Ok(Self {
            key: key.to_string(),
            regex,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_used_in(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// A source file that could not be scanned.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub file_path: String,
    pub error: String,
}

/// Accumulated result of scanning source files for key usages.
#[derive(Debug, Default)]
pub struct KeyUsage {
    pub used: HashSet<String>,
    pub files_scanned: usize,
    pub skipped: Vec<SkippedFile>,
}

impl KeyUsage {
    pub fn is_used(&self, key: &str) -> bool {
        self.used.contains(key)
    }

    /// No source file matched the pattern at all.
    pub fn no_files_matched(&self) -> bool {
        self.files_scanned == 0 && self.skipped.is_empty()
    }

    /// Mark every not-yet-used key that occurs in `content`.
    pub fn record(&mut self, matchers: &[KeyMatcher], content: &str) {
        for matcher in matchers {
            if !self.used.contains(matcher.key()) && matcher.is_used_in(content) {
                self.used.insert(matcher.key().to_string());
            }
        }
        self.files_scanned += 1;
    }

    fn skip(&mut self, file_path: String, error: String) {
        tracing::warn!(rule = %Rule::UnreadableFile, file = %file_path, %error, "skipping file");
        self.skipped.push(SkippedFile { file_path, error });
    }

    fn absorb(mut self, matchers: &[KeyMatcher], file: walkdir::Result<PathBuf>) -> Self {
        match file {
            Ok(path) => match fs::read_to_string(&path) {
                Ok(content) => {
                    tracing::debug!(file = %path.display(), "scanning");
                    self.record(matchers, &content);
                }
                Err(e) => self.skip(path.to_string_lossy().to_string(), e.to_string()),
            },
            Err(e) => {
                let file_path = e
                    .path()
                    .map(Path::to_string_lossy)
                    .unwrap_or_default()
                    .to_string();
                self.skip(file_path, e.to_string());
            }
        }
        self
    }
}

/// Compile one matcher per candidate key, in candidate order.
pub fn build_matchers<'a>(keys: impl IntoIterator<Item = &'a str>) -> Result<Vec<KeyMatcher>> {
    keys.into_iter().map(KeyMatcher::new).collect()
}

/// Scan the files, one at a time, for word-bounded occurrences of the
/// candidate keys.
///
/// Files that cannot be read as UTF-8 text are skipped and recorded; every
/// file is visited even once all keys have been found.
pub fn scan<'a, I>(files: I, candidate_keys: impl IntoIterator<Item = &'a str>) -> Result<KeyUsage>
where
    I: IntoIterator<Item = walkdir::Result<PathBuf>>,
{
    let matchers = build_matchers(candidate_keys)?;
    Ok(files
        .into_iter()
        .fold(KeyUsage::default(), |usage, file| usage.absorb(&matchers, file)))
}
