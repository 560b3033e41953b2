use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use super::{
    flatten::{FlatKeys, flatten},
    prune,
};

/// A JSON translation file loaded for inspection or editing.
///
/// Output is always pretty-printed with 2-space indentation.
#[derive(Debug)]
pub struct TranslationFile {
    path: PathBuf,
    content: String,
    /// Byte offset where each line starts, for line lookups.
    line_starts: Vec<usize>,
    root: Map<String, Value>,
}

impl TranslationFile {
    /// Read and parse a translation file. The top level must be an object.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translation file: {}", path.display()))?;
        Self::parse(path, content)
    }

    fn parse(path: &Path, content: String) -> Result<Self> {
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse translation file: {}", path.display()))?;

        let Value::Object(root) = value else {
            bail!(
                "Translation file '{}' must contain a JSON object at the top level.",
                path.display()
            );
        };

        Ok(Self {
            path: path.to_path_buf(),
            line_starts: line_starts(&content),
            content,
            root,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn flatten(&self) -> FlatKeys {
        flatten(&self.root)
    }

    /// Remove the given key paths and collapse emptied containers.
    pub fn remove_keys<S: AsRef<str>>(&mut self, key_paths: &[S]) -> usize {
        prune::remove_keys(&mut self.root, key_paths)
    }

    /// 1-based line where a key path is defined in the file as read.
    ///
    /// Searches for each key part in sequence so that `Common.submit` finds
    /// the `"submit"` that follows `"Common"`, and only accepts matches
    /// followed by `:` so string values are skipped. Falls back to line 1.
    pub fn line_of(&self, key_path: &str) -> usize {
        let mut search_start = 0;
        for part in key_path.split('.') {
            let pattern = format!("\"{}\"", part);
            let remaining = &self.content[search_start..];

            let mut pos = 0;
            let mut found = false;
            while let Some(rel_pos) = remaining[pos..].find(&pattern) {
                let abs_pos = pos + rel_pos;
                let after_pattern = abs_pos + pattern.len();
                if remaining[after_pattern..].trim_start().starts_with(':') {
                    search_start += after_pattern;
                    found = true;
                    break;
                }
                pos = abs_pos + 1;
            }

            if !found {
                break;
            }
        }

        match self.line_starts.binary_search(&search_start) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Serialize the current document: 2-space indentation, trailing newline.
    pub fn render(&self) -> Result<String> {
        let mut rendered =
            serde_json::to_string_pretty(&self.root).context("Failed to serialize JSON")?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Write the document back to its path.
    ///
    /// Symlinks are followed, so the file they point at is rewritten. The
    /// content goes to a temporary file next to that target, takes over its
    /// permissions and is then renamed over it, so a failed write leaves the
    /// original untouched.
    pub fn save(&self) -> Result<()> {
        let rendered = self.render()?;
        let target = fs::canonicalize(&self.path)
            .with_context(|| format!("Failed to resolve path: {}", self.path.display()))?;
        let permissions = fs::metadata(&target)
            .with_context(|| format!("Failed to read metadata: {}", target.display()))?
            .permissions();
        let dir = target.parent().unwrap_or(Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(rendered.as_bytes())
            .with_context(|| format!("Failed to write file: {}", target.display()))?;
        tmp.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("Failed to set permissions on {}", target.display()))?;
        tmp.persist(&target)
            .with_context(|| format!("Failed to write file: {}", target.display()))?;

        tracing::debug!(path = %target.display(), "translation file written");
        Ok(())
    }
}

fn line_starts(content: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(content.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}
