//! Issue types for unused key analysis results.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it and the cleaner needs to remove it.

use serde_json::Value;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnusedKey,
    UnreadableFile,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnusedKey => write!(f, "unused-key"),
            Rule::UnreadableFile => write!(f, "unreadable-file"),
        }
    }
}

/// Location of a key inside a translation file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// Key defined in the translation file but not found in any scanned file.
#[derive(Debug, Clone, PartialEq)]
pub struct UnusedKeyIssue {
    pub location: MessageLocation,
    /// Dot-joined key path, e.g. `home.title`.
    pub key: String,
    /// The leaf value, shown next to the key in reports.
    pub value: Value,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }

    /// Short single-line rendering of the value for reports.
    pub fn value_preview(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
