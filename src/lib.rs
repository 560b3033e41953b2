//! Transweep - find and remove unused translation keys
//!
//! Transweep flattens a nested JSON translation file into dot-joined keys,
//! searches a project's source files for each key as a whole word, and
//! reports the keys nobody references. `clean` removes them from the file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, prompts, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (flatten, scan, prune)
//! - `issues`: Issue type definitions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
