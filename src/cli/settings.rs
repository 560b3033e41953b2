//! Resolve [`ScanSettings`] from command line arguments.
//!
//! Priority (highest to lowest):
//! 1. Interactive answers (`--interactive`), which default to the values below
//! 2. CLI arguments (e.g. `--project-path ./src`)
//! 3. `.transweeprc.json` config file
//! 4. Built-in defaults

use std::{
    env,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{args::CommonArgs, prompt};
use crate::{
    config::{Config, load_config},
    core::{ScanSettings, files::normalize_extensions},
};

pub fn resolve(common: &CommonArgs) -> Result<ScanSettings> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    let loaded = load_config(&cwd)?;
    let base = loaded
        .path
        .as_deref()
        .and_then(Path::parent)
        .filter(|dir| *dir != cwd.as_path());

    let settings = merge(common, &loaded.config, base);
    if common.interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout().lock();
        return ask_settings(&mut input, &mut output, settings);
    }
    Ok(settings)
}

/// Combine CLI arguments with a config file. Relative paths from the config
/// file are taken relative to `config_dir` when given.
pub fn merge(common: &CommonArgs, config: &Config, config_dir: Option<&Path>) -> ScanSettings {
    let from_config = |value: &str| {
        let path = PathBuf::from(value);
        match config_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    };

    let extensions = match &common.extensions {
        Some(extensions) => normalize_extensions(extensions),
        None => normalize_extensions(&config.extensions),
    };

    ScanSettings {
        translation_file: common
            .translation_file
            .clone()
            .unwrap_or_else(|| from_config(&config.translation_file)),
        project_path: common
            .project_path
            .clone()
            .unwrap_or_else(|| from_config(&config.project_path)),
        extensions,
        ignores: config.ignores.clone(),
    }
}

/// Ask for the translation file, project path and extensions, offering the
/// current settings as defaults.
pub fn ask_settings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: ScanSettings,
) -> Result<ScanSettings> {
    let translation_file = prompt::ask(
        input,
        output,
        "Path to your translation file:",
        &defaults.translation_file.to_string_lossy(),
    )?;
    let project_path = prompt::ask(
        input,
        output,
        "Project root to check for key usages:",
        &defaults.project_path.to_string_lossy(),
    )?;
    let extensions = prompt::ask(
        input,
        output,
        "File extensions to check (comma-separated, \"*\" for all files):",
        &defaults.extensions.join(","),
    )?;

    let extensions: Vec<&str> = if extensions.trim() == "*" {
        Vec::new()
    } else {
        extensions.split(',').collect()
    };

    Ok(ScanSettings {
        translation_file: PathBuf::from(translation_file),
        project_path: PathBuf::from(project_path),
        extensions: normalize_extensions(&extensions),
        ignores: defaults.ignores,
    })
}
