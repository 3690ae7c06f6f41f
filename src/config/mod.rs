//! Configuration resolution.
//!
//! A run's configuration is a chain of [`PartialConfig`] layers merged over
//! the built-in defaults: the project layer (or a configuration file when one
//! exists), then any command-line overrides.
//!
//! # Example
//!
//! ```ignore
//! use iconsheet::config::load_project;
//!
//! let project = load_project(None, Path::new("."), PartialConfig::default())?;
//! println!("{} input group(s)", project.config.input.len());
//! ```

mod file;
mod layer;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use layer::{
    Config, EnumRule, PartialConfig, SpriteRule, DEFAULT_SVG_TAG, INPUT_PLACEHOLDER, MAX_INDENT,
};

/// The name of the configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "iconsheet.yaml";

/// A resolved configuration and the directory its relative paths hang off.
#[derive(Debug, Clone)]
pub struct Project {
    /// Base for relative input and output paths.
    pub root: PathBuf,

    /// The effective configuration.
    pub config: Config,

    /// The configuration file that was loaded, if any.
    pub config_path: Option<PathBuf>,
}

/// Resolve the configuration for a run.
///
/// An explicit `config` path is always loaded. Otherwise `iconsheet.yaml` in
/// `cwd` is used when present, and the project defaults when not. The root is
/// the directory holding the loaded file, or `cwd`.
pub fn load_project(config: Option<&Path>, cwd: &Path, overrides: PartialConfig) -> Result<Project> {
    let discovered = cwd.join(CONFIG_FILENAME);
    let config_path = match config {
        Some(path) => Some(cwd.join(path)),
        None if discovered.is_file() => Some(discovered),
        None => None,
    };

    let (file_layer, root) = match &config_path {
        Some(path) => {
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            (PartialConfig::load(path)?, root)
        }
        None => (PartialConfig::project(), cwd.to_path_buf()),
    };

    Ok(Project {
        root,
        config: Config::resolve([file_layer, overrides]),
        config_path,
    })
}
