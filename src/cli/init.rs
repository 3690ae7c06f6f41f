//! Init command implementation.
//!
//! Generates an `iconsheet.yaml` with one input group per directory that
//! holds `.svg` files.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use indexmap::IndexMap;
use walkdir::{DirEntry, WalkDir};

use crate::config::{EnumRule, PartialConfig, SpriteRule, CONFIG_FILENAME};
use crate::error::{Result, SheetError};
use crate::output::{display_path, plural, Printer};
use crate::util::upper_camel;

/// Directories never treated as icon sources.
const IGNORED_DIRS: &[&str] = &["dist", "node_modules", "target"];

/// Create an iconsheet.yaml for a directory of icons
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing iconsheet.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(SheetError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let dirs = find_icon_dirs(&args.path);

    let layer = starter_config(&dirs);
    let yaml = serde_yaml::to_string(&layer).map_err(|e| SheetError::Config {
        message: format!("Failed to serialize config: {}", e),
        help: None,
    })?;

    fs::write(&config_path, yaml)
        .map_err(|e| SheetError::io(&config_path, "Failed to write config", e))?;

    if !dirs.is_empty() {
        let names: Vec<String> = dirs.iter().map(|d| display_dir(d)).collect();
        printer.info("Discovered", &names.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({})",
            CONFIG_FILENAME,
            plural(dirs.len(), "input group", "input groups")
        ),
    );

    Ok(())
}

/// Directories under `root` (relative to it) that directly contain `.svg`
/// files. Hidden and build directories are not searched.
pub fn find_icon_dirs(root: &Path) -> BTreeSet<PathBuf> {
    let mut dirs = BTreeSet::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(e));

    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let is_svg = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
        if !is_svg {
            continue;
        }
        if let Some(parent) = entry.path().parent() {
            let relative = parent.strip_prefix(root).unwrap_or(parent);
            dirs.insert(relative.to_path_buf());
        }
    }

    dirs
}

fn is_ignored(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || IGNORED_DIRS.iter().any(|ignored| name == *ignored)
}

/// Group id for a directory: `icons/brand` → `IconsBrand`, root → `Icons`.
pub fn group_id(dir: &Path) -> String {
    let slug: Vec<String> = dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy().replace(['_', ' ', '.'], "-"))
        .filter(|s| !s.is_empty())
        .collect();
    let id = upper_camel(&slug.join("-"));
    if id.is_empty() {
        "Icons".to_string()
    } else {
        id
    }
}

/// A configuration layer covering `dirs`: one sheet and one enum per group.
pub fn starter_config(dirs: &BTreeSet<PathBuf>) -> PartialConfig {
    let mut input = IndexMap::new();
    for dir in dirs {
        let path = if dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            dir.clone()
        };
        input.insert(group_id(dir), path);
    }

    PartialConfig {
        input: Some(input),
        sprites: Some(vec![SpriteRule::new("dist/{input}.svg")]),
        enums: Some(vec![EnumRule::new("dist/icons.ts", "{input}")]),
        ..Default::default()
    }
}

fn display_dir(dir: &Path) -> String {
    if dir.as_os_str().is_empty() {
        ".".to_string()
    } else {
        format!("{}/", dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_config() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("icons/brand")).unwrap();
        fs::write(dir.path().join("icons/brand/github.svg"), "<svg/>").unwrap();
        fs::create_dir_all(dir.path().join("svg")).unwrap();
        fs::write(dir.path().join("svg/home.svg"), "<svg/>").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::plain()).unwrap();

        let layer = PartialConfig::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        let input = layer.input.unwrap();
        let ids: Vec<&str> = input.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["IconsBrand", "Svg"]);
        assert_eq!(input["IconsBrand"], PathBuf::from("icons/brand"));
        assert_eq!(layer.sprites.unwrap()[0].path, "dist/{input}.svg");
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "indent_size: 2\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &Printer::plain()).is_err());

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::plain()).unwrap();
        let content = fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(content.contains("sprites"));
    }

    #[test]
    fn test_find_icon_dirs_skips_build_and_hidden() {
        let dir = tempdir().unwrap();
        for sub in ["dist", ".cache", "node_modules/pkg", "assets"] {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
            fs::write(dir.path().join(sub).join("x.svg"), "<svg/>").unwrap();
        }
        fs::write(dir.path().join("assets/readme.md"), "").unwrap();

        let dirs = find_icon_dirs(dir.path());

        assert_eq!(dirs.into_iter().collect::<Vec<_>>(), vec![PathBuf::from("assets")]);
    }

    #[test]
    fn test_group_id() {
        assert_eq!(group_id(Path::new("svg")), "Svg");
        assert_eq!(group_id(Path::new("icons/material_design")), "IconsMaterialDesign");
        assert_eq!(group_id(Path::new("")), "Icons");
    }

    #[test]
    fn test_starter_config_root_dir() {
        let mut dirs = BTreeSet::new();
        dirs.insert(PathBuf::new());

        let layer = starter_config(&dirs);

        assert_eq!(layer.input.unwrap()["Icons"], PathBuf::from("."));
    }
}
