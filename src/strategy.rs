//! Decision points of the generator.
//!
//! Every per-file choice (which outputs a file feeds, how its id, names and
//! fragments are derived, how a sheet opens) is a method on
//! [`IconStrategy`]. The default method bodies give the generic behaviour;
//! [`ConfiguredStrategy`] drives the target choices from a [`Config`].
//! Library users substitute their own implementation to customise a run.

use std::path::{Path, PathBuf};

use crate::config::{Config, EnumRule, SpriteRule, DEFAULT_SVG_TAG};
use crate::extract::{self, Dimensions};
use crate::pipeline::{EnumTarget, ExtractedIcon, FileRef, LoadedFile, Target};
use crate::util::upper_camel;

pub trait IconStrategy {
    /// Sprite sheets the file feeds. Empty skips the file.
    fn sprite_targets_for(&self, file: &FileRef) -> Vec<PathBuf> {
        vec![PathBuf::from(format!("{}.svg", file.input))]
    }

    /// Enum blocks the file feeds. Empty skips the file.
    fn enum_targets_for(&self, file: &FileRef) -> Vec<EnumTarget> {
        vec![EnumTarget::new(format!("{}.ts", file.input), file.input.clone())]
    }

    /// Stable identifier of the icon: the first `id` attribute.
    fn identifier_for(&self, file: &LoadedFile) -> Option<String> {
        extract::svg_id(&file.data).map(str::to_string)
    }

    /// Symbol id inside the sheet, and the value of enum members.
    fn sprite_name_for(&self, icon: &ExtractedIcon, _target: Target<'_>) -> Option<String> {
        icon.svg_id.clone()
    }

    /// Enum member name: the base name in UpperCamelCase.
    fn enum_name_for(&self, icon: &ExtractedIcon, _target: &EnumTarget) -> String {
        upper_camel(&icon.file.base_name)
    }

    fn data_for(&self, icon: &ExtractedIcon) -> Option<String> {
        extract::inner_data(&icon.data).map(str::to_string)
    }

    fn view_box_for(&self, icon: &ExtractedIcon) -> Option<String> {
        extract::view_box(&icon.data).map(str::to_string)
    }

    fn dimensions_for(&self, icon: &ExtractedIcon) -> Dimensions {
        extract::dimensions(&icon.data)
    }

    /// Opening root tag of the sheet written to `path`.
    fn root_tag_for(&self, _path: &Path) -> String {
        DEFAULT_SVG_TAG.to_string()
    }
}

/// Generic behaviour with no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl IconStrategy for DefaultStrategy {}

/// Strategy driven by configured output rules, id prefix and root tag.
#[derive(Debug, Clone)]
pub struct ConfiguredStrategy {
    sprites: Vec<SpriteRule>,
    enums: Vec<EnumRule>,
    id_prefix: Option<String>,
    svg_tag: String,
}

impl ConfiguredStrategy {
    pub fn new(config: &Config) -> Self {
        Self {
            sprites: config.sprites.clone(),
            enums: config.enums.clone(),
            id_prefix: config.id_prefix.clone(),
            svg_tag: config.svg_tag.clone(),
        }
    }
}

impl IconStrategy for ConfiguredStrategy {
    fn sprite_targets_for(&self, file: &FileRef) -> Vec<PathBuf> {
        self.sprites
            .iter()
            .filter(|rule| rule.matches(&file.input, &file.base_name))
            .map(|rule| rule.target(&file.input))
            .collect()
    }

    fn enum_targets_for(&self, file: &FileRef) -> Vec<EnumTarget> {
        self.enums
            .iter()
            .filter(|rule| rule.matches(&file.input, &file.base_name))
            .map(|rule| {
                let (path, name) = rule.target(&file.input);
                EnumTarget::new(path, name)
            })
            .collect()
    }

    fn identifier_for(&self, file: &LoadedFile) -> Option<String> {
        let id = extract::svg_id(&file.data)?;
        Some(match &self.id_prefix {
            // First occurrence only, wherever it sits
            Some(prefix) => id.replacen(prefix.as_str(), "", 1),
            None => id.to_string(),
        })
    }

    fn root_tag_for(&self, _path: &Path) -> String {
        self.svg_tag.clone()
    }
}
