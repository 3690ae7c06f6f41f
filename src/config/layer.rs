//! Typed configuration layers and their merge rules.
//!
//! Every field of a [`PartialConfig`] is optional. Layers are merged left to
//! right: keyed records (`input`) merge entry by entry, everything else is
//! replaced wholesale by the later layer when that layer sets it.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::util::clamp_usize;

/// Root tag used to open every sprite sheet unless configured otherwise.
pub const DEFAULT_SVG_TAG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" xml:space=\"preserve\">";

/// Placeholder expanded to the input group id in rule paths and enum names.
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Upper bound for `indent_size`.
pub const MAX_INDENT: usize = 16;

/// A rule assigning files to a sprite sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteRule {
    /// Output path; `{input}` expands to the group id.
    pub path: String,

    /// Restrict the rule to one input group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Only match files whose base name contains this substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
}

/// A rule assigning files to a named enum inside an enum file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumRule {
    /// Output path; `{input}` expands to the group id.
    pub path: String,

    /// Enum name; `{input}` expands to the group id.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
}

impl SpriteRule {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            input: None,
            contains: None,
        }
    }

    /// Restrict to base names containing `needle`.
    pub fn containing(mut self, needle: impl Into<String>) -> Self {
        self.contains = Some(needle.into());
        self
    }

    pub fn matches(&self, input: &str, base_name: &str) -> bool {
        rule_matches(self.input.as_deref(), self.contains.as_deref(), input, base_name)
    }

    /// Resolve the output path for a file of group `input`.
    pub fn target(&self, input: &str) -> PathBuf {
        PathBuf::from(expand(&self.path, input))
    }
}

impl EnumRule {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            input: None,
            contains: None,
        }
    }

    pub fn containing(mut self, needle: impl Into<String>) -> Self {
        self.contains = Some(needle.into());
        self
    }

    pub fn matches(&self, input: &str, base_name: &str) -> bool {
        rule_matches(self.input.as_deref(), self.contains.as_deref(), input, base_name)
    }

    /// Resolve `(path, enum name)` for a file of group `input`.
    pub fn target(&self, input: &str) -> (PathBuf, String) {
        (PathBuf::from(expand(&self.path, input)), expand(&self.name, input))
    }
}

fn rule_matches(only: Option<&str>, contains: Option<&str>, input: &str, base_name: &str) -> bool {
    if only.is_some_and(|only| only != input) {
        return false;
    }
    contains.map_or(true, |needle| base_name.contains(needle))
}

fn expand(template: &str, input: &str) -> String {
    template.replace(INPUT_PLACEHOLDER, input)
}

/// One layer of configuration, as read from a file or built in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    /// Input group id to source directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<IndexMap<String, PathBuf>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprites: Option<Vec<SpriteRule>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<Vec<EnumRule>>,

    /// Prefix removed from extracted ids (`mdi-account` → `account`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_view_box: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_dimensions: Option<bool>,

    /// Indent width for enum members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_size: Option<usize>,

    /// Opening root tag for sprite sheets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_tag: Option<String>,
}

impl PartialConfig {
    /// The generic defaults every run starts from.
    pub fn builtin() -> Self {
        Self {
            input: Some(IndexMap::new()),
            sprites: Some(vec![SpriteRule::new("{input}.svg")]),
            enums: Some(vec![EnumRule::new("{input}.ts", "{input}")]),
            id_prefix: None,
            include_view_box: Some(true),
            include_dimensions: Some(false),
            indent_size: Some(3),
            svg_tag: Some(DEFAULT_SVG_TAG.to_string()),
        }
    }

    /// Settings used when no configuration file is present: the Material
    /// Design outline icons in `svg/` become `dist/icons.svg` and the
    /// `MDISprites` enum in `dist/Icons.ts`.
    pub fn project() -> Self {
        let mut input = IndexMap::new();
        input.insert("MDI".to_string(), PathBuf::from("svg"));

        Self {
            input: Some(input),
            sprites: Some(vec![SpriteRule::new("dist/icons.svg").containing("outline")]),
            enums: Some(vec![EnumRule::new("dist/Icons.ts", "MDISprites").containing("outline")]),
            id_prefix: Some("mdi-".to_string()),
            include_view_box: Some(true),
            include_dimensions: Some(false),
            indent_size: Some(3),
            svg_tag: None,
        }
    }

    /// Merge `over` on top of `self`.
    pub fn merge(mut self, over: PartialConfig) -> Self {
        if let Some(input) = over.input {
            let base = self.input.get_or_insert_with(IndexMap::new);
            for (id, path) in input {
                // Existing keys keep their position
                base.insert(id, path);
            }
        }

        self.sprites = over.sprites.or(self.sprites);
        self.enums = over.enums.or(self.enums);
        self.id_prefix = over.id_prefix.or(self.id_prefix);
        self.include_view_box = over.include_view_box.or(self.include_view_box);
        self.include_dimensions = over.include_dimensions.or(self.include_dimensions);
        self.indent_size = over.indent_size.or(self.indent_size);
        self.svg_tag = over.svg_tag.or(self.svg_tag);
        self
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: IndexMap<String, PathBuf>,
    pub sprites: Vec<SpriteRule>,
    pub enums: Vec<EnumRule>,
    /// `None` when unset or empty.
    pub id_prefix: Option<String>,
    pub include_view_box: bool,
    pub include_dimensions: bool,
    pub indent_size: usize,
    pub svg_tag: String,
}

impl Config {
    /// Resolve a chain of layers on top of [`PartialConfig::builtin`].
    pub fn resolve(layers: impl IntoIterator<Item = PartialConfig>) -> Self {
        let merged = layers
            .into_iter()
            .fold(PartialConfig::builtin(), PartialConfig::merge);
        Self::from_partial(merged)
    }

    fn from_partial(partial: PartialConfig) -> Self {
        Self {
            input: partial.input.unwrap_or_default(),
            sprites: partial.sprites.unwrap_or_default(),
            enums: partial.enums.unwrap_or_default(),
            id_prefix: partial.id_prefix.filter(|p| !p.is_empty()),
            include_view_box: partial.include_view_box.unwrap_or(true),
            include_dimensions: partial.include_dimensions.unwrap_or(false),
            indent_size: clamp_usize(partial.indent_size.unwrap_or(3), 0, MAX_INDENT),
            svg_tag: partial
                .svg_tag
                .unwrap_or_else(|| DEFAULT_SVG_TAG.to_string()),
        }
    }
}

impl Default for Config {
    /// Built-in defaults with the project layer applied.
    fn default() -> Self {
        Self::resolve([PartialConfig::project()])
    }
}
