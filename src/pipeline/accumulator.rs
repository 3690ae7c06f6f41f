//! In-memory buffers keyed by output target.
//!
//! Buffers are created on first append and only ever grow. Both maps keep
//! first-insertion order so output files are written in the order inputs
//! first reached them.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Accumulated `<symbol>` fragments for one sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetBuffer {
    pub body: String,
    /// Symbol ids in append order.
    pub ids: Vec<String>,
}

/// Sprite sheet path → fragments.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheets {
    sheets: IndexMap<PathBuf, SheetBuffer>,
}

impl SpriteSheets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rendered symbol. Returns `false` if `id` was already in the
    /// sheet; the fragment is appended either way.
    pub fn append(&mut self, path: &Path, id: &str, fragment: &str) -> bool {
        let sheet = self.sheets.entry(path.to_path_buf()).or_default();
        let fresh = !sheet.ids.iter().any(|existing| existing == id);
        sheet.body.push_str(fragment);
        sheet.ids.push(id.to_string());
        fresh
    }

    pub fn get(&self, path: &Path) -> Option<&SheetBuffer> {
        self.sheets.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &SheetBuffer)> {
        self.sheets.iter()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Enum file path → enum name → member lines.
#[derive(Debug, Clone, Default)]
pub struct EnumFiles {
    files: IndexMap<PathBuf, IndexMap<String, String>>,
}

impl EnumFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, path: &Path, name: &str, line: &str) {
        self.files
            .entry(path.to_path_buf())
            .or_default()
            .entry(name.to_string())
            .or_default()
            .push_str(line);
    }

    /// Enum blocks of one file.
    pub fn get(&self, path: &Path) -> Option<&IndexMap<String, String>> {
        self.files.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &IndexMap<String, String>)> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
