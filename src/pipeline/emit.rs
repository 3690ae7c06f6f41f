//! Wrapping accumulated buffers into output files and writing them.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{Result, SheetError};
use crate::strategy::IconStrategy;

use super::accumulator::{EnumFiles, SpriteSheets};

/// Closing root tag of every sprite sheet.
const SVG_CLOSE: &str = "</svg>";

/// What an output file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Sprite,
    Enum,
}

/// A fully rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub kind: OutputKind,
    /// Path as configured, relative to the project root unless absolute.
    pub path: PathBuf,
    pub contents: String,
    /// Symbols in a sheet, or members across an enum file's blocks.
    pub entries: usize,
}

/// Wrap accumulated fragments in the sheet's root element.
pub fn render_sprite_sheet(open_tag: &str, fragments: &str) -> String {
    let mut out = String::with_capacity(open_tag.len() + fragments.len() + SVG_CLOSE.len());
    out.push_str(open_tag);
    out.push_str(fragments);
    out.push_str(SVG_CLOSE);
    out
}

/// Render every enum block of one file.
///
/// The last member of each block loses its trailing `,`; the file ends with
/// the last block's closing `}` and a single newline.
pub fn render_enum_file(blocks: &IndexMap<String, String>) -> String {
    let mut out = String::new();
    for (name, members) in blocks {
        let members = members.strip_suffix(",\n").unwrap_or(members);
        out.push_str(&format!("export enum {} {{\n{}\n}}\n\n", name, members));
    }
    out.pop();
    out
}

/// Render every accumulated output: sprite sheets first, then enum files.
pub fn render_all(
    sprites: &SpriteSheets,
    enums: &EnumFiles,
    strategy: &dyn IconStrategy,
) -> Vec<RenderedOutput> {
    let sheets = sprites.iter().map(|(path, sheet)| RenderedOutput {
        kind: OutputKind::Sprite,
        path: path.clone(),
        contents: render_sprite_sheet(&strategy.root_tag_for(path), &sheet.body),
        entries: sheet.ids.len(),
    });

    let enum_files = enums.iter().map(|(path, blocks)| RenderedOutput {
        kind: OutputKind::Enum,
        path: path.clone(),
        contents: render_enum_file(blocks),
        entries: blocks.values().map(|b| b.lines().count()).sum(),
    });

    sheets.chain(enum_files).collect()
}

/// Write an output under `root`, creating parent directories. Existing files
/// are overwritten. Returns the path written.
pub fn write_output(root: &Path, output: &RenderedOutput) -> Result<PathBuf> {
    let path = root.join(&output.path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| SheetError::io(parent, "Failed to create output directory", e))?;
        }
    }

    fs::write(&path, &output.contents)
        .map_err(|e| SheetError::io(&path, "Failed to write output", e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::DefaultStrategy;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_render_sprite_sheet_wraps_once() {
        let out = render_sprite_sheet("<svg>", "<symbol id=\"a\"></symbol><symbol id=\"b\"></symbol>");
        assert_eq!(out, "<svg><symbol id=\"a\"></symbol><symbol id=\"b\"></symbol></svg>");
    }

    #[test]
    fn test_render_enum_file_single_block() {
        let mut blocks = IndexMap::new();
        blocks.insert(
            "MDISprites".to_string(),
            "   Account = \"account\",\n   Home = \"home\",\n".to_string(),
        );

        assert_eq!(
            render_enum_file(&blocks),
            "export enum MDISprites {\n   Account = \"account\",\n   Home = \"home\"\n}\n"
        );
    }

    #[test]
    fn test_render_enum_file_multiple_blocks() {
        let mut blocks = IndexMap::new();
        blocks.insert("Outline".to_string(), "  A = \"a\",\n".to_string());
        blocks.insert("Filled".to_string(), "  B = \"b\",\n".to_string());

        assert_eq!(
            render_enum_file(&blocks),
            "export enum Outline {\n  A = \"a\"\n}\n\nexport enum Filled {\n  B = \"b\"\n}\n"
        );
    }

    #[test]
    fn test_render_all_counts_entries() {
        let mut sprites = SpriteSheets::new();
        sprites.append(Path::new("a.svg"), "x", "<symbol id=\"x\"></symbol>");
        sprites.append(Path::new("a.svg"), "y", "<symbol id=\"y\"></symbol>");

        let mut enums = EnumFiles::new();
        enums.append(Path::new("a.ts"), "A", "  X = \"x\",\n");
        enums.append(Path::new("a.ts"), "B", "  Y = \"y\",\n");
        enums.append(Path::new("a.ts"), "B", "  Z = \"z\",\n");

        let outputs = render_all(&sprites, &enums, &DefaultStrategy);

        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].kind, OutputKind::Sprite);
        assert_eq!(outputs[0].entries, 2);
        assert_eq!(outputs[1].kind, OutputKind::Enum);
        assert_eq!(outputs[1].entries, 3);
    }

    #[test]
    fn test_write_output_creates_parents_and_overwrites() {
        let dir = tempdir().unwrap();
        let mut output = RenderedOutput {
            kind: OutputKind::Sprite,
            path: PathBuf::from("dist/nested/icons.svg"),
            contents: "first".to_string(),
            entries: 0,
        };

        let written = write_output(dir.path(), &output).unwrap();
        assert_eq!(written, dir.path().join("dist/nested/icons.svg"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "first");

        output.contents = "second".to_string();
        write_output(dir.path(), &output).unwrap();
        assert_eq!(fs::read_to_string(&written).unwrap(), "second");
    }

    #[test]
    fn test_write_output_bare_file_name() {
        let dir = tempdir().unwrap();
        let output = RenderedOutput {
            kind: OutputKind::Enum,
            path: PathBuf::from("Icons.ts"),
            contents: "x".to_string(),
            entries: 0,
        };

        write_output(dir.path(), &output).unwrap();
        assert!(dir.path().join("Icons.ts").exists());
    }
}
