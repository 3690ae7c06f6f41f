//! Per-file stage records.
//!
//! A candidate file moves through `FileRef → LoadedFile → ExtractedIcon`;
//! each record owns exactly what the next step needs.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SheetError};
use crate::extract::Dimensions;

/// One entry of an input group's directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// Input group id.
    pub input: String,
    /// Directory the file was listed from.
    pub dir: PathBuf,
    /// File name including extension.
    pub file_name: String,
    /// File name up to its first `.`.
    pub base_name: String,
}

impl FileRef {
    pub fn new(input: impl Into<String>, dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let base_name = base_name(&file_name).to_string();
        Self {
            input: input.into(),
            dir: dir.into(),
            file_name,
            base_name,
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Read the file's contents. Bytes that are not UTF-8 are replaced,
    /// only a failed read is an error.
    pub fn load(self) -> Result<LoadedFile> {
        let path = self.path();
        let bytes = fs::read(&path).map_err(|e| SheetError::io(&path, "Failed to read icon", e))?;
        let data = String::from_utf8_lossy(&bytes).into_owned();
        Ok(LoadedFile { file: self, data })
    }
}

/// Strip everything from the first `.` on: `home.outline.svg` → `home`.
pub fn base_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// A candidate file with its contents.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub file: FileRef,
    pub data: String,
}

impl LoadedFile {
    pub fn with_id(self, svg_id: Option<String>) -> ExtractedIcon {
        ExtractedIcon {
            file: self.file,
            data: self.data,
            svg_id,
        }
    }
}

/// A loaded file with its identifier resolved.
#[derive(Debug, Clone)]
pub struct ExtractedIcon {
    pub file: FileRef,
    pub data: String,
    /// `None` when the file carries no id attribute.
    pub svg_id: Option<String>,
}

/// An enum output: file path plus the enum block inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumTarget {
    pub path: PathBuf,
    pub name: String,
}

impl EnumTarget {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// The output a name is being derived for.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Sprite(&'a Path),
    Enum(&'a EnumTarget),
}

/// One `<symbol>` fragment ready to append to a sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub id: String,
    pub view_box: Option<String>,
    pub dimensions: Dimensions,
    pub body: String,
}

impl Symbol {
    /// `<symbol id="…"[ viewBox="…"][ width="…"][ height="…"]>…</symbol>`
    pub fn render(&self) -> String {
        let mut out = format!("<symbol id=\"{}\"", self.id);
        if let Some(view_box) = &self.view_box {
            let _ = write!(out, " viewBox=\"{}\"", view_box);
        }
        if let Some(width) = &self.dimensions.width {
            let _ = write!(out, " width=\"{}\"", width);
        }
        if let Some(height) = &self.dimensions.height {
            let _ = write!(out, " height=\"{}\"", height);
        }
        let _ = write!(out, ">{}</symbol>", self.body);
        out
    }
}

/// One enum member line, terminated by `,\n`.
pub fn member_line(indent: usize, enum_name: &str, sprite_name: &str) -> String {
    format!("{:indent$}{} = \"{}\",\n", "", enum_name, sprite_name, indent = indent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_decodes_latin1_lossily() {
        let dir = tempdir().unwrap();
        let bytes = b"<!-- \xa9 ACME --><svg id=\"logo\"></svg>".to_vec();
        fs::write(dir.path().join("logo.svg"), &bytes).unwrap();

        let loaded = FileRef::new("brand", dir.path(), "logo.svg").load().unwrap();

        assert!(loaded.data.starts_with("<!-- \u{fffd} ACME -->"));
        assert!(loaded.data.ends_with(r#"<svg id="logo"></svg>"#));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = FileRef::new("brand", dir.path(), "gone.svg").load();
        assert!(matches!(result, Err(SheetError::Io { .. })));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("account.svg"), "account");
        assert_eq!(base_name("home.outline.svg"), "home");
        assert_eq!(base_name("README"), "README");
        assert_eq!(base_name(".hidden"), "");
    }

    #[test]
    fn test_file_ref() {
        let file = FileRef::new("MDI", "svg", "arrow-left-bold.svg");
        assert_eq!(file.base_name, "arrow-left-bold");
        assert_eq!(file.path(), PathBuf::from("svg/arrow-left-bold.svg"));
    }

    #[test]
    fn test_load() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.svg"), "<svg></svg>").unwrap();

        let loaded = FileRef::new("g", dir.path(), "a.svg").load().unwrap();
        assert_eq!(loaded.data, "<svg></svg>");

        let icon = loaded.with_id(Some("a".to_string()));
        assert_eq!(icon.svg_id.as_deref(), Some("a"));
        assert_eq!(icon.file.base_name, "a");
    }

    #[test]
    fn test_load_missing() {
        let dir = tempdir().unwrap();
        let result = FileRef::new("g", dir.path(), "gone.svg").load();
        assert!(matches!(result, Err(SheetError::Io { .. })));
    }

    #[test]
    fn test_symbol_render_all_attributes() {
        let symbol = Symbol {
            id: "account".to_string(),
            view_box: Some("0 0 24 24".to_string()),
            dimensions: Dimensions {
                width: Some("24".to_string()),
                height: Some("24".to_string()),
            },
            body: "<path d=\"M0\"/>".to_string(),
        };
        assert_eq!(
            symbol.render(),
            r#"<symbol id="account" viewBox="0 0 24 24" width="24" height="24"><path d="M0"/></symbol>"#
        );
    }

    #[test]
    fn test_symbol_render_omits_absent_attributes() {
        let symbol = Symbol {
            id: "bare".to_string(),
            view_box: None,
            dimensions: Dimensions::default(),
            body: String::new(),
        };
        assert_eq!(symbol.render(), r#"<symbol id="bare"></symbol>"#);
    }

    #[test]
    fn test_member_line() {
        assert_eq!(member_line(3, "ArrowLeftBold", "arrow-left-bold"), "   ArrowLeftBold = \"arrow-left-bold\",\n");
        assert_eq!(member_line(0, "A", "a"), "A = \"a\",\n");
    }
}
