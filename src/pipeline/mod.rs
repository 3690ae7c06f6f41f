//! The generation pipeline.
//!
//! For each input group in configuration order the directory is listed, and
//! for each listed file, in listing order:
//!
//! 1. the strategy picks sprite and enum targets from the base name;
//! 2. if either list is empty the file is skipped without being read;
//! 3. otherwise the file is read and its id extracted;
//! 4. a `<symbol>` is appended to every sprite target and a member line to
//!    every enum target.
//!
//! Nothing is written until [`Generated::write`] flushes the accumulators.
//!
//! # Example
//!
//! ```ignore
//! use iconsheet::{generate, Config, ConfiguredStrategy};
//!
//! let config = Config::default();
//! let strategy = ConfiguredStrategy::new(&config);
//! let generated = generate(Path::new("."), &config, &strategy)?;
//! generated.write(Path::new("."), &strategy)?;
//! ```

mod accumulator;
mod emit;
mod stage;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::diagnostics::{
    Diagnostic, Report, DUPLICATE_ID, MISSING_DATA, MISSING_DIMENSIONS, MISSING_ID,
    MISSING_VIEW_BOX,
};
use crate::error::{Result, SheetError};
use crate::strategy::IconStrategy;

pub use accumulator::{EnumFiles, SheetBuffer, SpriteSheets};
pub use emit::{
    render_all, render_enum_file, render_sprite_sheet, write_output, OutputKind, RenderedOutput,
};
pub use stage::{
    base_name, member_line, EnumTarget, ExtractedIcon, FileRef, LoadedFile, Symbol, Target,
};

/// List the files of one input group, in directory-listing order.
///
/// Sub-directories and dotfiles (empty base name) are not candidates. A
/// missing or unreadable directory is an error.
pub fn list_group(root: &Path, input: &str, dir: &Path) -> Result<Vec<FileRef>> {
    let dir = root.join(dir);
    if !dir.is_dir() {
        return Err(SheetError::io(&dir, "Failed to list input group", "not a directory"));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| SheetError::io(&dir, "Failed to list input group", e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file = FileRef::new(input, &dir, entry.file_name().to_string_lossy());
        if file.base_name.is_empty() {
            continue;
        }
        files.push(file);
    }

    Ok(files)
}

/// A file and the outputs it maps to.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub file: FileRef,
    pub sprites: Vec<PathBuf>,
    pub enums: Vec<EnumTarget>,
}

impl PlannedFile {
    pub fn new(file: FileRef, strategy: &dyn IconStrategy) -> Self {
        let sprites = strategy.sprite_targets_for(&file);
        let enums = strategy.enum_targets_for(&file);
        Self {
            file,
            sprites,
            enums,
        }
    }

    /// Files lacking a sprite target or an enum target are not processed.
    pub fn is_skipped(&self) -> bool {
        self.sprites.is_empty() || self.enums.is_empty()
    }
}

/// Target decisions for every file of every group, without reading any file.
pub fn plan(root: &Path, config: &Config, strategy: &dyn IconStrategy) -> Result<Vec<PlannedFile>> {
    let mut planned = Vec::new();
    for (input, dir) in &config.input {
        for file in list_group(root, input, dir)? {
            planned.push(PlannedFile::new(file, strategy));
        }
    }
    Ok(planned)
}

/// Result of a generation run, held in memory.
#[derive(Debug, Clone, Default)]
pub struct Generated {
    pub sprites: SpriteSheets,
    pub enums: EnumFiles,
    pub report: Report,
    /// Files read and processed.
    pub processed: usize,
    /// Files skipped by the target decisions.
    pub skipped: usize,
}

impl Generated {
    /// Render every output without writing.
    pub fn render(&self, strategy: &dyn IconStrategy) -> Vec<RenderedOutput> {
        render_all(&self.sprites, &self.enums, strategy)
    }

    /// Write every output under `root`; returns what was written, in order.
    pub fn write(&self, root: &Path, strategy: &dyn IconStrategy) -> Result<Vec<RenderedOutput>> {
        let outputs = self.render(strategy);
        for output in &outputs {
            write_output(root, output)?;
        }
        Ok(outputs)
    }
}

/// Run the pipeline over every input group.
pub fn generate(root: &Path, config: &Config, strategy: &dyn IconStrategy) -> Result<Generated> {
    let mut generator = Generator {
        config,
        strategy,
        out: Generated::default(),
    };

    for (input, dir) in &config.input {
        for file in list_group(root, input, dir)? {
            generator.process(PlannedFile::new(file, strategy))?;
        }
    }

    Ok(generator.out)
}

struct Generator<'a> {
    config: &'a Config,
    strategy: &'a dyn IconStrategy,
    out: Generated,
}

impl Generator<'_> {
    fn process(&mut self, planned: PlannedFile) -> Result<()> {
        if planned.is_skipped() {
            self.out.skipped += 1;
            return Ok(());
        }

        let PlannedFile {
            file,
            sprites,
            enums,
        } = planned;
        let display = file.path().display().to_string();

        let loaded = file.load()?;
        let svg_id = self.strategy.identifier_for(&loaded);
        if svg_id.is_none() {
            self.out.report.push(
                Diagnostic::warning(MISSING_ID, format!("{} has no id attribute", display))
                    .with_help("Symbols and enum members will have an empty id"),
            );
        }
        let icon = loaded.with_id(svg_id);

        for path in &sprites {
            self.append_symbol(&icon, path, &display);
        }

        for target in &enums {
            let sprite_name = self
                .strategy
                .sprite_name_for(&icon, Target::Enum(target))
                .unwrap_or_default();
            let enum_name = self.strategy.enum_name_for(&icon, target);
            let line = member_line(self.config.indent_size, &enum_name, &sprite_name);
            self.out.enums.append(&target.path, &target.name, &line);
        }

        self.out.processed += 1;
        Ok(())
    }

    fn append_symbol(&mut self, icon: &ExtractedIcon, path: &Path, display: &str) {
        let id = self
            .strategy
            .sprite_name_for(icon, Target::Sprite(path))
            .unwrap_or_default();

        let body = self.strategy.data_for(icon);
        if body.is_none() {
            self.out.report.push(Diagnostic::warning(
                MISSING_DATA,
                format!("{} has no <svg> body", display),
            ));
        }

        let view_box = if self.config.include_view_box {
            let view_box = self.strategy.view_box_for(icon);
            if view_box.is_none() {
                self.out.report.push(Diagnostic::warning(
                    MISSING_VIEW_BOX,
                    format!("{} has no viewBox", display),
                ));
            }
            view_box
        } else {
            None
        };

        let dimensions = if self.config.include_dimensions {
            let dimensions = self.strategy.dimensions_for(icon);
            if dimensions.is_empty() {
                self.out.report.push(Diagnostic::warning(
                    MISSING_DIMENSIONS,
                    format!("{} has no width or height", display),
                ));
            }
            dimensions
        } else {
            Default::default()
        };

        let symbol = Symbol {
            id,
            view_box,
            dimensions,
            body: body.unwrap_or_default(),
        };

        if !self.out.sprites.append(path, &symbol.id, &symbol.render()) {
            self.out.report.push(
                Diagnostic::error(
                    DUPLICATE_ID,
                    format!("{}: symbol `{}` defined more than once", path.display(), symbol.id),
                )
                .with_help(format!("Last definition comes from {}", display)),
            );
        }
    }
}
