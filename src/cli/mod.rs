pub mod build;
pub mod check;
pub mod completions;
pub mod init;
pub mod list;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{load_project, PartialConfig, Project};
use crate::error::{Result, SheetError};
use crate::output::plural;
use crate::pipeline::{OutputKind, RenderedOutput};

/// iconsheet - SVG sprite sheet and icon enum generator
#[derive(Parser, Debug)]
#[command(name = "iconsheet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate sprite sheets and enum files
    Build(build::BuildArgs),

    /// Run the pipeline without writing and report problems
    Check(check::CheckArgs),

    /// Show which outputs every icon maps to
    List(list::ListArgs),

    /// Create an iconsheet.yaml for a directory of icons
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Configuration flags shared by commands that run the pipeline.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Configuration file (default: ./iconsheet.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Leave viewBox attributes off symbols
    #[arg(long)]
    pub no_view_box: bool,

    /// Copy width and height attributes onto symbols
    #[arg(long)]
    pub dimensions: bool,

    /// Indent width for enum members
    #[arg(long)]
    pub indent: Option<usize>,
}

impl ConfigArgs {
    /// The configuration layer these flags contribute.
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            include_view_box: self.no_view_box.then_some(false),
            include_dimensions: self.dimensions.then_some(true),
            indent_size: self.indent,
            ..Default::default()
        }
    }

    /// Resolve the project relative to the working directory.
    pub fn load(&self) -> Result<Project> {
        let cwd = std::env::current_dir()
            .map_err(|e| SheetError::io(".", "Failed to read working directory", e))?;
        self.load_in(&cwd)
    }

    pub fn load_in(&self, cwd: &Path) -> Result<Project> {
        load_project(self.config.as_deref(), cwd, self.overrides())
    }
}

/// "12 symbols" or "12 members", depending on the output.
pub fn describe(output: &RenderedOutput) -> String {
    match output.kind {
        OutputKind::Sprite => plural(output.entries, "symbol", "symbols"),
        OutputKind::Enum => plural(output.entries, "member", "members"),
    }
}
