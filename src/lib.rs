//! iconsheet - SVG sprite sheet and icon enum generator
//!
//! Scans directories of individual SVG icons and emits consolidated sprite
//! sheets (one `<symbol>` per icon) together with TypeScript enums mapping
//! readable names to the symbol ids.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod strategy;
pub mod util;

pub use config::{load_project, Config, EnumRule, PartialConfig, Project, SpriteRule};
pub use diagnostics::{Diagnostic, Report, Severity};
pub use error::{Result, SheetError};
pub use extract::Dimensions;
pub use pipeline::{generate, plan, EnumTarget, Generated, OutputKind, PlannedFile, RenderedOutput};
pub use strategy::{ConfiguredStrategy, DefaultStrategy, IconStrategy};
