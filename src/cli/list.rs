//! List command implementation.
//!
//! Lists every candidate icon and the outputs it maps to. No icon file is
//! read.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::pipeline::{plan, PlannedFile};
use crate::strategy::ConfiguredStrategy;

use super::ConfigArgs;

/// Show which outputs every icon maps to
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Include files that no output takes
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let project = args.config.load()?;
    let strategy = ConfiguredStrategy::new(&project.config);
    let planned = plan(&project.root, &project.config, &strategy)?;

    for line in format_plan(&planned, args.all) {
        println!("{}", line);
    }

    let skipped = planned.iter().filter(|p| p.is_skipped()).count();
    printer.info(
        "Listed",
        &format!(
            "{} ({} skipped)",
            plural(planned.len() - skipped, "icon", "icons"),
            skipped
        ),
    );

    Ok(())
}

/// One line per file: `group/file -> outputs`.
pub fn format_plan(planned: &[PlannedFile], all: bool) -> Vec<String> {
    planned
        .iter()
        .filter(|p| all || !p.is_skipped())
        .map(|p| {
            let source = format!("{}/{}", p.file.input, p.file.file_name);
            if p.is_skipped() {
                return format!("{} -> (skipped)", source);
            }

            let targets: Vec<String> = p
                .sprites
                .iter()
                .map(|path| path.display().to_string())
                .chain(
                    p.enums
                        .iter()
                        .map(|t| format!("{}#{}", t.path.display(), t.name)),
                )
                .collect();
            format!("{} -> {}", source, targets.join(", "))
        })
        .collect()
}
