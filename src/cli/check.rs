//! Check command implementation.
//!
//! Runs the full pipeline in memory and reports diagnostics without
//! writing anything.

use clap::Args;

use crate::config::Project;
use crate::diagnostics::{print_diagnostics, Report};
use crate::error::{Result, SheetError};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::generate;
use crate::strategy::ConfiguredStrategy;

use super::{describe, ConfigArgs};

/// Run the pipeline without writing and report problems
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Fail on warnings as well as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let project = args.config.load()?;
    check(&project, args.strict, printer).map(|_| ())
}

/// Generate in memory and fail if the report is not acceptable.
pub fn check(project: &Project, strict: bool, printer: &Printer) -> Result<Report> {
    let strategy = ConfiguredStrategy::new(&project.config);
    let generated = generate(&project.root, &project.config, &strategy)?;

    for output in generated.render(&strategy) {
        printer.info(
            "Would write",
            &format!("{} ({})", display_path(&project.root.join(&output.path)), describe(&output)),
        );
    }

    print_diagnostics(&generated.report, printer);

    let report = generated.report;
    if report.has_errors() || (strict && report.has_warnings()) {
        return Err(SheetError::Check {
            message: format!(
                "{}, {}",
                plural(report.error_count(), "error", "errors"),
                plural(report.warning_count(), "warning", "warnings")
            ),
            help: (!strict && report.has_warnings())
                .then(|| "Warnings alone do not fail without --strict".to_string()),
        });
    }

    printer.status(
        "Checked",
        &format!(
            "{} ({} skipped)",
            plural(generated.processed, "icon", "icons"),
            generated.skipped
        ),
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, PartialConfig};
    use indexmap::IndexMap;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn project_with(files: &[(&str, &str)]) -> (tempfile::TempDir, Project) {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("icons")).unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join("icons").join(name), contents).unwrap();
        }

        let mut input = IndexMap::new();
        input.insert("icons".to_string(), PathBuf::from("icons"));
        let project = Project {
            root: dir.path().to_path_buf(),
            config: Config::resolve([PartialConfig {
                input: Some(input),
                ..Default::default()
            }]),
            config_path: None,
        };
        (dir, project)
    }

    #[test]
    fn test_check_clean() {
        let (dir, project) = project_with(&[("a.svg", r#"<svg id="a" viewBox="0 0 1 1"></svg>"#)]);

        let report = check(&project, true, &Printer::plain()).unwrap();

        assert!(report.is_ok());
        // Nothing is written
        assert!(!dir.path().join("icons.svg").exists());
    }

    #[test]
    fn test_check_warnings_pass_unless_strict() {
        let (_dir, project) = project_with(&[("a.svg", r#"<svg id="a"></svg>"#)]);

        let report = check(&project, false, &Printer::plain()).unwrap();
        assert_eq!(report.warning_count(), 1);

        let result = check(&project, true, &Printer::plain());
        assert!(matches!(result, Err(SheetError::Check { .. })));
    }

    #[test]
    fn test_check_duplicate_ids_fail() {
        let (_dir, project) = project_with(&[
            ("a.svg", r#"<svg id="x" viewBox="0 0 1 1"></svg>"#),
            ("b.svg", r#"<svg id="x" viewBox="0 0 1 1"></svg>"#),
        ]);

        let result = check(&project, false, &Printer::plain());
        assert!(matches!(result, Err(SheetError::Check { .. })));
    }
}
