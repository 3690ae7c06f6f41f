//! Build command implementation.
//!
//! Runs the pipeline and writes every sprite sheet and enum file.

use std::time::Instant;

use clap::Args;

use crate::config::Project;
use crate::diagnostics::print_diagnostics;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{generate, RenderedOutput};
use crate::strategy::ConfiguredStrategy;

use super::{describe, ConfigArgs};

/// Generate sprite sheets and enum files
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let started = Instant::now();

    let project = args.config.load()?;
    build(&project, printer)?;

    println!("Completed in {:.2}s", started.elapsed().as_secs_f64());
    Ok(())
}

/// Generate and write the outputs of a resolved project.
pub fn build(project: &Project, printer: &Printer) -> Result<Vec<RenderedOutput>> {
    if let Some(path) = &project.config_path {
        printer.info("Config", &display_path(path));
    }

    for (input, dir) in &project.config.input {
        printer.status(
            "Scanning",
            &format!("{} {}", display_path(&project.root.join(dir)), printer.dim(input)),
        );
    }

    let strategy = ConfiguredStrategy::new(&project.config);
    let generated = generate(&project.root, &project.config, &strategy)?;
    let outputs = generated.write(&project.root, &strategy)?;

    for output in &outputs {
        printer.status(
            "Wrote",
            &format!("{} ({})", display_path(&project.root.join(&output.path)), describe(output)),
        );
    }

    if outputs.is_empty() {
        printer.warning("Skipped", "no icon matched any output");
    }

    let report = &generated.report;
    print_diagnostics(report, printer);
    if report.has_errors() {
        printer.error(
            "Found",
            &format!(
                "{}, {}",
                plural(report.error_count(), "error", "errors"),
                plural(report.warning_count(), "warning", "warnings")
            ),
        );
    } else if report.has_warnings() {
        printer.warning("Found", &plural(report.warning_count(), "warning", "warnings"));
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILENAME;
    use std::fs;
    use tempfile::tempdir;

    const CONFIG: &str = r#"
input:
  Brand: icons
sprites:
  - path: dist/brand.svg
enums:
  - path: dist/Brand.ts
    name: BrandIcons
"#;

    #[test]
    fn test_build_writes_outputs() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, CONFIG).unwrap();
        fs::create_dir_all(dir.path().join("icons")).unwrap();
        fs::write(
            dir.path().join("icons/github-mark.svg"),
            r#"<svg id="github-mark" viewBox="0 0 16 16"><path d="M8 0"/></svg>"#,
        )
        .unwrap();

        let args = BuildArgs {
            config: ConfigArgs {
                config: Some(config_path),
                ..Default::default()
            },
        };
        run(args, &Printer::plain()).unwrap();

        let sheet = fs::read_to_string(dir.path().join("dist/brand.svg")).unwrap();
        assert!(sheet.contains(r#"<symbol id="github-mark" viewBox="0 0 16 16"><path d="M8 0"/></symbol>"#));
        assert!(sheet.ends_with("</svg>"));

        let enums = fs::read_to_string(dir.path().join("dist/Brand.ts")).unwrap();
        assert_eq!(enums, "export enum BrandIcons {\n   GithubMark = \"github-mark\"\n}\n");
    }

    #[test]
    fn test_build_missing_input_dir_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, CONFIG).unwrap();

        let args = ConfigArgs {
            config: Some(config_path),
            ..Default::default()
        };
        let project = args.load_in(dir.path()).unwrap();

        assert!(build(&project, &Printer::plain()).is_err());
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_build_writes_despite_duplicate_ids() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, CONFIG).unwrap();
        fs::create_dir_all(dir.path().join("icons")).unwrap();
        for name in ["a.svg", "b.svg"] {
            fs::write(dir.path().join("icons").join(name), r#"<svg id="x"><g/></svg>"#).unwrap();
        }

        let args = ConfigArgs {
            config: Some(config_path),
            ..Default::default()
        };
        let project = args.load_in(dir.path()).unwrap();

        let outputs = build(&project, &Printer::plain()).unwrap();

        assert_eq!(outputs.len(), 2);
        let sheet = fs::read_to_string(dir.path().join("dist/brand.svg")).unwrap();
        assert_eq!(sheet.matches(r#"<symbol id="x""#).count(), 2);
    }

    #[test]
    fn test_build_nothing_matched() {
        let dir = tempdir().unwrap();
        // No config file: the project defaults want outline icons in svg/
        fs::create_dir_all(dir.path().join("svg")).unwrap();
        fs::write(dir.path().join("svg/home.svg"), r#"<svg id="mdi-home"></svg>"#).unwrap();

        let project = ConfigArgs::default().load_in(dir.path()).unwrap();
        let outputs = build(&project, &Printer::plain()).unwrap();

        assert!(outputs.is_empty());
        assert!(!dir.path().join("dist").exists());
    }
}
