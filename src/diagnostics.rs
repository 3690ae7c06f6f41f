//! Diagnostics collected while generating.
//!
//! Extraction misses never abort a run; they are recorded here so the CLI
//! can report them.

use std::fmt;

use crate::output::Printer;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// No `id="..."` attribute was found.
pub const MISSING_ID: &str = "iconsheet::missing-id";
/// No `<svg>...</svg>` body was found.
pub const MISSING_DATA: &str = "iconsheet::missing-data";
/// `include_view_box` is on but the root has no viewBox.
pub const MISSING_VIEW_BOX: &str = "iconsheet::missing-view-box";
/// `include_dimensions` is on but the root has no width/height.
pub const MISSING_DIMENSIONS: &str = "iconsheet::missing-dimensions";
/// Two symbols in one sprite sheet share an id.
pub const DUPLICATE_ID: &str = "iconsheet::duplicate-id";

/// A single diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code (e.g. "iconsheet::missing-id").
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Collects diagnostics from a run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are no diagnostics at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Count diagnostics carrying `code`.
    pub fn count_code(&self, code: &str) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }
}

/// Print every diagnostic to stderr.
pub fn print_diagnostics(report: &Report, printer: &Printer) {
    for d in report.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = Report::new();
        assert!(report.is_ok());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn test_warning_diagnostic() {
        let mut report = Report::new();
        report.push(Diagnostic::warning(MISSING_ID, "svg/blank.svg has no id attribute"));

        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(!report.is_ok());
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.count_code(MISSING_ID), 1);
        assert_eq!(report.count_code(MISSING_DATA), 0);
    }

    #[test]
    fn test_error_diagnostic() {
        let mut report = Report::new();
        report.push(Diagnostic::error(DUPLICATE_ID, "dist/icons.svg: `home` defined twice"));

        assert!(report.has_errors());
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_diagnostic_with_help() {
        let d = Diagnostic::warning(MISSING_VIEW_BOX, "no viewBox")
            .with_help("Add a viewBox to the root <svg> element");
        assert_eq!(d.help.as_deref(), Some("Add a viewBox to the root <svg> element"));
    }
}
