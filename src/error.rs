use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconsheet operations
#[derive(Error, Diagnostic, Debug)]
pub enum SheetError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconsheet::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(iconsheet::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Check failed: {message}")]
    #[diagnostic(code(iconsheet::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SheetError {
    /// Wrap an I/O error together with the path it concerns.
    pub fn io(path: impl Into<std::path::PathBuf>, context: &str, err: impl std::fmt::Display) -> Self {
        SheetError::Io {
            path: path.into(),
            message: format!("{}: {}", context, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
