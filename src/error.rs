//! Unified error type for the settings resolver.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("template not found: {path} ({source})")]
    TemplateNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("resolved template is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing hook command paths:\n{}", bullet_list(.0))]
    MissingHookPaths(Vec<PathBuf>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One path per line, indented, for the missing-paths report.
fn bullet_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, SetupError>;
