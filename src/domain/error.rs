use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for seedcfg operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Default template file missing or unreadable.
    #[error("Failed to read template '{path}': {source}", path = .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Live configuration file cannot be created or overwritten.
    #[error("Failed to write configuration '{path}': {source}", path = .path.display())]
    TemplateWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `--set` argument that is not of the form KEY=VALUE.
    #[error("Invalid variable assignment '{0}': expected KEY=VALUE")]
    InvalidAssignment(String),
}
