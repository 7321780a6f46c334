//! Domain errors and their mapping to process exit codes.
//!
//! | Kind             | Exit | Examples                                      |
//! |------------------|------|-----------------------------------------------|
//! | `NotFound`       | 2    | missing input, resource, or target document   |
//! | `InvalidValue`   | 3    | unsupported format, unknown theme/component   |
//! | `ExecutionFailure` | 4  | external tool exited non-zero / not installed |
//! | `Timeout`        | 5    | external tool exceeded its time bound         |
//! | `System`         | 6    | I/O failure                                   |
//! | `Interrupted`    | 130  | Ctrl+C                                        |

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error category, used for exit status selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidValue,
    ExecutionFailure,
    Timeout,
    System,
    Interrupted,
}

impl ErrorKind {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::NotFound => 2,
            Self::InvalidValue => 3,
            Self::ExecutionFailure => 4,
            Self::Timeout => 5,
            Self::System => 6,
            Self::Interrupted => 130,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{what} not found: {}", path.display())]
    FileNotFound { what: &'static str, path: PathBuf },

    #[error("Resource not found: {category}/{name}")]
    ResourceNotFound { category: &'static str, name: String },

    #[error("Unknown {kind}: {name}\nAvailable {kind}s: {available}")]
    UnknownName {
        kind: &'static str,
        name: String,
        available: String,
    },

    #[error("{0}")]
    InvalidValue(String),

    #[error("{0}")]
    Execution(String),

    #[error("{0}")]
    Timeout(String),

    #[error("Conversion interrupted.")]
    Interrupted,

    #[error("System error - {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn file_not_found(what: &'static str, path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            what,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Wrap an I/O error with the path it concerns.
    pub fn io(action: &str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            context: format!("failed to {action} '{}'", path.as_ref().display()),
            source,
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } | Self::ResourceNotFound { .. } => ErrorKind::NotFound,
            Self::UnknownName { .. } | Self::InvalidValue(_) => ErrorKind::InvalidValue,
            Self::Execution(_) => ErrorKind::ExecutionFailure,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Interrupted => ErrorKind::Interrupted,
            Self::Io { .. } => ErrorKind::System,
        }
    }

    pub const fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}

/// Exit code for an arbitrary error bubbled up to `main`.
///
/// Domain errors keep their own code, bare I/O errors count as system
/// errors, everything else is a generic failure.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if let Some(e) = err.downcast_ref::<Error>() {
        return e.exit_code();
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return ErrorKind::System.exit_code();
    }
    1
}
