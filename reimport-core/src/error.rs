use std::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Which filesystem step a per-file I/O failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    Read,
    Write,
    Walk,
}

impl fmt::Display for IoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
            Self::Walk => f.write_str("walk"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MigrateError {
    /// Invalid options supplied by the user or the config file
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("source directory not found: {}", path.display())]
    MissingRoot { path: PathBuf },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        path: PathBuf,
        action: IoAction,
        #[source]
        source: io::Error,
    },

    #[error("invalid rule pattern '{pattern}': {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl MigrateError {
    pub(crate) fn io(path: impl Into<PathBuf>, action: IoAction, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            action,
            source,
        }
    }

    /// Fatal errors raised before any file is touched
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::MissingRoot { .. })
    }

    /// A directory entry the walk could not read, as opposed to a file
    pub fn is_walk(&self) -> bool {
        matches!(
            self,
            Self::Io {
                action: IoAction::Walk,
                ..
            }
        )
    }

    /// The message without the path, for report lines that already show it
    pub fn reason(&self) -> String {
        match self {
            Self::Encoding { source, .. } => format!("not valid UTF-8: {source}"),
            Self::Io { action, source, .. } => format!("failed to {action}: {source}"),
            other => other.to_string(),
        }
    }

    /// The file a per-file error belongs to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::MissingRoot { path }
            | Self::Encoding { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::Configuration { .. } | Self::InvalidRule { .. } => None,
        }
    }
}
