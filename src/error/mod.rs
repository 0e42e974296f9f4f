mod codes;

pub use codes::ExitCode;

use crate::config::ConfigError;
use crate::name::NameError;
use crate::pattern::PatternError;
use crate::walker::{RootError, WalkError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid name: {message}")]
    InvalidName { message: String },

    #[error("Rename failed: {} -> {}", .from.display(), .to.display())]
    RenameError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::Config { .. } => ExitCode::ConfigError,
            AppError::InvalidName { .. } => ExitCode::InvalidName,
            AppError::RenameError { .. } => ExitCode::RenameError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::Config { message } => {
                format!(
                    "Configuration error:\n  {}\n\n\
                     Run with --show-config to inspect the effective settings.",
                    message
                )
            }

            AppError::InvalidName { message } => {
                format!(
                    "{}\n\n\
                     Files must have a name and an extension separated by '.'.\n\
                     Entries processed before this one have already been renamed.",
                    message
                )
            }

            AppError::RenameError { from, to, source } => {
                format!(
                    "Failed to rename:\n\
                     From: {}\n\
                     To:   {}\n\
                     Error: {}\n\n\
                     Entries processed before this one have already been renamed.",
                    from.display(),
                    to.display(),
                    source
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<RootError> for AppError {
    fn from(err: RootError) -> Self {
        match err {
            RootError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            RootError::NotADirectory(path) => AppError::NotADirectory { path },
            RootError::PermissionDenied(path) => AppError::PermissionDenied { path },
            RootError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config {
            message: err.to_string(),
        }
    }
}

impl From<PatternError> for AppError {
    fn from(err: PatternError) -> Self {
        match err {
            PatternError::Config(e) => e.into(),
            other => AppError::Config {
                message: other.to_string(),
            },
        }
    }
}

impl From<NameError> for AppError {
    fn from(err: NameError) -> Self {
        AppError::InvalidName {
            message: err.to_string(),
        }
    }
}

impl From<WalkError> for AppError {
    fn from(err: WalkError) -> Self {
        match err {
            WalkError::Read { path, source }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                AppError::PermissionDenied { path }
            }
            WalkError::Read { path, source } => {
                AppError::Other(format!("Failed to read {}: {}", path.display(), source))
            }
            WalkError::Name(e) => e.into(),
            WalkError::Rename { from, to, source } => AppError::RenameError { from, to, source },
        }
    }
}
