mod codes;

pub use codes::ExitCode;

use crate::scanner::ScannerError;
use crate::validator::ArgumentError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArguments(#[from] ArgumentError),

    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Target directory is empty: {path}")]
    EmptyDirectory { path: PathBuf },

    #[error("Failed to read directory: {0}")]
    ReadFailed(String),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::InvalidArguments(_) => ExitCode::InvalidArguments,
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::EmptyDirectory { .. } => ExitCode::EmptyDirectory,
            AppError::ReadFailed(_) => ExitCode::GeneralError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Whether the usage text should follow the diagnostic
    pub fn shows_usage(&self) -> bool {
        !matches!(self, AppError::Other(_))
    }

    /// An empty directory is a no-op rather than a fault
    pub fn is_informational(&self) -> bool {
        matches!(self, AppError::EmptyDirectory { .. })
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::InvalidArguments(err) => {
                format!(
                    "Invalid command line argument '{}':\n  {}\n\n\
                     No files were touched.",
                    err.argument(),
                    err
                )
            }

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
                    "Permission denied when reading:\n  {}\n\n\
                     Please check the directory permissions.",
                    path.display()
                )
            }

            AppError::EmptyDirectory { path } => {
                format!(
                    "The specified directory is empty:\n  {}\n\n\
                     Nothing to rename.",
                    path.display()
                )
            }

            AppError::ReadFailed(message) => {
                format!("Failed to read the target directory:\n  {}", message)
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::ReadFailed(e.to_string()),
        }
    }
}
