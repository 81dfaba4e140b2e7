pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod output;
pub mod progress;
pub mod rename;
pub mod scanner;
pub mod validator;

pub use config::{CollisionPolicy, Config, DecodeErrorPolicy, OperationMode};
pub use error::{AppError, ExitCode};
pub use filter::{filter_by_extension, JPEG_EXTENSIONS};
pub use rename::{execute_batch, replace_first, BatchResult, EntryError, RenameOutcome};
pub use scanner::{scan_directory, DirectoryEntry, ScannerError};
pub use validator::ArgumentError;
