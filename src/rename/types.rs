use crate::config::OperationMode;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single entry could not be processed
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("destination already exists")]
    DestinationExists,

    #[error("destination is the source file")]
    SameAsSource,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read image: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

impl EntryError {
    /// The source could not be turned into pixels
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, EntryError::Read(_) | EntryError::Decode(_))
    }
}

/// A single rename operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    /// Full path to the source entry
    pub source_path: PathBuf,
    /// Original entry name, lossy when not valid UTF-8
    pub source_name: String,
    /// Full path to the destination
    pub destination_path: PathBuf,
    /// New entry name, lossy when not valid UTF-8
    pub destination_name: String,
}

impl RenameOperation {
    pub fn new(source_path: PathBuf, destination: impl Into<OsString>) -> Self {
        let destination: OsString = destination.into();
        let destination_name = destination.to_string_lossy().into_owned();

        let source_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination))
            .unwrap_or_else(|| PathBuf::from(&destination));

        Self {
            source_path,
            source_name,
            destination_path,
            destination_name,
        }
    }
}

#[derive(Debug)]
pub enum OutcomeStatus {
    Success,
    Failed(EntryError),
    /// Failed, but the configured policy keeps it off the console
    Suppressed(EntryError),
}

/// What happened to one matching entry
#[derive(Debug)]
pub struct RenameOutcome {
    pub operation: RenameOperation,
    pub status: OutcomeStatus,
}

impl RenameOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Success)
    }

    pub fn error(&self) -> Option<&EntryError> {
        match &self.status {
            OutcomeStatus::Success => None,
            OutcomeStatus::Failed(e) | OutcomeStatus::Suppressed(e) => Some(e),
        }
    }
}

/// Result of one batch
#[derive(Debug)]
pub struct BatchResult {
    pub mode: OperationMode,
    /// One outcome per entry that contained the match word, in processing order
    pub outcomes: Vec<RenameOutcome>,
    /// Entries that did not contain the match word
    pub skipped: usize,
}

impl BatchResult {
    pub fn new(mode: OperationMode) -> Self {
        Self {
            mode,
            outcomes: Vec::new(),
            skipped: 0,
        }
    }

    pub fn add_outcome(&mut self, outcome: RenameOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Failed(_)))
            .count()
    }

    pub fn suppressed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Suppressed(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }
}
