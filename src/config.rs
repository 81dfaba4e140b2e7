use crate::cli::Args;
use crate::validator::{
    validate_directory, validate_match_word, validate_replacement, ArgumentError,
};
use clap::ValueEnum;
use std::path::PathBuf;

/// What happens to each matching entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationMode {
    /// Rename the entry in place; content is never touched
    Rename,
    /// Decode the entry as an image and write a quality-100 JPEG under the new name
    Reencode,
}

impl OperationMode {
    /// Fixed line printed once the batch is over
    pub fn completion_message(&self) -> &'static str {
        match self {
            OperationMode::Rename => "replace completed!!",
            OperationMode::Reencode => "scrape completed!!",
        }
    }
}

/// What to do when the destination name is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    Refuse,
    Overwrite,
}

/// How decode failures in reencode mode are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorPolicy {
    Report,
    Skip,
}

/// Immutable run configuration, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target_dir: PathBuf,
    pub match_word: String,
    pub replacement: String,
    pub jpeg_only: bool,
    pub mode: OperationMode,
    pub collision: CollisionPolicy,
    pub decode_errors: DecodeErrorPolicy,
}

impl Config {
    /// Validate parsed arguments. Touches no filesystem state.
    pub fn from_args(args: &Args) -> Result<Self, ArgumentError> {
        let target_dir = validate_directory(args.dir.as_deref().or(args.target_dir.as_deref()))?;
        let match_word = validate_match_word(args.word.as_deref().or(args.match_word.as_deref()))?;
        let replacement = validate_replacement(args.new.as_deref().or(args.replacement.as_deref()))?;

        Ok(Self {
            target_dir,
            match_word,
            replacement,
            jpeg_only: args.jpeg_only,
            mode: args.mode,
            collision: if args.overwrite {
                CollisionPolicy::Overwrite
            } else {
                CollisionPolicy::Refuse
            },
            decode_errors: if args.skip_undecodable {
                DecodeErrorPolicy::Skip
            } else {
                DecodeErrorPolicy::Report
            },
        })
    }

    /// Plain rename configuration with default options
    pub fn new(target_dir: impl Into<PathBuf>, match_word: &str, replacement: &str) -> Self {
        Self {
            target_dir: target_dir.into(),
            match_word: match_word.to_string(),
            replacement: replacement.to_string(),
            jpeg_only: false,
            mode: OperationMode::Rename,
            collision: CollisionPolicy::Refuse,
            decode_errors: DecodeErrorPolicy::Report,
        }
    }
}
