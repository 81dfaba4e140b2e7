use clap::error::{ContextKind, Error as ClapError};
use thiserror::Error;

/// Names shown to the user for each recognized argument
pub const DIR_ARG: &str = "-dir";
pub const WORD_ARG: &str = "-word";
pub const NEW_ARG: &str = "-new";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Argument '{arg}' must join its name and value with a single '='")]
    MissingSeparator { arg: String },

    #[error("Unknown argument name: '{name}'")]
    UnknownArgument { name: String },

    #[error("No value given for {name}")]
    MissingValue { name: &'static str },

    #[error("{message}")]
    Rejected { arg: String, message: String },

    #[error("Invalid value '{value}' for {name}: character {ch:?} is not allowed")]
    IllegalCharacter {
        name: &'static str,
        value: String,
        ch: char,
    },
}

impl ArgumentError {
    /// The argument the error is about, as the user typed or would type it
    pub fn argument(&self) -> &str {
        match self {
            ArgumentError::MissingSeparator { arg } => arg.as_str(),
            ArgumentError::UnknownArgument { name } => name.as_str(),
            ArgumentError::MissingValue { name } => *name,
            ArgumentError::Rejected { arg, .. } => arg.as_str(),
            ArgumentError::IllegalCharacter { name, .. } => *name,
        }
    }
}

impl From<ClapError> for ArgumentError {
    fn from(err: ClapError) -> Self {
        let arg = err
            .get(ContextKind::InvalidArg)
            .map(|value| value.to_string())
            .unwrap_or_else(|| "command line".to_string());

        let rendered = err.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();

        ArgumentError::Rejected { arg, message }
    }
}
