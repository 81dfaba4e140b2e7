mod executor;
mod name_builder;
mod reencode;
mod types;

pub use executor::{execute_batch, rename_entry};
pub use name_builder::{replace_first, replace_first_os};
pub use reencode::{reencode_entry, JPEG_QUALITY};
pub use types::{BatchResult, EntryError, OutcomeStatus, RenameOperation, RenameOutcome};
