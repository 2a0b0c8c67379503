//! Import of annual utility-bill exports into audit utility entries.
//!
//! The import is strict: a row naming a fuel the engine does not know is an
//! error here, unlike the normalizer's lenient pass-through for unknown
//! fuel/unit combinations on already-accepted records.

mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::workflows::audit::domain::UtilityEntry;

/// Error raised while importing a utility-bill CSV.
#[derive(Debug, thiserror::Error)]
pub enum BillingImportError {
    #[error("failed to read utility csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to open utility csv: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown fuel type '{label}' in row {row}")]
    UnknownFuel { row: usize, label: String },
}

pub fn import_from_path(path: impl AsRef<Path>) -> Result<Vec<UtilityEntry>, BillingImportError> {
    let file = File::open(path)?;
    import_from_reader(file)
}

pub fn import_from_reader<R: Read>(reader: R) -> Result<Vec<UtilityEntry>, BillingImportError> {
    parser::parse_entries(reader)
}
