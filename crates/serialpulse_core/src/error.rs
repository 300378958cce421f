use std::fmt;

/// Errors from normalizing raw tabular input.
///
/// Malformed numeric cells are deliberately not represented here: they default
/// to zero during parsing so one dirty cell cannot sink a whole ingestion.
#[derive(Debug)]
pub enum StoreError {
    /// The input had no header row.
    MissingHeader,
    /// A required column was absent from the header row.
    MissingColumn(&'static str),
    /// The underlying reader failed (I/O or unbalanced quoting).
    Read(csv::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::MissingHeader => write!(f, "input has no header row"),
            StoreError::MissingColumn(name) => {
                write!(f, "required column {name:?} missing from header row")
            }
            StoreError::Read(e) => write!(f, "failed to read tabular input: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Read(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        StoreError::Read(e)
    }
}
