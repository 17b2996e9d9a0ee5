/// CSV-backed implementation of the persistence operations.
pub mod csv;

/// Error surfaced by the persistence layer.
///
/// I/O and codec failures are propagated untouched; the library never
/// retries or half-applies a load. Row-shape problems (bad room number,
/// missing identity) are not errors — malformed rows are skipped during
/// [`csv::load`].
#[derive(Debug)]
pub enum PersistError {
    /// CSV decode or encode failure.
    Csv(::csv::Error),
    /// Underlying file I/O failure.
    Io(std::io::Error),
}

impl From<::csv::Error> for PersistError {
    fn from(value: ::csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;
