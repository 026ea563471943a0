use schema::{Generation, LearnEnvironment};
use thiserror::Error;

/// Errors raised while decoding the packed reference tables.
///
/// Every variant is fatal to table construction: a partially decoded table set
/// is never exposed to queries.
#[derive(Debug, Error)]
pub enum TableError {
    /// The outer resource bundle could not be decoded
    #[error("resource bundle is malformed: {0}")]
    Bundle(#[from] postcard::Error),

    /// A linked blob is shorter than its header or offset table
    #[error("linked blob is truncated: {len} bytes, needed at least {needed}")]
    TruncatedBlob { len: usize, needed: usize },

    /// A linked blob carries another environment's identifier
    #[error("linked blob identifier mismatch: expected {expected:?}, found {found:?}")]
    IdentifierMismatch { expected: [u8; 2], found: [u8; 2] },

    /// An entry offset points outside the blob or before the previous entry
    #[error("linked blob offset {offset} for entry {index} is out of bounds (blob is {len} bytes)")]
    OffsetOutOfBounds { index: usize, offset: usize, len: usize },

    /// A learnset entry does not divide into whole (level, move) records
    #[error("learnset for species {species} has a partial record ({len} bytes, {generation})")]
    MalformedLearnset {
        species: usize,
        len: usize,
        generation: Generation,
    },

    /// An egg move entry does not divide into whole move ids
    #[error("egg move list for species {species} has a partial move id ({len} bytes)")]
    MalformedEggMoves { species: usize, len: usize },

    /// The personal table is not a whole number of records
    #[error("personal table of {len} bytes is not a multiple of the {record_size}-byte {generation} record")]
    MalformedPersonal {
        len: usize,
        record_size: usize,
        generation: Generation,
    },

    /// The bundle holds two table sets for one environment
    #[error("resource bundle contains {0} more than once")]
    DuplicateEnvironment(LearnEnvironment),

    /// The process-wide table store was already populated
    #[error("reference tables are already initialized")]
    AlreadyInitialized,
}

/// Errors raised while loading learn options from configuration text.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid learn options: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Type alias for Results using TableError
pub type TableResult<T> = Result<T, TableError>;

/// Type alias for Results using SettingsError
pub type SettingsResult<T> = Result<T, SettingsError>;
