//! Error types for palette decode operations.

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors a palette codec can fail with.
///
/// All variants abort the current decode call. Entries accumulated into
/// the target palette before the failure remain there, since accumulation
/// is not transactional. Recoverable conditions (unsupported color model,
/// duplicated identifier) are reported through the diagnostic sink
/// instead and never surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// No registered codec recognizes the input - the caller should try a
    /// different decoder or reject the file
    #[error("Unknown palette format")]
    UnknownPaletteFormat,

    /// Fewer bytes available than a header or entry field requires
    #[error("Input truncated at offset {offset}: required {required} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        required: usize,
        remaining: usize,
    },

    /// An entry name field holds invalid UTF-16 text
    #[error("Entry name at offset {offset} is not valid UTF-16")]
    InvalidEntryName { offset: usize },
}
