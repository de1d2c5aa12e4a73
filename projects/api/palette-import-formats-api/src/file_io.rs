//! File operations for palette decoding.
//!
//! Palette exchange files are small (a few kilobytes), so this layer reads
//! them whole with [`std::fs::read`] and hands the bytes to the registry.
//! Retry policy, if any, belongs to the caller's I/O layer; the formats
//! are static files and nothing here retries.

use std::path::Path;

use thiserror::Error;

use crate::error::CodecError;
use crate::registry::DecoderRegistry;
use palette_import_api_common::{DiagnosticSink, Palette};

/// Result type for file-based decode operations
pub type FileOperationResult<T> = Result<T, FileOperationError>;

/// Errors from reading and decoding a palette file.
#[derive(Debug, Error)]
pub enum FileOperationError {
    /// Reading the file itself failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file content could not be decoded
    #[error("Decode error: {0}")]
    Codec(#[from] CodecError),
}

/// Read `path` and decode it through `registry` into `palette`.
pub fn decode_palette_file(
    path: impl AsRef<Path>,
    registry: &DecoderRegistry,
    palette: &mut Palette,
    sink: &mut dyn DiagnosticSink,
) -> FileOperationResult<()> {
    let data = std::fs::read(path)?;
    registry.decode(&data, palette, sink)?;
    Ok(())
}
