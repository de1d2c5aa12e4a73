//! Core trait for palette format decoders.

use crate::error::CodecResult;
use palette_import_api_common::{DiagnosticSink, Palette};

/// Trait for decoding one palette exchange format.
///
/// A decoder populates the caller-owned [`Palette`]: it registers
/// deduplicated materials in the material store and appends one swatch
/// reference per input entry, in input order. It never deletes or reorders
/// and never touches the palette's free-form metadata.
///
/// Decoding is synchronous and single-pass; there are no suspension points
/// and no cancellation. It is also not transactional: when decoding fails
/// midway, entries accumulated before the failure remain in the palette.
///
/// Recoverable conditions (an unsupported color model, a duplicated
/// identifier) are reported through `sink` and decoding continues; only
/// structural failures surface as errors.
pub trait PaletteDecoder: Send + Sync {
    /// Decode `input` into `palette`, reporting non-fatal conditions to
    /// `sink`.
    ///
    /// # Parameters
    ///
    /// - `input`: The complete file contents
    /// - `palette`: Target palette, exclusively owned by this call
    /// - `sink`: Receiver for non-fatal import warnings
    ///
    /// # Errors
    ///
    /// [`CodecError::Truncated`] when the input ends before a declared
    /// field, and codec-specific structural errors otherwise.
    ///
    /// [`CodecError::Truncated`]: crate::error::CodecError::Truncated
    fn decode(
        &self,
        input: &[u8],
        palette: &mut Palette,
        sink: &mut dyn DiagnosticSink,
    ) -> CodecResult<()>;
}
