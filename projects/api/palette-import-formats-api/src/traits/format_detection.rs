//! Trait for palette format auto-detection.

use crate::traits::PaletteDecoder;

/// Trait for detecting whether a byte stream plausibly belongs to a
/// decoder's format.
///
/// This trait extends [`PaletteDecoder`] with the probe the registry uses
/// to pick a codec for an unknown file. Detection inspects a short prefix
/// only. It must not allocate and must not attempt a full parse, since it
/// runs once per registered codec on every unknown input.
///
/// Detection is inherently heuristic for headerless vendor formats; the
/// extension list exists to cut the false-positive rate when the caller
/// knows the file name.
pub trait PaletteFormatDetection: PaletteDecoder {
    /// Check if this decoder can plausibly process the input data.
    ///
    /// Returns `false` for inputs shorter than the probed prefix.
    fn can_decode(&self, input: &[u8]) -> bool;

    /// File extensions this decoder handles (lowercase, without leading
    /// dot). An empty string in the slice indicates all extensions.
    fn supported_extensions(&self) -> &[&str];
}
