//! ACO format decoder implementation.

mod format_detection;
mod palette_decoder;

/// Decoder for the Adobe Color Swatch (`.aco`) palette format.
///
/// Supports all three sub-format versions multiplexed behind the leading
/// version word, including dual-section files where a named section
/// follows the legacy binary-only one. Plug an instance into a
/// `DecoderRegistry` for format auto-detection.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcoDecoder;
