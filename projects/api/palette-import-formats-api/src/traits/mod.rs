//! Traits implemented by palette format codecs.

mod format_detection;
mod palette_decoder;

pub use format_detection::PaletteFormatDetection;
pub use palette_decoder::PaletteDecoder;
