//! [`PaletteFormatDetection`] implementation for ACO files.

use crate::aco::likely_aco::likely_aco;
use palette_import_formats_api::PaletteFormatDetection;

impl PaletteFormatDetection for super::AcoDecoder {
    fn can_decode(&self, input: &[u8]) -> bool {
        likely_aco(input)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["aco"]
    }
}
