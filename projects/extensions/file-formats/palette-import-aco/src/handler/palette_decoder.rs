//! [`PaletteDecoder`] implementation for ACO files.

use crate::aco::parse_aco::decode_aco;
use palette_import_api_common::{DiagnosticSink, Palette};
use palette_import_formats_api::{CodecResult, PaletteDecoder};

impl PaletteDecoder for super::AcoDecoder {
    fn decode(
        &self,
        input: &[u8],
        palette: &mut Palette,
        sink: &mut dyn DiagnosticSink,
    ) -> CodecResult<()> {
        decode_aco(input, palette, sink)
    }
}
