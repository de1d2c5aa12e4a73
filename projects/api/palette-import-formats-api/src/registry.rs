//! Explicit registration list of palette format decoders.

use crate::error::{CodecError, CodecResult};
use crate::traits::PaletteFormatDetection;
use palette_import_api_common::{DiagnosticSink, Palette};

/// Ordered list of registered decoders, tried front to back.
///
/// Built explicitly at startup by the importing application; there is no
/// runtime plugin discovery. Registration order is the tie-breaker when
/// more than one probe accepts an input, so register the more specific
/// formats first.
#[derive(Default)]
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn PaletteFormatDetection>>,
}

impl DecoderRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        DecoderRegistry::default()
    }

    /// Append a decoder to the detection order.
    pub fn register(&mut self, decoder: Box<dyn PaletteFormatDetection>) {
        self.decoders.push(decoder);
    }

    /// Number of registered decoders.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// First registered decoder whose probe accepts `input`.
    pub fn detect(&self, input: &[u8]) -> Option<&dyn PaletteFormatDetection> {
        self.decoders
            .iter()
            .map(Box::as_ref)
            .find(|decoder| decoder.can_decode(input))
    }

    /// Detect the format of `input` and decode it into `palette`.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownPaletteFormat`] when no registered probe
    /// accepts the input; otherwise whatever the selected decoder fails
    /// with.
    pub fn decode(
        &self,
        input: &[u8],
        palette: &mut Palette,
        sink: &mut dyn DiagnosticSink,
    ) -> CodecResult<()> {
        match self.detect(input) {
            Some(decoder) => decoder.decode(input, palette, sink),
            None => Err(CodecError::UnknownPaletteFormat),
        }
    }
}
