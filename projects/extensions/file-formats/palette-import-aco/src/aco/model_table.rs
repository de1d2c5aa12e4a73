//! The color model table: per-model channel layout and scaling.

use crate::aco::constants::*;
use palette_import_api_common::ColorSpace;

/// Channel scaling rule of a supported color model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRule {
    /// Unsigned words as fractions of 0xFFFF.
    Unorm16,
    /// Ink coverage stored inverted: `1 - v/0xFFFF`.
    InvertedInk16,
    /// Unsigned words as fractions of 10000.
    Unorm10k,
    /// L as an unsigned word over 100; a and b as signed words over 100.
    Lab,
}

/// Decode recipe for one supported model code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec {
    /// Color-space tag the decoded values are stored under.
    pub space: ColorSpace,
    /// Number of channel words to read.
    pub channels: usize,
    pub rule: ChannelRule,
    /// Unused bytes after the channel words; every entry's value block is
    /// ten bytes including the model code.
    pub trailing_skip: usize,
}

/// Look up the decode recipe for `code`.
///
/// `None` marks a catalog model (ink libraries referenced by name only)
/// or an out-of-range code; those entries carry no decodable values.
pub fn model_spec(code: u16) -> Option<ModelSpec> {
    match code {
        MODEL_RGB => Some(ModelSpec {
            space: ColorSpace::Rgb,
            channels: 3,
            rule: ChannelRule::Unorm16,
            trailing_skip: 2,
        }),
        MODEL_HSB => Some(ModelSpec {
            space: ColorSpace::Hsv,
            channels: 3,
            rule: ChannelRule::Unorm16,
            trailing_skip: 2,
        }),
        MODEL_CMYK => Some(ModelSpec {
            space: ColorSpace::Cmyk,
            channels: 4,
            rule: ChannelRule::InvertedInk16,
            trailing_skip: 0,
        }),
        MODEL_LAB => Some(ModelSpec {
            space: ColorSpace::Lab,
            channels: 3,
            rule: ChannelRule::Lab,
            trailing_skip: 2,
        }),
        MODEL_GRAY => Some(ModelSpec {
            space: ColorSpace::Gray,
            channels: 1,
            rule: ChannelRule::Unorm10k,
            trailing_skip: 6,
        }),
        MODEL_WIDE_CMYK => Some(ModelSpec {
            space: ColorSpace::Cmyk,
            channels: 4,
            rule: ChannelRule::Unorm10k,
            trailing_skip: 0,
        }),
        _ => None,
    }
}

/// Diagnostic name for a model code. Codes past the vendor table are named
/// by number instead of failing the lookup.
pub fn model_name(code: u16) -> String {
    match MODEL_NAMES.get(usize::from(code)) {
        Some(name) => (*name).to_owned(),
        None => format!("model {code}"),
    }
}
