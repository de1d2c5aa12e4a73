//! Stored color definitions and their value representations.

use std::collections::BTreeMap;

/// Color-space tag of one stored value list.
///
/// Tags name the interpretation of the normalized channel values, not a
/// calibrated color space; no transform or gamut validation is performed on
/// import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorSpace {
    /// Three channels, each in `[0, 1]`.
    Rgb,
    /// Hue/saturation/value, each normalized to `[0, 1]`.
    Hsv,
    /// Four ink coverages in `[0, 1]`.
    Cmyk,
    /// L in `[0, 100]`; a and b are signed and may be negative.
    Lab,
    /// Single ink coverage in `[0, 1]`.
    Gray,
}

/// Key of one representation held by a [`Material`].
///
/// `spot` distinguishes the special/spot-colorant convention from process
/// color. File decoders only produce process values; spot representations
/// come from library services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorKey {
    pub space: ColorSpace,
    pub spot: bool,
}

impl ColorKey {
    /// Process-color key for `space`.
    pub fn process(space: ColorSpace) -> Self {
        ColorKey { space, spot: false }
    }
}

/// A stored, deduplicated color definition.
///
/// Materials are created while decoding and never mutated once registered,
/// with one exception: when a later entry collides with this material's
/// identifier, the display title is overwritten with the contested
/// identifier so the original entry stays distinguishable after the rename.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    /// Unique key in the palette's material store.
    pub identifier: String,
    /// Optional display title; unset for freshly decoded entries.
    pub title: Option<String>,
    /// Normalized channel values per representation. A single decoded entry
    /// contributes at most one key; library services may add several.
    pub values: BTreeMap<ColorKey, Vec<f64>>,
}

impl Material {
    /// Material with `identifier` and no values.
    pub fn new(identifier: impl Into<String>) -> Self {
        Material {
            identifier: identifier.into(),
            ..Material::default()
        }
    }

    /// First stored value list, if any.
    ///
    /// Duplicate detection compares only this list; the color-space tag does
    /// not participate in the comparison.
    pub fn first_values(&self) -> Option<&[f64]> {
        self.values.values().next().map(Vec::as_slice)
    }

    /// True when no representation has been stored.
    pub fn is_contentless(&self) -> bool {
        self.values.is_empty()
    }
}
