//! Layout constants of the Adobe Color Swatch format.
#![allow(dead_code)]

/// Size of one (version, count) header.
pub(crate) const ACO_HEADER_SIZE: usize = 4;

/// Size of one entry in the version-1 section: model code plus four
/// channel words, names absent.
pub(crate) const LEGACY_ENTRY_SIZE: usize = 10;

/// One vendor tool appends a single byte after the version-1 section of a
/// dual-section file; the section length check tolerates it.
pub(crate) const LEGACY_SECTION_PAD: usize = 1;

/// Sub-format version words multiplexed in one file.
pub(crate) const VERSION_NAMED_RAW: u16 = 0; // single-byte length + raw 8-bit name
pub(crate) const VERSION_UNNAMED: u16 = 1; // no name field
pub(crate) const VERSION_NAMED_UTF16: u16 = 2; // u32 length + UTF-16BE name

// Color model codes with a decodable value layout.
pub(crate) const MODEL_RGB: u16 = 0;
pub(crate) const MODEL_HSB: u16 = 1;
pub(crate) const MODEL_CMYK: u16 = 2;
pub(crate) const MODEL_LAB: u16 = 7;
pub(crate) const MODEL_GRAY: u16 = 8;
pub(crate) const MODEL_WIDE_CMYK: u16 = 9;

/// Display names of the sixteen model codes the vendor format defines,
/// indexed by code. Codes without a decodable layout are catalog
/// references (ink libraries) carrying only a name.
pub(crate) const MODEL_NAMES: [&str; 16] = [
    "RGB",
    "HSB",
    "CMYK",
    "Pantone",
    "Focoltone",
    "Trumatch",
    "Toyo",
    "Lab",
    "Gray",
    "WideCMYK",
    "HKS",
    "DIC",
    "TotalInk",
    "MonitorRGB",
    "Duotone",
    "Opacity",
];

/// Size of the fixed name field of a catalog-model entry.
pub(crate) const CATALOG_NAME_SIZE: usize = 7;
