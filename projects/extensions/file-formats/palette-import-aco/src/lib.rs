//! Adobe Color Swatch (`.aco`) support for palette imports.
//!
//! The vendor format multiplexes three incompatible sub-formats behind one
//! two-byte version word: version 1 carries unnamed binary entries, version
//! 2 carries UTF-16 named entries, and version 0 is an older convention
//! with single-byte-length raw names. Exporters commonly concatenate a
//! version-1 section and a version-2 section describing the same palette
//! into a single file; only the named section is decoded then.
//!
//! Entries that encode the identical color collapse to one stored material,
//! while entries that reuse a name for different content are re-keyed, so
//! re-exported libraries import without duplicate definitions.
//!
//! # Example
//!
//! ```
//! use palette_import_aco::AcoDecoder;
//! use palette_import_api_common::Palette;
//! use palette_import_formats_api::PaletteDecoder;
//!
//! // version 2, one RGB entry named "A"
//! let data: &[u8] = &[
//!     0, 2, 0, 1, // header
//!     0, 0, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0, // RGB red
//!     0, 0, 0, 2, 0, b'A', 0, 0, // name "A" + NUL
//! ];
//!
//! let mut palette = Palette::new();
//! let mut warnings: Vec<String> = Vec::new();
//! AcoDecoder.decode(data, &mut palette, &mut warnings).unwrap();
//! assert!(palette.materials.contains_key("A"));
//! ```

pub mod aco;
pub mod handler;

#[cfg(test)]
pub(crate) mod test_prelude;

// Re-export key types
pub use aco::likely_aco::likely_aco;
pub use aco::parse_aco::decode_aco;
pub use handler::AcoDecoder;
