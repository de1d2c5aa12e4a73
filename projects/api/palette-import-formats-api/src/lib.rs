//! Format-aware decoding API for palette imports.
//!
//! This crate provides the polymorphic codec interface palette formats plug
//! into, the registry that auto-detects which codec understands a byte
//! stream, and the supporting error taxonomy and byte-reading plumbing.
//!
//! # Example
//!
//! ```no_run
//! use palette_import_api_common::{LogDiagnostics, Palette};
//! use palette_import_formats_api::{DecoderRegistry, FileOperationResult};
//! use palette_import_aco::AcoDecoder;
//!
//! fn import(path: &str) -> FileOperationResult<Palette> {
//!     let mut registry = DecoderRegistry::new();
//!     registry.register(Box::new(AcoDecoder));
//!
//!     let mut palette = Palette::new();
//!     let mut sink = LogDiagnostics;
//!     palette_import_formats_api::decode_palette_file(path, &registry, &mut palette, &mut sink)?;
//!     Ok(palette)
//! }
//! ```

// Core modules
pub mod error;
pub mod file_io;
pub mod reader;
pub mod registry;
pub mod traits;

// Re-export key types
pub use error::{CodecError, CodecResult};
pub use file_io::{decode_palette_file, FileOperationError, FileOperationResult};
pub use reader::ByteReader;
pub use registry::DecoderRegistry;
pub use traits::{PaletteDecoder, PaletteFormatDetection};
