//! Shared palette data model for palette importers.
//!
//! This crate holds the target data model every format codec decodes into:
//! a [`Palette`] owning a store of deduplicated [`Material`] definitions and
//! an ordered list of [`Swatch`] references. It also carries the pieces of
//! policy that are shared between import paths:
//!
//! - The identifier-resolution rules applied while populating the store
//!   (reuse, rename-on-collision, register-new), see [`resolve()`].
//! - The deterministic value-to-identifier encoding used to name unnamed
//!   entries, see [`id_from_values`].
//! - The [`DiagnosticSink`] abstraction for non-fatal import warnings.
//!
//! Codecs only ever insert materials and append swatches; they never remove
//! or reorder. The palette is exclusively owned by the caller of a decode
//! operation, so there is no internal synchronization.

pub mod diagnostics;
pub mod ident;
pub mod material;
pub mod palette;
pub mod resolve;

// Re-export key types
pub use diagnostics::{DiagnosticSink, LogDiagnostics};
pub use ident::id_from_values;
pub use material::{ColorKey, ColorSpace, Material};
pub use palette::{Palette, PaletteInfo, Swatch};
pub use resolve::{resolve, Candidate, Resolution};
