//! Common test imports and fixture builders for ACO decoder tests.
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

// Shared constants for fixture construction
pub(crate) use crate::aco::constants::*;

use crate::aco::parse_aco::decode_aco;
use byteorder::{BigEndian, WriteBytesExt};
use palette_import_api_common::Palette;

/// Incremental `.aco` byte-stream builder.
///
/// Writes fields in stream order, big-endian, so tests read like the file
/// layout. Entry helpers always emit complete ten-byte value blocks.
pub struct AcoBytes {
    data: Vec<u8>,
}

impl AcoBytes {
    /// Start a stream with a `(version, count)` header.
    pub fn header(version: u16, count: u16) -> Self {
        AcoBytes { data: Vec::new() }.u16(version).u16(count)
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.data.write_u8(value).unwrap();
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.data.write_u16::<BigEndian>(value).unwrap();
        self
    }

    pub fn i16(mut self, value: i16) -> Self {
        self.data.write_i16::<BigEndian>(value).unwrap();
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.data.write_u32::<BigEndian>(value).unwrap();
        self
    }

    pub fn bytes(mut self, raw: &[u8]) -> Self {
        self.data.extend_from_slice(raw);
        self
    }

    /// Zero padding.
    pub fn pad(self, count: usize) -> Self {
        let mut next = self;
        for _ in 0..count {
            next = next.u8(0);
        }
        next
    }

    /// Complete value block for an unsigned-word model: code, channel
    /// words, and the trailing pad up to the fixed block size.
    pub fn value_block(self, code: u16, fields: &[u16]) -> Self {
        let mut next = self.u16(code);
        for &field in fields {
            next = next.u16(field);
        }
        next.pad(LEGACY_ENTRY_SIZE - 2 - fields.len() * 2)
    }

    /// Value block for the Lab model: unsigned L, signed a and b.
    pub fn lab_block(self, l: u16, a: i16, b: i16) -> Self {
        self.u16(MODEL_LAB).u16(l).i16(a).i16(b).pad(2)
    }

    /// Value block for a catalog (unsupported) model: code, the fixed
    /// seven-byte name field, one pad byte.
    pub fn catalog_block(self, code: u16, name: &[u8; CATALOG_NAME_SIZE]) -> Self {
        self.u16(code).bytes(name).pad(1)
    }

    /// Version-2 name field: u32 length including the trailing NUL, then
    /// UTF-16BE code units.
    pub fn utf16_name(self, name: &str) -> Self {
        let units: Vec<u16> = name.encode_utf16().collect();
        let mut next = self.u32(units.len() as u32 + 1);
        for unit in units {
            next = next.u16(unit);
        }
        next.u16(0)
    }

    /// Version-2 name field with explicit code units and no implicit NUL.
    pub fn utf16_units(self, units: &[u16]) -> Self {
        let mut next = self.u32(units.len() as u32);
        for &unit in units {
            next = next.u16(unit);
        }
        next
    }

    /// Version-0 name field: u8 length, then raw bytes.
    pub fn raw_name(self, name: &[u8]) -> Self {
        self.u8(name.len() as u8).bytes(name)
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

/// Decode `data` into a fresh palette, collecting warnings.
///
/// Panics when decoding fails; tests exercising failures call
/// [`decode_aco`] directly.
pub fn decode_collecting(data: &[u8]) -> (Palette, Vec<String>) {
    let mut palette = Palette::new();
    let mut warnings: Vec<String> = Vec::new();
    decode_aco(data, &mut palette, &mut warnings).expect("decode should succeed");
    (palette, warnings)
}
