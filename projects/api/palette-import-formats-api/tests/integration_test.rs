//! Integration tests for the palette format API

use palette_import_aco::AcoDecoder;
use palette_import_api_common::Palette;
use palette_import_formats_api::{
    decode_palette_file, CodecError, DecoderRegistry, FileOperationError,
};

/// version 2, one RGB entry named "A", one duplicate of it
fn create_test_aco() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0, 2, 0, 2]); // header: version 2, two entries

    for _ in 0..2 {
        // RGB red: model 0, R=0xFFFF, G=0, B=0, pad
        data.extend_from_slice(&[0, 0, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0]);
        // name "A" + trailing NUL
        data.extend_from_slice(&[0, 0, 0, 2, 0, b'A', 0, 0]);
    }

    data
}

fn aco_registry() -> DecoderRegistry {
    let mut registry = DecoderRegistry::new();
    registry.register(Box::new(AcoDecoder));
    registry
}

#[test]
fn registry_detects_and_decodes_an_aco_stream() {
    let registry = aco_registry();
    let input = create_test_aco();

    let mut palette = Palette::new();
    let mut warnings: Vec<String> = Vec::new();
    registry
        .decode(&input, &mut palette, &mut warnings)
        .expect("decode should succeed");

    // Two entries, one deduplicated material.
    assert_eq!(palette.materials.len(), 1);
    assert_eq!(palette.items.len(), 2);
    assert!(warnings.is_empty());
}

#[test]
fn registry_rejects_unknown_bytes() {
    let registry = aco_registry();

    let mut palette = Palette::new();
    let mut warnings: Vec<String> = Vec::new();
    let result = registry.decode(b"GIMP Palette\n", &mut palette, &mut warnings);
    assert_eq!(result, Err(CodecError::UnknownPaletteFormat));
    assert!(palette.items.is_empty());
}

#[test]
fn registry_exposes_the_detected_decoder() {
    let registry = aco_registry();
    let input = create_test_aco();

    let decoder = registry.detect(&input).expect("probe should match");
    assert_eq!(decoder.supported_extensions(), ["aco"]);
}

#[test]
fn decode_palette_file_reads_from_disk() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), create_test_aco()).unwrap();

    let registry = aco_registry();
    let mut palette = Palette::new();
    let mut warnings: Vec<String> = Vec::new();
    decode_palette_file(file.path(), &registry, &mut palette, &mut warnings)
        .expect("file decode should succeed");

    assert_eq!(palette.materials.len(), 1);
    assert_eq!(palette.items.len(), 2);
}

#[test]
fn decode_palette_file_propagates_truncation() {
    let file = tempfile::NamedTempFile::new().unwrap();
    // Declares five entries, provides none.
    std::fs::write(file.path(), [0u8, 2, 0, 5]).unwrap();

    let registry = aco_registry();
    let mut palette = Palette::new();
    let mut warnings: Vec<String> = Vec::new();
    let result = decode_palette_file(file.path(), &registry, &mut palette, &mut warnings);
    assert!(matches!(
        result,
        Err(FileOperationError::Codec(CodecError::Truncated { .. }))
    ));
}
