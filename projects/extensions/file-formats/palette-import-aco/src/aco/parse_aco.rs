//! Entry and file decoding for the Adobe Color Swatch format.

use crate::aco::constants::*;
use crate::aco::model_table::{model_name, model_spec, ChannelRule, ModelSpec};
use palette_import_api_common::{Candidate, ColorKey, DiagnosticSink, Palette};
use palette_import_formats_api::{ByteReader, CodecError, CodecResult};

/// Decode a complete `.aco` byte stream into `palette`.
///
/// Reads the `(version, count)` header, applies the dual-section rule, and
/// folds every entry into the palette through the shared identifier
/// resolution. Non-fatal conditions (catalog models, duplicated
/// identifiers) go to `sink`; any short read aborts with
/// [`CodecError::Truncated`]. Entries accumulated before a failure remain
/// in the palette.
///
/// # Dual-section files
///
/// Several exporters write a version-1 section (unnamed, fixed ten-byte
/// entries) followed by a version-2 section repeating the same colors with
/// names. When a version-1 header leaves more than one spare byte beyond
/// its own section, the decoder repositions to the second header and
/// decodes only that section, so entries are not imported twice. The one
/// spare byte tolerated accounts for a vendor tool that pads the legacy
/// section with a single trailing byte.
pub fn decode_aco(
    input: &[u8],
    palette: &mut Palette,
    sink: &mut dyn DiagnosticSink,
) -> CodecResult<()> {
    let mut reader = ByteReader::new(input);
    let (mut version, mut count) = read_header(&mut reader)?;

    if version == VERSION_UNNAMED {
        let legacy_end = ACO_HEADER_SIZE + usize::from(count) * LEGACY_ENTRY_SIZE;
        if input.len() > legacy_end + LEGACY_SECTION_PAD {
            reader.seek_to(legacy_end)?;
            (version, count) = read_header(&mut reader)?;
        }
    }

    for index in 0..usize::from(count) {
        let candidate = decode_entry(&mut reader, version, sink)?;
        palette.accumulate(candidate, index, sink);
    }
    Ok(())
}

fn read_header(reader: &mut ByteReader<'_>) -> CodecResult<(u16, u16)> {
    let version = reader.read_u16_be()?;
    let count = reader.read_u16_be()?;
    Ok((version, count))
}

/// Decode one color entry: the ten-byte value block, then the name field
/// of the active sub-format version.
fn decode_entry(
    reader: &mut ByteReader<'_>,
    version: u16,
    sink: &mut dyn DiagnosticSink,
) -> CodecResult<Candidate> {
    let mut candidate = Candidate::default();

    let code = reader.read_u16_be()?;
    match model_spec(code) {
        Some(spec) => {
            let channels = decode_channels(reader, spec)?;
            candidate
                .values
                .insert(ColorKey::process(spec.space), channels);
            reader.skip(spec.trailing_skip)?;
        }
        None => {
            // Catalog entry: no decodable values, only the short fixed
            // name field that may seed the identifier.
            sink.warning(&format!("unsupported color model [{}]", model_name(code)));
            let raw = reader.read_bytes(CATALOG_NAME_SIZE)?;
            candidate.identifier = catalog_identifier(raw);
            reader.skip(1)?;
        }
    }

    if let Some(name) = decode_name(reader, version)? {
        candidate.identifier = Some(name);
    }
    Ok(candidate)
}

fn decode_channels(reader: &mut ByteReader<'_>, spec: ModelSpec) -> CodecResult<Vec<f64>> {
    let mut channels = Vec::with_capacity(spec.channels);
    match spec.rule {
        ChannelRule::Unorm16 => {
            for _ in 0..spec.channels {
                channels.push(f64::from(reader.read_u16_be()?) / 65535.0);
            }
        }
        ChannelRule::InvertedInk16 => {
            for _ in 0..spec.channels {
                channels.push(1.0 - f64::from(reader.read_u16_be()?) / 65535.0);
            }
        }
        ChannelRule::Unorm10k => {
            for _ in 0..spec.channels {
                channels.push(f64::from(reader.read_u16_be()?) / 10000.0);
            }
        }
        ChannelRule::Lab => {
            channels.push(f64::from(reader.read_u16_be()?) / 100.0);
            channels.push(f64::from(reader.read_i16_be()?) / 100.0);
            channels.push(f64::from(reader.read_i16_be()?) / 100.0);
        }
    }
    Ok(channels)
}

/// Decode the name field of the active sub-format version.
///
/// Returns `None` when the version carries no name field or the decoded
/// name is empty; an empty name must fall back to a derived identifier,
/// never become an empty-string key.
fn decode_name(reader: &mut ByteReader<'_>, version: u16) -> CodecResult<Option<String>> {
    match version {
        VERSION_NAMED_UTF16 => {
            let offset = reader.position();
            let length = reader.read_u32_be()? as usize;
            if length == 0 {
                return Ok(None);
            }
            let raw = reader.read_bytes(length.saturating_mul(2))?;
            let mut units = Vec::with_capacity(length);
            for pair in raw.chunks_exact(2) {
                units.push(u16::from_be_bytes([pair[0], pair[1]]));
            }
            // The stored length includes a trailing NUL; text past the
            // first NUL code point is dropped.
            let end = units.iter().position(|&unit| unit == 0).unwrap_or(units.len());
            let name = String::from_utf16(&units[..end])
                .map_err(|_| CodecError::InvalidEntryName { offset })?;
            Ok((!name.is_empty()).then_some(name))
        }
        VERSION_NAMED_RAW => {
            let length = usize::from(reader.read_u8()?);
            if length == 0 {
                return Ok(None);
            }
            let raw = reader.read_bytes(length)?;
            // Legacy tools wrote single-byte text; decoded as Latin-1.
            Ok(Some(raw.iter().map(|&byte| char::from(byte)).collect()))
        }
        _ => Ok(None),
    }
}

/// Identifier from a catalog entry's fixed seven-byte field: NUL-truncated
/// and whitespace-trimmed; empty means unnamed.
fn catalog_identifier(raw: &[u8]) -> Option<String> {
    let end = raw.iter().position(|&byte| byte == 0).unwrap_or(raw.len());
    let name: String = raw[..end].iter().map(|&byte| char::from(byte)).collect();
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
