/// Determines if the given data likely represents an Adobe Color Swatch
/// stream. The format has no magic number; the first big-endian word is
/// the sub-format version, and only versions 0, 1 and 2 exist. The word is
/// read signed so high-bit prefixes of other binary formats are rejected.
/// For actual decoding, use [`decode_aco`].
///
/// [`decode_aco`]: crate::aco::parse_aco::decode_aco
#[inline(always)]
pub fn likely_aco(data: &[u8]) -> bool {
    data.len() >= 2 && matches!(i16::from_be_bytes([data[0], data[1]]), 0..=2)
}
