//! Deterministic identifiers derived from value lists.

use std::fmt::Write as _;

/// Encode a value list as a stable identifier fragment.
///
/// The encoding is order-preserving and yields equal output for equal
/// input, which is all the resolution policy relies on. It is used as the
/// naming fallback for unnamed entries and as the rename suffix on
/// identifier collisions.
///
/// Channels are rendered as fixed four-decimal fractions joined by spaces:
///
/// ```
/// use palette_import_api_common::id_from_values;
///
/// assert_eq!(id_from_values(&[1.0, 0.0, 0.5]), "1.0000 0.0000 0.5000");
/// ```
pub fn id_from_values(values: &[f64]) -> String {
    let mut out = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{value:.4}");
    }
    out
}
