//! The palette aggregate: material store plus ordered item list.

use std::collections::BTreeMap;

use crate::diagnostics::DiagnosticSink;
use crate::material::Material;
use crate::resolve::{resolve, Candidate, Resolution};

/// An order-preserving reference from the item list into the material
/// store. Multiple swatches may reference the same material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Identifier of the referenced [`Material`].
    pub material: String,
}

impl Swatch {
    pub fn new(material: impl Into<String>) -> Self {
        Swatch {
            material: material.into(),
        }
    }
}

/// Free-form palette metadata. Decoders leave this untouched; it belongs to
/// the importing application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteInfo {
    pub title: Option<String>,
}

/// Aggregate a decode populates: deduplicated materials keyed by
/// identifier, plus the ordered swatch list.
///
/// The palette is exclusively owned by the caller of a decode operation;
/// decoders only insert and append, never delete or reorder. Concurrent
/// decodes into one palette must be serialized by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    pub info: PaletteInfo,
    /// The material store.
    pub materials: BTreeMap<String, Material>,
    /// The item list, in input order.
    pub items: Vec<Swatch>,
}

impl Palette {
    pub fn new() -> Self {
        Palette::default()
    }

    /// Fold one decoded entry into the palette.
    ///
    /// Applies the [`resolve`] decision: appends exactly one [`Swatch`] per
    /// call and registers or retitles materials as the decision requires.
    /// An identifier collision is reported to `sink`; accumulation is not
    /// transactional, so entries folded in before a later failure remain.
    pub fn accumulate(
        &mut self,
        candidate: Candidate,
        entry_index: usize,
        sink: &mut dyn DiagnosticSink,
    ) {
        let identifier = candidate.resolved_identifier(entry_index);
        match resolve(&self.materials, &identifier, &candidate, entry_index) {
            Resolution::Duplicate => {
                self.items.push(Swatch::new(identifier));
            }
            Resolution::Register => {
                let material = Material {
                    identifier: identifier.clone(),
                    title: None,
                    values: candidate.values,
                };
                self.materials.insert(identifier.clone(), material);
                self.items.push(Swatch::new(identifier));
            }
            Resolution::Collision { renamed } => {
                sink.warning(&format!("duplicated id: {identifier}"));
                // The stored entry keeps the contested name as its title so
                // it stays distinguishable after the rename.
                if let Some(existing) = self.materials.get_mut(&identifier) {
                    existing.title = Some(identifier.clone());
                }
                let material = Material {
                    identifier: renamed.clone(),
                    title: None,
                    values: candidate.values,
                };
                self.materials.insert(renamed.clone(), material);
                self.items.push(Swatch::new(renamed));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::id_from_values;
    use crate::material::{ColorKey, ColorSpace};

    fn rgb(channels: [f64; 3]) -> Candidate {
        Candidate::with_values(ColorKey::process(ColorSpace::Rgb), channels.to_vec())
    }

    fn named(identifier: &str, channels: [f64; 3]) -> Candidate {
        let mut candidate = rgb(channels);
        candidate.identifier = Some(identifier.to_owned());
        candidate
    }

    #[test]
    fn registering_two_distinct_entries_keeps_input_order() {
        let mut palette = Palette::new();
        let mut sink: Vec<String> = Vec::new();
        palette.accumulate(named("red", [1.0, 0.0, 0.0]), 0, &mut sink);
        palette.accumulate(named("green", [0.0, 1.0, 0.0]), 1, &mut sink);

        assert_eq!(palette.materials.len(), 2);
        assert_eq!(palette.items, [Swatch::new("red"), Swatch::new("green")]);
        assert!(sink.is_empty());
    }

    #[test]
    fn true_duplicate_collapses_to_one_material() {
        let mut palette = Palette::new();
        let mut sink: Vec<String> = Vec::new();
        palette.accumulate(named("red", [1.0, 0.0, 0.0]), 0, &mut sink);
        palette.accumulate(named("red", [1.0, 0.0, 0.0]), 1, &mut sink);

        assert_eq!(palette.materials.len(), 1);
        assert_eq!(palette.items, [Swatch::new("red"), Swatch::new("red")]);
        assert!(sink.is_empty());
    }

    #[test]
    fn collision_retitles_original_and_rekeys_newcomer() {
        let mut palette = Palette::new();
        let mut sink: Vec<String> = Vec::new();
        palette.accumulate(named("red", [1.0, 0.0, 0.0]), 0, &mut sink);
        palette.accumulate(named("red", [0.5, 0.0, 0.0]), 1, &mut sink);

        let renamed = format!("red{}", id_from_values(&[0.5, 0.0, 0.0]));
        assert_eq!(palette.materials.len(), 2);
        assert_eq!(sink, ["duplicated id: red"]);

        let original = &palette.materials["red"];
        assert_eq!(original.title.as_deref(), Some("red"));
        assert_eq!(original.first_values(), Some(&[1.0, 0.0, 0.0][..]));

        let rekeyed = &palette.materials[&renamed];
        assert_eq!(rekeyed.identifier, renamed);
        assert_eq!(rekeyed.title, None);

        assert_eq!(palette.items, [Swatch::new("red"), Swatch::new(renamed)]);
    }

    #[test]
    fn unnamed_entries_resolve_under_derived_identifiers() {
        let mut palette = Palette::new();
        let mut sink: Vec<String> = Vec::new();
        palette.accumulate(rgb([1.0, 0.0, 0.0]), 0, &mut sink);
        palette.accumulate(Candidate::default(), 1, &mut sink);

        let derived = id_from_values(&[1.0, 0.0, 0.0]);
        assert!(palette.materials.contains_key(&derived));
        assert!(palette.materials.contains_key("col1"));
    }

    #[test]
    fn accumulate_never_touches_palette_info() {
        let mut palette = Palette::new();
        palette.info.title = Some("Untitled".to_owned());
        let mut sink: Vec<String> = Vec::new();
        palette.accumulate(named("red", [1.0, 0.0, 0.0]), 0, &mut sink);
        assert_eq!(palette.info.title.as_deref(), Some("Untitled"));
    }
}
