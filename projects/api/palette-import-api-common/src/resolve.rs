//! Identifier resolution: the dedup/rename policy of the material store.
//!
//! Every import path funnels decoded entries through the same decision:
//! an identifier that is free registers a new material, an identifier that
//! names identical content collapses into the stored material, and an
//! identifier that names *different* content is a genuine collision: the
//! stored material keeps the name as its display title while the newcomer
//! is re-keyed under a derived identifier.

use std::collections::BTreeMap;

use crate::ident::id_from_values;
use crate::material::{ColorKey, Material};

/// One decoded entry prior to resolution.
///
/// Transient: candidates are discarded once resolved into a swatch/material
/// pair. The identifier is absent when the source entry carried no usable
/// name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    /// Proposed identifier, if the entry carried one.
    pub identifier: Option<String>,
    /// Decoded representations; file decoders produce at most one entry.
    pub values: BTreeMap<ColorKey, Vec<f64>>,
}

impl Candidate {
    /// Candidate with one value list and no proposed identifier.
    pub fn with_values(key: ColorKey, channels: Vec<f64>) -> Self {
        let mut candidate = Candidate::default();
        candidate.values.insert(key, channels);
        candidate
    }

    /// First decoded value list, if any.
    pub fn first_values(&self) -> Option<&[f64]> {
        self.values.values().next().map(Vec::as_slice)
    }

    /// Identifier this candidate resolves under.
    ///
    /// Falls back to the value-derived encoding when the entry carried no
    /// name, and to `"col" + entry_index` when it carried no values either.
    /// Never empty.
    pub fn resolved_identifier(&self, entry_index: usize) -> String {
        if let Some(identifier) = &self.identifier {
            return identifier.clone();
        }
        match self.first_values() {
            Some(channels) => id_from_values(channels),
            None => format!("col{entry_index}"),
        }
    }
}

/// Decision for one candidate against the current material store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Identifier is free: register a new material under it.
    Register,
    /// True duplicate of the stored material: append a reference only.
    Duplicate,
    /// Same identifier, different content: retitle the stored material to
    /// the contested identifier and register the candidate under `renamed`.
    Collision { renamed: String },
}

/// Decide how `candidate` enters a store already holding `identifier`.
///
/// Pure decision logic: no I/O, no mutation. Two entries are duplicates
/// when both are contentless or their first value lists match
/// component-wise (exact equality after decode scaling; the color-space
/// tag does not participate).
pub fn resolve(
    store: &BTreeMap<String, Material>,
    identifier: &str,
    candidate: &Candidate,
    entry_index: usize,
) -> Resolution {
    let Some(existing) = store.get(identifier) else {
        return Resolution::Register;
    };

    let duplicate = match (existing.first_values(), candidate.first_values()) {
        (None, None) => true,
        (Some(stored), Some(decoded)) => stored == decoded,
        _ => false,
    };
    if duplicate {
        return Resolution::Duplicate;
    }

    let suffix = match candidate.first_values() {
        Some(channels) => id_from_values(channels),
        None => format!("col{entry_index}"),
    };
    Resolution::Collision {
        renamed: format!("{identifier}{suffix}"),
    }
}
