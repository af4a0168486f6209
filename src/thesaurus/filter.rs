//! Self-consistency filter for raw thesaurus mappings.
//!
//! Raw synonym lists routinely reference words that have no entry of their
//! own (multi-word phrases, rare inflections). Downstream graph construction
//! requires the mapping to be closed over its own vocabulary, so those
//! dangling references are dropped here.

use log::debug;

use crate::thesaurus::RawMapping;

/// Remove synonym references that are not themselves entries of the mapping.
///
/// The returned mapping has the same key set as the input; each value list
/// keeps only the words that are keys of the mapping, in their original
/// order. Self-references are not special-cased and pass through. Empty
/// synonym lists are valid and denote isolated words.
pub fn filter_dangling(raw: &RawMapping) -> RawMapping {
    let mut filtered = RawMapping::with_capacity(raw.len());
    let mut dropped = 0usize;

    for (name, synonyms) in raw {
        let kept: Vec<String> = synonyms
            .iter()
            .filter(|syno| raw.contains_key(*syno))
            .cloned()
            .collect();
        dropped += synonyms.len() - kept.len();
        filtered.insert(name.clone(), kept);
    }

    debug!(
        "Filtered {} dangling synonym references across {} entries",
        dropped,
        filtered.len()
    );
    filtered
}
