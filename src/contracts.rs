// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the data-model invariants.
//!
//! Every function here verifies an invariant the parser and store are
//! supposed to establish by construction. The checks:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! - Segment identifiers are unique, and the name index maps exactly them.
//! - Every link endpoint and path step resolves to a valid segment index.
//! - A path's overlap count is `steps - 1`, or zero when unspecified.
//! - Every packed handle satisfies `len <= capacity` and mirrors its owning
//!   string, and no two live text regions alias.

use crate::store::GraphStore;

/// Check every store invariant at once. Called by the store constructor;
/// a no-op in release builds.
pub fn check_store_well_formed(store: &GraphStore) {
    check_name_index(store);
    check_reference_integrity(store);
    check_handle_geometry(store);
}

/// The name index maps each declared identifier to its declaration position,
/// bijectively.
///
/// Holds at construction. An in-place rename via `write_string` deliberately
/// leaves the index at its parse-time state, so this check only applies to a
/// store whose names are untouched.
#[inline]
pub fn check_name_index(store: &GraphStore) {
    for (ix, segment) in store.segments().iter().enumerate() {
        let found = store.find_segment(&segment.name);
        debug_assert!(
            found.map(|s| s.as_usize()) == Some(ix),
            "Contract violation: name index maps {:?} to {:?}, declared at {}",
            segment.name,
            found,
            ix
        );
    }
}

/// Every link endpoint and path step points below `segment_count()`.
#[inline]
pub fn check_reference_integrity(store: &GraphStore) {
    let count = store.segment_count();
    for (i, link) in store.links().iter().enumerate() {
        debug_assert!(
            link.from.as_usize() < count && link.to.as_usize() < count,
            "Contract violation: links[{}] references segment out of range ({} segments)",
            i,
            count
        );
    }
    for path in store.paths() {
        for (i, step) in path.steps.iter().enumerate() {
            debug_assert!(
                step.segment.as_usize() < count,
                "Contract violation: path {:?} step {} out of range ({} segments)",
                path.name,
                i,
                count
            );
        }
        debug_assert!(
            path.overlaps.is_empty() || path.overlaps.len() == path.steps.len() - 1,
            "Contract violation: path {:?} has {} steps but {} overlaps",
            path.name,
            path.steps.len(),
            path.overlaps.len()
        );
    }
}

/// Packed handles mirror the owned strings exactly, stay within capacity,
/// and no two live regions overlap.
#[inline]
pub fn check_handle_geometry(store: &GraphStore) {
    let packed = store.packed_segments();
    debug_assert!(
        packed.len() == store.segment_count(),
        "Contract violation: {} packed records for {} segments",
        packed.len(),
        store.segment_count()
    );

    for (ix, (segment, rec)) in store.segments().iter().zip(packed).enumerate() {
        debug_assert!(
            rec.name.len <= rec.name.capacity && rec.sequence.len <= rec.sequence.capacity,
            "Contract violation: handle of segment {} exceeds its capacity",
            ix
        );
        debug_assert!(
            rec.name.offset == segment.name.as_ptr() as usize
                && rec.name.len == segment.name.len(),
            "Contract violation: stale name handle for segment {}",
            ix
        );
        debug_assert!(
            rec.sequence.offset == segment.sequence.as_ptr() as usize
                && rec.sequence.len == segment.sequence.len(),
            "Contract violation: stale sequence handle for segment {}",
            ix
        );
    }

    if cfg!(debug_assertions) {
        let mut regions: Vec<_> = packed
            .iter()
            .flat_map(|rec| [rec.name, rec.sequence])
            .filter(|h| h.capacity > 0)
            .collect();
        regions.sort_by_key(|h| h.offset);
        for pair in regions.windows(2) {
            debug_assert!(
                !pair[0].overlaps(&pair[1]),
                "Contract violation: live text regions alias at {:#x}",
                pair[1].offset
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn well_formed_store_passes_all_contracts() {
        let store = parse(
            "H\tVN:Z:1.0\nS\ta\tACGT\nS\tb\tGG\nL\ta\t+\tb\t+\t2M\nP\tp\ta+,b-\t2M\n",
        )
        .unwrap();
        check_store_well_formed(&store);
    }

    #[test]
    fn contracts_survive_in_place_renames() {
        let mut store = parse("S\ta\tACGT\nS\tb\tGG\n").unwrap();
        let handle = store.segment_sequence_handle(0).unwrap();
        store.write_string(handle, "TT").unwrap();
        check_store_well_formed(&store);
    }
}
