// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The graph store: single owner of every parsed record.
//!
//! A `GraphStore` is built exactly once, by the parser, and is read-only for
//! the rest of its life with one exception: `write_string`, the in-place text
//! overwrite used by the harness to rename a segment without reparsing. That
//! operation takes `&mut self`, so the borrow checker enforces the
//! no-concurrent-read rule the foreign contract states in prose.
//!
//! Alongside the owned records the store keeps two derived structures, both
//! built once when parsing completes:
//!
//! - a name → index map backing `find_segment` (exact match only, and NOT
//!   maintained across renames; if structural mutation is ever added,
//!   rebuilding this map is the correctness boundary);
//! - the packed `PackedSegment` mirror published to foreign callers via
//!   `segments_base_address`.
//!
//! Handles point at the segment strings' heap buffers. Those buffers never
//! move: the store is append-only during construction, moves of the store
//! itself relocate only the `String` headers, and `write_string` stays within
//! the existing capacity so the owned strings never reallocate.

use std::collections::HashMap;
use std::fmt;

use crate::contracts;
use crate::layout::{PackedSegment, StringHandle};
use crate::types::{Link, Path, Segment, SegmentIx};

// ============================================================================
// ERRORS
// ============================================================================

/// Error type for accessor and overwrite failures.
///
/// These are local and recoverable: a caller that validates indices against
/// `segment_count()` and text lengths against `handle.capacity` beforehand
/// never sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Accessor called with a segment index `>= segment_count()`.
    IndexOutOfRange { index: usize, count: usize },
    /// `write_string` would overflow the handle's reserved region.
    /// Checked before any byte is copied; the region is untouched.
    CapacityExceeded { requested: usize, capacity: usize },
    /// `write_string` called with a handle that matches no live record.
    ForeignHandle { offset: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IndexOutOfRange { index, count } => {
                write!(f, "segment index {} >= segment count {}", index, count)
            }
            StoreError::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "write of {} bytes exceeds handle capacity {}",
                    requested, capacity
                )
            }
            StoreError::ForeignHandle { offset } => {
                write!(f, "handle at offset {:#x} matches no live record", offset)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// ============================================================================
// STORE
// ============================================================================

/// Owns all segments, links, and paths parsed from one GFA document.
///
/// Segment indices are assigned in declaration order, are dense, and never
/// change once assigned; they are the stable handles used by every external
/// lookup. Nothing is torn down piecemeal: records live until the store
/// itself is dropped.
#[derive(Debug)]
pub struct GraphStore {
    segments: Vec<Segment>,
    links: Vec<Link>,
    paths: Vec<Path>,
    /// Exact-match name index, built once after parsing completes.
    by_name: HashMap<String, SegmentIx>,
    /// Packed mirror of `segments`, published to foreign callers.
    packed: Vec<PackedSegment>,
    /// `VN:Z:` value from the header line, if the document had one.
    version: Option<String>,
}

/// Structural equality: same records in the same order. Derived structures
/// (name index, packed mirror) are functions of the records and the mirror
/// holds addresses, so neither participates.
impl PartialEq for GraphStore {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
            && self.links == other.links
            && self.paths == other.paths
            && self.version == other.version
    }
}

impl Eq for GraphStore {}

impl GraphStore {
    /// Assemble a store from parser output and build the derived structures.
    ///
    /// The parser guarantees `by_name` maps exactly the names in `segments`
    /// and that every index in `links`/`paths` resolves; debug builds
    /// re-check all of it.
    pub(crate) fn from_parts(
        segments: Vec<Segment>,
        links: Vec<Link>,
        paths: Vec<Path>,
        by_name: HashMap<String, SegmentIx>,
        version: Option<String>,
    ) -> GraphStore {
        let packed = segments
            .iter()
            .map(|seg| PackedSegment {
                name: StringHandle::capture(&seg.name),
                sequence: StringHandle::capture(&seg.sequence),
            })
            .collect();

        let store = GraphStore {
            segments,
            links,
            paths,
            by_name,
            packed,
            version,
        };
        contracts::check_store_well_formed(&store);
        store
    }

    // ========================================================================
    // COUNTS AND SLICES
    // ========================================================================

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// `VN:Z:` version from the header line, if present.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    // ========================================================================
    // SEGMENT ACCESSORS
    // ========================================================================

    fn segment(&self, index: usize) -> Result<&Segment, StoreError> {
        self.segments.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            count: self.segments.len(),
        })
    }

    /// The declared identifier of segment `index`.
    pub fn segment_name(&self, index: usize) -> Result<&str, StoreError> {
        Ok(&self.segment(index)?.name)
    }

    /// The sequence text of segment `index`.
    pub fn segment_sequence(&self, index: usize) -> Result<&str, StoreError> {
        Ok(&self.segment(index)?.sequence)
    }

    /// Packed handle for the name of segment `index`.
    pub fn segment_name_handle(&self, index: usize) -> Result<StringHandle, StoreError> {
        self.packed
            .get(index)
            .map(|rec| rec.name)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                count: self.packed.len(),
            })
    }

    /// Packed handle for the sequence of segment `index`.
    pub fn segment_sequence_handle(&self, index: usize) -> Result<StringHandle, StoreError> {
        self.packed
            .get(index)
            .map(|rec| rec.sequence)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                count: self.packed.len(),
            })
    }

    /// Exact-match lookup by declared identifier.
    ///
    /// Served from the index built when parsing completed; a name changed
    /// later via `write_string` is not reflected here.
    pub fn find_segment(&self, name: &str) -> Option<SegmentIx> {
        self.by_name.get(name).copied()
    }

    // ========================================================================
    // FOREIGN EXPORT
    // ========================================================================

    /// Base address of the packed segment record array.
    ///
    /// Record `i` lives at `base + i * segment_record_stride()`. The address
    /// is recomputed per call, so it stays correct across moves of the store.
    pub fn segments_base_address(&self) -> usize {
        self.packed.as_ptr() as usize
    }

    /// The packed records as a typed slice, for in-process consumers that
    /// don't need to go through raw addresses.
    pub fn packed_segments(&self) -> &[PackedSegment] {
        &self.packed
    }

    /// Overwrite the text behind `handle` in place.
    ///
    /// This is the engine's only mutation path. The handle must be one
    /// previously returned for a live record; the new text must fit in the
    /// handle's capacity, or the write is rejected atomically with
    /// `CapacityExceeded` before any byte moves. On success the owning
    /// record and its packed mirror both reflect the new length; the offset
    /// and capacity never change.
    pub fn write_string(
        &mut self,
        handle: StringHandle,
        new_text: &str,
    ) -> Result<(), StoreError> {
        let (index, is_name) = self
            .locate_handle(handle.offset)
            .ok_or(StoreError::ForeignHandle {
                offset: handle.offset,
            })?;

        let field = if is_name {
            &mut self.segments[index].name
        } else {
            &mut self.segments[index].sequence
        };

        if new_text.len() > field.capacity() {
            return Err(StoreError::CapacityExceeded {
                requested: new_text.len(),
                capacity: field.capacity(),
            });
        }

        // Within capacity, so the buffer is reused, never reallocated: the
        // offset published to foreign callers stays valid.
        field.clear();
        field.push_str(new_text);

        let refreshed = StringHandle::capture(field);
        debug_assert_eq!(refreshed.offset, handle.offset);
        if is_name {
            self.packed[index].name = refreshed;
        } else {
            self.packed[index].sequence = refreshed;
        }
        Ok(())
    }

    /// Find the record field whose live region starts at `offset`.
    fn locate_handle(&self, offset: usize) -> Option<(usize, bool)> {
        self.packed.iter().enumerate().find_map(|(i, rec)| {
            if rec.name.offset == offset {
                Some((i, true))
            } else if rec.sequence.offset == offset {
                Some((i, false))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::store::StoreError;

    const TWO_SEGMENTS: &str = "S\ta\tACGT\nS\tb\tGG\nL\ta\t+\tb\t-\t2M\n";

    #[test]
    fn accessors_reject_out_of_range_indices() {
        let store = parse(TWO_SEGMENTS).unwrap();
        assert_eq!(
            store.segment_name(2),
            Err(StoreError::IndexOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(
            store.segment_sequence_handle(9),
            Err(StoreError::IndexOutOfRange { index: 9, count: 2 })
        );
    }

    #[test]
    fn handles_match_owned_strings() {
        let store = parse(TWO_SEGMENTS).unwrap();
        let name = store.segment_name(0).unwrap();
        let handle = store.segment_name_handle(0).unwrap();
        assert_eq!(handle.offset, name.as_ptr() as usize);
        assert_eq!(handle.len, name.len());
        assert!(handle.capacity >= handle.len);
    }

    #[test]
    fn write_string_rejects_foreign_handles() {
        let mut store = parse(TWO_SEGMENTS).unwrap();
        let mut handle = store.segment_name_handle(0).unwrap();
        // An address no live record can own.
        handle.offset = usize::MAX - 7;
        let offset = handle.offset;
        assert_eq!(
            store.write_string(handle, "x"),
            Err(StoreError::ForeignHandle { offset })
        );
    }

    #[test]
    fn rename_in_place_updates_text_and_mirror() {
        let mut store = parse(TWO_SEGMENTS).unwrap();
        let handle = store.segment_sequence_handle(0).unwrap();
        store.write_string(handle, "TT").unwrap();

        assert_eq!(store.segment_sequence(0).unwrap(), "TT");
        let refreshed = store.segment_sequence_handle(0).unwrap();
        assert_eq!(refreshed.offset, handle.offset);
        assert_eq!(refreshed.len, 2);
        assert_eq!(refreshed.capacity, handle.capacity);
    }
}
