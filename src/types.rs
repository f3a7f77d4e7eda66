// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a sequence graph.
//!
//! These types mirror the GFA record kinds one-to-one: a `Segment` is a named
//! stretch of sequence, a `Link` is an oriented adjacency between two
//! segments, and a `Path` is a named walk over oriented segments. Links and
//! paths never store segment names; they store `SegmentIx` indices resolved
//! at parse time, so a record that survives parsing is already known to point
//! at a real segment.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SegmentIx**: `ix < store.segment_count()`. The parser only hands out
//!   indices for segments it has already appended, and the store is
//!   append-only during construction, so a stored index never dangles.
//!
//! - **Path**: `overlaps.len() == steps.len() - 1`, or `overlaps.is_empty()`
//!   when the document gave `*` for the overlap column.
//!
//! `contracts::check_store_well_formed` re-verifies both in debug builds.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES: Type-safe indices
// =============================================================================

/// Type-safe segment index.
///
/// Prevents accidentally passing a byte offset where a segment index is
/// expected. Use `SegmentIx::new()` for runtime-validated construction, or
/// `.into()` for trusted sources (the parser, which assigns indices itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SegmentIx(pub u32);

impl SegmentIx {
    /// Create a new SegmentIx, validating it's within bounds.
    #[inline]
    pub fn new(ix: u32, segment_count: usize) -> Option<Self> {
        if (ix as usize) < segment_count {
            Some(SegmentIx(ix))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for SegmentIx {
    fn from(ix: u32) -> Self {
        SegmentIx(ix)
    }
}

impl From<SegmentIx> for usize {
    fn from(ix: SegmentIx) -> Self {
        ix.0 as usize
    }
}

// =============================================================================
// ORIENTATION
// =============================================================================

/// Forward/reverse flag on a segment's use within a link or path step.
///
/// The wire tokens are exactly `+` and `-`; anything else is a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Forward,
    Backward,
}

impl Orientation {
    /// Parse a wire token. Only `+` and `-` are valid.
    #[inline]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Orientation::Forward),
            "-" => Some(Orientation::Backward),
            _ => None,
        }
    }

    /// The wire character for this orientation.
    #[inline]
    pub fn token(self) -> char {
        match self {
            Orientation::Forward => '+',
            Orientation::Backward => '-',
        }
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        matches!(self, Orientation::Forward)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// A named nucleotide sequence fragment; a node in the graph.
///
/// Created from an `S` line. Immutable after parsing, except that the store's
/// `write_string` may overwrite the text in place within its capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub sequence: String,
}

/// A directed, oriented adjacency between two segments.
///
/// Created from an `L` line. Both endpoints were resolved against the
/// segments declared earlier in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub from: SegmentIx,
    pub from_orient: Orientation,
    pub to: SegmentIx,
    pub to_orient: Orientation,
    /// Alignment descriptor for the junction (CIGAR-like, e.g. `0M`).
    pub overlap: String,
}

/// One step of a path: an oriented visit to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub segment: SegmentIx,
    pub orient: Orientation,
}

/// A named ordered walk over oriented segments.
///
/// Created from a `P` line. `overlaps` holds one alignment descriptor per
/// consecutive step pair, or is empty when the document gave `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub name: String,
    pub steps: Vec<Step>,
    pub overlaps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_tokens_round_trip() {
        assert_eq!(Orientation::from_token("+"), Some(Orientation::Forward));
        assert_eq!(Orientation::from_token("-"), Some(Orientation::Backward));
        assert_eq!(Orientation::Forward.token(), '+');
        assert_eq!(Orientation::Backward.token(), '-');
    }

    #[test]
    fn orientation_rejects_everything_else() {
        for token in ["", "?", "++", "f", " +", "+ "] {
            assert_eq!(Orientation::from_token(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn segment_ix_bounds_check() {
        assert_eq!(SegmentIx::new(4, 5), Some(SegmentIx(4)));
        assert_eq!(SegmentIx::new(5, 5), None);
        assert_eq!(SegmentIx::new(0, 0), None);
    }
}
