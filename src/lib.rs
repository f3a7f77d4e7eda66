//! GFA sequence-graph engine with a packed shared-memory export layer.
//!
//! This crate parses GFA (Graphical Fragment Assembly) text into an owned
//! graph store and publishes a packed binary view of the segment records, so
//! a foreign caller holding nothing but a linear memory buffer and a few
//! integers can decode any segment's name or sequence.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  parser.rs   │────▶│  store.rs   │
//! │ (Segment,   │     │ (parse, one  │     │ (GraphStore,│
//! │ Link, Path) │     │  pass, S/L/P)│     │  accessors) │
//! └─────────────┘     └──────────────┘     └──────┬──────┘
//!                                                 │
//!                     ┌──────────────┐     ┌──────▼──────┐
//!                     │ contracts.rs │     │  layout.rs  │
//!                     │ (debug-build │     │ (StringHandle,
//!                     │  invariants) │     │  packed stride)
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! The foreign contract is three numbers per string (offset, length,
//! capacity) plus two layout constants. See `layout` for the exact byte
//! picture and `store::GraphStore::write_string` for the one permitted
//! mutation (capacity-bounded in-place overwrite).
//!
//! # Usage
//!
//! ```ignore
//! let store = gfamem::parse(&text)?;
//! let ix = store.find_segment("9").unwrap();
//! let seq = store.segment_sequence(ix.as_usize())?;
//! let handle = store.segment_sequence_handle(ix.as_usize())?;
//! ```

// Module declarations
pub mod contracts;
mod layout;
mod parser;
mod store;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use layout::{
    segment_record_stride, string_handle_size, PackedSegment, StringHandle,
    SEGMENT_RECORD_STRIDE, STRING_HANDLE_SIZE,
};
pub use parser::{load, parse, LoadError, ParseError};
pub use store::{GraphStore, StoreError};
pub use types::{Link, Orientation, Path, Segment, SegmentIx, Step};
