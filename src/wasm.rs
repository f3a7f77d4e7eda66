//! WebAssembly bindings for the gfamem graph engine.
//!
//! The browser harness drives the engine through `GfaGraph`: it fetches the
//! GFA text itself (asynchrony stays on the caller's side of the boundary),
//! passes the text to the constructor, then reads segment text straight out
//! of linear memory using the packed layout:
//!
//! ```js
//! const graph = new GfaGraph(text);
//! const base = graph.segments_base_address();
//! const stride = segment_record_stride();
//! // record i: new Uint32Array(memory.buffer, base + i * stride, 6)
//! ```
//!
//! Per-record accessors return `{offset, len, capacity}` objects for callers
//! that would rather not do the stride arithmetic themselves.

use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::layout::{self, StringHandle};
use crate::parser;
use crate::store::GraphStore;

/// Bytes per packed string handle (3 machine words; 12 on wasm32).
#[wasm_bindgen]
pub fn string_handle_size() -> usize {
    layout::string_handle_size()
}

/// Bytes per packed segment record (two handles; 24 on wasm32).
#[wasm_bindgen]
pub fn segment_record_stride() -> usize {
    layout::segment_record_stride()
}

/// WASM-accessible graph store.
///
/// Owns the parsed graph; every returned address stays valid until the
/// object is freed on the JS side.
#[wasm_bindgen]
pub struct GfaGraph {
    store: GraphStore,
}

#[wasm_bindgen]
impl GfaGraph {
    /// Parse GFA text into a graph.
    ///
    /// Fails with the parser's message (line number included) on malformed
    /// input; no graph object is created in that case.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> Result<GfaGraph, JsValue> {
        let store = parser::parse(text).map_err(|e| JsValue::from(e.to_string()))?;
        Ok(GfaGraph { store })
    }

    pub fn segment_count(&self) -> usize {
        self.store.segment_count()
    }

    pub fn link_count(&self) -> usize {
        self.store.link_count()
    }

    pub fn path_count(&self) -> usize {
        self.store.path_count()
    }

    /// `VN:Z:` version from the header line, if present.
    pub fn version(&self) -> Option<String> {
        self.store.version().map(str::to_owned)
    }

    /// Base address of the packed segment record array in linear memory.
    pub fn segments_base_address(&self) -> usize {
        self.store.segments_base_address()
    }

    /// `{offset, len, capacity}` for the name of segment `ix`.
    pub fn segment_name_handle(&self, ix: usize) -> Result<JsValue, JsValue> {
        handle_to_js(self.store.segment_name_handle(ix))
    }

    /// `{offset, len, capacity}` for the sequence of segment `ix`.
    pub fn segment_sequence_handle(&self, ix: usize) -> Result<JsValue, JsValue> {
        handle_to_js(self.store.segment_sequence_handle(ix))
    }

    /// The name of segment `ix`, copied out as a JS string.
    ///
    /// Debugging convenience; the packed handles are the zero-copy path.
    pub fn segment_name(&self, ix: usize) -> Result<String, JsValue> {
        self.store
            .segment_name(ix)
            .map(str::to_owned)
            .map_err(|e| JsValue::from(e.to_string()))
    }

    /// The sequence of segment `ix`, copied out as a JS string.
    pub fn segment_sequence(&self, ix: usize) -> Result<String, JsValue> {
        self.store
            .segment_sequence(ix)
            .map(str::to_owned)
            .map_err(|e| JsValue::from(e.to_string()))
    }

    /// All segment names, for console listing.
    pub fn segment_names(&self) -> js_sys::Array {
        self.store
            .segments()
            .iter()
            .map(|seg| JsValue::from(seg.name.as_str()))
            .collect()
    }

    /// Index of the segment declared with `name`, if any.
    ///
    /// Served from the parse-time index; renames are not reflected.
    pub fn find_segment(&self, name: &str) -> Option<usize> {
        self.store.find_segment(name).map(|ix| ix.as_usize())
    }

    /// Overwrite the text behind a handle in place.
    ///
    /// The triple must be one previously returned by a handle accessor.
    /// Fails without touching memory when the new text exceeds the region's
    /// capacity.
    pub fn write_string(
        &mut self,
        offset: usize,
        len: usize,
        capacity: usize,
        text: &str,
    ) -> Result<(), JsValue> {
        let handle = StringHandle {
            offset,
            len,
            capacity,
        };
        self.store
            .write_string(handle, text)
            .map_err(|e| JsValue::from(e.to_string()))
    }

    /// All links as structured JS values.
    pub fn links(&self) -> Result<JsValue, JsValue> {
        to_value(self.store.links()).map_err(|e| JsValue::from(e.to_string()))
    }

    /// All paths as structured JS values.
    pub fn paths(&self) -> Result<JsValue, JsValue> {
        to_value(self.store.paths()).map_err(|e| JsValue::from(e.to_string()))
    }
}

fn handle_to_js(handle: Result<StringHandle, crate::store::StoreError>) -> Result<JsValue, JsValue> {
    let handle = handle.map_err(|e| JsValue::from(e.to_string()))?;
    to_value(&handle).map_err(|e| JsValue::from(e.to_string()))
}
