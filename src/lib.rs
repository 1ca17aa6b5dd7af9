//! Digitized Document Viewer layout core WASM Module
//!
//! This is the WASM module backing the viewer's client-side widgets.
//! JavaScript owns the DOM, events and data fetching; this module computes
//! page-range windows for the tag facet and time-matrix sliders and
//! viewport-constrained popover placements, and returns plain values for
//! the JS layer to apply.

pub mod models;
pub mod layout;
pub mod api;

// Re-export commonly used types
pub use models::geometry::*;
pub use models::range::*;
pub use layout::{compute_facet_window, compute_position, compute_window, LayoutError, OverlayMode};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Document viewer layout module initialized");
}
