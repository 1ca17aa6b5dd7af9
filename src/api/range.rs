//! Range window exports for the facet and time-matrix sliders

use wasm_bindgen::prelude::*;

use crate::layout::{compute_facet_window, compute_window};
use crate::models::range::FacetWidth;

/// Compute the page window to fetch around a slider position
///
/// # Parameters
/// - `position`: selected page (1-indexed, already clamped by the caller)
/// - `width`: requested window width in pages
/// - `total_count`: number of pages in the document
///
/// # Returns
/// JavaScript object `{start, end}`, both 1-indexed and inclusive
#[wasm_bindgen(js_name = computeTagRange)]
pub fn compute_tag_range(
    position: u32,
    width: u32,
    total_count: u32,
) -> Result<JsValue, JsValue> {
    log::debug!(
        "computeTagRange: position={}, width={}, total_count={}",
        position,
        width,
        total_count
    );

    let range = compute_window(position, width, total_count)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&range)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize range: {}", e)))
}

/// Compute the page window for one of the facet widget's width presets
///
/// `preset_width` must be a selector value (5, 10, 50 or 100); anything
/// else is rejected. Preset windows keep their historical page offsets,
/// so the returned span can exceed the nominal width by one page.
#[wasm_bindgen(js_name = computeFacetRange)]
pub fn compute_facet_range(
    position: u32,
    preset_width: u32,
    total_count: u32,
) -> Result<JsValue, JsValue> {
    let preset = FacetWidth::from_nominal(preset_width).ok_or_else(|| {
        JsValue::from_str(&format!("Unsupported facet width: {}", preset_width))
    })?;

    log::debug!(
        "computeFacetRange: position={}, preset={:?}, total_count={}",
        position,
        preset,
        total_count
    );

    let range = compute_facet_window(position, preset, total_count)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&range)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize range: {}", e)))
}

/// Selector values the facet widget offers, in ascending order
#[wasm_bindgen(js_name = facetRangeWidths)]
pub fn facet_range_widths() -> js_sys::Array {
    let widths = js_sys::Array::new();
    for preset in FacetWidth::ALL {
        widths.push(&JsValue::from_f64(f64::from(preset.nominal())));
    }
    widths
}
