//! Popover placement exports

use wasm_bindgen::prelude::*;

use crate::layout::{compute_position, OverlayMode};
use crate::models::geometry::{AnchorRect, BoundaryRect};

/// Compute the `{top, left}` CSS position for a popover
///
/// # Parameters
/// - `anchor_js`: `{top, left, width, height}` of the trigger element,
///   measured by the caller at click time
/// - `boundary_js`: `{left, right}` (optionally `top`) of the constraining
///   container
/// - `overlay_width`: the popover's rendered width in pixels; panels with
///   dynamic content pass their measured width after a first render pass
/// - `vertical_offset`: gap between trigger and popover in pixels
/// - `mode`: 0 = below, 1 = below centered, 2 = beside (bookshelf popup)
/// - `open_left`: for mode 2, open toward the container's left edge
///   (sidebar-on-the-right page layout); ignored by the other modes
///
/// # Returns
/// JavaScript object `{top, left}` to apply as CSS
#[wasm_bindgen(js_name = computePopoverPosition)]
pub fn compute_popover_position(
    anchor_js: JsValue,
    boundary_js: JsValue,
    overlay_width: f32,
    vertical_offset: f32,
    mode: u8,
    open_left: bool,
) -> Result<JsValue, JsValue> {
    let anchor: AnchorRect = serde_wasm_bindgen::from_value(anchor_js)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize anchor rect: {}", e)))?;
    let boundary: BoundaryRect = serde_wasm_bindgen::from_value(boundary_js)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize boundary rect: {}", e)))?;

    let mode = match mode {
        0 => OverlayMode::Below,
        1 => OverlayMode::BelowCentered,
        2 => OverlayMode::SideMirrored { open_left },
        _ => return Err(JsValue::from_str(&format!("Unknown overlay mode: {}", mode))),
    };

    log::debug!(
        "computePopoverPosition: mode={:?}, overlay_width={}, vertical_offset={}",
        mode,
        overlay_width,
        vertical_offset
    );

    let placement = compute_position(&anchor, &boundary, overlay_width, vertical_offset, mode)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&placement)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize placement: {}", e)))
}
