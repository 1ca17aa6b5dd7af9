//! Viewport-constrained popover placement
//!
//! Positions a fixed-width floating panel relative to its trigger element
//! while keeping the panel's horizontal span inside a bounding container.
//! Panels with dynamic content (the bookshelf popup) are measured by the
//! caller after a first render pass and their width passed in; the
//! calculation itself never reads the DOM.

use super::{LayoutError, Result};
use crate::models::geometry::{AnchorRect, BoundaryRect, OverlayPlacement};

/// How a popover hangs off its trigger element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayMode {
    /// Below the trigger, flush with its left edge
    Below,

    /// Below the trigger, horizontally centered on it (NER, normdata and
    /// calendar popovers)
    BelowCentered,

    /// Beside the trigger, top-aligned. `open_left` flips the side for the
    /// sidebar-on-the-right page layout (bookshelf popup).
    SideMirrored { open_left: bool },
}

/// Compute the top-left corner for a popover
///
/// The horizontal position starts from the mode's ideal placement and is
/// shifted to keep the popover inside `boundary`; the vertical position
/// hangs `vertical_offset` pixels below the trigger (or below its top edge
/// in [`OverlayMode::SideMirrored`]). The result can be degenerate when the
/// popover is wider than the container (a `left` past the container's left
/// edge); callers apply it as-is.
///
/// # Errors
/// `InvalidArgument` when `boundary.right <= boundary.left` or
/// `overlay_width` is not positive.
pub fn compute_position(
    anchor: &AnchorRect,
    boundary: &BoundaryRect,
    overlay_width: f32,
    vertical_offset: f32,
    mode: OverlayMode,
) -> Result<OverlayPlacement> {
    if boundary.right <= boundary.left {
        return Err(LayoutError::InvalidArgument(format!(
            "degenerate boundary: right {} <= left {}",
            boundary.right, boundary.left
        )));
    }
    if overlay_width <= 0.0 {
        return Err(LayoutError::InvalidArgument(format!(
            "overlay width must be positive, got {}",
            overlay_width
        )));
    }

    let ideal_left = match mode {
        OverlayMode::Below => anchor.left,
        OverlayMode::BelowCentered => anchor.left - (overlay_width / 2.0 - anchor.width / 2.0),
        OverlayMode::SideMirrored { open_left: true } => anchor.left - overlay_width,
        OverlayMode::SideMirrored { open_left: false } => anchor.left + anchor.width,
    };

    let top = match mode {
        OverlayMode::Below | OverlayMode::BelowCentered => {
            anchor.top + anchor.height + vertical_offset
        }
        OverlayMode::SideMirrored { .. } => anchor.top + vertical_offset,
    };

    Ok(OverlayPlacement {
        top,
        left: clamp_to_boundary(ideal_left, boundary, overlay_width),
    })
}

/// Shift `ideal_left` so the popover's span stays inside the boundary
///
/// The left edge wins when both clamps would apply. A popover wider than
/// the container ends up past the container's left edge after the
/// right-edge clamp; callers tolerate that.
fn clamp_to_boundary(ideal_left: f32, boundary: &BoundaryRect, overlay_width: f32) -> f32 {
    let ideal_right = ideal_left + overlay_width;

    if ideal_left <= boundary.left {
        boundary.left
    } else if ideal_right >= boundary.right {
        boundary.right - overlay_width
    } else {
        ideal_left
    }
}
