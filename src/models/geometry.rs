//! Rect snapshots for popover positioning
//!
//! JavaScript measures the trigger element and its constraining container at
//! click time and passes these snapshots in; the layout module never touches
//! the DOM itself. All values are CSS pixels.

use serde::{Deserialize, Serialize};

/// Bounding box of the element that triggered a popover
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AnchorRect {
    /// Y of the top edge
    pub top: f32,

    /// X of the left edge
    pub left: f32,

    /// Rendered width
    pub width: f32,

    /// Rendered height
    pub height: f32,
}

/// Horizontal extent of the container a popover must stay within
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BoundaryRect {
    /// X of the container's left edge
    pub left: f32,

    /// X of the container's right edge
    pub right: f32,

    /// Y of the container's top edge (not consulted by the horizontal clamp)
    #[serde(default)]
    pub top: f32,
}

impl BoundaryRect {
    /// Horizontal span of the container
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// Computed top-left corner for a popover, applied as CSS by the caller
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct OverlayPlacement {
    /// Y of the popover's top edge
    pub top: f32,

    /// X of the popover's left edge
    pub left: f32,
}
