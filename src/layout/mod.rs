//! Layout calculations for the viewer's widgets
//!
//! Pure functions only: page-range windows for the tag facet and time-matrix
//! sliders, and viewport-constrained popover placement. Inputs arrive as
//! value snapshots, results go back as plain values; nothing in here reads
//! the DOM, performs I/O or keeps state between calls.

pub mod overlay;
pub mod range_window;

pub use overlay::{compute_position, OverlayMode};
pub use range_window::{compute_facet_window, compute_window};

use thiserror::Error;

/// Error raised when a caller violates a calculation's preconditions
///
/// These indicate a caller bug (the JS layer clamps slider values and
/// measures rects before calling in); there is no recovery inside this
/// module and no partial result.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LayoutError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
