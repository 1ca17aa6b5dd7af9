//! Page-range windowing for the tag facet and time-matrix sliders
//!
//! As the user drags a slider, the JS layer asks which window of pages to
//! fetch around the selected page. The window keeps its requested width and
//! shifts along the scale instead of shrinking when it would cross either
//! end; only a width at or above the page count collapses to the full scale.

use super::{LayoutError, Result};
use crate::models::range::{FacetWidth, PageRange};

/// Compute a window of `width` pages around `position` on a `1..=total_count` scale
///
/// The window is anchored on the selected page and shifted, not shrunk, when
/// it would cross either end of the scale. A width of `total_count` or more
/// returns the whole scale.
///
/// # Errors
/// `InvalidArgument` when `total_count` or `width` is zero, or `position`
/// lies outside `1..=total_count`.
pub fn compute_window(position: u32, width: u32, total_count: u32) -> Result<PageRange> {
    if total_count < 1 {
        return Err(LayoutError::InvalidArgument(
            "total page count must be at least 1".to_string(),
        ));
    }
    if width < 1 {
        return Err(LayoutError::InvalidArgument(
            "window width must be at least 1".to_string(),
        ));
    }
    if position < 1 || position > total_count {
        return Err(LayoutError::InvalidArgument(format!(
            "position {} outside page scale 1..={}",
            position, total_count
        )));
    }

    if width >= total_count {
        return Ok(PageRange::new(1, total_count));
    }

    // Integer division decides which side of the anchor the extra page of an
    // even width lands on. The shipped facet widgets depend on this exact
    // split; do not replace it with a generic centering formula.
    let half = i64::from(width / 2);
    let start = i64::from(position) - half;
    let end = start + i64::from(width) - 1;

    Ok(shift_into_scale(start, end, total_count))
}

/// Compute the window for a facet width preset using its exact page offsets
///
/// Presets keep the page spans the facet endpoints have always been queried
/// with, so a preset window can be one page wider than its nominal width
/// (see [`FacetWidth::offsets`]). A span at or above the page count
/// collapses to the whole scale, as in [`compute_window`].
///
/// # Errors
/// `InvalidArgument` when `total_count` is zero or `position` lies outside
/// `1..=total_count`.
pub fn compute_facet_window(
    position: u32,
    preset: FacetWidth,
    total_count: u32,
) -> Result<PageRange> {
    if total_count < 1 {
        return Err(LayoutError::InvalidArgument(
            "total page count must be at least 1".to_string(),
        ));
    }
    if position < 1 || position > total_count {
        return Err(LayoutError::InvalidArgument(format!(
            "position {} outside page scale 1..={}",
            position, total_count
        )));
    }

    if preset.span() >= total_count {
        return Ok(PageRange::new(1, total_count));
    }

    let (before, after) = preset.offsets();
    let start = i64::from(position) - i64::from(before);
    let end = i64::from(position) + i64::from(after);

    Ok(shift_into_scale(start, end, total_count))
}

/// Shift a candidate window into `1..=total_count` without changing its width
///
/// Both loops run unconditionally; the caller guarantees the window is
/// narrower than the scale, so at most one of them moves the window.
fn shift_into_scale(mut start: i64, mut end: i64, total_count: u32) -> PageRange {
    let last = i64::from(total_count);

    while start < 1 {
        start += 1;
        end += 1;
    }
    while end > last {
        start -= 1;
        end -= 1;
    }

    PageRange::new(start as u32, end as u32)
}
