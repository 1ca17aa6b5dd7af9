//! Page-range value objects
//!
//! A PageRange is a contiguous window on a document's 1-indexed page scale.
//! Ranges are recomputed per query by the layout module, never mutated in
//! place, and serialize directly into the `{start, end}` shape the JS layer
//! builds its fetch URLs from.

use serde::{Deserialize, Serialize};

/// A contiguous window `[start, end]` on the page scale, both bounds inclusive
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRange {
    /// First page of the window (1-indexed)
    pub start: u32,

    /// Last page of the window (inclusive)
    pub end: u32,
}

impl PageRange {
    /// Create a new range; `start` must not exceed `end`
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start >= 1 && start <= end);
        Self { start, end }
    }

    /// Number of pages covered by this range
    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Check whether a page falls inside the range
    pub fn contains(&self, page: u32) -> bool {
        page >= self.start && page <= self.end
    }
}

/// Width presets offered by the tag facet widget's range selector
///
/// Each preset carries the exact page offsets the facet endpoints have
/// always been queried with. The five-page preset extends one page further
/// after the anchor than before it; that asymmetry is kept as-is so ranges
/// requested by existing viewer installations stay identical.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacetWidth {
    Five,
    Ten,
    Fifty,
    Hundred,
}

impl FacetWidth {
    /// All presets, in the order the selector lists them
    pub const ALL: [FacetWidth; 4] = [
        FacetWidth::Five,
        FacetWidth::Ten,
        FacetWidth::Fifty,
        FacetWidth::Hundred,
    ];

    /// Pages before and after the anchor page, as `(before, after)`
    pub fn offsets(&self) -> (u32, u32) {
        match self {
            FacetWidth::Five => (2, 3),
            FacetWidth::Ten => (5, 5),
            FacetWidth::Fifty => (25, 25),
            FacetWidth::Hundred => (50, 50),
        }
    }

    /// Total pages a preset spans (before + anchor + after)
    pub fn span(&self) -> u32 {
        let (before, after) = self.offsets();
        before + 1 + after
    }

    /// Nominal width as shown in the selector
    pub fn nominal(&self) -> u32 {
        match self {
            FacetWidth::Five => 5,
            FacetWidth::Ten => 10,
            FacetWidth::Fifty => 50,
            FacetWidth::Hundred => 100,
        }
    }

    /// Resolve a selector value to its preset
    pub fn from_nominal(value: u32) -> Option<FacetWidth> {
        match value {
            5 => Some(FacetWidth::Five),
            10 => Some(FacetWidth::Ten),
            50 => Some(FacetWidth::Fifty),
            100 => Some(FacetWidth::Hundred),
            _ => None,
        }
    }
}
