// Test popover placement against the container geometries the viewer uses

use viewer_wasm::layout::{compute_position, LayoutError, OverlayMode};
use viewer_wasm::models::geometry::{AnchorRect, BoundaryRect, OverlayPlacement};

/// Helper to build a trigger rect the way the JS layer snapshots one
fn make_anchor(top: f32, left: f32, width: f32, height: f32) -> AnchorRect {
    AnchorRect {
        top,
        left,
        width,
        height,
    }
}

/// Helper for the usual full-width content column
fn content_column() -> BoundaryRect {
    BoundaryRect {
        left: 0.0,
        right: 1200.0,
        top: 0.0,
    }
}

#[test]
fn test_ner_popover_centers_on_its_entity() {
    let anchor = make_anchor(420.0, 500.0, 20.0, 18.0);
    let placement = compute_position(
        &anchor,
        &content_column(),
        300.0,
        8.0,
        OverlayMode::BelowCentered,
    )
    .unwrap();

    assert_eq!(
        placement,
        OverlayPlacement {
            top: 420.0 + 18.0 + 8.0,
            left: 360.0,
        }
    );
}

#[test]
fn test_popover_near_left_margin_clamps() {
    let anchor = make_anchor(420.0, 10.0, 20.0, 18.0);
    let placement = compute_position(
        &anchor,
        &content_column(),
        300.0,
        8.0,
        OverlayMode::BelowCentered,
    )
    .unwrap();

    assert_eq!(placement.left, 0.0);
}

#[test]
fn test_popover_near_right_margin_clamps() {
    let anchor = make_anchor(420.0, 1150.0, 20.0, 18.0);
    let placement = compute_position(
        &anchor,
        &content_column(),
        300.0,
        8.0,
        OverlayMode::BelowCentered,
    )
    .unwrap();

    assert_eq!(placement.left, 900.0);
}

#[test]
fn test_clamped_popover_still_spans_inside_container() {
    // Sweep the trigger across the column; the popover must never overflow
    let boundary = content_column();
    let overlay_width = 300.0;
    for step in 0..=60 {
        let left = step as f32 * 20.0;
        let anchor = make_anchor(420.0, left, 20.0, 18.0);
        let placement = compute_position(
            &anchor,
            &boundary,
            overlay_width,
            8.0,
            OverlayMode::BelowCentered,
        )
        .unwrap();

        assert!(placement.left >= boundary.left, "overflow left at x={}", left);
        assert!(
            placement.left + overlay_width <= boundary.right,
            "overflow right at x={}",
            left
        );
    }
}

#[test]
fn test_bookshelf_popup_follows_sidebar_flag() {
    // Default layout: sidebar left, popup opens to the trigger's right
    let anchor = make_anchor(200.0, 600.0, 32.0, 32.0);
    let boundary = content_column();

    let opened_right = compute_position(
        &anchor,
        &boundary,
        260.0,
        4.0,
        OverlayMode::SideMirrored { open_left: false },
    )
    .unwrap();
    assert_eq!(opened_right.left, 600.0 + 32.0);
    assert_eq!(opened_right.top, 200.0 + 4.0);

    // Mirrored layout: sidebar right, popup opens to the trigger's left
    let opened_left = compute_position(
        &anchor,
        &boundary,
        260.0,
        4.0,
        OverlayMode::SideMirrored { open_left: true },
    )
    .unwrap();
    assert_eq!(opened_left.left, 600.0 - 260.0);
    assert_eq!(opened_left.top, 200.0 + 4.0);
}

#[test]
fn test_bookshelf_popup_uses_measured_width() {
    // The popup's content is dynamic; a wider measurement shifts the
    // mirrored placement further left
    let anchor = make_anchor(200.0, 800.0, 32.0, 32.0);
    let boundary = content_column();

    let narrow = compute_position(
        &anchor,
        &boundary,
        200.0,
        4.0,
        OverlayMode::SideMirrored { open_left: true },
    )
    .unwrap();
    let wide = compute_position(
        &anchor,
        &boundary,
        320.0,
        4.0,
        OverlayMode::SideMirrored { open_left: true },
    )
    .unwrap();

    assert_eq!(narrow.left, 600.0);
    assert_eq!(wide.left, 480.0);
}

#[test]
fn test_oversized_popover_keeps_right_edge_inside() {
    // Matches shipped behavior: no guard against panels wider than the
    // container, the left edge just goes negative
    let anchor = make_anchor(420.0, 300.0, 20.0, 18.0);
    let boundary = BoundaryRect {
        left: 0.0,
        right: 400.0,
        top: 0.0,
    };
    let placement = compute_position(
        &anchor,
        &boundary,
        600.0,
        8.0,
        OverlayMode::BelowCentered,
    )
    .unwrap();

    assert_eq!(placement.left, -200.0);
    assert_eq!(placement.left + 600.0, boundary.right);
}

#[test]
fn test_degenerate_boundary_is_rejected() {
    let anchor = make_anchor(420.0, 500.0, 20.0, 18.0);
    let flipped = BoundaryRect {
        left: 1200.0,
        right: 0.0,
        top: 0.0,
    };

    let result = compute_position(&anchor, &flipped, 300.0, 8.0, OverlayMode::BelowCentered);
    assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));

    let zero_width = compute_position(
        &anchor,
        &content_column(),
        0.0,
        8.0,
        OverlayMode::BelowCentered,
    );
    assert!(matches!(zero_width, Err(LayoutError::InvalidArgument(_))));
}

#[test]
fn test_placement_serializes_to_css_shape() {
    let anchor = make_anchor(420.0, 500.0, 20.0, 18.0);
    let placement = compute_position(
        &anchor,
        &content_column(),
        300.0,
        8.0,
        OverlayMode::BelowCentered,
    )
    .unwrap();

    let json = serde_json::to_value(placement).unwrap();
    assert_eq!(json["top"], 446.0);
    assert_eq!(json["left"], 360.0);
}

#[test]
fn test_boundary_rect_top_is_optional_in_json() {
    // Older call sites only pass {left, right}
    let boundary: BoundaryRect = serde_json::from_str(r#"{"left": 0.0, "right": 1200.0}"#).unwrap();
    assert_eq!(boundary.top, 0.0);
    assert_eq!(boundary.width(), 1200.0);
}
