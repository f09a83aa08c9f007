use klotz_geom::Vec2;
use klotz_grid::{Cell, CellSize, GridSizing, GridSpec, ViewRect};
use proptest::prelude::*;

fn arb_spec() -> impl Strategy<Value = GridSpec> {
    (
        0.05f32..8.0,
        0.05f32..8.0,
        -100.0f32..100.0,
        -100.0f32..100.0,
        1i32..40,
        1i32..40,
    )
        .prop_map(|(cw, ch, ox, oy, cols, rows)| {
            GridSpec::new(Vec2::new(cw, ch), Vec2::new(ox, oy), cols, rows)
        })
}

fn arb_point() -> impl Strategy<Value = Vec2> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    // Cell -> world center -> cell is the identity for any in-range cell.
    #[test]
    fn cell_center_round_trip(spec in arb_spec(), col in -50i32..50, row in -50i32..50) {
        let c = Cell::new(col, row);
        prop_assert_eq!(spec.world_to_grid(spec.grid_to_world(c)), c);
    }

    // Snap output is always inside the grid bounds.
    #[test]
    fn snap_stays_in_bounds(spec in arb_spec(), p in arb_point()) {
        let snapped = spec.snap_to_grid(p);
        let c = spec.world_to_grid(snapped);
        prop_assert!(spec.contains_cell(c), "snapped {:?} landed in {:?}", snapped, c);
    }

    // Snapping is idempotent.
    #[test]
    fn snap_idempotent(spec in arb_spec(), p in arb_point()) {
        let once = spec.snap_to_grid(p);
        let twice = spec.snap_to_grid(once);
        prop_assert!((once - twice).length() <= 1e-3);
    }

    // A point already inside a cell snaps to that cell's center when the
    // cell is in bounds.
    #[test]
    fn snap_preserves_containing_cell(
        spec in arb_spec(),
        fx in 0.05f32..0.95,
        fy in 0.05f32..0.95,
        col in 0i32..40,
        row in 0i32..40,
    ) {
        prop_assume!(col < spec.cols && row < spec.rows);
        let c = Cell::new(col, row);
        let rect = spec.cell_rect(c);
        let p = rect.min + rect.size().scale(Vec2::new(fx, fy));
        let snapped = spec.snap_to_grid(p);
        prop_assert!((snapped - spec.grid_to_world(c)).length() <= 1e-3);
    }

    // Footprint anchor recovery is exact for in-grid anchors.
    #[test]
    fn footprint_anchor_round_trip(
        spec in arb_spec(),
        col in 0i32..40,
        row in 0i32..40,
        w in 1i32..5,
        h in 1i32..5,
    ) {
        prop_assume!(col < spec.cols && row < spec.rows);
        let c = Cell::new(col, row);
        let size = CellSize::new(w, h);
        let center = spec.footprint_center(c, size);
        prop_assert_eq!(spec.cell_for_footprint(center, size), c);
    }

    // Auto sizing always fills the view exactly.
    #[test]
    fn auto_sizing_covers_view(
        blx in -100.0f32..100.0,
        bly in -100.0f32..100.0,
        w in 1.0f32..500.0,
        h in 1.0f32..500.0,
        cols in 1i32..30,
        rows in 1i32..30,
    ) {
        let view = ViewRect::new(Vec2::new(blx, bly), Vec2::new(w, h));
        let spec = GridSizing::Auto { cols, rows }.resolve(Some(view)).unwrap();
        let bounds = spec.bounds();
        prop_assert!((bounds.min - view.bottom_left).length() <= 1e-3);
        prop_assert!((bounds.size() - view.size).length() <= 1e-2);
    }
}
