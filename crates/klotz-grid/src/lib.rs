//! Grid coordinate system: cells, cell-center transforms, and sizing.
#![forbid(unsafe_code)]

use klotz_geom::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Cell-size axes at or below this are treated as degenerate; transforms
/// short-circuit instead of dividing.
pub const MIN_CELL_AXIS: f32 = 1e-4;

/// Integer grid cell. Unbounded; callers clamp against grid dims.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const ZERO: Cell = Cell { col: 0, row: 0 };

    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    #[inline]
    pub fn offset(self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    #[inline]
    pub fn distance_sq(self, other: Cell) -> i64 {
        let dc = (self.col - other.col) as i64;
        let dr = (self.row - other.row) as i64;
        dc * dc + dr * dr
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from(t: (i32, i32)) -> Self {
        Self { col: t.0, row: t.1 }
    }
}

impl From<Cell> for (i32, i32) {
    #[inline]
    fn from(c: Cell) -> Self {
        (c.col, c.row)
    }
}

/// Footprint of a piece or slot, in whole cells. Both axes at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSize {
    pub w: i32,
    pub h: i32,
}

impl CellSize {
    pub const ONE: CellSize = CellSize { w: 1, h: 1 };

    #[inline]
    pub const fn new(w: i32, h: i32) -> Self {
        Self {
            w: if w < 1 { 1 } else { w },
            h: if h < 1 { 1 } else { h },
        }
    }

    /// World-unit extent of this footprint on a given grid.
    #[inline]
    pub fn world_extent(self, cell: Vec2) -> Vec2 {
        Vec2::new(self.w as f32 * cell.x, self.h as f32 * cell.y)
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<(i32, i32)> for CellSize {
    #[inline]
    fn from(t: (i32, i32)) -> Self {
        Self::new(t.0, t.1)
    }
}

/// A concrete grid: per-axis cell size in world units, world-space origin
/// (bottom-left corner of cell (0,0)), and dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub cell: Vec2Def,
    pub origin: Vec2Def,
    pub cols: i32,
    pub rows: i32,
}

/// Serde-friendly mirror of `Vec2` so level files can spell `{ x, y }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for Vec2Def {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl GridSpec {
    pub fn new(cell: Vec2, origin: Vec2, cols: i32, rows: i32) -> Self {
        Self {
            cell: cell.into(),
            origin: origin.into(),
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        self.cell.into()
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin.into()
    }

    #[inline]
    pub fn degenerate(&self) -> bool {
        self.cell.x.abs() <= MIN_CELL_AXIS || self.cell.y.abs() <= MIN_CELL_AXIS
    }

    /// World position of the center of `cell`.
    #[inline]
    pub fn grid_to_world(&self, cell: Cell) -> Vec2 {
        self.origin()
            + Vec2::new(
                (cell.col as f32 + 0.5) * self.cell.x,
                (cell.row as f32 + 0.5) * self.cell.y,
            )
    }

    /// Cell containing a world point; floor per axis, unclamped.
    /// Degenerate cell sizes map everything to cell (0,0).
    #[inline]
    pub fn world_to_grid(&self, p: Vec2) -> Cell {
        if self.degenerate() {
            return Cell::ZERO;
        }
        let rel = p - self.origin();
        Cell::new(
            (rel.x / self.cell.x).floor() as i32,
            (rel.y / self.cell.y).floor() as i32,
        )
    }

    /// Nearest in-bounds cell center to `p`. Returns `p` unchanged when the
    /// grid is degenerate.
    #[inline]
    pub fn snap_to_grid(&self, p: Vec2) -> Vec2 {
        if self.degenerate() {
            return p;
        }
        self.grid_to_world(self.clamp_cell(self.world_to_grid(p)))
    }

    #[inline]
    pub fn clamp_cell(&self, c: Cell) -> Cell {
        Cell::new(
            c.col.clamp(0, self.cols - 1),
            c.row.clamp(0, self.rows - 1),
        )
    }

    #[inline]
    pub fn contains_cell(&self, c: Cell) -> bool {
        c.col >= 0 && c.row >= 0 && c.col < self.cols && c.row < self.rows
    }

    /// World rect of a single cell.
    pub fn cell_rect(&self, c: Cell) -> Rect {
        let min = self.origin()
            + Vec2::new(c.col as f32 * self.cell.x, c.row as f32 * self.cell.y);
        Rect::new(min, min + self.cell_size())
    }

    /// World rect of a footprint anchored (bottom-left) at `c`.
    pub fn footprint_rect(&self, c: Cell, size: CellSize) -> Rect {
        let min = self.origin()
            + Vec2::new(c.col as f32 * self.cell.x, c.row as f32 * self.cell.y);
        Rect::new(min, min + size.world_extent(self.cell_size()))
    }

    /// World center of a footprint anchored at `c`.
    #[inline]
    pub fn footprint_center(&self, c: Cell, size: CellSize) -> Vec2 {
        self.footprint_rect(c, size).center()
    }

    /// Anchor cell whose footprint of `size` is centered at `center`.
    /// Inverse of `footprint_center` for in-grid placements.
    pub fn cell_for_footprint(&self, center: Vec2, size: CellSize) -> Cell {
        let half = size.world_extent(self.cell_size()) / 2.0;
        // Probe just inside the bottom-left corner so exact corners do not
        // fall into the neighboring cell.
        let corner = center - half + self.cell_size() / 2.0;
        self.world_to_grid(corner)
    }

    /// World rect covered by the whole grid.
    pub fn bounds(&self) -> Rect {
        let min = self.origin();
        Rect::new(
            min,
            min + Vec2::new(self.cols as f32 * self.cell.x, self.rows as f32 * self.cell.y),
        )
    }
}

/// Camera viewport in world space; input to automatic sizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRect {
    pub bottom_left: Vec2,
    pub size: Vec2,
}

impl ViewRect {
    #[inline]
    pub const fn new(bottom_left: Vec2, size: Vec2) -> Self {
        Self { bottom_left, size }
    }

    #[inline]
    pub fn rect(self) -> Rect {
        Rect::new(self.bottom_left, self.bottom_left + self.size)
    }
}

/// How the grid spec is obtained each frame.
///
/// `Auto` re-derives cell size and origin from the current viewport on every
/// call; nothing is cached, so camera motion is tracked for free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridSizing {
    Fixed(GridSpec),
    Auto { cols: i32, rows: i32 },
}

impl GridSizing {
    pub fn resolve(&self, view: Option<ViewRect>) -> Option<GridSpec> {
        match *self {
            GridSizing::Fixed(spec) => Some(spec),
            GridSizing::Auto { cols, rows } => {
                let view = view?;
                let cols = cols.max(1);
                let rows = rows.max(1);
                let cell = Vec2::new(view.size.x / cols as f32, view.size.y / rows as f32);
                Some(GridSpec::new(cell, view.bottom_left, cols, rows))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_grid() -> GridSpec {
        GridSpec::new(Vec2::ONE, Vec2::ZERO, 5, 5)
    }

    #[test]
    fn world_to_grid_floors() {
        let g = unit_grid();
        assert_eq!(g.world_to_grid(Vec2::new(3.5, 2.2)), Cell::new(3, 2));
        assert_eq!(g.world_to_grid(Vec2::new(-0.1, 0.0)), Cell::new(-1, 0));
        assert_eq!(g.world_to_grid(Vec2::new(0.999, 0.999)), Cell::new(0, 0));
    }

    #[test]
    fn grid_to_world_centers() {
        let g = unit_grid();
        assert_eq!(g.grid_to_world(Cell::new(3, 2)), Vec2::new(3.5, 2.5));
        assert_eq!(g.grid_to_world(Cell::ZERO), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn snap_clamps_out_of_bounds() {
        let g = unit_grid();
        assert_eq!(g.snap_to_grid(Vec2::new(-3.0, 9.0)), Vec2::new(0.5, 4.5));
        assert_eq!(g.snap_to_grid(Vec2::new(12.0, -1.0)), Vec2::new(4.5, 0.5));
    }

    #[test]
    fn degenerate_cell_size_short_circuits() {
        let g = GridSpec::new(Vec2::new(0.0, 1.0), Vec2::ZERO, 5, 5);
        assert!(g.degenerate());
        assert_eq!(g.world_to_grid(Vec2::new(7.0, 3.0)), Cell::ZERO);
        let p = Vec2::new(7.0, 3.0);
        assert_eq!(g.snap_to_grid(p), p);
    }

    #[test]
    fn footprint_center_and_back() {
        let g = GridSpec::new(Vec2::new(2.0, 1.5), Vec2::new(1.0, 1.0), 8, 8);
        let size = CellSize::new(2, 3);
        for c in [Cell::new(0, 0), Cell::new(3, 2), Cell::new(6, 5)] {
            let center = g.footprint_center(c, size);
            assert_eq!(g.cell_for_footprint(center, size), c);
        }
        // 2x3 footprint at (0,0): rect [1,1]..[5,5.5], center (3, 3.25)
        assert_eq!(
            g.footprint_center(Cell::ZERO, size),
            Vec2::new(3.0, 3.25)
        );
    }

    #[test]
    fn auto_sizing_tracks_view() {
        let sizing = GridSizing::Auto { cols: 10, rows: 5 };
        assert_eq!(sizing.resolve(None), None);
        let spec = sizing
            .resolve(Some(ViewRect::new(Vec2::new(-5.0, -2.5), Vec2::new(20.0, 10.0))))
            .unwrap();
        assert_eq!(spec.cell_size(), Vec2::new(2.0, 2.0));
        assert_eq!(spec.origin(), Vec2::new(-5.0, -2.5));

        // A different view on the next call yields a different spec.
        let spec2 = sizing
            .resolve(Some(ViewRect::new(Vec2::ZERO, Vec2::new(10.0, 5.0))))
            .unwrap();
        assert_eq!(spec2.cell_size(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn cell_size_floors_at_one() {
        assert_eq!(CellSize::new(0, -3), CellSize::new(1, 1));
    }
}
