use raylib::prelude::*;

use klotz_board::PieceHome;
use klotz_geom::{Rect, Vec2};
use klotz_grid::{Cell, GridSpec};
use klotz_ui::{IRect, StripChrome};

use super::App;

const SLOT_FREE: Color = Color::new(70, 110, 90, 90);
const SLOT_OCCUPIED: Color = Color::new(70, 90, 140, 60);
const SLOT_BORDER: Color = Color::new(140, 200, 170, 255);
const SLOT_CANDIDATE: Color = Color::new(250, 220, 120, 255);
const GRID_LINE: Color = Color::new(60, 64, 76, 255);
const PIECE_BORDER: Color = Color::new(20, 22, 26, 255);

impl App {
    pub(super) fn draw_world(&mut self, d: &mut RaylibDrawHandle, grid: &GridSpec) {
        if self.gs.show_grid {
            self.draw_grid_lines(d, grid);
        }
        self.draw_slots(d, grid);
        self.draw_pieces(d, grid);
    }

    fn world_rect_to_screen(&self, r: Rect) -> Rectangle {
        let tl = self.cam.world_to_screen(Vec2::new(r.min.x, r.max.y));
        let br = self.cam.world_to_screen(Vec2::new(r.max.x, r.min.y));
        Rectangle::new(tl.x, tl.y, br.x - tl.x, br.y - tl.y)
    }

    fn draw_grid_lines(&self, d: &mut RaylibDrawHandle, grid: &GridSpec) {
        let bounds = grid.bounds();
        for col in 0..=grid.cols {
            let x = bounds.min.x + col as f32 * grid.cell_size().x;
            let a = self.cam.world_to_screen(Vec2::new(x, bounds.min.y));
            let b = self.cam.world_to_screen(Vec2::new(x, bounds.max.y));
            d.draw_line_ex(a, b, 1.0, GRID_LINE);
        }
        for row in 0..=grid.rows {
            let y = bounds.min.y + row as f32 * grid.cell_size().y;
            let a = self.cam.world_to_screen(Vec2::new(bounds.min.x, y));
            let b = self.cam.world_to_screen(Vec2::new(bounds.max.x, y));
            d.draw_line_ex(a, b, 1.0, GRID_LINE);
        }
    }

    fn draw_slots(&mut self, d: &mut RaylibDrawHandle, grid: &GridSpec) {
        // Live highlight: the slot the current drag would land in.
        let candidate = self.gs.drag.and_then(|drag| {
            let p = self.gs.board.piece(drag.piece)?;
            let rect = Rect::from_center_size(p.pos, p.size.world_extent(grid.cell_size()));
            let overlapping = self.gs.board.slots_overlapping(grid, rect);
            self.gs.board.nearest_free_slot(grid, rect.center(), &overlapping)
        });

        let mut drawn = 0usize;
        for (id, slot) in self.gs.board.slots() {
            let rect = self.world_rect_to_screen(grid.footprint_rect(slot.cell, slot.size));
            let fill = if self.gs.board.occupancy.is_occupied(id) {
                SLOT_OCCUPIED
            } else {
                SLOT_FREE
            };
            d.draw_rectangle_rec(rect, fill);
            let border = if candidate == Some(id) {
                SLOT_CANDIDATE
            } else {
                SLOT_BORDER
            };
            d.draw_rectangle_lines_ex(rect, 2.0, border);
            if !slot.tag.is_empty() && self.cam.zoom >= 16.0 {
                d.draw_text(
                    &slot.tag,
                    rect.x as i32 + 4,
                    rect.y as i32 + 4,
                    10,
                    SLOT_BORDER,
                );
            }
            drawn += 1;
        }
        self.debug_stats.slots_drawn = drawn;
    }

    fn draw_pieces(&mut self, d: &mut RaylibDrawHandle, grid: &GridSpec) {
        let dragged = self.gs.drag.map(|drag| drag.piece);
        let mut order: Vec<_> = self
            .gs
            .board
            .pieces()
            .filter(|(_, p)| p.home == PieceHome::World)
            .map(|(id, _)| id)
            .collect();
        order.sort();
        // Dragged piece renders last, on top of everything.
        if let Some(dr) = dragged {
            order.retain(|&id| id != dr);
            order.push(dr);
        }

        let mut drawn = 0usize;
        for id in order {
            let Some(p) = self.gs.board.piece(id) else {
                continue;
            };
            let rect = self.world_rect_to_screen(Rect::from_center_size(
                p.pos,
                p.size.world_extent(grid.cell_size()),
            ));
            let color = self.piece_color(p.kind, p.variant);
            d.draw_rectangle_rec(rect, color);
            let border = if Some(id) == dragged {
                SLOT_CANDIDATE
            } else {
                PIECE_BORDER
            };
            d.draw_rectangle_lines_ex(rect, 2.0, border);
            drawn += 1;
        }
        self.debug_stats.pieces_drawn = drawn;
    }

    pub(super) fn piece_color(&self, kind: klotz_blocks::KindId, variant: usize) -> Color {
        let rgb = self
            .gs
            .catalog
            .get(kind)
            .and_then(|k| k.variants.get(k.clamp_variant(variant)))
            .map(|v| v.color)
            .unwrap_or([150, 150, 150]);
        Color::new(rgb[0], rgb[1], rgb[2], 255)
    }

    pub(super) fn draw_palette(
        &mut self,
        d: &mut RaylibDrawHandle,
        chrome: &StripChrome,
        entries: &[IRect],
        mouse: Vector2,
    ) {
        let inv = &self.gs.inventory;
        chrome.draw(
            d,
            mouse,
            inv.start() > 0,
            inv.start() + inv.window_size() < inv.len(),
        );
        let visible = inv.visible_items();
        for (i, rect) in entries.iter().enumerate() {
            d.draw_rectangle_lines_ex(rect.to_rl(), 1.0, chrome.theme.panel_border);
            if let Some(Some(piece)) = visible.get(i).copied() {
                if let Some(p) = self.gs.board.piece(piece) {
                    let color = self.piece_color(p.kind, p.variant);
                    let inner = Rectangle::new(
                        rect.x as f32 + 3.0,
                        rect.y as f32 + 3.0,
                        rect.w as f32 - 6.0,
                        rect.h as f32 - 6.0,
                    );
                    d.draw_rectangle_rec(inner, color);
                }
            }
        }
        // Window position indicator, e.g. "3-5/9"
        if inv.len() > inv.window_size() {
            let label = format!(
                "{}-{}/{}",
                inv.start() + 1,
                (inv.start() + inv.window_size()).min(inv.len()),
                inv.len()
            );
            d.draw_text(
                &label,
                chrome.panel.x + 4,
                chrome.panel.y - 14,
                10,
                chrome.theme.glyph,
            );
        }
    }

    /// Cell under the pointer, for the HUD readout.
    pub(super) fn hovered_cell(&self, grid: &GridSpec, pointer: Vec2) -> Option<Cell> {
        let cell = grid.world_to_grid(pointer);
        grid.contains_cell(cell).then_some(cell)
    }
}
