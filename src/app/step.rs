use raylib::prelude::*;

use klotz_board::PieceHome;
use klotz_geom::{Rect, Vec2};
use klotz_grid::GridSpec;
use klotz_ui::HitRegion;

use super::App;
use crate::event::Event;
use crate::gamestate::Mode;

impl App {
    pub fn step(&mut self, rl: &mut RaylibHandle, _thread: &RaylibThread, dt: f32) {
        self.cam.screen_w = rl.get_screen_width();
        self.cam.screen_h = rl.get_screen_height();

        // Hot-reload pings from the watcher threads
        if self.level_event_rx.try_iter().next().is_some() {
            self.queue.emit_now(Event::LevelReloadRequested);
        }
        if self.catalog_event_rx.try_iter().next().is_some() {
            self.queue.emit_now(Event::CatalogReloadRequested);
        }

        self.handle_camera_input(rl, dt);

        let mouse = rl.get_mouse_position();
        let pointer = self.cam.screen_to_world(mouse);
        let grid = self.gs.grid(Some(self.cam.view_rect()));

        // Keyboard intents
        if rl.is_key_pressed(KeyboardKey::KEY_G) {
            self.queue.emit_now(Event::GridToggled);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_H) || rl.is_key_pressed(KeyboardKey::KEY_F1) {
            self.queue.emit_now(Event::HelpToggled);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_V) || rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            self.queue.emit_now(Event::VerifyRequested);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.queue.emit_now(Event::PaletteScrolled { right: false });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.queue.emit_now(Event::PaletteScrolled { right: true });
        }
        if self.gs.mode == Mode::Authoring {
            const DIGITS: [KeyboardKey; 9] = [
                KeyboardKey::KEY_ONE,
                KeyboardKey::KEY_TWO,
                KeyboardKey::KEY_THREE,
                KeyboardKey::KEY_FOUR,
                KeyboardKey::KEY_FIVE,
                KeyboardKey::KEY_SIX,
                KeyboardKey::KEY_SEVEN,
                KeyboardKey::KEY_EIGHT,
                KeyboardKey::KEY_NINE,
            ];
            for (i, key) in DIGITS.iter().enumerate() {
                if rl.is_key_pressed(*key) && self.gs.catalog.get(i as u16).is_some() {
                    self.queue
                        .emit_now(Event::PieceSpawnRequested { kind: i as u16 });
                }
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            let hovered = self
                .gs
                .drag
                .map(|d| d.piece)
                .or_else(|| grid.as_ref().and_then(|g| self.piece_under(g, pointer)));
            if let Some(piece) = hovered {
                self.queue.emit_now(Event::VariantCycleRequested { piece });
            }
        }

        // Mouse: drag protocol and palette buttons
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && self.gs.drag.is_none() {
            let chrome = self.strip_chrome();
            let entries = self.entry_rects();
            match chrome.hit_test(mouse, &entries) {
                HitRegion::ScrollLeft => {
                    self.queue.emit_now(Event::PaletteScrolled { right: false });
                }
                HitRegion::ScrollRight => {
                    self.queue.emit_now(Event::PaletteScrolled { right: true });
                }
                HitRegion::Entry(i) => {
                    if let Some(Some(piece)) = self.gs.inventory.visible_items().get(i).copied() {
                        // Seed the piece at its strip position so the grab
                        // offset keeps it under the pointer.
                        let window = self.gs.inventory.window_size();
                        let world = self.gs.strip.slot_pos(window, i);
                        if let Some(p) = self.gs.board.piece_mut(piece) {
                            p.pos = world;
                        }
                        self.queue.emit_now(Event::DragStarted {
                            piece,
                            pointer,
                            from_palette: true,
                        });
                    }
                }
                HitRegion::Panel | HitRegion::None => {
                    if let Some(g) = grid.as_ref() {
                        if let Some(piece) = self.piece_under(g, pointer) {
                            self.queue.emit_now(Event::DragStarted {
                                piece,
                                pointer,
                                from_palette: false,
                            });
                        }
                    }
                }
            }
        }

        // While a drag is live the piece tracks the pointer every tick.
        if let Some(drag) = self.gs.drag {
            if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
                if let Some(p) = self.gs.board.piece_mut(drag.piece) {
                    p.pos = pointer + drag.grab_offset;
                }
            } else {
                self.queue.emit_now(Event::DragDropped { pointer });
            }
        }

        // Authoring mode: loose pieces continuously re-snap to the grid.
        if self.gs.mode == Mode::Authoring {
            if let Some(g) = grid.as_ref() {
                self.resnap_world_pieces(g);
            }
        }

        // Snapshot queued events before processing (for the HUD)
        {
            let (total, by) = self.queue.queued_counts();
            self.debug_stats.queued_events_total = total;
            let mut pairs: Vec<(String, usize)> =
                by.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
            pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            self.debug_stats.queued_events_by = pairs;
        }

        // Process events scheduled for this tick with a budget
        let mut processed = 0usize;
        let max_events = 1_000usize;
        while let Some(env) = self.queue.pop_ready() {
            let label = env.kind.label().to_string();
            self.evt_processed_total = self.evt_processed_total.saturating_add(1);
            *self.evt_processed_by.entry(label).or_insert(0) += 1;
            self.handle_event(env);
            processed += 1;
            if processed >= max_events {
                break;
            }
        }

        self.gs.tick = self.gs.tick.wrapping_add(1);
        self.queue.advance_tick();
        // Sanity check: events left in past ticks will never be processed
        let stale = self.queue.count_stale_events();
        if stale > 0 {
            let mut details = String::new();
            for (t, n) in self.queue.stale_summary() {
                use std::fmt::Write as _;
                let _ = write!(&mut details, "[t={} n={}] ", t, n);
            }
            log::error!(
                target: "events",
                "Detected {} stale event(s) in past tick buckets; details: {}",
                stale,
                details
            );
        }
    }

    fn handle_camera_input(&mut self, rl: &mut RaylibHandle, dt: f32) {
        let wheel = rl.get_mouse_wheel_move();
        if wheel.abs() > 0.0 {
            let factor = if wheel > 0.0 { 1.1 } else { 1.0 / 1.1 };
            self.cam.zoom_around(factor, rl.get_mouse_position());
        }
        if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT)
            || rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_MIDDLE)
        {
            let d = rl.get_mouse_delta();
            self.cam
                .pan(Vec2::new(-d.x / self.cam.zoom, d.y / self.cam.zoom));
        }
        let pan_speed = 10.0 * dt;
        let mut pan = Vec2::ZERO;
        if rl.is_key_down(KeyboardKey::KEY_W) {
            pan.y += pan_speed;
        }
        if rl.is_key_down(KeyboardKey::KEY_S) {
            pan.y -= pan_speed;
        }
        if rl.is_key_down(KeyboardKey::KEY_A) {
            pan.x -= pan_speed;
        }
        if rl.is_key_down(KeyboardKey::KEY_D) {
            pan.x += pan_speed;
        }
        if pan != Vec2::ZERO {
            self.cam.pan(pan);
        }
    }

    /// Topmost loose piece whose rect contains `p`. Later spawns win.
    fn piece_under(&self, grid: &GridSpec, p: Vec2) -> Option<klotz_board::PieceId> {
        let mut hit = None;
        let mut hits: Vec<(klotz_board::PieceId, Rect)> = self
            .gs
            .board
            .pieces()
            .filter(|(_, piece)| piece.home == PieceHome::World)
            .map(|(id, piece)| {
                (
                    id,
                    Rect::from_center_size(piece.pos, piece.size.world_extent(grid.cell_size())),
                )
            })
            .collect();
        hits.sort_by_key(|(id, _)| *id);
        for (id, rect) in hits {
            if rect.contains(p) {
                hit = Some(id);
            }
        }
        hit
    }

    fn resnap_world_pieces(&mut self, grid: &GridSpec) {
        let dragged = self.gs.drag.map(|d| d.piece);
        let ids: Vec<_> = self
            .gs
            .board
            .pieces()
            .filter(|(id, p)| p.home == PieceHome::World && Some(*id) != dragged)
            .map(|(id, _)| id)
            .collect();
        for id in ids {
            let Some(p) = self.gs.board.piece(id) else {
                continue;
            };
            let (pos, size) = (p.pos, p.size);
            let cell = grid.cell_for_footprint(pos, size);
            // Keep the whole footprint inside the grid.
            let cell = klotz_grid::Cell::new(
                cell.col.clamp(0, (grid.cols - size.w).max(0)),
                cell.row.clamp(0, (grid.rows - size.h).max(0)),
            );
            let snapped = grid.footprint_center(cell, size);
            if let Some(p) = self.gs.board.piece_mut(id) {
                p.cell = cell;
                p.pos = snapped;
            }
        }
    }
}
