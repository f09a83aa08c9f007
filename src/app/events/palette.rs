use klotz_blocks::KindId;
use klotz_board::{PieceHome, PieceId};
use klotz_geom::Vec2;
use klotz_grid::Cell;

use super::App;

impl App {
    pub(super) fn handle_piece_returned(&mut self, piece: PieceId) {
        if let Some(d) = self.gs.drag {
            if d.piece == piece {
                self.gs.drag = None;
            }
        }
        self.gs.board.occupancy.release_piece(piece);
        if let Some(p) = self.gs.board.piece_mut(piece) {
            p.home = PieceHome::Palette;
        }
        if !self.gs.inventory.put_back(piece) {
            log::debug!(target: "events", "piece {:?} already in palette", piece);
        }
    }

    pub(super) fn handle_palette_scrolled(&mut self, right: bool) {
        let moved = if right {
            self.gs.inventory.scroll_right()
        } else {
            self.gs.inventory.scroll_left()
        };
        if !moved {
            log::debug!(target: "events", "palette scroll at boundary, no-op");
        }
    }

    /// Authoring convenience: conjure a fresh piece of a kind into the
    /// palette.
    pub(super) fn handle_piece_spawn(&mut self, kind: KindId) {
        let cell_size = self.current_cell_size();
        if self
            .gs
            .spawn_from_kind(kind, Cell::ZERO, Vec2::ZERO, PieceHome::Palette, cell_size)
            .is_none()
        {
            log::warn!(target: "events", "spawn requested for unknown kind {}", kind);
        }
    }

    pub(super) fn handle_variant_cycle(&mut self, piece: PieceId) {
        let cell_size = self.current_cell_size();
        self.gs.cycle_variant(piece, cell_size);
    }
}
