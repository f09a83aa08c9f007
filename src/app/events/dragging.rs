use klotz_board::{DragState, DropOutcome, PieceHome, PieceId};
use klotz_geom::{Rect, Vec2};

use super::App;
use crate::event::Event;
use crate::gamestate::Mode;

impl App {
    pub(super) fn handle_drag_started(&mut self, piece: PieceId, pointer: Vec2, from_palette: bool) {
        if self.gs.drag.is_some() {
            return;
        }
        let Some(p) = self.gs.board.piece(piece) else {
            return;
        };
        let start_pos = p.pos;
        let prior_slot = self.gs.board.occupancy.slot_of(piece);

        if from_palette {
            if !self.gs.inventory.take(piece) {
                return;
            }
            if let Some(p) = self.gs.board.piece_mut(piece) {
                p.home = PieceHome::World;
            }
            log::info!(target: "events", "piece {:?} taken from palette", piece);
        }
        // The slot link is released for the duration of the drag; a revert
        // restores it.
        self.gs.board.occupancy.release_piece(piece);

        self.gs.drag = Some(DragState {
            piece,
            grab_offset: start_pos - pointer,
            start_pos,
            prior_slot,
        });
    }

    pub(super) fn handle_drag_dropped(&mut self, pointer: Vec2) {
        let Some(drag) = self.gs.drag else {
            return;
        };
        let Some(grid) = self.gs.grid(Some(self.cam.view_rect())) else {
            // No resolvable grid this tick; treat as a revert.
            self.queue.emit_now(Event::PieceReverted { piece: drag.piece });
            return;
        };
        let Some(p) = self.gs.board.piece(drag.piece) else {
            self.gs.drag = None;
            return;
        };

        // Authoring mode has no slot protocol; the per-tick re-snap settles
        // the piece wherever it was released.
        if self.gs.mode == Mode::Authoring {
            self.gs.drag = None;
            return;
        }

        let rect = Rect::from_center_size(p.pos, p.size.world_extent(grid.cell_size()));
        let over_palette = self.gs.strip.accept_rect().contains(pointer);
        match self.gs.board.resolve_drop(&grid, &drag, rect, over_palette) {
            DropOutcome::ReturnToPalette | DropOutcome::SendBackToPalette => {
                self.queue
                    .emit_now(Event::PieceReturnedToPalette { piece: drag.piece });
            }
            DropOutcome::Snap(slot) => {
                self.queue.emit_now(Event::PieceCommitted {
                    piece: drag.piece,
                    slot,
                });
            }
            DropOutcome::Revert => {
                self.queue.emit_now(Event::PieceReverted { piece: drag.piece });
            }
        }
    }
}
