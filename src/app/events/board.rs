use klotz_board::{PieceId, SlotId};

use super::App;
use crate::event::Event;

impl App {
    pub(super) fn handle_piece_committed(&mut self, piece: PieceId, slot: SlotId) {
        let Some(grid) = self.gs.grid(Some(self.cam.view_rect())) else {
            self.queue.emit_now(Event::PieceReverted { piece });
            return;
        };
        // The slot may have been taken between resolution and commit; the
        // occupancy re-check decides.
        if self.gs.board.place_in_slot(&grid, piece, slot) {
            if let Some(d) = self.gs.drag {
                if d.piece == piece {
                    self.gs.drag = None;
                }
            }
        } else {
            log::warn!(target: "events", "slot {:?} taken at commit; reverting {:?}", slot, piece);
            self.queue.emit_now(Event::PieceReverted { piece });
        }
    }

    pub(super) fn handle_piece_reverted(&mut self, piece: PieceId) {
        let drag = match self.gs.drag {
            Some(d) if d.piece == piece => d,
            _ => return,
        };
        self.gs.drag = None;

        // A prior slot link is restored wholesale; otherwise the piece just
        // returns to where the drag began.
        if let Some(prior) = drag.prior_slot {
            if let Some(grid) = self.gs.grid(Some(self.cam.view_rect())) {
                if self.gs.board.place_in_slot(&grid, piece, prior) {
                    return;
                }
            }
        }
        if let Some(p) = self.gs.board.piece_mut(piece) {
            p.pos = drag.start_pos;
        }
    }

    pub(super) fn handle_verify(&mut self) {
        let report = self.gs.board.verify();
        if report.passed() {
            log::info!(target: "level", "verify passed: {} slot(s) checked", report.checked);
        } else {
            log::info!(
                target: "level",
                "verify failed: {} of {} slot(s): {:?}",
                report.failures.len(),
                report.checked,
                report.failures
            );
        }
        self.gs.last_verify = Some(report);
    }
}
