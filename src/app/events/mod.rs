mod board;
mod dragging;
mod logging;
mod palette;
mod reload;
mod toggles;

use super::App;
use crate::event::{Event, EventEnvelope};

impl App {
    pub(super) fn handle_event(&mut self, env: EventEnvelope) {
        // Log a concise line for the processed event
        Self::log_event(self.gs.tick, &env.kind);
        match env.kind {
            Event::DragStarted {
                piece,
                pointer,
                from_palette,
            } => {
                self.handle_drag_started(piece, pointer, from_palette);
            }
            Event::DragDropped { pointer } => {
                self.handle_drag_dropped(pointer);
            }
            Event::PieceCommitted { piece, slot } => {
                self.handle_piece_committed(piece, slot);
            }
            Event::PieceReverted { piece } => {
                self.handle_piece_reverted(piece);
            }
            Event::PieceReturnedToPalette { piece } => {
                self.handle_piece_returned(piece);
            }
            Event::PaletteScrolled { right } => {
                self.handle_palette_scrolled(right);
            }
            Event::VariantCycleRequested { piece } => {
                self.handle_variant_cycle(piece);
            }
            Event::PieceSpawnRequested { kind } => {
                self.handle_piece_spawn(kind);
            }
            Event::VerifyRequested => {
                self.handle_verify();
            }
            Event::GridToggled => {
                self.handle_grid_toggle();
            }
            Event::HelpToggled => {
                self.handle_help_toggle();
            }
            Event::LevelReloadRequested => {
                self.handle_level_reload();
            }
            Event::CatalogReloadRequested => {
                self.handle_catalog_reload();
            }
        }
    }

    /// Cell size for footprint arithmetic this frame; unit cells when the
    /// automatic grid has no view yet.
    pub(super) fn current_cell_size(&self) -> klotz_geom::Vec2 {
        self.gs
            .grid(Some(self.cam.view_rect()))
            .map(|g| g.cell_size())
            .unwrap_or(klotz_geom::Vec2::ONE)
    }
}
