use super::App;
use crate::event::Event;

impl App {
    pub(super) fn log_event(tick: u64, ev: &Event) {
        use crate::event::Event as E;
        match ev {
            E::DragStarted {
                piece,
                pointer,
                from_palette,
            } => {
                log::info!(
                    target: "events",
                    "[tick {}] DragStarted piece={:?} at=({:.2},{:.2}) from={}",
                    tick,
                    piece,
                    pointer.x,
                    pointer.y,
                    if *from_palette { "palette" } else { "world" }
                );
            }
            E::DragDropped { pointer } => {
                log::info!(
                    target: "events",
                    "[tick {}] DragDropped at=({:.2},{:.2})",
                    tick,
                    pointer.x,
                    pointer.y
                );
            }
            E::PieceCommitted { piece, slot } => {
                log::info!(
                    target: "events",
                    "[tick {}] PieceCommitted piece={:?} slot={:?}",
                    tick,
                    piece,
                    slot
                );
            }
            E::PieceReverted { piece } => {
                log::info!(target: "events", "[tick {}] PieceReverted piece={:?}", tick, piece);
            }
            E::PieceReturnedToPalette { piece } => {
                log::info!(
                    target: "events",
                    "[tick {}] PieceReturnedToPalette piece={:?}",
                    tick,
                    piece
                );
            }
            E::PaletteScrolled { right } => {
                log::info!(
                    target: "events",
                    "[tick {}] PaletteScrolled dir={}",
                    tick,
                    if *right { "right" } else { "left" }
                );
            }
            E::VariantCycleRequested { piece } => {
                log::info!(
                    target: "events",
                    "[tick {}] VariantCycleRequested piece={:?}",
                    tick,
                    piece
                );
            }
            E::PieceSpawnRequested { kind } => {
                log::info!(target: "events", "[tick {}] PieceSpawnRequested kind={}", tick, kind);
            }
            E::VerifyRequested => {
                log::info!(target: "events", "[tick {}] VerifyRequested", tick);
            }
            E::GridToggled => {
                log::info!(target: "events", "[tick {}] GridToggled", tick);
            }
            E::HelpToggled => {
                log::info!(target: "events", "[tick {}] HelpToggled", tick);
            }
            E::LevelReloadRequested => {
                log::info!(target: "events", "[tick {}] LevelReloadRequested", tick);
            }
            E::CatalogReloadRequested => {
                log::info!(target: "events", "[tick {}] CatalogReloadRequested", tick);
            }
        }
    }
}
