use klotz_blocks::{BlockCatalog, KindId};
use klotz_board::{Board, DragState, Piece, PieceHome, PieceId, VerifyReport};
use klotz_geom::Vec2;
use klotz_grid::{Cell, GridSizing, GridSpec};
use klotz_palette::{Inventory, StripLayout};

/// Session mode, chosen once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Pieces re-snap continuously from their authored positions; no
    /// occupancy protocol.
    Authoring,
    /// The drag/snap/commit protocol against slots and the palette.
    Interactive,
}

/// Explicit context object owning the grid, the level model, and the
/// palette. Constructed once and passed down; nothing global.
#[derive(Debug)]
pub struct GameState {
    pub tick: u64,
    pub mode: Mode,
    pub sizing: GridSizing,
    pub catalog: BlockCatalog,
    pub board: Board,
    pub inventory: Inventory,
    pub strip: StripLayout,
    pub drag: Option<DragState>,
    pub show_grid: bool,
    pub show_help: bool,
    pub last_verify: Option<VerifyReport>,
}

impl GameState {
    pub fn new(mode: Mode, sizing: GridSizing, catalog: BlockCatalog, strip: StripLayout) -> Self {
        Self {
            tick: 0,
            mode,
            sizing,
            catalog,
            board: Board::new(),
            // Window size is a gameplay choice; level files override it.
            inventory: Inventory::new(4),
            drag: None,
            strip,
            show_grid: true,
            show_help: false,
            last_verify: None,
        }
    }

    /// The grid for this frame, if resolvable. Automatic sizing needs the
    /// camera view; callers skip grid-dependent work on `None`.
    pub fn grid(&self, view: Option<klotz_grid::ViewRect>) -> Option<GridSpec> {
        self.sizing.resolve(view)
    }

    /// Spawn a piece of a catalog kind. Tag, footprint, and default
    /// variant come from the kind.
    pub fn spawn_from_kind(
        &mut self,
        kind: KindId,
        cell: Cell,
        pos: Vec2,
        home: PieceHome,
        cell_size: Vec2,
    ) -> Option<PieceId> {
        let k = self.catalog.get(kind)?;
        let size = k.footprint(0, cell_size);
        let piece = Piece {
            kind,
            tag: k.tag.clone(),
            size,
            cell,
            pos,
            variant: 0,
            home,
        };
        let id = self.board.spawn_piece(piece);
        if home == PieceHome::Palette {
            self.inventory.put_back(id);
        }
        Some(id)
    }

    /// Cycle a piece's active variant and refresh its footprint when the
    /// kind auto-sizes.
    pub fn cycle_variant(&mut self, piece: PieceId, cell_size: Vec2) {
        let Some(p) = self.board.piece(piece) else {
            return;
        };
        let Some(kind) = self.catalog.get(p.kind) else {
            return;
        };
        let next = (p.variant + 1) % kind.variants.len().max(1);
        let size = kind.footprint(next, cell_size);
        if let Some(p) = self.board.piece_mut(piece) {
            p.variant = next;
            p.size = size;
        }
    }
}
