//! Level model: slots, piece instances, occupancy, and drop resolution.
#![forbid(unsafe_code)]

mod drag;
mod occupancy;
mod verify;

pub use drag::{DragState, DropOutcome};
pub use occupancy::Occupancy;
pub use verify::{VerifyFailure, VerifyReport};

use hashbrown::HashMap;

use klotz_blocks::KindId;
use klotz_geom::{Rect, Vec2};
use klotz_grid::{Cell, CellSize, GridSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

/// A fixed target region on the grid. At most one piece occupies it.
#[derive(Clone, Debug)]
pub struct Slot {
    /// Canonical tag; empty means the slot accepts anything and is not
    /// checked by verification.
    pub tag: String,
    pub cell: Cell,
    pub size: CellSize,
}

/// Where a piece currently lives. Exactly one of the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceHome {
    World,
    Palette,
}

/// A movable block instance.
#[derive(Clone, Debug)]
pub struct Piece {
    pub kind: KindId,
    /// Canonical tag, inherited from the kind at spawn.
    pub tag: String,
    pub size: CellSize,
    pub cell: Cell,
    /// World position of the piece's center. Meaningful while `home` is
    /// `World`; palette pieces are positioned by the strip layout.
    pub pos: Vec2,
    /// Index of the active visual variant.
    pub variant: usize,
    pub home: PieceHome,
}

/// Sole owner of slot and piece records plus the occupancy relation.
#[derive(Default, Clone, Debug)]
pub struct Board {
    slots: Vec<Slot>,
    pieces: HashMap<PieceId, Piece>,
    next_piece: u32,
    pub occupancy: Occupancy,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_slot(&mut self, slot: Slot) -> SlotId {
        let id = SlotId(self.slots.len() as u32);
        self.slots.push(slot);
        id
    }

    pub fn spawn_piece(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.next_piece);
        self.next_piece += 1;
        self.pieces.insert(id, piece);
        id
    }

    pub fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        self.occupancy.release_piece(id);
        self.pieces.remove(&id)
    }

    #[inline]
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.0 as usize)
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    #[inline]
    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    pub fn slots(&self) -> impl Iterator<Item = (SlotId, &Slot)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (SlotId(i as u32), s))
    }

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter().map(|(id, p)| (*id, p))
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn slot_rect(&self, grid: &GridSpec, id: SlotId) -> Option<Rect> {
        let s = self.slot(id)?;
        Some(grid.footprint_rect(s.cell, s.size))
    }

    /// All slots whose footprint intersects `rect`, in declaration order.
    pub fn slots_overlapping(&self, grid: &GridSpec, rect: Rect) -> Vec<SlotId> {
        self.slots()
            .filter(|(_, s)| grid.footprint_rect(s.cell, s.size).intersects(rect))
            .map(|(id, _)| id)
            .collect()
    }

    /// Unoccupied candidate nearest to `center` by footprint-center
    /// distance. Ties keep the first candidate seen.
    pub fn nearest_free_slot(
        &self,
        grid: &GridSpec,
        center: Vec2,
        candidates: &[SlotId],
    ) -> Option<SlotId> {
        let mut best: Option<(SlotId, f32)> = None;
        for &id in candidates {
            if self.occupancy.is_occupied(id) {
                continue;
            }
            let Some(s) = self.slot(id) else { continue };
            let d = grid.footprint_center(s.cell, s.size).distance(center);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((id, d)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Commit a piece into a slot: re-checks occupancy, links the relation,
    /// snaps the piece to the slot's footprint center, and adopts the
    /// slot's cell. Returns false if another piece holds the slot.
    pub fn place_in_slot(&mut self, grid: &GridSpec, piece: PieceId, slot: SlotId) -> bool {
        let Some(s) = self.slot(slot) else {
            return false;
        };
        let (cell, center) = (s.cell, grid.footprint_center(s.cell, s.size));
        // occupy releases the piece's old slot itself, and only on success;
        // a refused commit must leave existing links untouched.
        if !self.occupancy.occupy(slot, piece) {
            return false;
        }
        if let Some(p) = self.pieces.get_mut(&piece) {
            p.pos = center;
            p.cell = cell;
            p.home = PieceHome::World;
        }
        true
    }
}
