use hashbrown::HashMap;

use super::{PieceId, SlotId};

/// Bidirectional slot<->piece relation. Both directions are kept consistent
/// by construction; neither slots nor pieces hold back-references.
#[derive(Default, Clone, Debug)]
pub struct Occupancy {
    by_slot: HashMap<SlotId, PieceId>,
    by_piece: HashMap<PieceId, SlotId>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `piece` into `slot`. Refuses (returns false) when the slot
    /// already holds a different piece; linking the current occupant again
    /// is a no-op success. Any previous slot of `piece` is released first.
    pub fn occupy(&mut self, slot: SlotId, piece: PieceId) -> bool {
        match self.by_slot.get(&slot) {
            Some(&p) if p == piece => return true,
            Some(_) => return false,
            None => {}
        }
        self.release_piece(piece);
        self.by_slot.insert(slot, piece);
        self.by_piece.insert(piece, slot);
        true
    }

    /// Clear the slot side of the relation. Idempotent.
    pub fn vacate_slot(&mut self, slot: SlotId) {
        if let Some(piece) = self.by_slot.remove(&slot) {
            self.by_piece.remove(&piece);
        }
    }

    /// Clear the piece side of the relation. Idempotent.
    pub fn release_piece(&mut self, piece: PieceId) {
        if let Some(slot) = self.by_piece.remove(&piece) {
            self.by_slot.remove(&slot);
        }
    }

    #[inline]
    pub fn is_occupied(&self, slot: SlotId) -> bool {
        self.by_slot.contains_key(&slot)
    }

    #[inline]
    pub fn occupant(&self, slot: SlotId) -> Option<PieceId> {
        self.by_slot.get(&slot).copied()
    }

    #[inline]
    pub fn slot_of(&self, piece: PieceId) -> Option<SlotId> {
        self.by_piece.get(&piece).copied()
    }

    pub fn len(&self) -> usize {
        self.by_slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }
}
