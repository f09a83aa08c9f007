use klotz_geom::{Rect, Vec2};
use klotz_grid::GridSpec;

use super::{Board, PieceId, SlotId};

/// Bookkeeping captured when a drag begins and carried until the drop.
#[derive(Clone, Copy, Debug)]
pub struct DragState {
    pub piece: PieceId,
    /// Pointer position minus piece center at grab time; applied while the
    /// drag tracks the pointer so the piece does not jump under the cursor.
    pub grab_offset: Vec2,
    /// Piece center at grab time; the revert target.
    pub start_pos: Vec2,
    /// Slot the piece occupied when the drag began, if any.
    pub prior_slot: Option<SlotId>,
}

/// What a drop resolved to. The caller applies the outcome; resolution
/// itself mutates nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped over the palette accept region.
    ReturnToPalette,
    /// Commit into this slot.
    Snap(SlotId),
    /// Put the piece back where the drag started.
    Revert,
    /// Nowhere to revert to; the piece goes back to the inventory.
    SendBackToPalette,
}

impl Board {
    /// Decide the fate of a dropped piece.
    ///
    /// Priority: palette accept region first, then the nearest unoccupied
    /// slot overlapping the piece's footprint rect. Failing both, a prior
    /// slot link reverts the piece; without one it has nowhere to settle
    /// and goes back to the inventory instead of floating loose.
    pub fn resolve_drop(
        &self,
        grid: &GridSpec,
        drag: &DragState,
        piece_rect: Rect,
        over_palette: bool,
    ) -> DropOutcome {
        if over_palette {
            return DropOutcome::ReturnToPalette;
        }
        let candidates = self.slots_overlapping(grid, piece_rect);
        if let Some(slot) = self.nearest_free_slot(grid, piece_rect.center(), &candidates) {
            return DropOutcome::Snap(slot);
        }
        if drag.prior_slot.is_none() {
            DropOutcome::SendBackToPalette
        } else {
            DropOutcome::Revert
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, PieceHome, Slot};
    use klotz_grid::{Cell, CellSize};

    fn grid() -> GridSpec {
        GridSpec::new(Vec2::ONE, Vec2::ZERO, 10, 10)
    }

    fn board_with_slots(cells: &[(i32, i32)]) -> Board {
        let mut b = Board::new();
        for &(c, r) in cells {
            b.add_slot(Slot {
                tag: String::new(),
                cell: Cell::new(c, r),
                size: CellSize::ONE,
            });
        }
        b
    }

    fn loose_piece(b: &mut Board, pos: Vec2) -> PieceId {
        b.spawn_piece(Piece {
            kind: 0,
            tag: String::new(),
            size: CellSize::ONE,
            cell: Cell::ZERO,
            pos,
            variant: 0,
            home: PieceHome::World,
        })
    }

    fn drag(piece: PieceId, start: Vec2) -> DragState {
        DragState {
            piece,
            grab_offset: Vec2::ZERO,
            start_pos: start,
            prior_slot: None,
        }
    }

    #[test]
    fn palette_region_wins_over_slots() {
        let g = grid();
        let mut b = board_with_slots(&[(2, 2)]);
        let p = loose_piece(&mut b, Vec2::new(2.5, 2.5));
        let d = drag(p, Vec2::new(0.5, 0.5));
        let rect = Rect::from_center_size(Vec2::new(2.5, 2.5), Vec2::ONE);
        assert_eq!(
            b.resolve_drop(&g, &d, rect, true),
            DropOutcome::ReturnToPalette
        );
    }

    #[test]
    fn nearest_free_slot_by_center_distance() {
        let g = grid();
        let mut b = board_with_slots(&[(2, 2), (3, 2)]);
        let p = loose_piece(&mut b, Vec2::ZERO);
        let d = drag(p, Vec2::new(0.5, 0.5));
        // Centered between the two slots but nudged toward the second.
        let rect = Rect::from_center_size(Vec2::new(3.3, 2.5), Vec2::new(2.0, 1.0));
        assert_eq!(b.resolve_drop(&g, &d, rect, false), DropOutcome::Snap(SlotId(1)));
    }

    #[test]
    fn occupied_slots_are_skipped() {
        let g = grid();
        let mut b = board_with_slots(&[(2, 2), (3, 2)]);
        let blocker = loose_piece(&mut b, Vec2::ZERO);
        assert!(b.place_in_slot(&g, blocker, SlotId(1)));

        let p = loose_piece(&mut b, Vec2::ZERO);
        let d = drag(p, Vec2::new(0.5, 0.5));
        let rect = Rect::from_center_size(Vec2::new(3.3, 2.5), Vec2::new(2.0, 1.0));
        // Nearer slot is taken, falls to the free one.
        assert_eq!(b.resolve_drop(&g, &d, rect, false), DropOutcome::Snap(SlotId(0)));
    }

    #[test]
    fn tie_keeps_first_declared_slot() {
        let g = grid();
        let mut b = board_with_slots(&[(2, 2), (4, 2)]);
        let p = loose_piece(&mut b, Vec2::ZERO);
        let d = drag(p, Vec2::new(0.5, 0.5));
        // Exactly between both slot centers.
        let rect = Rect::from_center_size(Vec2::new(3.5, 2.5), Vec2::new(3.0, 1.0));
        assert_eq!(b.resolve_drop(&g, &d, rect, false), DropOutcome::Snap(SlotId(0)));
    }

    #[test]
    fn no_overlap_keys_on_prior_slot_link() {
        let g = grid();
        let mut b = board_with_slots(&[(2, 2)]);
        let p = loose_piece(&mut b, Vec2::new(8.5, 8.5));
        let rect = Rect::from_center_size(Vec2::new(8.5, 8.5), Vec2::ONE);

        // A loose world piece with no slot link does not float: it goes
        // back to the inventory.
        let d = drag(p, Vec2::new(7.5, 7.5));
        assert_eq!(
            b.resolve_drop(&g, &d, rect, false),
            DropOutcome::SendBackToPalette
        );

        // A prior slot link makes revert meaningful.
        let d2 = DragState {
            prior_slot: Some(SlotId(0)),
            ..d
        };
        assert_eq!(b.resolve_drop(&g, &d2, rect, false), DropOutcome::Revert);
    }

    #[test]
    fn place_in_slot_snaps_and_links() {
        let g = grid();
        let mut b = board_with_slots(&[(2, 3)]);
        let p = loose_piece(&mut b, Vec2::ZERO);
        assert!(b.place_in_slot(&g, p, SlotId(0)));
        let piece = b.piece(p).unwrap();
        assert_eq!(piece.pos, Vec2::new(2.5, 3.5));
        assert_eq!(piece.cell, Cell::new(2, 3));
        assert_eq!(b.occupancy.occupant(SlotId(0)), Some(p));

        // A second piece cannot take the same slot.
        let q = loose_piece(&mut b, Vec2::ZERO);
        assert!(!b.place_in_slot(&g, q, SlotId(0)));
        assert_eq!(b.occupancy.occupant(SlotId(0)), Some(p));
    }

    #[test]
    fn refused_commit_keeps_prior_links() {
        let g = grid();
        let mut b = board_with_slots(&[(1, 1), (4, 4)]);
        let p = loose_piece(&mut b, Vec2::ZERO);
        let q = loose_piece(&mut b, Vec2::ZERO);
        assert!(b.place_in_slot(&g, p, SlotId(0)));
        assert!(b.place_in_slot(&g, q, SlotId(1)));

        // q holds the target; p's own link must survive the refusal.
        assert!(!b.place_in_slot(&g, p, SlotId(1)));
        assert_eq!(b.occupancy.occupant(SlotId(0)), Some(p));
        assert_eq!(b.occupancy.occupant(SlotId(1)), Some(q));
        assert_eq!(b.occupancy.slot_of(p), Some(SlotId(0)));
    }
}
