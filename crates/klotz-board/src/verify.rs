use klotz_blocks::{tag_is_wildcard, tag_matches};

use super::{Board, PieceId, SlotId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyFailure {
    /// A tagged slot has no occupant.
    Unfilled { slot: SlotId },
    /// The occupant's tag does not match the slot's.
    TagMismatch { slot: SlotId, piece: PieceId },
}

#[derive(Clone, Debug, Default)]
pub struct VerifyReport {
    /// Slots that carried a non-wildcard tag and were checked.
    pub checked: usize,
    pub failures: Vec<VerifyFailure>,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Board {
    /// Check every tagged slot: it must be occupied, and the occupant's tag
    /// must match under the canonical comparison. Untagged slots are
    /// decorative and skipped.
    pub fn verify(&self) -> VerifyReport {
        let mut report = VerifyReport::default();
        for (id, slot) in self.slots() {
            if tag_is_wildcard(&slot.tag) {
                continue;
            }
            report.checked += 1;
            match self.occupancy.occupant(id) {
                None => report.failures.push(VerifyFailure::Unfilled { slot: id }),
                Some(piece) => {
                    let ok = self
                        .piece(piece)
                        .is_some_and(|p| tag_matches(&slot.tag, &p.tag));
                    if !ok {
                        report
                            .failures
                            .push(VerifyFailure::TagMismatch { slot: id, piece });
                    }
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, PieceHome, Slot};
    use klotz_geom::Vec2;
    use klotz_grid::{Cell, CellSize, GridSpec};

    fn grid() -> GridSpec {
        GridSpec::new(Vec2::ONE, Vec2::ZERO, 10, 10)
    }

    fn slot(tag: &str, col: i32) -> Slot {
        Slot {
            tag: tag.to_string(),
            cell: Cell::new(col, 0),
            size: CellSize::ONE,
        }
    }

    fn piece(tag: &str) -> Piece {
        Piece {
            kind: 0,
            tag: tag.to_string(),
            size: CellSize::ONE,
            cell: Cell::ZERO,
            pos: Vec2::ZERO,
            variant: 0,
            home: PieceHome::World,
        }
    }

    #[test]
    fn untagged_slots_are_skipped() {
        let mut b = Board::new();
        b.add_slot(slot("", 0));
        b.add_slot(slot("   ", 1));
        let r = b.verify();
        assert_eq!(r.checked, 0);
        assert!(r.passed());
    }

    #[test]
    fn unfilled_and_mismatch_are_distinct() {
        let g = grid();
        let mut b = Board::new();
        let s0 = b.add_slot(slot("beam", 0));
        let s1 = b.add_slot(slot("girder", 1));

        let p = b.spawn_piece(piece("beam"));
        assert!(b.place_in_slot(&g, p, s1));

        let r = b.verify();
        assert_eq!(r.checked, 2);
        assert_eq!(
            r.failures,
            vec![
                VerifyFailure::Unfilled { slot: s0 },
                VerifyFailure::TagMismatch { slot: s1, piece: p },
            ]
        );
    }

    #[test]
    fn canonical_comparison_passes_case_and_whitespace() {
        let g = grid();
        let mut b = Board::new();
        let s = b.add_slot(slot(" Beam ", 0));
        let p = b.spawn_piece(piece("BEAM"));
        assert!(b.place_in_slot(&g, p, s));
        let r = b.verify();
        assert_eq!(r.checked, 1);
        assert!(r.passed());
    }
}
